//! Genetic operators over schedule grids.
//!
//! - [`recombine`]: order-interleaving crossover. Each parent contributes
//!   its first-appearance team order; children are rebuilt from scratch
//!   with the greedy [`Placer`].
//! - [`swap_mutation`]: relabels every appearance of two random teams.
//! - [`repair`]: post-mutation legalization hook (no-op).
//!
//! Parents are never modified; children are freshly allocated grids with
//! the parents' dimensions.
//!
//! # Reference
//! Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains" (order-based crossover)

use std::collections::HashSet;

use rand::Rng;
use rand::seq::index::sample;

use super::placement::Placer;
use crate::models::{ScheduleGrid, TeamId};

/// Interleaves two team orders into one child order.
///
/// Alternates between `a` and `b` (starting with `a` when `start_with_a`),
/// each time taking the side's next id not yet picked. When one side is
/// exhausted the other keeps supplying; ids in `all_ids` that neither
/// order contains are appended last in the given order. Ids outside
/// `all_ids` are dropped.
pub fn interleave_orders(
    a: &[TeamId],
    b: &[TeamId],
    all_ids: &[TeamId],
    start_with_a: bool,
) -> Vec<TeamId> {
    let known: HashSet<TeamId> = all_ids.iter().copied().collect();
    let mut picked: HashSet<TeamId> = HashSet::with_capacity(all_ids.len());
    let mut order = Vec::with_capacity(all_ids.len());

    let mut cursors = [0usize, 0usize];
    let sources = [a, b];
    let mut turn = if start_with_a { 0 } else { 1 };

    loop {
        let next = next_unpicked(sources[turn], &mut cursors[turn], &known, &picked).or_else(|| {
            let other = 1 - turn;
            next_unpicked(sources[other], &mut cursors[other], &known, &picked)
        });
        let Some(id) = next else { break };
        picked.insert(id);
        order.push(id);
        turn = 1 - turn;
    }

    order.extend(all_ids.iter().copied().filter(|id| picked.insert(*id)));
    order
}

fn next_unpicked(
    source: &[TeamId],
    cursor: &mut usize,
    known: &HashSet<TeamId>,
    picked: &HashSet<TeamId>,
) -> Option<TeamId> {
    while let Some(&id) = source.get(*cursor) {
        *cursor += 1;
        if known.contains(&id) && !picked.contains(&id) {
            return Some(id);
        }
    }
    None
}

/// Order-interleaving crossover.
///
/// Child 1 interleaves starting from `parent1`'s order, child 2 from
/// `parent2`'s. Both are placed into fresh grids with `parent1`'s
/// dimensions. Identical parents yield children whose order equals the
/// parents' order (plus any teams the parents never placed).
pub fn recombine(
    parent1: &ScheduleGrid,
    parent2: &ScheduleGrid,
    placer: &Placer<'_>,
    team_ids: &[TeamId],
) -> (ScheduleGrid, ScheduleGrid) {
    let order1 = parent1.team_order();
    let order2 = parent2.team_order();
    let (slots, courts) = parent1.dimensions();

    let mut child1 = ScheduleGrid::new(slots, courts);
    let mut child2 = ScheduleGrid::new(slots, courts);
    placer.populate(&mut child1, &interleave_orders(&order1, &order2, team_ids, true));
    placer.populate(&mut child2, &interleave_orders(&order1, &order2, team_ids, false));
    (child1, child2)
}

/// Rewrites every side holding `a` to `b` and vice versa.
pub fn swap_teams(grid: &mut ScheduleGrid, a: TeamId, b: TeamId) {
    for side in grid.sides_mut() {
        if *side == Some(a) {
            *side = Some(b);
        } else if *side == Some(b) {
            *side = Some(a);
        }
    }
}

/// Swaps the appearances of two distinct teams drawn uniformly from
/// `1..=team_count`. Returns the swapped pair, or `None` when fewer than
/// two teams exist.
pub fn swap_mutation<R: Rng>(
    grid: &mut ScheduleGrid,
    team_count: usize,
    rng: &mut R,
) -> Option<(TeamId, TeamId)> {
    if team_count < 2 {
        return None;
    }
    let picks = sample(rng, team_count, 2);
    let a = (picks.index(0) + 1) as TeamId;
    let b = (picks.index(1) + 1) as TeamId;
    swap_teams(grid, a, b);
    Some((a, b))
}

/// Post-mutation legalization hook. Leaves the grid unchanged; conflict
/// splits and double bookings are left to the fitness penalties.
pub fn repair(_grid: &mut ScheduleGrid) {}

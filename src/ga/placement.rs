//! Greedy first-fit placement of a team order into a schedule grid.
//!
//! Shared by initialization and crossover reconstruction. Teams are
//! placed one at a time in the given order; each placement scans slots
//! in order and, within a slot, courts in order.
//!
//! # Rules
//! - At most one placement per team per slot, so placement itself never
//!   double-books.
//! - A team may open an empty match (first side), or complete a
//!   half-filled match whose first side is a different team it has not
//!   yet faced in this placement pass.
//! - Conflict partners are placed together: a slot is used only if both
//!   squads find a spot in it, so they always share slots. Partners never
//!   complete each other's match.
//! - A team that runs out of eligible slots stays under quota; that is
//!   left for the fitness evaluator to penalize.
//!
//! Cost is O(slots × courts) per placed team.

use std::collections::HashSet;

use tracing::trace;

use crate::models::{ConflictSet, Match, ScheduleGrid, SidePosition, TeamId};

/// Eligible position for a team in one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Spot {
    court: usize,
    side: SidePosition,
    /// Team already on the first side when completing a match.
    opponent: Option<TeamId>,
}

/// First-fit placer bound to the run's conflict set and match quota.
#[derive(Debug, Clone, Copy)]
pub struct Placer<'a> {
    conflicts: &'a ConflictSet,
    quota: usize,
}

impl<'a> Placer<'a> {
    /// Creates a placer targeting `quota` matches per team.
    pub fn new(conflicts: &'a ConflictSet, quota: usize) -> Self {
        Self { conflicts, quota }
    }

    /// Matches each team is targeted to play.
    pub fn quota(&self) -> usize {
        self.quota
    }

    /// Fills `grid` by placing teams in `order`.
    ///
    /// The grid is not cleared first; callers pass a fresh grid.
    /// Ids repeated in `order`, or already placed as a partner, are skipped.
    pub fn populate(&self, grid: &mut ScheduleGrid, order: &[TeamId]) {
        let mut placed: HashSet<TeamId> = HashSet::with_capacity(order.len());

        for &team in order {
            if !placed.insert(team) {
                continue;
            }
            match self.conflicts.partner_of(team) {
                Some(partner) if placed.insert(partner) => {
                    let played = self.place_pair(grid, team, partner);
                    if played < self.quota {
                        trace!(team, partner, played, quota = self.quota, "pair under quota");
                    }
                }
                _ => {
                    let played = self.place_single(grid, team);
                    if played < self.quota {
                        trace!(team, played, quota = self.quota, "team under quota");
                    }
                }
            }
        }
    }

    /// Places an unpaired team. Returns the number of matches placed.
    fn place_single(&self, grid: &mut ScheduleGrid, team: TeamId) -> usize {
        let mut faced = Vec::with_capacity(self.quota);
        let mut played = 0;

        for slot in 0..grid.slot_count() {
            if played == self.quota {
                break;
            }
            if let Some(spot) = find_spot(grid.slot(slot), team, &faced) {
                grid.set(slot, spot.court, spot.side, Some(team));
                faced.extend(spot.opponent);
                played += 1;
            }
        }
        played
    }

    /// Places a conflict pair slot by slot, both squads in the same slot.
    /// Returns the number of matches placed per squad.
    fn place_pair(&self, grid: &mut ScheduleGrid, team: TeamId, partner: TeamId) -> usize {
        let mut faced_team = Vec::with_capacity(self.quota + 1);
        let mut faced_partner = Vec::with_capacity(self.quota + 1);
        faced_team.push(partner);
        faced_partner.push(team);
        let mut played = 0;

        for slot in 0..grid.slot_count() {
            if played == self.quota {
                break;
            }
            let Some(team_spot) = find_spot(grid.slot(slot), team, &faced_team) else {
                continue;
            };
            grid.set(slot, team_spot.court, team_spot.side, Some(team));

            match find_spot(grid.slot(slot), partner, &faced_partner) {
                Some(partner_spot) => {
                    grid.set(slot, partner_spot.court, partner_spot.side, Some(partner));
                    faced_team.extend(team_spot.opponent);
                    faced_partner.extend(partner_spot.opponent);
                    played += 1;
                }
                None => grid.set(slot, team_spot.court, team_spot.side, None),
            }
        }
        played
    }
}

/// First court in `slot` where `team` may be placed.
fn find_spot(slot: &[Match], team: TeamId, faced: &[TeamId]) -> Option<Spot> {
    slot.iter().enumerate().find_map(|(court, m)| match (m.first, m.second) {
        (None, _) => Some(Spot {
            court,
            side: SidePosition::First,
            opponent: None,
        }),
        (Some(first), None) if first != team && !faced.contains(&first) => Some(Spot {
            court,
            side: SidePosition::Second,
            opponent: Some(first),
        }),
        _ => None,
    })
}

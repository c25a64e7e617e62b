//! Schedule fitness evaluation.
//!
//! Scores a grid additively (higher is better, unbounded, may be negative).
//!
//! # Rules
//!
//! | Condition | Default |
//! |-----------|---------|
//! | Match with first side filled, second empty | −50 |
//! | Same team on both sides of a match | −50 |
//! | Same level, equal rank | +5 |
//! | Same level, ranks 1 apart | +2 |
//! | Same level, ranks ≥2 apart | −1 |
//! | Cross level, varsity rank 3 vs JV rank 1 | +1 |
//! | Any other cross-level game | −5 |
//! | Extra appearance of a team within one slot | −50 |
//! | Opponent already faced | −50 |
//! | First game against an opponent | +5 |
//! | Game outside the team's daily window | 0 (off) |
//!
//! Per-team rules apply to the slots a team plays in, in slot order,
//! until the team has been counted `quota` times. The cap is checked at
//! slot boundaries, so every appearance inside a double-booked slot is
//! scored. An appearance against an empty side earns no matchup or
//! novelty points but still counts toward the cap.

use serde::{Deserialize, Serialize};

use crate::models::{CampLayout, ScheduleGrid, Team, TeamId};

/// Reward and penalty weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitnessWeights {
    pub incomplete_match: i32,
    pub self_match: i32,
    pub same_rank: i32,
    pub adjacent_rank: i32,
    pub distant_rank: i32,
    pub cross_level_fair: i32,
    pub cross_level_unfair: i32,
    pub double_booking: i32,
    pub rematch: i32,
    pub novel_opponent: i32,
    pub outside_availability: i32,
}

impl Default for FitnessWeights {
    fn default() -> Self {
        Self {
            incomplete_match: -50,
            self_match: -50,
            same_rank: 5,
            adjacent_rank: 2,
            distant_rank: -1,
            cross_level_fair: 1,
            cross_level_unfair: -5,
            double_booking: -50,
            rematch: -50,
            novel_opponent: 5,
            outside_availability: 0,
        }
    }
}

impl FitnessWeights {
    /// Matchup quality of `team` against `opponent`.
    pub fn matchup(&self, team: &Team, opponent: &Team) -> i32 {
        if team.level == opponent.level {
            match team.rank.abs_diff(opponent.rank) {
                0 => self.same_rank,
                1 => self.adjacent_rank,
                _ => self.distant_rank,
            }
        } else {
            let (varsity, jv) = if team.is_varsity() {
                (team, opponent)
            } else {
                (opponent, team)
            };
            if varsity.rank == 3 && jv.rank == 1 {
                self.cross_level_fair
            } else {
                self.cross_level_unfair
            }
        }
    }
}

/// Read-only grid scorer.
///
/// Holds no state between calls; identical grids score identically.
#[derive(Debug, Clone, Copy)]
pub struct FitnessEvaluator<'a> {
    teams: &'a [Team],
    weights: &'a FitnessWeights,
    quota: usize,
    layout: Option<&'a CampLayout>,
}

impl<'a> FitnessEvaluator<'a> {
    /// Creates an evaluator with a quota of 3 and no availability scoring.
    pub fn new(teams: &'a [Team], weights: &'a FitnessWeights) -> Self {
        Self {
            teams,
            weights,
            quota: 3,
            layout: None,
        }
    }

    /// Sets the per-team match cap.
    pub fn with_quota(mut self, quota: usize) -> Self {
        self.quota = quota;
        self
    }

    /// Enables availability scoring against `layout`'s slot hours.
    pub fn with_layout(mut self, layout: &'a CampLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Scores `grid`.
    pub fn evaluate(&self, grid: &ScheduleGrid) -> i64 {
        let w = self.weights;
        let mut score: i64 = 0;

        for (_, _, m) in grid.matches() {
            if m.is_incomplete() {
                score += w.incomplete_match as i64;
            }
            if m.first.is_some() && m.first == m.second {
                score += w.self_match as i64;
            }
        }

        for team in self.teams {
            score += self.score_team(grid, team);
        }
        score
    }

    fn score_team(&self, grid: &ScheduleGrid, team: &Team) -> i64 {
        let w = self.weights;
        let mut score: i64 = 0;
        let mut remaining = self.quota;
        let mut faced: Vec<TeamId> = Vec::with_capacity(self.quota);

        for (slot_idx, slot) in grid.slots().enumerate() {
            if remaining == 0 {
                break;
            }
            let mut seen_in_slot = false;

            for m in slot {
                let Some(opponent) = m.opponent_of(team.id) else {
                    continue;
                };

                if let Some(opp) = opponent.and_then(|id| self.team(id)) {
                    score += w.matchup(team, opp) as i64;
                }
                remaining = remaining.saturating_sub(1);

                if seen_in_slot {
                    score += w.double_booking as i64;
                } else {
                    seen_in_slot = true;
                }

                if let Some(opp) = opponent {
                    if faced.contains(&opp) {
                        score += w.rematch as i64;
                    } else {
                        faced.push(opp);
                        score += w.novel_opponent as i64;
                    }
                }

                if w.outside_availability != 0 && !self.available(team, slot_idx) {
                    score += w.outside_availability as i64;
                }
            }
        }
        score
    }

    fn available(&self, team: &Team, slot: usize) -> bool {
        match self.layout.and_then(|l| l.slot_time(slot)) {
            Some(time) => team.is_available_at(time.hour),
            None => true,
        }
    }

    fn team(&self, id: TeamId) -> Option<&'a Team> {
        let idx = (id as usize).checked_sub(1)?;
        match self.teams.get(idx) {
            Some(team) if team.id == id => Some(team),
            _ => self.teams.iter().find(|t| t.id == id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Level, Match};

    fn varsity(id: TeamId, rank: u8) -> Team {
        Team::new(id, Level::Varsity).with_rank(rank)
    }

    fn jv(id: TeamId, rank: u8) -> Team {
        Team::new(id, Level::JuniorVarsity).with_rank(rank)
    }

    fn score(teams: &[Team], grid: &ScheduleGrid) -> i64 {
        let weights = FitnessWeights::default();
        FitnessEvaluator::new(teams, &weights).evaluate(grid)
    }

    #[test]
    fn test_matchup_table() {
        let w = FitnessWeights::default();
        assert_eq!(w.matchup(&varsity(1, 2), &varsity(2, 2)), 5);
        assert_eq!(w.matchup(&varsity(1, 2), &varsity(2, 3)), 2);
        assert_eq!(w.matchup(&jv(1, 1), &jv(2, 3)), -1);
        assert_eq!(w.matchup(&varsity(1, 3), &jv(2, 1)), 1);
        assert_eq!(w.matchup(&jv(2, 1), &varsity(1, 3)), 1);
        assert_eq!(w.matchup(&varsity(1, 1), &jv(2, 1)), -5);
        assert_eq!(w.matchup(&jv(1, 3), &varsity(2, 1)), -5);
    }

    #[test]
    fn test_single_good_match() {
        let teams = vec![varsity(1, 1), varsity(2, 1)];
        let grid = ScheduleGrid::from_rows(vec![vec![Match::versus(1, 2)]]);
        // Each side: +5 rank, +5 novel.
        assert_eq!(score(&teams, &grid), 20);
    }

    #[test]
    fn test_incomplete_match_penalty() {
        let teams = vec![varsity(1, 1), varsity(2, 1)];
        let grid = ScheduleGrid::from_rows(vec![
            vec![Match::versus(1, 2)],
            vec![Match::new(Some(1), None)],
            vec![Match::new(Some(1), None)],
        ]);
        assert_eq!(score(&teams, &grid), 20 - 100);
    }

    #[test]
    fn test_rematch_penalty() {
        let teams = vec![varsity(1, 1), varsity(2, 1)];
        let grid = ScheduleGrid::from_rows(vec![vec![Match::versus(1, 2)], vec![Match::versus(2, 1)]]);
        // Per team: (5 + 5) + (5 - 50).
        assert_eq!(score(&teams, &grid), 2 * (10 - 45));
    }

    #[test]
    fn test_double_booking_costs_at_least_fifty() {
        let teams = vec![varsity(1, 1), varsity(2, 1), varsity(3, 1), varsity(4, 1)];
        let booked = ScheduleGrid::from_rows(vec![vec![Match::versus(1, 2), Match::versus(1, 3)]]);
        let fixed = ScheduleGrid::from_rows(vec![vec![Match::versus(1, 2), Match::versus(4, 3)]]);

        assert!(score(&teams, &booked) <= score(&teams, &fixed) - 50);
    }

    #[test]
    fn test_quota_caps_scored_slots() {
        let teams = vec![varsity(1, 1), varsity(2, 1), varsity(3, 1), varsity(4, 1), varsity(5, 1)];
        let grid = ScheduleGrid::from_rows(vec![
            vec![Match::versus(1, 2)],
            vec![Match::versus(1, 3)],
            vec![Match::versus(1, 4)],
            vec![Match::versus(1, 5)],
        ]);
        // Team 1 scores 3 games (30); teams 2..5 one game each (40).
        assert_eq!(score(&teams, &grid), 70);
    }

    #[test]
    fn test_triple_booking_exact_penalty() {
        let teams = vec![varsity(1, 1), varsity(2, 1), varsity(3, 1), varsity(4, 1)];
        let grid = ScheduleGrid::from_rows(vec![vec![
            Match::versus(1, 2),
            Match::versus(1, 3),
            Match::versus(1, 4),
        ]]);
        let lenient = FitnessWeights {
            double_booking: 0,
            ..FitnessWeights::default()
        };

        // Team 1: three appearances at +10 each, two of them double-booked.
        assert_eq!(score(&teams, &grid), 30 - 100 + 30);
        assert_eq!(FitnessEvaluator::new(&teams, &lenient).evaluate(&grid), 60);
    }

    #[test]
    fn test_quota_cap_checked_at_slot_boundary() {
        let teams = vec![varsity(1, 1), varsity(2, 1), varsity(3, 1), varsity(4, 1), varsity(5, 1)];
        let grid = ScheduleGrid::from_rows(vec![
            vec![Match::versus(1, 2), Match::versus(1, 3)],
            vec![Match::versus(1, 4), Match::default()],
            vec![Match::versus(1, 5), Match::default()],
        ]);
        // Team 1: slot 0 is 10 + (10 - 50), slot 1 is 10, slot 2 is past quota.
        assert_eq!(score(&teams, &grid), -20 + 40);
    }

    #[test]
    fn test_double_booked_slot_scored_past_quota() {
        let teams = vec![varsity(1, 1), varsity(2, 1), varsity(3, 1)];
        let grid = ScheduleGrid::from_rows(vec![vec![Match::versus(1, 2), Match::versus(1, 3)]]);
        let weights = FitnessWeights::default();
        let evaluator = FitnessEvaluator::new(&teams, &weights).with_quota(1);
        // Team 1: 10 + (10 - 50); teams 2 and 3: 10 each.
        assert_eq!(evaluator.evaluate(&grid), -30 + 20);
    }

    #[test]
    fn test_self_match_penalty() {
        let teams = vec![varsity(1, 1)];
        let grid = ScheduleGrid::from_rows(vec![vec![Match::versus(1, 1)]]);
        assert_eq!(score(&teams, &grid), -50 + 5 + 5);
    }

    #[test]
    fn test_availability_weight() {
        let teams = vec![
            varsity(1, 1).with_availability(10, 20),
            varsity(2, 1),
        ];
        let layout = CampLayout::new().with_day(8, 10).with_venue("Gym", 1);
        let grid = ScheduleGrid::from_rows(vec![vec![Match::versus(1, 2)], vec![]]);
        let weights = FitnessWeights {
            outside_availability: -10,
            ..FitnessWeights::default()
        };

        let without_layout = FitnessEvaluator::new(&teams, &weights).evaluate(&grid);
        let with_layout = FitnessEvaluator::new(&teams, &weights)
            .with_layout(&layout)
            .evaluate(&grid);
        assert_eq!(without_layout, 20);
        assert_eq!(with_layout, 10);
    }

    #[test]
    fn test_evaluation_is_deterministic() {
        let teams = vec![varsity(1, 1), jv(2, 2), varsity(3, 3)];
        let grid = ScheduleGrid::from_rows(vec![
            vec![Match::versus(1, 2), Match::new(Some(3), None)],
            vec![Match::versus(3, 2), Match::default()],
        ]);
        assert_eq!(score(&teams, &grid), score(&teams, &grid.clone()));
    }
}

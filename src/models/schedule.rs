//! Schedule grid model.
//!
//! A schedule is a fixed `slots × courts` grid of matches. Each match has
//! two sides that are either empty or hold a team id. The grid carries no
//! legality guarantees: double bookings, rematches, and half-filled
//! matches are representable and left to the fitness evaluator.

use serde::{Deserialize, Serialize};

use super::TeamId;

/// Which side of a match a team occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SidePosition {
    /// Side filled first when a match is opened.
    First,
    /// Side filled when a match is completed.
    Second,
}

/// One court in one time slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Match {
    /// First side (`None` = empty).
    pub first: Option<TeamId>,
    /// Second side (`None` = empty).
    pub second: Option<TeamId>,
}

impl Match {
    /// Creates a match from two sides.
    pub fn new(first: Option<TeamId>, second: Option<TeamId>) -> Self {
        Self { first, second }
    }

    /// A match with both sides filled.
    pub fn versus(first: TeamId, second: TeamId) -> Self {
        Self::new(Some(first), Some(second))
    }

    /// Whether both sides are empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.first.is_none() && self.second.is_none()
    }

    /// First side filled, second empty.
    #[inline]
    pub fn is_incomplete(&self) -> bool {
        self.first.is_some() && self.second.is_none()
    }

    /// Whether `team` occupies either side.
    #[inline]
    pub fn involves(&self, team: TeamId) -> bool {
        self.first == Some(team) || self.second == Some(team)
    }

    /// Mutable side at `side`.
    #[inline]
    pub fn side_mut(&mut self, side: SidePosition) -> &mut Option<TeamId> {
        match side {
            SidePosition::First => &mut self.first,
            SidePosition::Second => &mut self.second,
        }
    }

    /// Opponent of `team` in this match.
    ///
    /// Returns `None` when `team` is absent; `Some(None)` when `team` plays
    /// but the other side is empty. If `team` fills both sides it is its
    /// own opponent.
    pub fn opponent_of(&self, team: TeamId) -> Option<Option<TeamId>> {
        if self.first == Some(team) {
            Some(self.second)
        } else if self.second == Some(team) {
            Some(self.first)
        } else {
            None
        }
    }
}

/// Address of one side of one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Time slot index.
    pub slot: usize,
    /// Court index.
    pub court: usize,
    /// Side of the match (`0` first, `1` second).
    pub side: u8,
}

/// Schedule grid (the GA chromosome payload).
///
/// Indexed as `grid[slot][court]`. Dimensions never change after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduleGrid {
    slots: Vec<Vec<Match>>,
    courts: usize,
}

impl ScheduleGrid {
    /// Creates an all-empty grid.
    pub fn new(slot_count: usize, court_count: usize) -> Self {
        Self {
            slots: vec![vec![Match::default(); court_count]; slot_count],
            courts: court_count,
        }
    }

    /// Builds a grid from explicit rows. Short rows are padded with empty
    /// matches up to the widest row.
    pub fn from_rows(rows: Vec<Vec<Match>>) -> Self {
        let courts = rows.iter().map(Vec::len).max().unwrap_or(0);
        let slots = rows
            .into_iter()
            .map(|mut row| {
                row.resize(courts, Match::default());
                row
            })
            .collect();
        Self { slots, courts }
    }

    /// Number of time slots.
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of courts per slot.
    #[inline]
    pub fn court_count(&self) -> usize {
        self.courts
    }

    /// `(slots, courts)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.slots.len(), self.courts)
    }

    /// Matches of one slot.
    #[inline]
    pub fn slot(&self, slot: usize) -> &[Match] {
        &self.slots[slot]
    }

    /// Iterates over slots in order.
    pub fn slots(&self) -> impl Iterator<Item = &[Match]> {
        self.slots.iter().map(Vec::as_slice)
    }

    /// Match at `(slot, court)`.
    #[inline]
    pub fn get(&self, slot: usize, court: usize) -> Option<&Match> {
        self.slots.get(slot).and_then(|s| s.get(court))
    }

    /// Mutable match at `(slot, court)`.
    #[inline]
    pub fn get_mut(&mut self, slot: usize, court: usize) -> Option<&mut Match> {
        self.slots.get_mut(slot).and_then(|s| s.get_mut(court))
    }

    /// Writes a side. Out-of-range addresses are ignored.
    pub fn set(&mut self, slot: usize, court: usize, side: SidePosition, team: Option<TeamId>) {
        if let Some(m) = self.get_mut(slot, court) {
            *m.side_mut(side) = team;
        }
    }

    /// Iterates over every match with its `(slot, court)` address.
    pub fn matches(&self) -> impl Iterator<Item = (usize, usize, &Match)> {
        self.slots.iter().enumerate().flat_map(|(s, row)| {
            row.iter().enumerate().map(move |(c, m)| (s, c, m))
        })
    }

    /// Mutable iteration over every side value in slot → court → side order.
    pub fn sides_mut(&mut self) -> impl Iterator<Item = &mut Option<TeamId>> {
        self.slots
            .iter_mut()
            .flat_map(|row| row.iter_mut())
            .flat_map(|m| [&mut m.first, &mut m.second])
    }

    /// Distinct teams in the order they first appear, scanning
    /// slot → court → side.
    pub fn team_order(&self) -> Vec<TeamId> {
        let mut order = Vec::new();
        for (_, _, m) in self.matches() {
            for team in [m.first, m.second].into_iter().flatten() {
                if !order.contains(&team) {
                    order.push(team);
                }
            }
        }
        order
    }

    /// Every cell holding `team`, in scan order.
    pub fn positions_of(&self, team: TeamId) -> Vec<Cell> {
        let mut cells = Vec::new();
        for (slot, court, m) in self.matches() {
            if m.first == Some(team) {
                cells.push(Cell { slot, court, side: 0 });
            }
            if m.second == Some(team) {
                cells.push(Cell { slot, court, side: 1 });
            }
        }
        cells
    }

    /// Slot indices in which `team` appears (deduplicated, ascending).
    pub fn slots_of(&self, team: TeamId) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, row)| row.iter().any(|m| m.involves(team)))
            .map(|(s, _)| s)
            .collect()
    }

    /// Number of matches `team` plays in (a double-booked slot counts twice).
    pub fn appearance_count(&self, team: TeamId) -> usize {
        self.matches().filter(|(_, _, m)| m.involves(team)).count()
    }

    /// Number of non-empty sides.
    pub fn filled_count(&self) -> usize {
        self.matches()
            .map(|(_, _, m)| m.first.is_some() as usize + m.second.is_some() as usize)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_grid() -> ScheduleGrid {
        ScheduleGrid::from_rows(vec![
            vec![Match::versus(3, 1), Match::new(Some(2), None)],
            vec![Match::versus(1, 2), Match::default()],
        ])
    }

    #[test]
    fn test_new_grid_is_empty() {
        let grid = ScheduleGrid::new(4, 3);
        assert_eq!(grid.dimensions(), (4, 3));
        assert_eq!(grid.filled_count(), 0);
        assert!(grid.matches().all(|(_, _, m)| m.is_empty()));
    }

    #[test]
    fn test_team_order_first_seen() {
        assert_eq!(sample_grid().team_order(), vec![3, 1, 2]);
    }

    #[test]
    fn test_positions_and_slots() {
        let grid = sample_grid();
        assert_eq!(
            grid.positions_of(1),
            vec![
                Cell { slot: 0, court: 0, side: 1 },
                Cell { slot: 1, court: 0, side: 0 },
            ]
        );
        assert_eq!(grid.slots_of(2), vec![0, 1]);
        assert_eq!(grid.appearance_count(2), 2);
        assert_eq!(grid.filled_count(), 5);
    }

    #[test]
    fn test_match_opponent() {
        let m = Match::new(Some(4), None);
        assert!(m.is_incomplete());
        assert_eq!(m.opponent_of(4), Some(None));
        assert_eq!(m.opponent_of(5), None);
        assert_eq!(Match::versus(4, 5).opponent_of(5), Some(Some(4)));
    }

    #[test]
    fn test_set_ignores_out_of_range() {
        let mut grid = ScheduleGrid::new(1, 1);
        grid.set(0, 0, SidePosition::Second, Some(9));
        grid.set(3, 0, SidePosition::First, Some(9));
        assert_eq!(grid.get(0, 0), Some(&Match::new(None, Some(9))));
        assert_eq!(grid.filled_count(), 1);
    }

    #[test]
    fn test_from_rows_pads_short_rows() {
        let grid = ScheduleGrid::from_rows(vec![vec![Match::versus(1, 2)], vec![]]);
        assert_eq!(grid.dimensions(), (2, 1));
    }
}

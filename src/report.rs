//! Post-run schedule analysis.
//!
//! Lists every rule a finished grid breaks and how many matches each team
//! got. The GA never rejects illegal grids, so this is where they surface.
//!
//! # Checks
//!
//! | Violation | Severity |
//! |-----------|----------|
//! | Same team on both sides | 95 |
//! | Team twice in one slot | 90 |
//! | Conflict pair in different slots | 80 |
//! | Repeat pairing | 70 |
//! | Half-filled match | 60 |
//! | Game outside availability | 50 |
//! | Fewer matches than the quota | 40 |

use std::collections::{BTreeMap, HashSet};
use std::fmt::Write;

use serde::{Deserialize, Serialize};

use crate::models::{CampLayout, ConflictSet, ScheduleGrid, Team, TeamId};

/// Classification of schedule violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViolationType {
    /// First side filled, second side empty.
    IncompleteMatch,
    /// A team on both sides of one match.
    SelfMatch,
    /// A team in more than one match of a slot.
    DoubleBooking,
    /// Two teams paired more than once.
    Rematch,
    /// Conflict-pair squads playing in different slots.
    SplitConflictPair,
    /// A game outside the team's daily window.
    OutsideAvailability,
    /// A team below its match quota.
    UnderQuota,
}

impl ViolationType {
    /// Severity (0-100, higher = worse).
    pub fn severity(self) -> i32 {
        match self {
            ViolationType::SelfMatch => 95,
            ViolationType::DoubleBooking => 90,
            ViolationType::SplitConflictPair => 80,
            ViolationType::Rematch => 70,
            ViolationType::IncompleteMatch => 60,
            ViolationType::OutsideAvailability => 50,
            ViolationType::UnderQuota => 40,
        }
    }
}

/// One broken rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Slot index, when the violation is tied to one slot.
    pub slot: Option<usize>,
    /// Teams involved.
    pub teams: Vec<TeamId>,
    /// Human-readable description.
    pub message: String,
    /// Severity (0-100, higher = worse).
    pub severity: i32,
}

impl Violation {
    fn new(
        violation_type: ViolationType,
        slot: Option<usize>,
        teams: Vec<TeamId>,
        message: String,
    ) -> Self {
        Self {
            violation_type,
            slot,
            teams,
            message,
            severity: violation_type.severity(),
        }
    }
}

/// Violations and per-team match counts of one grid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScheduleReport {
    /// Every violation found, grouped by check.
    pub violations: Vec<Violation>,
    /// Matches each team appears in (a double-booked slot counts twice).
    pub matches_per_team: BTreeMap<TeamId, usize>,
    /// Matches with both sides filled.
    pub complete_matches: usize,
}

impl ScheduleReport {
    /// Analyzes `grid` for the given roster.
    ///
    /// # Arguments
    /// * `quota` - Target matches per team.
    /// * `layout` - Used to map slots to hours for availability checks.
    pub fn analyze(
        grid: &ScheduleGrid,
        teams: &[Team],
        conflicts: &ConflictSet,
        layout: &CampLayout,
        quota: usize,
    ) -> Self {
        let mut report = Self::default();
        let mut pairings: HashSet<(TeamId, TeamId)> = HashSet::new();

        for (slot, court, m) in grid.matches() {
            if m.is_incomplete() {
                report.violations.push(Violation::new(
                    ViolationType::IncompleteMatch,
                    Some(slot),
                    m.first.into_iter().collect(),
                    format!("slot {slot} court {court} has no opponent"),
                ));
            }
            let (Some(a), Some(b)) = (m.first, m.second) else {
                continue;
            };
            report.complete_matches += 1;
            if a == b {
                report.violations.push(Violation::new(
                    ViolationType::SelfMatch,
                    Some(slot),
                    vec![a],
                    format!("team {a} plays itself in slot {slot} court {court}"),
                ));
            } else if !pairings.insert((a.min(b), a.max(b))) {
                report.violations.push(Violation::new(
                    ViolationType::Rematch,
                    Some(slot),
                    vec![a, b],
                    format!("teams {a} and {b} meet again in slot {slot}"),
                ));
            }
        }

        for team in teams {
            let count = grid.appearance_count(team.id);
            report.matches_per_team.insert(team.id, count);

            for (slot, row) in grid.slots().enumerate() {
                let games = row.iter().filter(|m| m.involves(team.id)).count();
                if games == 0 {
                    continue;
                }
                if games > 1 {
                    report.violations.push(Violation::new(
                        ViolationType::DoubleBooking,
                        Some(slot),
                        vec![team.id],
                        format!("team {} plays {games} games in slot {slot}", team.id),
                    ));
                }
                if let Some(time) = layout.slot_time(slot) {
                    if !team.is_available_at(time.hour) {
                        report.violations.push(Violation::new(
                            ViolationType::OutsideAvailability,
                            Some(slot),
                            vec![team.id],
                            format!(
                                "team {} plays at {:02}:00 on day {}, outside {:02}:00-{:02}:00",
                                team.id,
                                time.hour,
                                time.day + 1,
                                team.arrival_hour,
                                team.departure_hour
                            ),
                        ));
                    }
                }
            }

            if count < quota {
                report.violations.push(Violation::new(
                    ViolationType::UnderQuota,
                    None,
                    vec![team.id],
                    format!("team {} has {count} of {quota} matches", team.id),
                ));
            }
        }

        for pair in conflicts.pairs() {
            let first = grid.slots_of(pair.first);
            let second = grid.slots_of(pair.second);
            if !first.is_empty() && !second.is_empty() && first != second {
                report.violations.push(Violation::new(
                    ViolationType::SplitConflictPair,
                    None,
                    vec![pair.first, pair.second],
                    format!(
                        "teams {} and {} play in slots {first:?} and {second:?}",
                        pair.first, pair.second
                    ),
                ));
            }
        }

        report
    }

    /// Whether no violation was found.
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }

    /// Number of violations of one type.
    pub fn count(&self, violation_type: ViolationType) -> usize {
        self.violations
            .iter()
            .filter(|v| v.violation_type == violation_type)
            .count()
    }

    /// Teams below the match quota.
    pub fn under_quota(&self) -> Vec<TeamId> {
        self.violations
            .iter()
            .filter(|v| v.violation_type == ViolationType::UnderQuota)
            .flat_map(|v| v.teams.iter().copied())
            .collect()
    }
}

/// Renders `grid` as a plain-text timetable, one line per played court.
///
/// ```text
/// Day 1 08:00
///   Main #1: Central V vs Lakeside V
///   Main #2: Hillcrest JV vs (open)
/// ```
pub fn render_schedule(grid: &ScheduleGrid, teams: &[Team], layout: &CampLayout) -> String {
    let label = |id: Option<TeamId>| match id {
        None => "(open)".to_string(),
        Some(id) => match teams.iter().find(|t| t.id == id) {
            Some(team) if !team.name.is_empty() => team.name.clone(),
            _ => format!("Team {id}"),
        },
    };

    let mut out = String::new();
    for (slot, row) in grid.slots().enumerate() {
        if row.iter().all(|m| m.is_empty()) {
            continue;
        }
        match layout.slot_time(slot) {
            Some(time) => {
                let _ = writeln!(out, "Day {} {:02}:00", time.day + 1, time.hour);
            }
            None => {
                let _ = writeln!(out, "Slot {slot}");
            }
        }
        for (court, m) in row.iter().enumerate() {
            if m.is_empty() {
                continue;
            }
            let court_label = match layout.court_venue(court) {
                Some((venue, local)) => format!("{} #{}", venue.name, local + 1),
                None => format!("Court {}", court + 1),
            };
            let _ = writeln!(
                out,
                "  {court_label}: {} vs {}",
                label(m.first),
                label(m.second)
            );
        }
    }
    out
}

//! Roster ingestion.
//!
//! Parses the camp roster text format into teams and conflict pairs.
//!
//! # Format
//!
//! One club per non-blank line, fields separated by `-`:
//!
//! ```text
//! Name-Code-Concurrent-Rank-Arrival-Departure
//! ```
//!
//! | Code | Meaning | Rank field |
//! |------|---------|------------|
//! | 1 | Varsity squad only | `r` |
//! | 2 | JV squad only | `r` |
//! | 3 | Both squads (varsity gets the lower id) | `v,jv` |
//!
//! For code 3, `Concurrent` = `N`/`n` means the two squads form a
//! [`ConflictPair`]. Ids are assigned from 1 in file order.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RosterError;
use crate::models::{ConflictPair, Level, Team, TeamId};

/// Parsed roster: the immutable team set and its conflict pairs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    /// Teams with ids `1..=N`.
    pub teams: Vec<Team>,
    /// V/JV pairs that must share slots.
    pub conflicts: Vec<ConflictPair>,
}

impl Roster {
    /// Parses roster text.
    ///
    /// Fails on the first malformed entry; nothing partial is returned.
    pub fn parse(text: &str) -> Result<Self, RosterError> {
        let mut roster = Roster::default();
        let mut next_id: TeamId = 1;

        for (idx, raw) in text.lines().enumerate() {
            let line = idx + 1;
            let entry = raw.trim();
            if entry.is_empty() {
                continue;
            }
            let fields: Vec<&str> = entry.split('-').map(str::trim).collect();
            let name = fields[0];
            let code = field(&fields, 1, "code", line)?;
            let concurrent = field(&fields, 2, "concurrent flag", line)?;
            let rank = field(&fields, 3, "rank", line)?;
            let arrival = parse_number(field(&fields, 4, "arrival", line)?, "arrival", line)?;
            let departure = parse_number(field(&fields, 5, "departure", line)?, "departure", line)?;

            let squad = |id: TeamId, level: Level, rank: u8| {
                Team::new(id, level)
                    .with_name(format!("{name} {}", level.suffix()))
                    .with_rank(rank)
                    .with_availability(arrival, departure)
            };

            match code {
                "1" | "2" => {
                    let level = if code == "1" {
                        Level::Varsity
                    } else {
                        Level::JuniorVarsity
                    };
                    let rank = parse_rank(rank, line)?;
                    roster.teams.push(squad(next_id, level, rank));
                    next_id += 1;
                }
                "3" => {
                    let (v_rank, jv_rank) = rank.split_once(',').ok_or(RosterError::MissingField {
                        line,
                        field: "junior varsity rank",
                    })?;
                    let v_rank = parse_rank(v_rank, line)?;
                    let jv_rank = parse_rank(jv_rank, line)?;
                    if concurrent.eq_ignore_ascii_case("n") {
                        roster.conflicts.push(ConflictPair::new(next_id, next_id + 1));
                    }
                    roster.teams.push(squad(next_id, Level::Varsity, v_rank));
                    roster
                        .teams
                        .push(squad(next_id + 1, Level::JuniorVarsity, jv_rank));
                    next_id += 2;
                }
                other => {
                    return Err(RosterError::UnrecognizedTeamCode {
                        line,
                        name: name.to_string(),
                        code: other.to_string(),
                    })
                }
            }
        }

        Ok(roster)
    }

    /// Reads and parses a roster file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RosterError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Number of teams.
    pub fn team_count(&self) -> usize {
        self.teams.len()
    }
}

fn field<'a>(
    fields: &[&'a str],
    idx: usize,
    name: &'static str,
    line: usize,
) -> Result<&'a str, RosterError> {
    fields
        .get(idx)
        .copied()
        .filter(|f| !f.is_empty())
        .ok_or(RosterError::MissingField { line, field: name })
}

fn parse_number(raw: &str, name: &'static str, line: usize) -> Result<u8, RosterError> {
    raw.trim().parse().map_err(|_| RosterError::InvalidNumber {
        line,
        field: name,
        value: raw.to_string(),
    })
}

fn parse_rank(raw: &str, line: usize) -> Result<u8, RosterError> {
    parse_number(raw, "rank", line)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Central-1-Y-2-8-22
Eastside-3-N-1,3-9-20

Lakeview-2-Y-3-8-23
Riverside-3-Y-2,2-10-18
";

    #[test]
    fn test_parse_sample() {
        let roster = Roster::parse(SAMPLE).unwrap();
        assert_eq!(roster.team_count(), 6);

        let names: Vec<&str> = roster.teams.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Central V",
                "Eastside V",
                "Eastside JV",
                "Lakeview JV",
                "Riverside V",
                "Riverside JV"
            ]
        );
        let ids: Vec<TeamId> = roster.teams.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_conflict_only_when_not_concurrent() {
        let roster = Roster::parse(SAMPLE).unwrap();
        assert_eq!(roster.conflicts, vec![ConflictPair::new(2, 3)]);
    }

    #[test]
    fn test_split_ranks_and_availability() {
        let roster = Roster::parse(SAMPLE).unwrap();
        let eastside_jv = &roster.teams[2];
        assert_eq!(eastside_jv.level, Level::JuniorVarsity);
        assert_eq!(eastside_jv.rank, 3);
        assert_eq!(eastside_jv.arrival_hour, 9);
        assert_eq!(eastside_jv.departure_hour, 20);
    }

    #[test]
    fn test_unrecognized_code_is_fatal() {
        let err = Roster::parse("Central-1-Y-2-8-22\nBadTeam-4-Y-1-8-22").unwrap_err();
        match err {
            RosterError::UnrecognizedTeamCode { line, name, code } => {
                assert_eq!(line, 2);
                assert_eq!(name, "BadTeam");
                assert_eq!(code, "4");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_missing_and_invalid_fields() {
        assert!(matches!(
            Roster::parse("Central-1-Y"),
            Err(RosterError::MissingField { field: "rank", .. })
        ));
        assert!(matches!(
            Roster::parse("Central-1-Y-x-8-22"),
            Err(RosterError::InvalidNumber { field: "rank", .. })
        ));
        assert!(matches!(
            Roster::parse("Central-3-N-2-8-22"),
            Err(RosterError::MissingField { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Roster::load("/nonexistent/roster.txt").unwrap_err();
        assert!(matches!(err, RosterError::Io(_)));
    }
}

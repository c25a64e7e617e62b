//! Input validation for camp scheduling.
//!
//! Checks structural integrity of the team roster and conflict pairs
//! before any search begins. Detects:
//! - Empty rosters
//! - Team ids outside the dense `1..=N` range, or duplicated
//! - Ranks outside `1..=3`
//! - Empty availability windows
//! - Conflict pairs with unknown, identical, or multiply-paired teams

use crate::models::{ConflictPair, Team, TeamId, MAX_RANK, MIN_RANK};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No teams to schedule.
    EmptyRoster,
    /// Two teams share the same id.
    DuplicateId,
    /// A team id is 0 or greater than the team count.
    InvalidTeamId,
    /// Rank outside the supported range.
    InvalidRank,
    /// Arrival is not before departure.
    InvalidAvailability,
    /// A conflict pair names a team that doesn't exist.
    InvalidConflictReference,
    /// A conflict pair names the same team twice.
    SelfConflict,
    /// A team belongs to more than one conflict pair.
    DuplicateConflict,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.message)
    }
}

/// Validates the input data for a camp scheduling run.
///
/// Checks:
/// 1. At least one team
/// 2. Team ids are unique and exactly cover `1..=N`
/// 3. Ranks lie in `1..=3`
/// 4. Every availability window is non-empty
/// 5. Conflict pairs reference existing, distinct teams
/// 6. No team is in more than one conflict pair
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_roster(teams: &[Team], conflicts: &[ConflictPair]) -> ValidationResult {
    let mut errors = Vec::new();

    if teams.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyRoster,
            "Roster has no teams",
        ));
    }

    let team_count = teams.len() as TeamId;
    let mut ids = HashSet::new();
    for team in teams {
        if !ids.insert(team.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate team ID: {}", team.id),
            ));
        }
        if team.id == 0 || team.id > team_count {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidTeamId,
                format!(
                    "Team '{}' has id {} outside 1..={}",
                    team.name, team.id, team_count
                ),
            ));
        }
        if !(MIN_RANK..=MAX_RANK).contains(&team.rank) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidRank,
                format!("Team {} has rank {} (expected {MIN_RANK}..={MAX_RANK})", team.id, team.rank),
            ));
        }
        if team.arrival_hour >= team.departure_hour {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidAvailability,
                format!(
                    "Team {} arrives at {} but departs at {}",
                    team.id, team.arrival_hour, team.departure_hour
                ),
            ));
        }
    }

    let mut pair_count: HashMap<TeamId, usize> = HashMap::new();
    for pair in conflicts {
        if pair.first == pair.second {
            errors.push(ValidationError::new(
                ValidationErrorKind::SelfConflict,
                format!("Conflict pair lists team {} twice", pair.first),
            ));
            continue;
        }
        for member in [pair.first, pair.second] {
            if !ids.contains(&member) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidConflictReference,
                    format!(
                        "Conflict pair ({}, {}) references unknown team {member}",
                        pair.first, pair.second
                    ),
                ));
            }
            *pair_count.entry(member).or_insert(0) += 1;
        }
    }

    let mut repeated: Vec<TeamId> = pair_count
        .into_iter()
        .filter(|&(_, n)| n > 1)
        .map(|(id, _)| id)
        .collect();
    repeated.sort_unstable();
    for id in repeated {
        errors.push(ValidationError::new(
            ValidationErrorKind::DuplicateConflict,
            format!("Team {id} appears in more than one conflict pair"),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Level;

    fn sample_teams() -> Vec<Team> {
        vec![
            Team::new(1, Level::Varsity).with_name("East V").with_rank(1),
            Team::new(2, Level::JuniorVarsity).with_name("East JV").with_rank(2),
            Team::new(3, Level::Varsity).with_name("West V").with_rank(3),
        ]
    }

    #[test]
    fn test_valid_input() {
        let teams = sample_teams();
        assert!(validate_roster(&teams, &[ConflictPair::new(1, 2)]).is_ok());
    }

    #[test]
    fn test_empty_roster() {
        let errors = validate_roster(&[], &[]).unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::EmptyRoster));
    }

    #[test]
    fn test_duplicate_team_id() {
        let mut teams = sample_teams();
        teams[2].id = 1;

        let errors = validate_roster(&teams, &[]).unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_id_outside_dense_range() {
        let mut teams = sample_teams();
        teams[2].id = 9;

        let errors = validate_roster(&teams, &[]).unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::InvalidTeamId));
    }

    #[test]
    fn test_invalid_rank() {
        let mut teams = sample_teams();
        teams[0].rank = 4;

        let errors = validate_roster(&teams, &[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidRank && e.message.contains("rank 4")));
    }

    #[test]
    fn test_invalid_availability() {
        let mut teams = sample_teams();
        teams[1] = teams[1].clone().with_availability(18, 9);

        let errors = validate_roster(&teams, &[]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidAvailability));
    }

    #[test]
    fn test_conflict_errors() {
        let teams = sample_teams();

        let errors = validate_roster(&teams, &[ConflictPair::new(1, 7)]).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::InvalidConflictReference));

        let errors = validate_roster(&teams, &[ConflictPair::new(2, 2)]).unwrap_err();
        assert!(errors.iter().any(|e| e.kind == ValidationErrorKind::SelfConflict));

        let errors =
            validate_roster(&teams, &[ConflictPair::new(1, 2), ConflictPair::new(2, 3)])
                .unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::DuplicateConflict);
    }

    #[test]
    fn test_multiple_errors() {
        let teams = vec![Team::new(5, Level::Varsity).with_rank(0)];
        let errors = validate_roster(&teams, &[]).unwrap_err();
        assert!(errors.len() >= 2);
    }
}

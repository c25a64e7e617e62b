//! Crate error types.
//!
//! Only input and configuration problems are errors. Schedule illegality
//! (double bookings, rematches, incomplete matches) is never raised; it is
//! scored by the fitness evaluator.

use thiserror::Error;

use crate::validation::ValidationError;

/// Roster ingestion failure.
#[derive(Debug, Error)]
pub enum RosterError {
    /// The team-count code is not 1, 2 or 3.
    #[error("line {line}: unrecognized team code '{code}' for team '{name}'")]
    UnrecognizedTeamCode {
        /// 1-based line number.
        line: usize,
        /// Club name of the entry.
        name: String,
        /// Offending code.
        code: String,
    },
    /// A required field is missing.
    #[error("line {line}: missing field '{field}'")]
    MissingField {
        /// 1-based line number.
        line: usize,
        /// Field name.
        field: &'static str,
    },
    /// A numeric field does not parse.
    #[error("line {line}: invalid {field} '{value}'")]
    InvalidNumber {
        /// 1-based line number.
        line: usize,
        /// Field name.
        field: &'static str,
        /// Raw text.
        value: String,
    },
    /// The roster file could not be read.
    #[error("failed to read roster: {0}")]
    Io(#[from] std::io::Error),
}

/// Top-level error for building or running a camp schedule.
#[derive(Debug, Error)]
pub enum CampError {
    /// Roster could not be parsed.
    #[error(transparent)]
    Roster(#[from] RosterError),
    /// Teams or conflict pairs failed validation.
    #[error("invalid camp input ({} problem(s)): {}", .0.len(), summarize(.0))]
    Validation(Vec<ValidationError>),
    /// GA or layout configuration is unusable.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<Vec<ValidationError>> for CampError {
    fn from(errors: Vec<ValidationError>) -> Self {
        CampError::Validation(errors)
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_validation_message_lists_problems() {
        let err = CampError::from(vec![
            ValidationError::new(ValidationErrorKind::EmptyRoster, "Roster has no teams"),
            ValidationError::new(ValidationErrorKind::InvalidRank, "Team 2 has rank 7"),
        ]);
        let msg = err.to_string();
        assert!(msg.contains("2 problem(s)"));
        assert!(msg.contains("rank 7"));
    }

    #[test]
    fn test_roster_error_is_transparent() {
        let err: CampError = RosterError::MissingField {
            line: 3,
            field: "rank",
        }
        .into();
        assert_eq!(err.to_string(), "line 3: missing field 'rank'");
    }
}

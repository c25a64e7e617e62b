//! Conflict pairs.
//!
//! A conflict pair links the varsity and JV squads of one club. When both
//! squads play, every one of their games is placed in a shared time slot.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::TeamId;

/// Unordered pair of team ids that must share time slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConflictPair {
    /// First squad (varsity when built from a roster).
    pub first: TeamId,
    /// Second squad.
    pub second: TeamId,
}

impl ConflictPair {
    /// Creates a pair.
    pub fn new(first: TeamId, second: TeamId) -> Self {
        Self { first, second }
    }

    /// Whether `team` is a member.
    #[inline]
    pub fn contains(&self, team: TeamId) -> bool {
        self.first == team || self.second == team
    }

    /// The other member, if `team` is in the pair.
    pub fn partner_of(&self, team: TeamId) -> Option<TeamId> {
        if team == self.first {
            Some(self.second)
        } else if team == self.second {
            Some(self.first)
        } else {
            None
        }
    }
}

/// Read-only conflict lookup shared by the placement operators.
///
/// Built once from the validated pair list. A team listed in several
/// pairs keeps the partner from the last pair (validation rejects that input).
#[derive(Debug, Clone, Default)]
pub struct ConflictSet {
    pairs: Vec<ConflictPair>,
    partners: HashMap<TeamId, TeamId>,
}

impl ConflictSet {
    /// Builds the lookup from a pair list.
    pub fn new(pairs: &[ConflictPair]) -> Self {
        let mut partners = HashMap::with_capacity(pairs.len() * 2);
        for pair in pairs {
            partners.insert(pair.first, pair.second);
            partners.insert(pair.second, pair.first);
        }
        Self {
            pairs: pairs.to_vec(),
            partners,
        }
    }

    /// Conflict partner of `team`, if any.
    #[inline]
    pub fn partner_of(&self, team: TeamId) -> Option<TeamId> {
        self.partners.get(&team).copied()
    }

    /// All pairs in input order.
    pub fn pairs(&self) -> &[ConflictPair] {
        &self.pairs
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether no pairs exist.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

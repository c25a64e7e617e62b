//! Team model.
//!
//! A team is one squad (varsity or junior varsity) of a visiting club.
//! Teams are built once from the roster and never change during a run.

use serde::{Deserialize, Serialize};

/// Team identifier. Valid ids form the dense range `1..=N`.
pub type TeamId = u32;

/// Lowest and highest skill rank a team may carry.
pub const MIN_RANK: u8 = 1;
/// See [`MIN_RANK`].
pub const MAX_RANK: u8 = 3;

/// Competitive level of a squad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    /// Varsity squad (roster code 1).
    Varsity,
    /// Junior varsity squad (roster code 2).
    JuniorVarsity,
}

impl Level {
    /// Name suffix used when a club name is expanded into a squad name.
    pub fn suffix(self) -> &'static str {
        match self {
            Level::Varsity => "V",
            Level::JuniorVarsity => "JV",
        }
    }
}

/// A squad to be scheduled.
///
/// # Availability
/// `arrival_hour`/`departure_hour` form a daily half-open window
/// `[arrival, departure)` in 24h clock hours.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// Unique team id (1-based).
    pub id: TeamId,
    /// Display name, e.g. "Central V".
    pub name: String,
    /// Varsity or JV.
    pub level: Level,
    /// Skill rank, 1 (strongest) to 3.
    pub rank: u8,
    /// First hour the team can play.
    pub arrival_hour: u8,
    /// Hour the team leaves (exclusive).
    pub departure_hour: u8,
}

impl Team {
    /// Creates a team with rank 1 that is available all day.
    pub fn new(id: TeamId, level: Level) -> Self {
        Self {
            id,
            name: String::new(),
            level,
            rank: MIN_RANK,
            arrival_hour: 0,
            departure_hour: 24,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the skill rank.
    pub fn with_rank(mut self, rank: u8) -> Self {
        self.rank = rank;
        self
    }

    /// Sets the daily availability window.
    pub fn with_availability(mut self, arrival_hour: u8, departure_hour: u8) -> Self {
        self.arrival_hour = arrival_hour;
        self.departure_hour = departure_hour;
        self
    }

    /// Whether the team can play a game starting at `hour`.
    #[inline]
    pub fn is_available_at(&self, hour: u8) -> bool {
        hour >= self.arrival_hour && hour < self.departure_hour
    }

    /// Whether the team is varsity.
    #[inline]
    pub fn is_varsity(&self) -> bool {
        self.level == Level::Varsity
    }
}

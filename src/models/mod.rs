//! Team camp domain models.
//!
//! Provides the immutable entities read from the roster (teams, conflict
//! pairs), the camp layout that fixes grid dimensions, and the schedule
//! grid that the GA evolves.
//!
//! # Domain Mappings
//!
//! | u-teamcamp | Camp |
//! |------------|------|
//! | Team | One varsity or JV squad |
//! | ConflictPair | V/JV squads of one club |
//! | CampLayout | Playing days × venues |
//! | ScheduleGrid | Slot × court table of matches |

mod calendar;
mod conflict;
mod schedule;
mod team;

pub use calendar::{CampLayout, DayWindow, SlotTime, Venue};
pub use conflict::{ConflictPair, ConflictSet};
pub use schedule::{Cell, Match, ScheduleGrid, SidePosition};
pub use team::{Level, Team, TeamId, MAX_RANK, MIN_RANK};

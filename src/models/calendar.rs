//! Camp calendar: playing days and court venues.
//!
//! Fixes the grid dimensions for a run. Slots are one hour long and are
//! numbered consecutively across days; courts are numbered consecutively
//! across venues.
//!
//! # Slot Model
//! A day `[start_hour, end_hour)` contributes `end_hour - start_hour` slots.
//! The last game of a day starts at `end_hour - 1`.

use serde::{Deserialize, Serialize};

/// Playing hours of one camp day, half-open `[start_hour, end_hour)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayWindow {
    /// First game start hour (inclusive).
    pub start_hour: u8,
    /// End of play (exclusive).
    pub end_hour: u8,
}

impl DayWindow {
    /// Creates a day window.
    pub fn new(start_hour: u8, end_hour: u8) -> Self {
        Self {
            start_hour,
            end_hour,
        }
    }

    /// Number of one-hour slots in the day.
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.end_hour.saturating_sub(self.start_hour) as usize
    }
}

/// A venue with one or more courts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Venue {
    /// Venue name.
    pub name: String,
    /// Courts available at this venue.
    pub courts: usize,
}

impl Venue {
    /// Creates a venue.
    pub fn new(name: impl Into<String>, courts: usize) -> Self {
        Self {
            name: name.into(),
            courts,
        }
    }
}

/// Where and when a grid cell is played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotTime {
    /// Day index (0-based).
    pub day: usize,
    /// Start hour of the game.
    pub hour: u8,
}

/// Days × venues layout of the camp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampLayout {
    /// Playing days in order.
    pub days: Vec<DayWindow>,
    /// Venues in court-numbering order.
    pub venues: Vec<Venue>,
}

impl Default for CampLayout {
    /// Two days of 08:00–23:00 play on 5 + 2 + 1 + 1 courts.
    fn default() -> Self {
        Self {
            days: vec![DayWindow::new(8, 23), DayWindow::new(8, 23)],
            venues: vec![
                Venue::new("Main", 5),
                Venue::new("Annex", 2),
                Venue::new("North Gym", 1),
                Venue::new("South Gym", 1),
            ],
        }
    }
}

impl CampLayout {
    /// Creates an empty layout.
    pub fn new() -> Self {
        Self {
            days: Vec::new(),
            venues: Vec::new(),
        }
    }

    /// Adds a playing day.
    pub fn with_day(mut self, start_hour: u8, end_hour: u8) -> Self {
        self.days.push(DayWindow::new(start_hour, end_hour));
        self
    }

    /// Adds a venue.
    pub fn with_venue(mut self, name: impl Into<String>, courts: usize) -> Self {
        self.venues.push(Venue::new(name, courts));
        self
    }

    /// Total time slots across all days.
    pub fn total_slots(&self) -> usize {
        self.days.iter().map(DayWindow::slot_count).sum()
    }

    /// Total courts across all venues.
    pub fn total_courts(&self) -> usize {
        self.venues.iter().map(|v| v.courts).sum()
    }

    /// Day and start hour of a global slot index.
    pub fn slot_time(&self, slot: usize) -> Option<SlotTime> {
        let mut offset = slot;
        for (day, window) in self.days.iter().enumerate() {
            let count = window.slot_count();
            if offset < count {
                return Some(SlotTime {
                    day,
                    hour: window.start_hour + offset as u8,
                });
            }
            offset -= count;
        }
        None
    }

    /// Venue and venue-local court number (0-based) of a global court index.
    pub fn court_venue(&self, court: usize) -> Option<(&Venue, usize)> {
        let mut offset = court;
        for venue in &self.venues {
            if offset < venue.courts {
                return Some((venue, offset));
            }
            offset -= venue.courts;
        }
        None
    }
}

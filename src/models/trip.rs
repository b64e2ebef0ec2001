//! Trip model.
//!
//! A trip is one scheduled bus run with a fixed day, start, end, and
//! duration. Trips are generated once per run by
//! [`TripCatalog`](crate::catalog::TripCatalog) and are immutable
//! thereafter; candidate rosters reference them by positional index.

use serde::{Deserialize, Serialize};

/// Minutes in one calendar day.
pub const MINUTES_PER_DAY: u32 = 1440;

/// One scheduled bus run.
///
/// `start_min` and `end_min` are absolute offsets from midnight of the
/// trip's day. Trips generated for a day lie inside the configured working
/// window (by default `[360, 1620)`, i.e. 6:00 to 27:00).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trip {
    /// Catalog-wide unique identifier (sequential from 1).
    pub id: u32,
    /// Day of the planning week, 0-based.
    pub day: u32,
    /// Start, minutes from midnight of `day`.
    pub start_min: u32,
    /// End, minutes from midnight of `day`.
    pub end_min: u32,
    /// `end_min - start_min`.
    pub duration: u32,
}

impl Trip {
    /// Start on the week-absolute timeline (minutes from midnight of day 0).
    ///
    /// Used wherever trips from different days must be ordered
    /// chronologically, e.g. handover checks on a shared bus.
    #[inline]
    pub fn start_of_week_min(&self) -> u32 {
        self.day * MINUTES_PER_DAY + self.start_min
    }

    /// End on the week-absolute timeline.
    #[inline]
    pub fn end_of_week_min(&self) -> u32 {
        self.day * MINUTES_PER_DAY + self.end_min
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_week_timeline() {
        let trip = Trip {
            id: 1,
            day: 2,
            start_min: 360,
            end_min: 420,
            duration: 60,
        };
        assert_eq!(trip.start_of_week_min(), 2 * 1440 + 360);
        assert_eq!(trip.end_of_week_min(), 2 * 1440 + 420);
    }

    #[test]
    fn test_serde_round_trip() {
        let trip = Trip {
            id: 7,
            day: 0,
            start_min: 1560,
            end_min: 1615,
            duration: 55,
        };
        let json = serde_json::to_string(&trip).unwrap();
        let back: Trip = serde_json::from_str(&json).unwrap();
        assert_eq!(back, trip);
    }
}

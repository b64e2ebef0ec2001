//! Shift handover timing.
//!
//! When two consecutive runs on the same bus are served by different
//! drivers, the incoming driver needs a minimum turnover margin. Runs are
//! ordered on the week-absolute timeline, so a handover across midnight or
//! across days is measured by the real elapsed gap.
//!
//! This sub-check is independently togglable — see
//! [`RosterConfig::shift_change_enabled`](crate::config::RosterConfig).

use std::collections::BTreeMap;

use crate::config::PenaltyWeights;
use crate::models::{BusId, DriverId, Schedule, Trip};

/// Minimum minutes between runs of different drivers on one bus.
const HANDOVER_GAP_MIN: u32 = 10;

/// Total handover penalty across all buses in the schedule.
pub fn handover_penalty(schedule: &Schedule, weights: &PenaltyWeights) -> f64 {
    let mut by_bus: BTreeMap<BusId, Vec<(&Trip, DriverId)>> = BTreeMap::new();
    for (trip, crew) in schedule.assigned() {
        by_bus.entry(crew.bus).or_default().push((trip, crew.driver));
    }

    let mut penalty = 0.0;
    for runs in by_bus.values_mut() {
        runs.sort_by_key(|(trip, _)| trip.start_of_week_min());
        for pair in runs.windows(2) {
            let (prev, prev_driver) = pair[0];
            let (next, next_driver) = pair[1];
            if prev_driver != next_driver {
                let gap = next
                    .start_of_week_min()
                    .saturating_sub(prev.end_of_week_min());
                if gap < HANDOVER_GAP_MIN {
                    penalty += weights.shift_change;
                }
            }
        }
    }
    penalty
}

//! Fleet capacity check.
//!
//! Builds a per-minute concurrency count over the full week window (one
//! slot per day and window minute) and charges every minute where more
//! runs are underway simultaneously than the base fleet can cover. The
//! count is of simultaneous runs, not distinct bus ids — two trips sharing
//! an id at the same minute still count twice.

use crate::config::RosterConfig;
use crate::models::Schedule;

/// Total over-capacity penalty:
/// `sum over minutes of max(0, concurrency - base_fleet) * bus_conflict`.
pub fn capacity_penalty(schedule: &Schedule, config: &RosterConfig) -> f64 {
    let window = config.catalog.window_len_min();
    let day_count = config.catalog.day_count;
    if window == 0 || day_count == 0 {
        return 0.0;
    }

    let mut usage = vec![0u32; (day_count * window) as usize];
    for (trip, _) in schedule.assigned() {
        if trip.day >= day_count {
            continue;
        }
        let day_base = (trip.day * window) as usize;
        let start = trip
            .start_min
            .saturating_sub(config.catalog.window_start_min)
            .min(window);
        let end = trip
            .end_min
            .saturating_sub(config.catalog.window_start_min)
            .min(window);
        for minute in start..end {
            usage[day_base + minute as usize] += 1;
        }
    }

    let base = config.base_fleet_size;
    usage
        .iter()
        .filter(|&&count| count > base)
        .map(|&count| (count - base) as f64 * config.penalties.bus_conflict)
        .sum()
}

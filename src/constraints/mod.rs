//! Constraint evaluation and penalty accumulation.
//!
//! Three independent sub-checks score a decoded [`Schedule`]: driver labor
//! rules, fleet capacity, and shift handover timing. Each considers only
//! completely assigned trips, each is purely additive, and nothing caps or
//! short-circuits — the total is the plain sum.
//!
//! Violations are penalized, never rejected: an infeasible roster simply
//! scores poorly.

pub mod bus_capacity;
pub mod driver_rules;
pub mod handover;

use crate::config::RosterConfig;
use crate::models::Schedule;

/// Sum of all enabled penalty sub-checks for one schedule.
///
/// The handover check participates only when
/// [`shift_change_enabled`](RosterConfig::shift_change_enabled) is set.
/// The extra-bus penalty is part of the fitness scorer, not of this total.
pub fn total_penalty(schedule: &Schedule, config: &RosterConfig) -> f64 {
    let mut total = driver_rules::driver_penalty(schedule, &config.penalties);
    total += bus_capacity::capacity_penalty(schedule, config);
    if config.shift_change_enabled {
        total += handover::handover_penalty(schedule, &config.penalties);
    }
    total
}

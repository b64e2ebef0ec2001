//! Fitness scoring.
//!
//! Folds throughput, driver economy, peak coverage, and the penalty total
//! into one scalar in `[0, 1)`. The combination is deliberately
//! non-linear: penalties enter only the denominator, so the score must be
//! computed with this exact formula rather than any weighted-sum
//! approximation.
//!
//! ```text
//! numerator   = alpha * (completed/total + peak_bonus)
//! denominator = numerator + beta * (drivers/normalizer) + 0.01 * penalty
//! fitness     = numerator / denominator        (0 when denominator is 0)
//! ```

use serde::{Deserialize, Serialize};

use crate::config::RosterConfig;
use crate::constraints;
use crate::models::Schedule;

/// The measured components behind one fitness value.
///
/// Useful for reporting a finished roster alongside its score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Completely assigned trips.
    pub completed_trips: usize,
    /// Catalog size.
    pub total_trips: usize,
    /// Distinct drivers among assigned trips.
    pub unique_drivers: usize,
    /// Bus ids in use beyond the base fleet.
    pub extra_buses: u32,
    /// Assigned trips starting inside a peak window.
    pub peak_trips: usize,
    /// Constraint penalties plus the extra-bus charge.
    pub penalty_total: f64,
    /// The combined scalar score.
    pub fitness: f64,
}

impl ScoreBreakdown {
    /// Scores a decoded schedule against the full configuration.
    pub fn calculate(schedule: &Schedule, config: &RosterConfig) -> Self {
        let total_trips = schedule.len();
        let completed_trips = schedule.completed_trips();
        let unique_drivers = schedule.unique_drivers();
        let extra_buses = schedule.extra_buses(config.base_fleet_size);
        let peak_trips = schedule.peak_trips(&config.peak_windows);

        let penalty_total = constraints::total_penalty(schedule, config)
            + f64::from(extra_buses) * config.penalties.extra_bus;

        // An empty catalog scores 0 outright; every ratio below divides by
        // the catalog size.
        let fitness = if total_trips == 0 {
            0.0
        } else {
            let total = total_trips as f64;
            let weights = &config.fitness;
            let peak_bonus = peak_trips as f64 / total * weights.peak_bonus_factor;
            let numerator = weights.alpha * (completed_trips as f64 / total + peak_bonus);
            let denominator = numerator
                + weights.beta * (unique_drivers as f64 / weights.driver_normalizer)
                + 0.01 * penalty_total;
            if denominator == 0.0 {
                0.0
            } else {
                numerator / denominator
            }
        };

        Self {
            completed_trips,
            total_trips,
            unique_drivers,
            extra_buses,
            peak_trips,
            penalty_total,
            fitness,
        }
    }
}

/// Scores a decoded schedule; see the module docs for the exact formula.
pub fn score(schedule: &Schedule, config: &RosterConfig) -> f64 {
    ScoreBreakdown::calculate(schedule, config).fitness
}

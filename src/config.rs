//! Problem configuration.
//!
//! Everything the rostering problem is parameterized by lives here: the
//! trip-generation window, peak-time windows, fleet size, penalty weights,
//! and fitness weights. GA loop parameters are separate — see
//! [`GaConfig`](crate::ga::GaConfig).
//!
//! All configs follow the same pattern: `Default` for the reference
//! parameterization, `with_*` builders for overrides, and a `validate()`
//! that is checked once up front rather than per use.

use serde::{Deserialize, Serialize};

/// Trip-catalog generation parameters.
///
/// The working window is expressed in minutes from midnight and may run
/// past 24:00 (the default ends at 27:00 = 3 a.m. of the next calendar
/// day, still attributed to the generating day).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Number of days in the planning horizon.
    pub day_count: u32,
    /// Start of the daily working window, minutes from midnight.
    pub window_start_min: u32,
    /// End of the daily working window, minutes from midnight (exclusive).
    pub window_end_min: u32,
    /// Shortest trip duration drawn, minutes (inclusive).
    pub min_trip_min: u32,
    /// Longest trip duration drawn, minutes (inclusive).
    pub max_trip_min: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            day_count: 7,
            window_start_min: 6 * 60,
            window_end_min: 27 * 60,
            min_trip_min: 50,
            max_trip_min: 70,
        }
    }
}

impl CatalogConfig {
    /// Length of the daily working window in minutes.
    #[inline]
    pub fn window_len_min(&self) -> u32 {
        self.window_end_min.saturating_sub(self.window_start_min)
    }

    pub fn with_day_count(mut self, days: u32) -> Self {
        self.day_count = days;
        self
    }

    pub fn with_window(mut self, start_min: u32, end_min: u32) -> Self {
        self.window_start_min = start_min;
        self.window_end_min = end_min;
        self
    }

    pub fn with_trip_duration(mut self, min: u32, max: u32) -> Self {
        self.min_trip_min = min;
        self.max_trip_min = max;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.day_count == 0 {
            return Err("day_count must be at least 1".into());
        }
        if self.window_end_min <= self.window_start_min {
            return Err("working window must be non-empty".into());
        }
        if self.min_trip_min == 0 {
            return Err("min_trip_min must be positive".into());
        }
        if self.max_trip_min < self.min_trip_min {
            return Err("max_trip_min must be >= min_trip_min".into());
        }
        Ok(())
    }
}

/// A half-open time-of-day interval earning bonus weight when served.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeakWindow {
    /// Start, minutes from midnight (inclusive).
    pub start_min: u32,
    /// End, minutes from midnight (exclusive).
    pub end_min: u32,
}

impl PeakWindow {
    pub fn new(start_min: u32, end_min: u32) -> Self {
        Self { start_min, end_min }
    }

    /// Whether a minute-of-day falls inside this window.
    #[inline]
    pub fn contains(&self, minute: u32) -> bool {
        self.start_min <= minute && minute < self.end_min
    }
}

/// Per-violation penalty weights.
///
/// Each weight is added once per detected violation occurrence; sub-checks
/// are purely additive with no capping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PenaltyWeights {
    /// Class A day total above 9 h.
    pub overtime_a: f64,
    /// Class A worked more than 4 h in a day with no qualifying lunch gap.
    pub no_lunch_a: f64,
    /// Class B day total above 12 h.
    pub overtime_b: f64,
    /// Class B missed the short break owed after a 2 h work block.
    pub short_break_b: f64,
    /// Class B took more than two consecutive short breaks without a long one.
    pub long_break_b: f64,
    /// Class B works again within two days of a worked day.
    pub no_two_day_rest_b: f64,
    /// One simultaneous run above the base fleet, per minute.
    pub bus_conflict: f64,
    /// One bus id above the base fleet size.
    pub extra_bus: f64,
    /// Driver handover on a shared bus with less than 10 min between runs.
    pub shift_change: f64,
}

impl Default for PenaltyWeights {
    fn default() -> Self {
        Self {
            overtime_a: 20.0,
            no_lunch_a: 10.0,
            overtime_b: 25.0,
            short_break_b: 10.0,
            long_break_b: 15.0,
            no_two_day_rest_b: 50.0,
            bus_conflict: 5.0,
            extra_bus: 5.0,
            shift_change: 5.0,
        }
    }
}

/// Weights of the fitness formula.
///
/// See [`fitness`](crate::fitness) for the exact (non-linear) combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitnessWeights {
    /// Weight of the completed-trip ratio and peak bonus.
    pub alpha: f64,
    /// Weight of the unique-driver ratio.
    pub beta: f64,
    /// Multiplier on the peak-trip ratio.
    pub peak_bonus_factor: f64,
    /// Fixed normalizer for the unique-driver count.
    pub driver_normalizer: f64,
}

impl Default for FitnessWeights {
    fn default() -> Self {
        Self {
            alpha: 10.0,
            beta: 0.5,
            peak_bonus_factor: 0.1,
            driver_normalizer: 30.0,
        }
    }
}

/// Full problem parameterization.
///
/// Aggregates catalog generation, assignment-draw distributions, fleet
/// sizing, peak windows, penalty weights, and fitness weights.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Trip-catalog generation parameters.
    pub catalog: CatalogConfig,
    /// Peak time-of-day windows (half-open).
    pub peak_windows: Vec<PeakWindow>,
    /// Buses available without penalty; higher ids are "extra".
    pub base_fleet_size: u32,
    /// Largest bus id drawn during random assignment.
    pub max_fleet_size: u32,
    /// Largest driver number drawn during random assignment.
    pub driver_count: u32,
    /// Relative weight of drawing a class A driver.
    pub class_a_weight: u32,
    /// Relative weight of drawing a class B driver.
    pub class_b_weight: u32,
    /// Chance a trip is left unserved during random initialization.
    pub skip_trip_prob: f64,
    /// Chance a bus draw comes up empty (collapsing the gene).
    pub skip_bus_prob: f64,
    /// Whether the shift-handover sub-check contributes to the penalty total.
    pub shift_change_enabled: bool,
    /// Per-violation penalty weights.
    pub penalties: PenaltyWeights,
    /// Fitness-formula weights.
    pub fitness: FitnessWeights,
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            catalog: CatalogConfig::default(),
            // 7-9 and 17-19
            peak_windows: vec![
                PeakWindow::new(7 * 60, 9 * 60),
                PeakWindow::new(17 * 60, 19 * 60),
            ],
            base_fleet_size: 8,
            max_fleet_size: 12,
            driver_count: 30,
            class_a_weight: 70,
            class_b_weight: 30,
            skip_trip_prob: 0.2,
            skip_bus_prob: 0.2,
            shift_change_enabled: true,
            penalties: PenaltyWeights::default(),
            fitness: FitnessWeights::default(),
        }
    }
}

impl RosterConfig {
    pub fn with_catalog(mut self, catalog: CatalogConfig) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_peak_windows(mut self, windows: Vec<PeakWindow>) -> Self {
        self.peak_windows = windows;
        self
    }

    pub fn with_base_fleet_size(mut self, size: u32) -> Self {
        self.base_fleet_size = size;
        self
    }

    pub fn with_penalties(mut self, penalties: PenaltyWeights) -> Self {
        self.penalties = penalties;
        self
    }

    pub fn with_fitness_weights(mut self, weights: FitnessWeights) -> Self {
        self.fitness = weights;
        self
    }

    /// Enables or disables the shift-handover sub-check.
    pub fn with_shift_change(mut self, enabled: bool) -> Self {
        self.shift_change_enabled = enabled;
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        self.catalog.validate()?;
        if self.max_fleet_size == 0 {
            return Err("max_fleet_size must be at least 1".into());
        }
        if self.driver_count == 0 {
            return Err("driver_count must be at least 1".into());
        }
        if self.class_a_weight + self.class_b_weight == 0 {
            return Err("driver class weights must not both be zero".into());
        }
        if !(0.0..=1.0).contains(&self.skip_trip_prob) {
            return Err("skip_trip_prob must lie in [0, 1]".into());
        }
        if !(0.0..=1.0).contains(&self.skip_bus_prob) {
            return Err("skip_bus_prob must lie in [0, 1]".into());
        }
        if self.fitness.driver_normalizer <= 0.0 {
            return Err("driver_normalizer must be positive".into());
        }
        for window in &self.peak_windows {
            if window.end_min <= window.start_min {
                return Err("peak windows must be non-empty".into());
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(RosterConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_window_is_21_hours() {
        let config = CatalogConfig::default();
        assert_eq!(config.window_len_min(), 21 * 60);
    }

    #[test]
    fn test_peak_window_half_open() {
        let peak = PeakWindow::new(420, 540);
        assert!(peak.contains(420));
        assert!(peak.contains(539));
        assert!(!peak.contains(540));
        assert!(!peak.contains(419));
    }

    #[test]
    fn test_catalog_validation() {
        assert!(CatalogConfig::default().with_day_count(0).validate().is_err());
        assert!(CatalogConfig::default().with_window(600, 600).validate().is_err());
        assert!(CatalogConfig::default()
            .with_trip_duration(70, 50)
            .validate()
            .is_err());
    }

    #[test]
    fn test_roster_validation() {
        let mut config = RosterConfig::default();
        config.skip_bus_prob = 1.5;
        assert!(config.validate().is_err());

        let mut config = RosterConfig::default();
        config.fitness.driver_normalizer = 0.0;
        assert!(config.validate().is_err());

        let mut config = RosterConfig::default();
        config.peak_windows = vec![PeakWindow::new(540, 420)];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_builder_chain() {
        let config = RosterConfig::default()
            .with_base_fleet_size(10)
            .with_shift_change(false)
            .with_peak_windows(vec![PeakWindow::new(480, 600)]);
        assert_eq!(config.base_fleet_size, 10);
        assert!(!config.shift_change_enabled);
        assert_eq!(config.peak_windows.len(), 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_serde_round_trip() {
        let config = RosterConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: RosterConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}

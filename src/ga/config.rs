//! GA configuration.
//!
//! [`GaConfig`] holds every parameter of the generational loop. The
//! problem side (assignment distributions, penalties, fitness weights) is
//! configured separately through
//! [`RosterConfig`](crate::config::RosterConfig).

use serde::{Deserialize, Serialize};

/// Parameters of the generational search loop.
///
/// # Defaults
///
/// ```
/// use crew_roster::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.generations, 500);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use crew_roster::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_tournament_size(7)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaConfig {
    /// Number of individuals in the population.
    pub population_size: usize,
    /// Fixed number of generations to run; there is no convergence-based
    /// early stop.
    pub generations: usize,
    /// Probability of recombining a parent pair (otherwise both are
    /// copied unchanged).
    pub crossover_prob: f64,
    /// Per-gene mutation probability applied to every offspring.
    pub mutation_prob: f64,
    /// Tournament size for parent selection (drawn without replacement,
    /// so it may not exceed the population size).
    pub tournament_size: usize,
    /// Number of top individuals carried unchanged into the next
    /// generation.
    pub elite_count: usize,
    /// Random seed for reproducibility; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 500,
            crossover_prob: 0.9,
            mutation_prob: 0.001,
            tournament_size: 5,
            elite_count: 10,
            seed: None,
        }
    }
}

impl GaConfig {
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    pub fn with_crossover_prob(mut self, prob: f64) -> Self {
        self.crossover_prob = prob.clamp(0.0, 1.0);
        self
    }

    pub fn with_mutation_prob(mut self, prob: f64) -> Self {
        self.mutation_prob = prob.clamp(0.0, 1.0);
        self
    }

    pub fn with_tournament_size(mut self, k: usize) -> Self {
        self.tournament_size = k;
        self
    }

    pub fn with_elite_count(mut self, n: usize) -> Self {
        self.elite_count = n;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    /// Checked once before the loop starts, never per generation.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.generations == 0 {
            return Err("generations must be at least 1".into());
        }
        if self.elite_count >= self.population_size {
            return Err("elite_count must be smaller than population_size".into());
        }
        if self.tournament_size == 0 {
            return Err("tournament_size must be at least 1".into());
        }
        if self.tournament_size > self.population_size {
            return Err("tournament_size must not exceed population_size".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 100);
        assert_eq!(config.generations, 500);
        assert!((config.crossover_prob - 0.9).abs() < 1e-10);
        assert!((config.mutation_prob - 0.001).abs() < 1e-10);
        assert_eq!(config.tournament_size, 5);
        assert_eq!(config.elite_count, 10);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_population_size(40)
            .with_generations(20)
            .with_crossover_prob(0.8)
            .with_mutation_prob(0.05)
            .with_tournament_size(3)
            .with_elite_count(4)
            .with_seed(42);
        assert_eq!(config.population_size, 40);
        assert_eq!(config.generations, 20);
        assert!((config.crossover_prob - 0.8).abs() < 1e-10);
        assert!((config.mutation_prob - 0.05).abs() < 1e-10);
        assert_eq!(config.tournament_size, 3);
        assert_eq!(config.elite_count, 4);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_probabilities_clamp() {
        let config = GaConfig::default()
            .with_crossover_prob(1.5)
            .with_mutation_prob(-0.5);
        assert!((config.crossover_prob - 1.0).abs() < 1e-10);
        assert!((config.mutation_prob - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_validate_population_too_small() {
        assert!(GaConfig::default().with_population_size(1).validate().is_err());
    }

    #[test]
    fn test_validate_zero_generations() {
        assert!(GaConfig::default().with_generations(0).validate().is_err());
    }

    #[test]
    fn test_validate_elite_fills_population() {
        let config = GaConfig::default()
            .with_population_size(10)
            .with_elite_count(10);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_tournament_exceeds_population() {
        let config = GaConfig::default()
            .with_population_size(10)
            .with_tournament_size(11);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_tournament() {
        assert!(GaConfig::default().with_tournament_size(0).validate().is_err());
    }
}

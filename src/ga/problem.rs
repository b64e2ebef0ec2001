//! Rostering problem definition.
//!
//! [`RosteringProblem`] binds the immutable trip catalog to the full
//! problem configuration and exposes the operations the generational loop
//! needs: random chromosome creation, decoding, and fitness evaluation.
//!
//! Evaluation is a pure function of the chromosome, which is what makes
//! population scoring safe to parallelize.

use rand::Rng;

use crate::catalog::TripCatalog;
use crate::config::RosterConfig;
use crate::fitness;
use crate::models::Schedule;

use super::chromosome::RosterChromosome;

/// A rostering instance: one trip catalog plus its configuration.
///
/// The catalog is generated once, owned here, and shared read-only by the
/// whole search.
#[derive(Debug, Clone)]
pub struct RosteringProblem {
    pub catalog: TripCatalog,
    pub config: RosterConfig,
}

impl RosteringProblem {
    pub fn new(catalog: TripCatalog, config: RosterConfig) -> Self {
        Self { catalog, config }
    }

    /// Creates one random candidate roster.
    pub fn create_individual<R: Rng>(&self, rng: &mut R) -> RosterChromosome {
        RosterChromosome::random(&self.catalog, &self.config, rng)
    }

    /// Decodes a chromosome against this problem's catalog.
    ///
    /// # Panics
    /// Panics on a chromosome/catalog length mismatch.
    pub fn decode<'a>(&'a self, chromosome: &RosterChromosome) -> Schedule<'a> {
        chromosome.decode(&self.catalog)
    }

    /// Scores a chromosome. Pure; never mutates the chromosome.
    pub fn evaluate(&self, chromosome: &RosterChromosome) -> f64 {
        fitness::score(&self.decode(chromosome), &self.config)
    }
}

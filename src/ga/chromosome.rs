//! Roster chromosome: representation, initialization, and operators.
//!
//! # Encoding
//!
//! One gene per catalog trip, in catalog order. A gene is either empty or
//! a complete driver + bus pair; the chromosome references trips purely by
//! position, so its length must always equal the catalog size.
//!
//! Crossover and mutation live beside the representation. Both take their
//! probability as an argument: crossover rolls once per parent pair,
//! mutation rolls once per gene.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::catalog::TripCatalog;
use crate::config::RosterConfig;
use crate::models::{BusId, DriverClass, DriverId, Gene, Schedule, ScheduledTrip};

/// Chance that a triggered mutation toggles existence instead of
/// perturbing the current assignment.
const TOGGLE_SUB_PROB: f64 = 0.3;
/// Chance that a perturbation re-rolls the driver rather than the bus.
const REROLL_DRIVER_SUB_PROB: f64 = 0.5;

/// A candidate full-week assignment plan.
///
/// Fitness is cached on the chromosome (higher = better, in `[0, 1)`);
/// `f64::NEG_INFINITY` marks a not-yet-evaluated candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterChromosome {
    /// One gene per catalog trip, positionally aligned.
    pub genes: Vec<Gene>,
    /// Cached fitness (higher = better).
    pub fitness: f64,
}

impl RosterChromosome {
    /// Wraps pre-made genes as an unevaluated chromosome.
    pub fn from_genes(genes: Vec<Gene>) -> Self {
        Self {
            genes,
            fitness: f64::NEG_INFINITY,
        }
    }

    /// Creates a random chromosome for the given catalog.
    ///
    /// Per trip independently: with `skip_trip_prob` the gene stays empty,
    /// otherwise a crew is drawn — and since the bus draw has its own
    /// independent no-bus chance, the realized empty-gene rate exceeds the
    /// nominal skip probability.
    pub fn random<R: Rng>(catalog: &TripCatalog, config: &RosterConfig, rng: &mut R) -> Self {
        let genes = (0..catalog.len())
            .map(|_| {
                if rng.random::<f64>() < config.skip_trip_prob {
                    Gene::Empty
                } else {
                    random_crew(config, rng)
                }
            })
            .collect();
        Self::from_genes(genes)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    /// Pairs each catalog trip with this chromosome's gene at the same
    /// position.
    ///
    /// # Panics
    /// Panics if the chromosome length does not match the catalog — that
    /// is a usage error, not a scoring concern.
    pub fn decode<'a>(&self, catalog: &'a TripCatalog) -> Schedule<'a> {
        assert_eq!(
            self.genes.len(),
            catalog.len(),
            "chromosome length must match trip catalog"
        );
        Schedule::new(
            catalog
                .iter()
                .zip(self.genes.iter().copied())
                .map(|(trip, gene)| ScheduledTrip { trip, gene })
                .collect(),
        )
    }
}

/// Draws a driver: class by relative weight, number uniform in
/// `[1, driver_count]`. Always succeeds.
pub(crate) fn random_driver<R: Rng>(config: &RosterConfig, rng: &mut R) -> DriverId {
    let total = config.class_a_weight + config.class_b_weight;
    let class = if rng.random_range(0..total) < config.class_a_weight {
        DriverClass::A
    } else {
        DriverClass::B
    };
    DriverId::new(class, rng.random_range(1..=config.driver_count))
}

/// Draws a bus id uniform in `[1, max_fleet_size]`, or nothing with
/// `skip_bus_prob`.
pub(crate) fn random_bus<R: Rng>(config: &RosterConfig, rng: &mut R) -> Option<BusId> {
    if rng.random::<f64>() < config.skip_bus_prob {
        None
    } else {
        Some(BusId(rng.random_range(1..=config.max_fleet_size)))
    }
}

/// Draws a full crew; a failed bus draw collapses the gene to empty.
pub(crate) fn random_crew<R: Rng>(config: &RosterConfig, rng: &mut R) -> Gene {
    let driver = random_driver(config, rng);
    let bus = random_bus(config, rng);
    Gene::from_parts(Some(driver), bus)
}

/// Single-point crossover.
///
/// With probability `prob` a cut point is drawn uniformly from
/// `[1, len - 1]` and the tails are swapped; otherwise both parents are
/// returned as exact unmodified copies. Chromosomes shorter than two genes
/// are always copied.
pub fn crossover<R: Rng>(
    parent1: &RosterChromosome,
    parent2: &RosterChromosome,
    prob: f64,
    rng: &mut R,
) -> (RosterChromosome, RosterChromosome) {
    let len = parent1.len();
    debug_assert_eq!(len, parent2.len());
    if len < 2 || rng.random::<f64>() >= prob {
        return (parent1.clone(), parent2.clone());
    }

    let cut = rng.random_range(1..len);
    let mut child1 = Vec::with_capacity(len);
    let mut child2 = Vec::with_capacity(len);
    child1.extend_from_slice(&parent1.genes[..cut]);
    child1.extend_from_slice(&parent2.genes[cut..]);
    child2.extend_from_slice(&parent2.genes[..cut]);
    child2.extend_from_slice(&parent1.genes[cut..]);
    (
        RosterChromosome::from_genes(child1),
        RosterChromosome::from_genes(child2),
    )
}

/// Per-gene mutation.
///
/// Each gene mutates independently with probability `prob`. A triggered
/// mutation either toggles existence (assigned → empty, empty → fresh
/// random crew) or perturbs the current assignment by re-rolling the
/// driver or the bus; a failed bus re-roll collapses the gene. `prob = 0`
/// leaves the chromosome untouched.
pub fn mutate<R: Rng>(
    chromosome: &mut RosterChromosome,
    prob: f64,
    config: &RosterConfig,
    rng: &mut R,
) {
    for gene in &mut chromosome.genes {
        if rng.random::<f64>() >= prob {
            continue;
        }
        if rng.random::<f64>() < TOGGLE_SUB_PROB {
            *gene = match gene.crew() {
                Some(_) => Gene::Empty,
                None => random_crew(config, rng),
            };
        } else {
            *gene = match gene.crew() {
                Some(crew) => {
                    if rng.random::<f64>() < REROLL_DRIVER_SUB_PROB {
                        Gene::from_parts(Some(random_driver(config, rng)), Some(crew.bus))
                    } else {
                        Gene::from_parts(Some(crew.driver), random_bus(config, rng))
                    }
                }
                None => random_crew(config, rng),
            };
        }
    }
}

//! Greedy baseline.
//!
//! The trivial deterministic comparison point: every trip goes to the
//! same class A driver on the same bus. It is scored through the same
//! fitness path as evolved rosters but never enters the search
//! population.

use crate::catalog::TripCatalog;
use crate::ga::RosterChromosome;
use crate::models::{BusId, Crew, DriverClass, DriverId, Gene};

/// Builds the all-on-one-driver baseline roster for a catalog.
pub fn greedy_baseline(catalog: &TripCatalog) -> RosterChromosome {
    let crew = Crew {
        driver: DriverId::new(DriverClass::A, 1),
        bus: BusId(1),
    };
    RosterChromosome::from_genes(vec![Gene::Assigned(crew); catalog.len()])
}

//! Tournament selection.
//!
//! Parents are chosen by sampling a fixed-size tournament from the scored
//! population *without replacement* and keeping the fittest entrant. The
//! tournament size controls selection pressure; validating it against the
//! population size happens once in [`GaConfig::validate`](super::GaConfig).

use rand::Rng;

use super::chromosome::RosterChromosome;

/// Selects one parent index by tournament.
///
/// `k` individuals are drawn without replacement; the index of the
/// highest-fitness entrant wins, ties resolving to the earliest drawn.
///
/// # Panics
/// Panics if the population is empty.
pub fn tournament<R: Rng>(population: &[RosterChromosome], k: usize, rng: &mut R) -> usize {
    assert!(!population.is_empty(), "cannot select from empty population");
    let k = k.clamp(1, population.len());

    let sampled = rand::seq::index::sample(rng, population.len(), k);
    let mut best = sampled.index(0);
    for candidate in sampled.iter().skip(1) {
        if population[candidate].fitness > population[best].fitness {
            best = candidate;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Gene;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn population(fitnesses: &[f64]) -> Vec<RosterChromosome> {
        fitnesses
            .iter()
            .map(|&fitness| RosterChromosome {
                genes: vec![Gene::Empty],
                fitness,
            })
            .collect()
    }

    #[test]
    fn test_full_tournament_always_finds_best() {
        // Sampling without replacement with k = n must cover everyone.
        let pop = population(&[0.1, 0.8, 0.3, 0.5]);
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..100 {
            assert_eq!(tournament(&pop, pop.len(), &mut rng), 1);
        }
    }

    #[test]
    fn test_tournament_favors_fitter_individuals() {
        let pop = population(&[0.1, 0.2, 0.9, 0.3]);
        let mut rng = SmallRng::seed_from_u64(42);
        let mut wins = 0;
        let rounds = 10_000;
        for _ in 0..rounds {
            if tournament(&pop, 3, &mut rng) == 2 {
                wins += 1;
            }
        }
        // Index 2 sits in 3 of the 4 possible tournaments and wins each.
        assert!(wins > rounds / 2, "best won only {wins}/{rounds}");
    }

    #[test]
    fn test_tournament_size_one_is_uniform() {
        let pop = population(&[0.1, 0.2, 0.9, 0.3]);
        let mut rng = SmallRng::seed_from_u64(42);
        let mut counts = [0u32; 4];
        for _ in 0..10_000 {
            counts[tournament(&pop, 1, &mut rng)] += 1;
        }
        for &count in &counts {
            assert!(count > 1500, "expected roughly uniform, got {counts:?}");
        }
    }

    #[test]
    fn test_oversized_tournament_clamps() {
        let pop = population(&[0.4, 0.6]);
        let mut rng = SmallRng::seed_from_u64(42);
        assert_eq!(tournament(&pop, 10, &mut rng), 1);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let pop: Vec<RosterChromosome> = Vec::new();
        let mut rng = SmallRng::seed_from_u64(42);
        tournament(&pop, 3, &mut rng);
    }
}

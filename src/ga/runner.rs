//! Generational loop execution.
//!
//! [`GaRunner`] drives the search: initialize → { evaluate → select /
//! recombine / mutate → replace } × generations → return the best of the
//! final population. The generation count is fixed; a caller wanting a
//! tighter budget simply runs fewer generations and keeps the result.
//!
//! Within one generation every individual is scored before any selection
//! happens; with the `parallel` feature the scoring fans out over rayon,
//! which never changes results because evaluation is pure.

use std::cmp::Ordering;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::chromosome::{crossover, mutate, RosterChromosome};
use super::config::GaConfig;
use super::problem::RosteringProblem;
use super::selection::tournament;

/// Result of one search run.
#[derive(Debug, Clone)]
pub struct GaResult {
    /// Best individual of the final population.
    pub best: RosterChromosome,
    /// Its fitness (same as `best.fitness`).
    pub best_fitness: f64,
    /// Number of generations executed.
    pub generations: usize,
    /// Generation-best fitness after each evaluation pass.
    pub fitness_history: Vec<f64>,
}

/// Executes the generational search loop.
///
/// # Usage
///
/// ```no_run
/// use crew_roster::catalog::TripCatalog;
/// use crew_roster::config::RosterConfig;
/// use crew_roster::ga::{GaConfig, GaRunner, RosteringProblem};
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
///
/// let config = RosterConfig::default();
/// let catalog = TripCatalog::generate(&config.catalog, &mut SmallRng::seed_from_u64(42));
/// let problem = RosteringProblem::new(catalog, config);
/// let result = GaRunner::run(&problem, &GaConfig::default().with_seed(42));
/// println!("best fitness: {:.4}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the search, seeding the random stream from the configuration.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`GaConfig::validate`]
    /// first to get a descriptive error).
    pub fn run(problem: &RosteringProblem, config: &GaConfig) -> GaResult {
        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        Self::run_with_observer(problem, config, &mut rng, |_, _| {})
    }

    /// Runs the search with an injected random stream and a per-generation
    /// observer.
    ///
    /// The observer receives the generation index and the generation-best
    /// fitness after each evaluation pass — the hook for progress output.
    pub fn run_with_observer<R, F>(
        problem: &RosteringProblem,
        config: &GaConfig,
        rng: &mut R,
        mut observer: F,
    ) -> GaResult
    where
        R: Rng,
        F: FnMut(usize, f64),
    {
        config.validate().expect("invalid GaConfig");

        // Init
        let mut population: Vec<RosterChromosome> = (0..config.population_size)
            .map(|_| problem.create_individual(rng))
            .collect();

        let mut fitness_history = Vec::with_capacity(config.generations);

        for generation in 0..config.generations {
            // Evaluate the whole population before any selection.
            evaluate_population(problem, &mut population);

            // Stable sort, best first: equal-fitness individuals keep
            // their relative order, which pins the elite tie-break.
            population.sort_by(|a, b| {
                b.fitness.partial_cmp(&a.fitness).unwrap_or(Ordering::Equal)
            });

            fitness_history.push(population[0].fitness);
            observer(generation, population[0].fitness);

            // Elites survive unchanged.
            let mut next: Vec<RosterChromosome> = population[..config.elite_count].to_vec();

            // Fill the remainder from tournament-selected parent pairs.
            while next.len() < config.population_size {
                let p1 = tournament(&population, config.tournament_size, rng);
                let p2 = tournament(&population, config.tournament_size, rng);
                let (mut c1, mut c2) = crossover(
                    &population[p1],
                    &population[p2],
                    config.crossover_prob,
                    rng,
                );
                mutate(&mut c1, config.mutation_prob, &problem.config, rng);
                mutate(&mut c2, config.mutation_prob, &problem.config, rng);
                next.push(c1);
                if next.len() < config.population_size {
                    next.push(c2);
                }
            }

            // Wholesale replacement.
            population = next;
        }

        // The final population holds unevaluated offspring; score it once
        // more and pick the best outright rather than tracking it along
        // the way.
        evaluate_population(problem, &mut population);
        let mut best_index = 0;
        for (index, individual) in population.iter().enumerate() {
            if individual.fitness > population[best_index].fitness {
                best_index = index;
            }
        }
        let best = population[best_index].clone();

        GaResult {
            best_fitness: best.fitness,
            best,
            generations: config.generations,
            fitness_history,
        }
    }
}

/// Scores every individual, caching fitness on the chromosome.
fn evaluate_population(problem: &RosteringProblem, population: &mut [RosterChromosome]) {
    #[cfg(feature = "parallel")]
    {
        population.par_iter_mut().for_each(|individual| {
            let fitness = problem.evaluate(individual);
            individual.fitness = fitness;
        });
    }
    #[cfg(not(feature = "parallel"))]
    {
        for individual in population.iter_mut() {
            let fitness = problem.evaluate(individual);
            individual.fitness = fitness;
        }
    }
}

//! Genetic search over weekly rosters.
//!
//! The chromosome is one gene per catalog trip; the loop is the minimal
//! generational state machine — initialize, evaluate, select, recombine,
//! mutate, replace — repeated for a fixed number of generations.
//!
//! # Key Types
//!
//! - [`RosterChromosome`]: candidate roster with cached fitness
//! - [`RosteringProblem`]: catalog + configuration, owns decode/evaluate
//! - [`GaConfig`]: loop parameters (population, operators, seed)
//! - [`GaRunner`]: executes the loop
//! - [`GaResult`]: best individual plus run statistics
//!
//! # Submodules
//!
//! - [`chromosome`]: representation, initialization, crossover, mutation
//! - [`selection`]: tournament parent selection

pub mod chromosome;
mod config;
mod problem;
mod runner;
pub mod selection;

pub use chromosome::{crossover, mutate, RosterChromosome};
pub use config::GaConfig;
pub use problem::RosteringProblem;
pub use runner::{GaResult, GaRunner};
pub use selection::tournament;

//! Genetic search over job permutations.
//!
//! One call to [`GaRunner::step`] evolves a [`GaState`] population by one
//! generation:
//!
//! 1. Evaluate every individual with the scheduling engine
//! 2. Sort by makespan (lower is fitter)
//! 3. Copy the elites unchanged
//! 4. Fill the rest with tournament-selected parents recombined by
//!    order crossover, optionally swap-mutated
//!
//! # Key Types
//!
//! - [`GaConfig`]: population size, elitism, tournament size, mutation rate
//! - [`GaState`]: the population carried between steps
//! - [`GaRunner`]: the step function
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Reeves (1995), "A genetic algorithm for flowshop sequencing"

mod config;
mod runner;
mod types;

pub use config::GaConfig;
pub use runner::GaRunner;
pub use types::GaState;

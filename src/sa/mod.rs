//! Simulated Annealing (SA) over job permutations.
//!
//! Each step proposes one random swap of the current permutation and
//! accepts it by the Metropolis criterion, then cools the temperature
//! geometrically.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Osman & Potts (1989), "Simulated annealing for permutation flow-shop scheduling"

mod config;
mod runner;
mod types;

pub use config::SaConfig;
pub use runner::{acceptance_probability, SaRunner};
pub use types::SaState;

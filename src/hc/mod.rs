//! Stochastic hill-climbing over job permutations.
//!
//! Each step proposes one random swap and moves to it when its makespan
//! is less than or equal to the current one. Accepting ties lets the
//! search drift across plateaus instead of stalling on them.

mod runner;
mod types;

pub use runner::HcRunner;
pub use types::HcState;

//! Search state for simulated annealing.

use super::config::SaConfig;
use crate::models::Instance;
use crate::random::random_permutation;
use rand::Rng;

/// Current permutation and temperature of one annealing run.
///
/// Valid to discard or resume between any two steps.
#[derive(Debug, Clone, PartialEq)]
pub struct SaState {
    /// Permutation currently held by the search.
    pub current: Vec<usize>,
    /// Current temperature (> 0).
    pub temperature: f64,
}

impl SaState {
    /// Creates a state from an explicit permutation and temperature.
    pub fn new(current: Vec<usize>, temperature: f64) -> Self {
        Self {
            current,
            temperature,
        }
    }

    /// Random starting permutation at the configured initial temperature.
    pub fn random<R: Rng>(instance: &Instance, config: &SaConfig, rng: &mut R) -> Self {
        Self {
            current: random_permutation(instance.num_jobs(), rng),
            temperature: config.initial_temperature,
        }
    }
}

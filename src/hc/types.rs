//! Search state for hill-climbing.

use crate::models::Instance;
use crate::random::random_permutation;
use rand::Rng;

/// The permutation currently held by a hill-climbing run.
#[derive(Debug, Clone, PartialEq)]
pub struct HcState {
    /// Current job ordering.
    pub current: Vec<usize>,
}

impl HcState {
    /// Creates a state from an explicit permutation.
    pub fn new(current: Vec<usize>) -> Self {
        Self { current }
    }

    /// Random starting permutation.
    pub fn random<R: Rng>(instance: &Instance, rng: &mut R) -> Self {
        Self {
            current: random_permutation(instance.num_jobs(), rng),
        }
    }
}

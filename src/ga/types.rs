//! Population state for genetic search.

use crate::models::Instance;
use crate::random::random_permutation;
use rand::Rng;

/// A population of job permutations.
///
/// Owned by exactly one run. Each [`GaRunner::step`](super::GaRunner::step)
/// reads it and returns a freshly built successor; individuals are never
/// mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct GaState {
    /// Job orderings, one per individual.
    pub population: Vec<Vec<usize>>,
}

impl GaState {
    /// Wraps an existing population.
    pub fn new(population: Vec<Vec<usize>>) -> Self {
        Self { population }
    }

    /// Creates `size` uniformly random permutations of the instance's jobs.
    pub fn random<R: Rng>(instance: &Instance, size: usize, rng: &mut R) -> Self {
        let population = (0..size)
            .map(|_| random_permutation(instance.num_jobs(), rng))
            .collect();
        Self { population }
    }

    /// Number of individuals.
    #[inline]
    pub fn len(&self) -> usize {
        self.population.len()
    }

    /// Whether the population is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.population.is_empty()
    }
}

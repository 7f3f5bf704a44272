//! Seedable random sources.
//!
//! All stochastic choices in the crate (shuffles, swap positions,
//! tournament draws, crossover bounds, acceptance rolls) take a
//! caller-supplied `&mut R: Rng`. These helpers build the generator.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Creates a reproducible generator from a 64-bit seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Returns a uniformly shuffled permutation of `0..n`.
pub fn random_permutation<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut perm: Vec<usize> = (0..n).collect();
    perm.shuffle(rng);
    perm
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = create_rng(7);
        let mut b = create_rng(7);
        assert_eq!(random_permutation(20, &mut a), random_permutation(20, &mut b));
    }

    #[test]
    fn test_random_permutation_is_permutation() {
        let mut rng = create_rng(42);
        let mut perm = random_permutation(50, &mut rng);
        perm.sort_unstable();
        assert_eq!(perm, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_permutation() {
        let mut rng = create_rng(42);
        assert!(random_permutation(0, &mut rng).is_empty());
    }
}

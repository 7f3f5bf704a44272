//! Permutation operators shared by the search algorithms.
//!
//! - [`swap_mutation`]: exchange two random positions, on a copy
//! - [`order_crossover`] (OX): Davis (1985), preserves relative order
//! - [`tournament_select`]: best of `k` draws with replacement
//!
//! All operators take the random source as an argument so runs are
//! reproducible from a seed.
//!
//! # References
//!
//! - Davis (1985), "Applying Adaptive Algorithms to Epistatic Domains"
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use rand::Rng;

/// Swap mutation: returns a copy of `perm` with two random positions
/// exchanged.
///
/// The two indices are drawn independently, so they may coincide (the
/// copy is then unchanged). The input is never modified.
///
/// # Complexity
/// O(n) for the copy
pub fn swap_mutation<R: Rng>(perm: &[usize], rng: &mut R) -> Vec<usize> {
    let mut child = perm.to_vec();
    let n = child.len();
    if n == 0 {
        return child;
    }
    let i = rng.random_range(0..n);
    let j = rng.random_range(0..n);
    child.swap(i, j);
    child
}

/// Order Crossover (OX) producing a single child.
///
/// # Algorithm
///
/// 1. Select a random segment `[start, end]` (inclusive) of `parent1`
/// 2. Copy it into the child at the same positions
/// 3. Fill the remaining positions left to right with `parent2`'s genes in
///    their original order, skipping genes already in the segment
///
/// # Complexity
/// O(n) time, O(n) space
///
/// # Panics
/// Panics if parents have different lengths or are empty.
pub fn order_crossover<R: Rng>(parent1: &[usize], parent2: &[usize], rng: &mut R) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    let (start, end) = random_segment(n, rng);
    order_crossover_with_segment(parent1, parent2, start, end)
}

/// OX with an explicit inclusive segment `[start, end]`.
///
/// Both parents must be permutations of `0..n`.
///
/// # Panics
/// Panics if the parents differ in length, the segment is out of bounds
/// or reversed, or `parent2` is not a permutation of `parent1`'s genes.
pub fn order_crossover_with_segment(
    parent1: &[usize],
    parent2: &[usize],
    start: usize,
    end: usize,
) -> Vec<usize> {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(start <= end && end < n, "segment [{start}, {end}] out of bounds for {n}");

    let mut in_segment = vec![false; n];
    for &gene in &parent1[start..=end] {
        in_segment[gene] = true;
    }

    let mut fill = parent2.iter().copied().filter(|&g| !in_segment[g]);
    (0..n)
        .map(|i| {
            if (start..=end).contains(&i) {
                parent1[i]
            } else {
                // Exactly n - (end - start + 1) donor genes remain.
                fill.next()
                    .expect("parent2 must be a permutation of parent1's genes")
            }
        })
        .collect()
}

/// Tournament selection over a fitness slice (lower is better).
///
/// Draws `k` indices uniformly with replacement and returns the fittest;
/// the earliest draw wins ties. A `k` larger than the population simply
/// repeats draws; `k == 0` is treated as 1.
///
/// # Complexity
/// O(k) per selection
///
/// # Panics
/// Panics if `fitness` is empty.
pub fn tournament_select<R: Rng>(fitness: &[f64], k: usize, rng: &mut R) -> usize {
    assert!(!fitness.is_empty(), "cannot select from empty population");
    let n = fitness.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k.max(1) {
        let idx = rng.random_range(0..n);
        if fitness[idx] < fitness[best_idx] {
            best_idx = idx;
        }
    }
    best_idx
}

/// Pick a random segment `[start, end]` within `0..n` where `start <= end`.
fn random_segment<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{create_rng, random_permutation};
    use proptest::prelude::*;
    use std::collections::HashSet;

    /// Check that a slice is a valid permutation of 0..n.
    fn is_valid_permutation(perm: &[usize], n: usize) -> bool {
        if perm.len() != n {
            return false;
        }
        let set: HashSet<usize> = perm.iter().copied().collect();
        set.len() == n && perm.iter().all(|&v| v < n)
    }

    // ---- OX ----

    #[test]
    fn test_ox_fills_left_to_right() {
        let p1 = vec![0, 1, 2, 3, 4, 5, 6, 7];
        let p2 = vec![7, 6, 5, 4, 3, 2, 1, 0];
        let child = order_crossover_with_segment(&p1, &p2, 2, 4);
        // Segment [2, 3, 4] kept; rest from p2 in order: 7 6 5 1 0
        assert_eq!(child, vec![7, 6, 2, 3, 4, 5, 1, 0]);
    }

    #[test]
    fn test_ox_degenerate_segments() {
        let p1 = vec![3, 1, 4, 0, 2];
        let p2 = vec![0, 1, 2, 3, 4];

        // Full segment copies parent1
        assert_eq!(order_crossover_with_segment(&p1, &p2, 0, 4), p1);

        // Single-gene segment
        let child = order_crossover_with_segment(&p1, &p2, 2, 2);
        assert_eq!(child, vec![0, 1, 4, 2, 3]);
        assert!(is_valid_permutation(&child, 5));
    }

    #[test]
    fn test_ox_single_element() {
        let mut rng = create_rng(42);
        assert_eq!(order_crossover(&[0], &[0], &mut rng), vec![0]);
    }

    #[test]
    fn test_ox_identical_parents() {
        let mut rng = create_rng(42);
        let p = vec![4, 2, 0, 3, 1];
        for _ in 0..20 {
            assert_eq!(order_crossover(&p, &p, &mut rng), p);
        }
    }

    #[test]
    #[should_panic(expected = "parents must have equal length")]
    fn test_ox_length_mismatch_panics() {
        let mut rng = create_rng(42);
        order_crossover(&[0, 1], &[0], &mut rng);
    }

    #[test]
    #[should_panic(expected = "parent2 must be a permutation")]
    fn test_ox_non_permutation_parent_panics() {
        order_crossover_with_segment(&[0, 1, 2], &[0, 0, 0], 0, 0);
    }

    // ---- Swap ----

    #[test]
    fn test_swap_does_not_touch_input() {
        let mut rng = create_rng(42);
        let perm: Vec<usize> = (0..10).collect();
        for _ in 0..100 {
            let child = swap_mutation(&perm, &mut rng);
            assert!(is_valid_permutation(&child, 10));
            let moved = child.iter().zip(&perm).filter(|(a, b)| a != b).count();
            assert!(moved == 0 || moved == 2);
        }
        assert_eq!(perm, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_swap_tiny_inputs() {
        let mut rng = create_rng(42);
        assert_eq!(swap_mutation(&[0], &mut rng), vec![0]);
        assert!(swap_mutation(&[], &mut rng).is_empty());
    }

    // ---- Tournament ----

    #[test]
    fn test_tournament_favors_best() {
        let fitness = [10.0, 5.0, 1.0, 8.0];
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        let n = 10000;
        for _ in 0..n {
            counts[tournament_select(&fitness, 4, &mut rng)] += 1;
        }
        // P(best in 4 draws) = 1 - (3/4)^4 ~ 0.68
        assert!(
            counts[2] > 6000,
            "expected best to be selected >60% of the time, got {}/{n}",
            counts[2]
        );
    }

    #[test]
    fn test_tournament_size_1_is_uniform() {
        let fitness = [10.0, 5.0, 1.0, 8.0];
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        for _ in 0..10000 {
            counts[tournament_select(&fitness, 1, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 1500, "expected uniform, got counts: {counts:?}");
        }
    }

    #[test]
    fn test_tournament_larger_than_population() {
        let fitness = [3.0, 2.0];
        let mut rng = create_rng(42);
        for _ in 0..100 {
            assert!(tournament_select(&fitness, 10, &mut rng) < 2);
        }
        assert_eq!(tournament_select(&[7.0], 5, &mut rng), 0);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_tournament_empty_panics() {
        let mut rng = create_rng(42);
        tournament_select(&[], 3, &mut rng);
    }

    #[test]
    fn test_random_segment_bounds() {
        let mut rng = create_rng(42);
        for _ in 0..1000 {
            let (start, end) = random_segment(10, &mut rng);
            assert!(start <= end);
            assert!(end < 10);
        }
    }

    proptest! {
        #[test]
        fn prop_ox_yields_permutation(n in 1usize..30, seed in any::<u64>(), a in any::<usize>(), b in any::<usize>()) {
            let mut rng = create_rng(seed);
            let p1 = random_permutation(n, &mut rng);
            let p2 = random_permutation(n, &mut rng);
            let (start, end) = if a % n <= b % n { (a % n, b % n) } else { (b % n, a % n) };

            let child = order_crossover_with_segment(&p1, &p2, start, end);
            prop_assert!(is_valid_permutation(&child, n), "child {:?}", child);
            prop_assert_eq!(&child[start..=end], &p1[start..=end]);

            let random_child = order_crossover(&p1, &p2, &mut rng);
            prop_assert!(is_valid_permutation(&random_child, n));
        }
    }
}

//! Structural sequence operations: deduplication, flattening, shuffling.
//!
//! # Reproducibility
//!
//! [`shuffle`] builds a fresh generator for every call. With a seed the
//! permutation is a deterministic function of the input length and the seed;
//! without one it draws from the thread-local generator, which is safe to
//! use from concurrent callers. No global random state is touched either
//! way.

use std::collections::HashSet;
use std::hash::Hash;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Returns the elements in order of first occurrence, each exactly once.
///
/// Membership uses the element type's own equality and hashing.
///
/// # Example
/// ```rust
/// use prepkit::unique_preserve_order;
///
/// assert_eq!(unique_preserve_order(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
/// ```
pub fn unique_preserve_order<T: Clone + Eq + Hash>(values: &[T]) -> Vec<T> {
    let mut seen = HashSet::with_capacity(values.len());
    values
        .iter()
        .filter(|v| seen.insert((*v).clone()))
        .cloned()
        .collect()
}

/// Concatenates the inner sequences into one, outer order first.
///
/// Flattens exactly one level; elements of the inner sequences pass through
/// untouched.
pub fn flatten_one_level<T: Clone>(nested: &[Vec<T>]) -> Vec<T> {
    nested.iter().flatten().cloned().collect()
}

/// Returns a uniformly random permutation of `values`.
///
/// With `Some(seed)` the permutation is reproducible: a `SmallRng` seeded
/// via `seed_from_u64` drives the shuffle, so repeated calls with the same
/// input length and seed return the same order. With `None` the thread-local
/// generator is used and the order is unpredictable. The input is never
/// mutated.
///
/// # Example
/// ```rust
/// use prepkit::shuffle;
///
/// let first = shuffle(&[1, 2, 3, 4, 5], Some(42));
/// let second = shuffle(&[1, 2, 3, 4, 5], Some(42));
/// assert_eq!(first, second);
/// ```
pub fn shuffle<T: Clone>(values: &[T], seed: Option<u64>) -> Vec<T> {
    let mut shuffled = values.to_vec();
    match seed {
        Some(seed) => fisher_yates(&mut shuffled, &mut SmallRng::seed_from_u64(seed)),
        None => fisher_yates(&mut shuffled, &mut rand::rng()),
    }
    shuffled
}

/// Fisher-Yates shuffle, Durstenfeld variant: walk backwards and swap each
/// position with a uniformly chosen position at or before it. Every
/// permutation of the slice is equally likely.
fn fisher_yates<T, R: Rng>(slice: &mut [T], rng: &mut R) {
    let n = slice.len();
    if n <= 1 {
        return;
    }
    for i in (1..n).rev() {
        let j = rng.random_range(0..=i);
        slice.swap(i, j);
    }
}

//! Fisher-Yates shuffle and random array generation.
//!
//! ## Purpose
//!
//! This module provides the two randomized helpers of the laboratory: a
//! uniform Fisher-Yates shuffle over a fresh clone, and bounded random
//! array generation for filling the current array.
//!
//! ## Design notes
//!
//! * **Not narrated**: shuffling is not a process worth stepping through,
//!   so it returns the permuted clone directly instead of a step
//!   sequence.
//! * **Caller-supplied RNG**: both functions take `&mut impl Rng`, so
//!   callers choose between an OS-seeded generator and a fixed seed for
//!   reproducible sessions and tests.
//!
//! ## Invariants
//!
//! * The shuffle preserves the multiset of values.
//! * Each of the n! permutations is equally likely under a uniform RNG.
//!
//! ## Non-goals
//!
//! * This module does not seed or own any generator state.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::PrimInt;
use rand::Rng;

/// Uniform Fisher-Yates shuffle of a fresh clone of `array`.
pub fn shuffle_array<T: PrimInt, R: Rng>(array: &[T], rng: &mut R) -> Vec<T> {
    let mut work = array.to_vec();
    let n = work.len();

    // Walk backwards, swapping each slot with a uniformly chosen earlier
    // one (inclusive of itself).
    for i in (1..n).rev() {
        let j = rng.gen_range(0..=i);
        work.swap(i, j);
    }

    work
}

/// Generate `length` random values uniformly drawn from `[minimum, maximum]`.
pub fn generate_array<R: Rng>(length: usize, minimum: i64, maximum: i64, rng: &mut R) -> Vec<i64> {
    let mut array = Vec::with_capacity(length);
    for _ in 0..length {
        array.push(rng.gen_range(minimum..=maximum));
    }
    array
}

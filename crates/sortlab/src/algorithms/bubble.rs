//! Bubble sort, narrated.
//!
//! ## Purpose
//!
//! This module implements the classic O(n^2) bubble sort as a step
//! producer: a leading snapshot, one snapshot per swap, and a trailing
//! snapshot that is always emitted even when it duplicates the previous
//! one.
//!
//! ## Design notes
//!
//! * **No early exit**: the full double loop runs even when a pass makes
//!   no swaps, so the comparison schedule (and therefore the step count)
//!   is a pure function of the array length.
//! * **Duplicate trailing snapshot**: consumers rely on "last snapshot =
//!   result" existing, not on snapshot uniqueness.
//!
//! ## Invariants
//!
//! * The multiset of values is identical across every snapshot.
//! * A sorted input of length n yields exactly two snapshots.
//!
//! ## Non-goals
//!
//! * This module does not print or otherwise consume steps.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::primitives::direction::Direction;
use crate::primitives::step::{Step, StepSequence};

/// Bubble sort over a private clone of `array`.
///
/// Emits a leading snapshot, a snapshot after every swap, and a trailing
/// snapshot of the final state.
pub fn bubble_sort<T: PrimInt>(array: &[T], direction: Direction) -> StepSequence<T> {
    let mut work = array.to_vec();
    let n = work.len();
    let mut steps: Vec<Step<T>> = Vec::new();

    steps.push(Step::Snapshot(work.clone()));

    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            if direction.out_of_order(&work[j], &work[j + 1]) {
                work.swap(j, j + 1);
                steps.push(Step::Snapshot(work.clone()));
            }
        }
    }

    // Always emitted, even when it duplicates the previous snapshot.
    steps.push(Step::Snapshot(work));

    StepSequence::new(steps)
}

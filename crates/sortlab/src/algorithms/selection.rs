//! Selection sort, narrated.
//!
//! ## Purpose
//!
//! This module implements selection sort as a step producer: each pass
//! scans the unsorted suffix for the direction-extreme element, swaps it
//! into place, and emits one snapshot — n-1 snapshots for n >= 2.
//!
//! ## Design notes
//!
//! * **Unconditional swap**: the pass swaps even when the extreme is
//!   already in place (a self-swap), matching the textbook pass structure
//!   and keeping the snapshot count at exactly n-1.
//! * **Degenerate inputs**: arrays of length <= 1 emit a single terminal
//!   snapshot so the sequence still satisfies the step protocol.
//!
//! ## Invariants
//!
//! * After pass i, positions `0..=i` hold their final values.
//! * The multiset of values is identical across every snapshot.
//!
//! ## Non-goals
//!
//! * This module does not implement stability; selection sort is not
//!   stable and no attempt is made to change that.

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

/// Selection sort over a private clone of `array`.
///
/// Emits one snapshot per pass, after that pass's single swap.
pub fn selection_sort<T: PrimInt>(array: &[T], direction: Direction) -> StepSequence<T> {
    let mut work = array.to_vec();
    let n = work.len();
    let mut steps: Vec<Step<T>> = Vec::new();

    for i in 0..n.saturating_sub(1) {
        let mut extreme = i;
        for j in i + 1..n {
            if direction.out_of_order(&work[extreme], &work[j]) {
                extreme = j;
            }
        }
        work.swap(i, extreme);
        steps.push(Step::Snapshot(work.clone()));
    }

    if steps.is_empty() {
        // Length <= 1: already sorted, but the protocol still requires a
        // terminal snapshot.
        steps.push(Step::Snapshot(work));
    }

    StepSequence::new(steps)
}

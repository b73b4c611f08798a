//! Insertion sort, narrated.
//!
//! ## Purpose
//!
//! This module implements insertion sort as a step producer: each key is
//! lifted out, larger (or smaller, for descending) elements are shifted
//! right one at a time with a snapshot per shift, and a snapshot is
//! emitted after the key's final placement.
//!
//! ## Design notes
//!
//! * **Shift snapshots show the hole**: while shifting, the key's old
//!   slot holds a duplicated neighbor value; the snapshot after placement
//!   restores the multiset view. This mid-shift duplication is the
//!   textbook intermediate state and is narrated deliberately.
//! * **Degenerate inputs**: arrays of length <= 1 emit a single terminal
//!   snapshot so the sequence still satisfies the step protocol.
//!
//! ## Invariants
//!
//! * After processing key i, positions `0..=i` are sorted relative to the
//!   direction.
//! * The final snapshot's multiset equals the input's.
//!
//! ## Non-goals
//!
//! * This module does not use binary insertion; shifts are narrated one
//!   position at a time.

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

/// Insertion sort over a private clone of `array`.
///
/// Emits a snapshot after every shift and after each key placement.
pub fn insertion_sort<T: PrimInt>(array: &[T], direction: Direction) -> StepSequence<T> {
    let mut work = array.to_vec();
    let n = work.len();
    let mut steps: Vec<Step<T>> = Vec::new();

    for i in 1..n {
        let key = work[i];
        let mut j = i;
        while j > 0 && direction.out_of_order(&work[j - 1], &key) {
            work[j] = work[j - 1];
            j -= 1;
            steps.push(Step::Snapshot(work.clone()));
        }
        work[j] = key;
        steps.push(Step::Snapshot(work.clone()));
    }

    if steps.is_empty() {
        // Length <= 1: already sorted, but the protocol still requires a
        // terminal snapshot.
        steps.push(Step::Snapshot(work));
    }

    StepSequence::new(steps)
}

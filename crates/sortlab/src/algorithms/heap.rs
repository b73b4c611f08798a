//! Heap sort, narrated.
//!
//! ## Purpose
//!
//! This module implements narrated heap sort: an initial snapshot, info
//! markers around the heap-construction phase, one snapshot per
//! heapify-swap and per root-extraction swap, and a final snapshot.
//!
//! ## Design notes
//!
//! * **Heap polarity follows direction**: ascending builds a max-heap so
//!   repeated root extraction fills the suffix with maxima; descending
//!   builds a min-heap.
//! * **Phase markers**: the construction phase is bracketed by two info
//!   steps so a consumer can tell build swaps from extraction swaps.
//!
//! ## Invariants
//!
//! * During extraction, `work[len..]` always holds final values.
//! * Sift-down recursion depth is bounded by the heap height.
//!
//! ## Non-goals
//!
//! * This module does not provide a reusable heap type; the array is the
//!   heap, as in the textbook presentation.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::String;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::primitives::direction::Direction;
use crate::primitives::step::{Step, StepSequence};

/// Name of the heap polarity built for a direction.
fn heap_kind(direction: Direction) -> &'static str {
    match direction {
        Direction::Ascending => "max-heap",
        Direction::Descending => "min-heap",
    }
}

/// Heap sort over a private clone of `array`.
///
/// Emits an initial snapshot, info markers around heap construction, a
/// snapshot per swap in both phases, and a final snapshot.
pub fn heap_sort<T: PrimInt>(array: &[T], direction: Direction) -> StepSequence<T> {
    let mut work = array.to_vec();
    let n = work.len();
    let mut steps: Vec<Step<T>> = Vec::new();

    steps.push(Step::Snapshot(work.clone()));

    if n > 1 {
        let kind = heap_kind(direction);
        steps.push(Step::Info(String::from("building ") + kind));
        for i in (0..n / 2).rev() {
            sift_down(&mut work, n, i, direction, &mut steps);
        }
        steps.push(Step::Info(String::from(kind) + " built"));

        for end in (1..n).rev() {
            work.swap(0, end);
            steps.push(Step::Snapshot(work.clone()));
            sift_down(&mut work, end, 0, direction, &mut steps);
        }
    }

    steps.push(Step::Snapshot(work));

    StepSequence::new(steps)
}

/// Restore the heap property below index `i` in the heap `work[..len]`.
///
/// One snapshot per swap.
fn sift_down<T: PrimInt>(
    work: &mut [T],
    len: usize,
    i: usize,
    direction: Direction,
    steps: &mut Vec<Step<T>>,
) {
    let mut extreme = i;
    let left = 2 * i + 1;
    let right = 2 * i + 2;

    if left < len && direction.out_of_order(&work[left], &work[extreme]) {
        extreme = left;
    }
    if right < len && direction.out_of_order(&work[right], &work[extreme]) {
        extreme = right;
    }

    if extreme != i {
        work.swap(i, extreme);
        steps.push(Step::Snapshot(work.to_vec()));
        sift_down(work, len, extreme, direction, steps);
    }
}

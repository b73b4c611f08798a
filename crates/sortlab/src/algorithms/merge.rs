//! Merge sort, narrated.
//!
//! ## Purpose
//!
//! This module implements narrated merge sort: an initial snapshot, a
//! recursive floor-mid split that builds the range tree, one snapshot per
//! merge placement, the folded tree as one info step, and a final
//! snapshot.
//!
//! ## Design notes
//!
//! * **Floor split**: `mid = first + (last - first) / 2`; children are
//!   `[first, mid]` and `[mid + 1, last]`.
//! * **Stability**: on ties the left half wins (`precedes` allows
//!   equality), so equal elements keep their relative order in both
//!   directions.
//! * **Merge snapshots**: one owned snapshot per element placement, so a
//!   consumer watches the merged prefix grow.
//!
//! ## Invariants
//!
//! * Each split node's children exactly cover its interval.
//! * The fold of `[4,3,2,1]` over `0-3` is
//!   `"[0-3 [0-1 0-0 1-1] [2-3 2-2 3-3]]"`.
//!
//! ## Non-goals
//!
//! * This module does not merge in place; the textbook auxiliary halves
//!   are part of the narration contract.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::primitives::direction::Direction;
use crate::primitives::range_tree::RangeNode;
use crate::primitives::step::{Step, StepSequence};

/// Merge sort over a private clone of `array`.
///
/// Emits an initial snapshot, a snapshot after each merge placement, the
/// folded recursion tree as one info step, and a final snapshot.
pub fn merge_sort<T: PrimInt>(array: &[T], direction: Direction) -> StepSequence<T> {
    let mut work = array.to_vec();
    let n = work.len();
    let mut steps: Vec<Step<T>> = Vec::new();

    steps.push(Step::Snapshot(work.clone()));

    if n > 0 {
        let mut root = RangeNode::new(0, n - 1);
        if n > 1 {
            split(&mut work, 0, n - 1, direction, &mut root, &mut steps);
        }
        steps.push(Step::Info(root.fold()));
    }

    steps.push(Step::Snapshot(work));

    StepSequence::new(steps)
}

/// Split `[first, last]`, recurse into both halves, then merge them.
///
/// Precondition: `first < last`.
fn split<T: PrimInt>(
    work: &mut [T],
    first: usize,
    last: usize,
    direction: Direction,
    node: &mut RangeNode,
    steps: &mut Vec<Step<T>>,
) {
    let mid = first + (last - first) / 2;

    let left = node.child(first, mid);
    if first < mid {
        split(work, first, mid, direction, left, steps);
    }
    let right = node.child(mid + 1, last);
    if mid + 1 < last {
        split(work, mid + 1, last, direction, right, steps);
    }

    merge(work, first, mid, last, direction, steps);
}

/// Merge the sorted halves `[first, mid]` and `[mid + 1, last]`.
///
/// Left half wins ties. One snapshot per element placement.
fn merge<T: PrimInt>(
    work: &mut [T],
    first: usize,
    mid: usize,
    last: usize,
    direction: Direction,
    steps: &mut Vec<Step<T>>,
) {
    let left: Vec<T> = work[first..=mid].to_vec();
    let right: Vec<T> = work[mid + 1..=last].to_vec();

    let mut i = 0usize;
    let mut j = 0usize;
    let mut k = first;

    while i < left.len() && j < right.len() {
        if direction.precedes(&left[i], &right[j]) {
            work[k] = left[i];
            i += 1;
        } else {
            work[k] = right[j];
            j += 1;
        }
        k += 1;
        steps.push(Step::Snapshot(work.to_vec()));
    }

    while i < left.len() {
        work[k] = left[i];
        i += 1;
        k += 1;
        steps.push(Step::Snapshot(work.to_vec()));
    }

    while j < right.len() {
        work[k] = right[j];
        j += 1;
        k += 1;
        steps.push(Step::Snapshot(work.to_vec()));
    }
}

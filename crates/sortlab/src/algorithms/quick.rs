//! Quicksort and quickselect with a shared Lomuto partition.
//!
//! ## Purpose
//!
//! This module implements narrated quicksort — initial snapshot, one
//! snapshot per partition, a folded range tree as one info step, final
//! snapshot — and the non-narrated quickselect that reuses the same
//! partition to find the k-th order statistic.
//!
//! ## Design notes
//!
//! * **Lomuto partition**: pivot is the last element of the sub-range;
//!   the direction flips the `<=`/`>=` comparison. Elements equal to the
//!   pivot move to the pivot side, so the partition is stable only
//!   incidentally, never guaranteed.
//! * **Range tree**: every partition attaches a child node per non-empty
//!   sub-interval (inclusive `[start, end]` cannot encode an empty
//!   range); intervals of length <= 1 stay leaves because the recursion
//!   does not subdivide them.
//! * **Quickselect direction**: order statistics are defined on the
//!   ascending order, so quickselect always partitions ascending.
//!
//! ## Invariants
//!
//! * After `partition` returns p, the pivot at p is in its final sorted
//!   position for the given direction.
//! * Quickselect's rank `k` is 1-indexed at the boundary and converted to
//!   0-indexed internally.
//!
//! ## Non-goals
//!
//! * This module does not guarantee O(n log n): pivot choice is the
//!   textbook last element, with the textbook skewed-input behavior.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::direction::Direction;
use crate::primitives::errors::SortLabError;
use crate::primitives::range_tree::RangeNode;
use crate::primitives::step::{Step, StepSequence};

// ============================================================================
// Quicksort
// ============================================================================

/// Quicksort over a private clone of `array`.
///
/// Emits an initial snapshot, a snapshot after every partition, the folded
/// recursion tree as one info step, and a final snapshot.
pub fn quick_sort<T: PrimInt>(array: &[T], direction: Direction) -> StepSequence<T> {
    let mut work = array.to_vec();
    let n = work.len();
    let mut steps: Vec<Step<T>> = Vec::new();

    steps.push(Step::Snapshot(work.clone()));

    if n > 0 {
        let mut root = RangeNode::new(0, n - 1);
        if n > 1 {
            sort_range(&mut work, 0, n - 1, direction, &mut root, &mut steps);
        }
        steps.push(Step::Info(root.fold()));
    }

    steps.push(Step::Snapshot(work));

    StepSequence::new(steps)
}

/// Partition `[first, last]` and recurse into both sides.
///
/// Precondition: `first < last`.
fn sort_range<T: PrimInt>(
    work: &mut [T],
    first: usize,
    last: usize,
    direction: Direction,
    node: &mut RangeNode,
    steps: &mut Vec<Step<T>>,
) {
    let p = partition(work, first, last, direction);
    steps.push(Step::Snapshot(work.to_vec()));

    if p > first {
        let left = node.child(first, p - 1);
        if p - 1 > first {
            sort_range(work, first, p - 1, direction, left, steps);
        }
    }
    if p < last {
        let right = node.child(p + 1, last);
        if last > p + 1 {
            sort_range(work, p + 1, last, direction, right, steps);
        }
    }
}

/// Lomuto partition of `[first, last]` with the last element as pivot.
///
/// Returns the pivot's final index. Equal-to-pivot elements move to the
/// pivot side.
fn partition<T: PrimInt>(work: &mut [T], first: usize, last: usize, direction: Direction) -> usize {
    let pivot = work[last];
    let mut boundary = first;

    for j in first..last {
        if direction.precedes(&work[j], &pivot) {
            work.swap(boundary, j);
            boundary += 1;
        }
    }
    work.swap(boundary, last);
    boundary
}

// ============================================================================
// Quickselect
// ============================================================================

/// Find the k-th order statistic (1-indexed, k-th smallest).
///
/// Returns the selected value together with the array as partially
/// rearranged by the search. Fails if the array is empty or `k` lies
/// outside `[1, len]`.
pub fn quick_select<T: PrimInt>(array: &[T], k: usize) -> Result<(T, Vec<T>), SortLabError> {
    Validator::validate_input(array)?;
    Validator::validate_rank(k, array.len())?;

    let mut work = array.to_vec();
    let target = k - 1;
    let mut first = 0usize;
    let mut last = work.len() - 1;

    // Iterative descent into the side containing the target rank.
    loop {
        if first == last {
            return Ok((work[first], work));
        }
        let p = partition(&mut work, first, last, Direction::Ascending);
        if p == target {
            return Ok((work[p], work));
        }
        if target < p {
            last = p - 1;
        } else {
            first = p + 1;
        }
    }
}

//! Binary search and sortedness checking.
//!
//! ## Purpose
//!
//! This module provides midpoint binary search over an ascending-sorted
//! array and the dual-flag sortedness check used to guard it.
//!
//! ## Design notes
//!
//! * **Precondition-checked**: the search fails up front on empty or
//!   non-ascending input instead of returning a garbage index.
//! * **Duplicates**: on success the returned index is whichever matching
//!   element the midpoint lands on first — not guaranteed leftmost or
//!   rightmost.
//! * **Dual flags**: `sorted_check` reports ascending and descending
//!   sortedness in one pass with an early break once both are ruled out;
//!   both flags are true for length <= 1 or constant arrays.
//!
//! ## Invariants
//!
//! * A successful search index always holds the target value.
//! * `sorted_check` never allocates.
//!
//! ## Non-goals
//!
//! * This module does not sort; searching an unsorted array is an error,
//!   not a trigger for sorting.

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::SortLabError;

/// Report whether `array` is sorted ascending and/or descending.
///
/// Both flags are true for arrays of length <= 1 and constant arrays.
pub fn sorted_check<T: PrimInt>(array: &[T]) -> (bool, bool) {
    let mut ascending = true;
    let mut descending = true;

    for pair in array.windows(2) {
        if pair[1] < pair[0] {
            ascending = false;
        }
        if pair[1] > pair[0] {
            descending = false;
        }
        if !ascending && !descending {
            break;
        }
    }

    (ascending, descending)
}

/// Midpoint binary search for `target` in ascending-sorted `array`.
///
/// Returns the zero-based index of a matching element. Fails on empty
/// input, on input that is not ascending-sorted, and on an absent target.
pub fn binary_search<T: PrimInt>(array: &[T], target: T) -> Result<usize, SortLabError> {
    Validator::validate_input(array)?;
    Validator::validate_ascending(array)?;

    let mut left = 0usize;
    let mut right = array.len() - 1;

    while left <= right {
        let mid = left + (right - left) / 2;

        if array[mid] == target {
            return Ok(mid);
        }
        if array[mid] < target {
            left = mid + 1;
        } else {
            if mid == 0 {
                break;
            }
            right = mid - 1;
        }
    }

    Err(SortLabError::TargetNotFound)
}

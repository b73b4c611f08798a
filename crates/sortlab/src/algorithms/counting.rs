//! Counting sort, narrated.
//!
//! ## Purpose
//!
//! This module implements counting sort as a step producer: compute the
//! value range, tally occurrences into a buffer of width `max - min + 1`,
//! then rewrite the array from the tallies with one snapshot per restored
//! element, traversing the tally buffer forward or backward per direction.
//!
//! ## Design notes
//!
//! * **Non-empty input required**: there is no value range to size the
//!   buffer from; empty input is a precondition error, not an empty
//!   sequence.
//! * **Range width**: only correct for integer ranges of bounded width. A
//!   huge `max - min` is a resource-exhaustion risk inherent to the
//!   algorithm; the engine rejects widths that cannot even be addressed
//!   (`CountRangeTooWide`) and otherwise lets the allocation stand.
//! * **Tally arithmetic in i128**: the value-to-bucket mapping is computed
//!   in `i128` so that narrow types (e.g. `i8` spanning its full range)
//!   never overflow during `max - min`.
//!
//! ## Invariants
//!
//! * Exactly n snapshots are emitted for an array of length n.
//! * Each snapshot i has its first i+1 positions in final order.
//!
//! ## Non-goals
//!
//! * This module does not cap the buffer allocation below the addressable
//!   limit; bounded-range inputs are the caller's responsibility.

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
use crate::primitives::step::{Step, StepSequence};

/// Counting sort over a private clone of `array`.
///
/// Emits one snapshot per restored element. Fails on empty input and on
/// value ranges too wide to address.
pub fn counting_sort<T: PrimInt>(
    array: &[T],
    direction: Direction,
) -> Result<StepSequence<T>, SortLabError> {
    Validator::validate_input(array)?;

    let mut work = array.to_vec();
    let n = work.len();

    // min()/max() cannot fail: the array is non-empty.
    let min = work.iter().copied().fold(work[0], T::min);
    let max = work.iter().copied().fold(work[0], T::max);

    // Values wider than i128 only exist for u128 beyond i128::MAX, where
    // the counting range is unaddressable anyway.
    let (Some(min_i), Some(max_i)) = (min.to_i128(), max.to_i128()) else {
        return Err(SortLabError::CountRangeTooWide { width: u128::MAX });
    };
    let width_minus_one = max_i.wrapping_sub(min_i) as u128;
    let width = width_minus_one
        .checked_add(1)
        .ok_or(SortLabError::CountRangeTooWide { width: u128::MAX })?;
    let range = Validator::validate_count_width(width)?;

    // Tally occurrences of each value.
    let mut counts = vec![0usize; range];
    for &v in &work {
        // Bounded by min/max, so the conversion cannot fail.
        let v_i = v.to_i128().unwrap_or(min_i);
        counts[(v_i - min_i) as usize] += 1;
    }

    let mut steps: Vec<Step<T>> = Vec::with_capacity(n);
    let mut index = 0usize;

    match direction {
        Direction::Ascending => {
            for bucket in 0..range {
                restore_bucket(bucket, min, min_i, &mut counts, &mut work, &mut index, &mut steps);
            }
        }
        Direction::Descending => {
            for bucket in (0..range).rev() {
                restore_bucket(bucket, min, min_i, &mut counts, &mut work, &mut index, &mut steps);
            }
        }
    }

    Ok(StepSequence::new(steps))
}

/// Drain one tally bucket back into the array, one snapshot per element.
fn restore_bucket<T: PrimInt>(
    bucket: usize,
    min: T,
    min_i: i128,
    counts: &mut [usize],
    work: &mut [T],
    index: &mut usize,
    steps: &mut Vec<Step<T>>,
) {
    while counts[bucket] > 0 {
        // bucket + min lies in [min, max], so the conversion cannot fail.
        let value = T::from(min_i + bucket as i128).unwrap_or(min);
        work[*index] = value;
        *index += 1;
        counts[bucket] -= 1;
        steps.push(Step::Snapshot(work.to_vec()));
    }
}

//! Step sequence consumption.
//!
//! ## Purpose
//!
//! This module provides the generic replay routine: drain a step sequence
//! once, hand every step to an observer in arrival order, and return the
//! array held by the last snapshot as the authoritative result.
//!
//! ## Design notes
//!
//! * **Single pass**: the sequence is consumed by value; there is no way
//!   to rewind or replay it.
//! * **Exhaustive kinds**: the match over [`Step`] has no default branch,
//!   so an unrecognized step kind is a compile error rather than a silent
//!   skip.
//! * **Protocol enforcement**: an empty sequence, or one whose last
//!   element is not a snapshot, is an internal-invariant violation — the
//!   returned error is classified fatal and must not be
//!   caught-and-continued.
//!
//! ## Invariants
//!
//! * The observer sees every step exactly once, in emission order.
//! * On success the returned array is exactly the last snapshot.
//!
//! ## Non-goals
//!
//! * This module does not render steps; the observer decides what a step
//!   looks like on screen.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::errors::SortLabError;
use crate::primitives::step::{Step, StepSequence};

/// Drain a step sequence, observing each step, and return the final array.
///
/// Fails with a fatal protocol error if the sequence is empty or does not
/// end with a snapshot.
pub fn drain_steps<T, F>(sequence: StepSequence<T>, mut observer: F) -> Result<Vec<T>, SortLabError>
where
    F: FnMut(&Step<T>),
{
    if sequence.is_empty() {
        return Err(SortLabError::EmptySequence);
    }

    let mut result: Option<Vec<T>> = None;
    let mut ended_on_snapshot = false;

    for step in sequence {
        observer(&step);
        match step {
            Step::Snapshot(state) => {
                result = Some(state);
                ended_on_snapshot = true;
            }
            Step::Info(_) => ended_on_snapshot = false,
            Step::Range { .. } => ended_on_snapshot = false,
        }
    }

    match result {
        Some(array) if ended_on_snapshot => Ok(array),
        _ => Err(SortLabError::MissingFinalSnapshot),
    }
}

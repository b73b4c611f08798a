//! Algorithm selection and dispatch.
//!
//! ## Purpose
//!
//! This module defines the closed [`Algorithm`] enumeration and the
//! single engine entry point that dispatches a choice to its layer-2
//! implementation.
//!
//! ## Design notes
//!
//! * **Exhaustive dispatch**: the match over `Algorithm` has no default
//!   branch; adding an algorithm is a compile-time-checked change
//!   everywhere it is handled.
//! * **Uniform signature**: every narrated algorithm runs as
//!   `(array, direction) -> step sequence`; only counting sort can fail,
//!   so the entry point returns `Result` for all of them.
//!
//! ## Invariants
//!
//! * Dispatch never mutates the caller's array; purity is delegated to
//!   the clone-on-entry contract of layer 2.
//!
//! ## Non-goals
//!
//! * This module does not consume step sequences (see `consumer`).

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::algorithms::bubble::bubble_sort;
use crate::algorithms::counting::counting_sort;
use crate::algorithms::heap::heap_sort;
use crate::algorithms::insertion::insertion_sort;
use crate::algorithms::merge::merge_sort;
use crate::algorithms::quick::quick_sort;
use crate::algorithms::selection::selection_sort;
use crate::primitives::direction::Direction;
use crate::primitives::errors::SortLabError;
use crate::primitives::step::StepSequence;

// ============================================================================
// Algorithm
// ============================================================================

/// The seven narrated sorting algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Bubble sort - O(n^2), full double loop, no early exit.
    #[default]
    Bubble,

    /// Selection sort - one swap and one snapshot per pass.
    Selection,

    /// Insertion sort - narrated shifts and placements.
    Insertion,

    /// Counting sort - bounded-range tally; rejects empty input.
    Counting,

    /// Quicksort - Lomuto partition, range-tree narration.
    Quick,

    /// Merge sort - floor split, stable merge, range-tree narration.
    Merge,

    /// Heap sort - direction-polarized heap with phase markers.
    Heap,
}

impl Algorithm {
    /// Every algorithm, in menu order.
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Counting,
        Algorithm::Quick,
        Algorithm::Merge,
        Algorithm::Heap,
    ];

    /// Human-readable algorithm name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bubble => "bubble sort",
            Self::Selection => "selection sort",
            Self::Insertion => "insertion sort",
            Self::Counting => "counting sort",
            Self::Quick => "quicksort",
            Self::Merge => "merge sort",
            Self::Heap => "heap sort",
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Engine entry point dispatching an algorithm choice to its implementation.
pub struct SortExecutor;

impl SortExecutor {
    /// Produce the step sequence narrating `algorithm` over `array`.
    ///
    /// The caller's array is cloned on entry and never mutated.
    pub fn run<T: PrimInt>(
        algorithm: Algorithm,
        array: &[T],
        direction: Direction,
    ) -> Result<StepSequence<T>, SortLabError> {
        match algorithm {
            Algorithm::Bubble => Ok(bubble_sort(array, direction)),
            Algorithm::Selection => Ok(selection_sort(array, direction)),
            Algorithm::Insertion => Ok(insertion_sort(array, direction)),
            Algorithm::Counting => counting_sort(array, direction),
            Algorithm::Quick => Ok(quick_sort(array, direction)),
            Algorithm::Merge => Ok(merge_sort(array, direction)),
            Algorithm::Heap => Ok(heap_sort(array, direction)),
        }
    }
}

//! High-level API for narrated sorting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point: a fluent
//! builder for choosing an algorithm and a direction, yielding a
//! configured [`NarratedSort`] whose `sort` call produces a step sequence.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults (bubble sort,
//!   ascending).
//! * **Validated**: configuring the same parameter twice is recorded and
//!   rejected when `build()` is called.
//! * **Thin**: the builder holds choices, not data; all work happens in
//!   the engine at `sort` time, generically over primitive integers.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SorterBuilder`] via `Sorter::new()`.
//! 2. Chain `.algorithm(..)` and `.direction(..)`.
//! 3. Call `.build()` to obtain a [`NarratedSort`], then `.sort(&array)`.

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::engine::executor::SortExecutor;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::quick::quick_select;
pub use crate::algorithms::search::{binary_search, sorted_check};
pub use crate::algorithms::shuffle::{generate_array, shuffle_array};
pub use crate::engine::consumer::drain_steps;
pub use crate::engine::executor::Algorithm;
pub use crate::primitives::direction::Direction;
pub use crate::primitives::errors::SortLabError;
pub use crate::primitives::range_tree::RangeNode;
pub use crate::primitives::step::{Step, StepSequence};

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for a configured [`NarratedSort`].
#[derive(Debug, Clone, Default)]
pub struct SorterBuilder {
    /// Chosen algorithm.
    pub algorithm: Option<Algorithm>,

    /// Chosen comparator direction.
    pub direction: Option<Direction>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl SorterBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            algorithm: None,
            direction: None,
            duplicate_param: None,
        }
    }

    /// Choose the sorting algorithm (default: bubble sort).
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        if self.algorithm.is_some() {
            self.duplicate_param = Some("algorithm");
        }
        self.algorithm = Some(algorithm);
        self
    }

    /// Choose the comparator direction (default: ascending).
    pub fn direction(mut self, direction: Direction) -> Self {
        if self.direction.is_some() {
            self.duplicate_param = Some("direction");
        }
        self.direction = Some(direction);
        self
    }

    /// Build the configured sorter.
    pub fn build(self) -> Result<NarratedSort, SortLabError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(NarratedSort {
            algorithm: self.algorithm.unwrap_or_default(),
            direction: self.direction.unwrap_or_default(),
        })
    }
}

// ============================================================================
// Narrated Sort
// ============================================================================

/// A configured narrated sort, ready to run over any integer array.
#[derive(Debug, Clone, Copy)]
pub struct NarratedSort {
    algorithm: Algorithm,
    direction: Direction,
}

impl NarratedSort {
    /// The configured algorithm.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// The configured direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Produce the step sequence narrating this sorter over `array`.
    ///
    /// The caller's array is cloned on entry and never mutated; the final
    /// snapshot of the returned sequence is the sorted result.
    pub fn sort<T: PrimInt>(&self, array: &[T]) -> Result<StepSequence<T>, SortLabError> {
        SortExecutor::run(self.algorithm, array, self.direction)
    }
}

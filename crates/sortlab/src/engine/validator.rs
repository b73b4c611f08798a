//! Precondition validation for sortlab operations.
//!
//! ## Purpose
//!
//! This module provides the fail-fast precondition checks shared by the
//! algorithms and the public API: input emptiness, selection rank bounds,
//! counting buffer width, search-order requirements, and builder
//! configuration hygiene.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **No mutation**: validation never touches the data it inspects, so a
//!   failed operation leaves the caller's state exactly as it was.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective preconditions.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not perform sorting, searching, or selection.
//! * This module does not provide automatic correction of invalid inputs.

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::primitives::errors::SortLabError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for sortlab preconditions.
///
/// Provides static methods returning `Result<(), SortLabError>` (or a
/// validated value) and failing fast on the first violation.
pub struct Validator;

impl Validator {
    /// Validate that the input array is non-empty.
    pub fn validate_input<T>(array: &[T]) -> Result<(), SortLabError> {
        if array.is_empty() {
            return Err(SortLabError::EmptyInput);
        }
        Ok(())
    }

    /// Validate a 1-indexed selection rank against the array length.
    pub fn validate_rank(k: usize, len: usize) -> Result<(), SortLabError> {
        if k < 1 || k > len {
            return Err(SortLabError::InvalidRank { got: k, len });
        }
        Ok(())
    }

    /// Validate that the array is sorted in ascending order.
    pub fn validate_ascending<T: PrimInt>(array: &[T]) -> Result<(), SortLabError> {
        if !array.windows(2).all(|pair| pair[0] <= pair[1]) {
            return Err(SortLabError::NotAscending);
        }
        Ok(())
    }

    /// Validate a counting-sort buffer width and narrow it to `usize`.
    pub fn validate_count_width(width: u128) -> Result<usize, SortLabError> {
        usize::try_from(width).map_err(|_| SortLabError::CountRangeTooWide { width })
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), SortLabError> {
        if let Some(parameter) = duplicate_param {
            return Err(SortLabError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}

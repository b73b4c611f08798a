//! Error types for sortlab operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while running or
//! replaying a narrated algorithm, including input preconditions, selection
//! rank bounds, and internal step-protocol violations.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., rank vs. length).
//! * **Severity split**: Precondition errors are user-recoverable; protocol
//!   violations indicate an engine bug and must not be caught-and-continued.
//! * **No-std**: Supports `no_std` environments (protocol errors carry no
//!   heap-allocated payloads).
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`
//!   (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Precondition errors**: Empty input, out-of-range rank, unsorted
//!    search array, absent target, oversized counting range.
//! 2. **Builder errors**: Parameters configured more than once.
//! 3. **Protocol violations**: An empty step sequence, or a sequence whose
//!    last element is not a snapshot.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not decide which errors are fatal; it only classifies.

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for sortlab operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortLabError {
    /// The operation requires a non-empty array.
    EmptyInput,

    /// Selection rank `k` must lie in `[1, len]` (1-indexed order statistic).
    InvalidRank {
        /// The rank requested by the caller.
        got: usize,
        /// Length of the array being selected from.
        len: usize,
    },

    /// Binary search requires an array sorted in ascending order.
    NotAscending,

    /// The search target does not occur in the array.
    TargetNotFound,

    /// Counting sort's buffer of width `max - min + 1` does not fit in memory.
    CountRangeTooWide {
        /// The required buffer width.
        width: u128,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// Protocol violation: a step sequence was empty.
    ///
    /// Fatal: indicates an engine bug, not a user error.
    EmptySequence,

    /// Protocol violation: a step sequence did not end with a snapshot.
    ///
    /// Fatal: indicates an engine bug, not a user error.
    MissingFinalSnapshot,
}

impl SortLabError {
    /// Whether this error is an internal protocol violation.
    ///
    /// Fatal errors must be propagated, never caught-and-continued: they mean
    /// the engine broke its own step-emission contract.
    pub fn is_protocol_violation(&self) -> bool {
        matches!(self, Self::EmptySequence | Self::MissingFinalSnapshot)
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SortLabError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input array is empty"),
            Self::InvalidRank { got, len } => {
                write!(f, "Invalid rank: {got} (must be between 1 and {len})")
            }
            Self::NotAscending => {
                write!(f, "Array is not sorted in ascending order")
            }
            Self::TargetNotFound => write!(f, "Target value not found in array"),
            Self::CountRangeTooWide { width } => {
                write!(f, "Counting range too wide: {width} buckets required")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::EmptySequence => {
                write!(f, "Protocol violation: step sequence is empty")
            }
            Self::MissingFinalSnapshot => {
                write!(
                    f,
                    "Protocol violation: step sequence did not end with a snapshot"
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl std::error::Error for SortLabError {}

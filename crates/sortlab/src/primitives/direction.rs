//! Comparator direction for narrated algorithms.
//!
//! ## Purpose
//!
//! This module defines [`Direction`], the ascending/descending comparator
//! mode threaded through every comparison and every pivot/heap-order
//! decision of every algorithm. It never changes mid-algorithm.
//!
//! ## Key concepts
//!
//! * [`Direction::out_of_order`]: "placing `a` immediately before `b`
//!   violates the direction" — the swap/shift predicate of the exchange
//!   sorts and the promotion predicate of heapify.
//! * [`Direction::precedes`]: "`a` may come before `b`" (ties allowed) —
//!   the tie-break predicate of partitioning and merging. Equal elements
//!   move to the pivot side in quicksort and the left half wins in merge
//!   sort, exactly because ties satisfy `precedes`.
//!
//! ## Invariants
//!
//! * `out_of_order(a, b) == !precedes(a, b)` for all `a`, `b`.
//! * Both predicates are total over `Ord` values.
//!
//! ## Non-goals
//!
//! * This module does not perform any sorting itself.

// ============================================================================
// Direction
// ============================================================================

/// Ascending or descending comparator mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Final snapshot is non-decreasing.
    #[default]
    Ascending,

    /// Final snapshot is non-increasing.
    Descending,
}

impl Direction {
    /// Human-readable direction name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }

    /// Whether placing `a` immediately before `b` violates the direction.
    #[inline]
    pub fn out_of_order<T: Ord>(&self, a: &T, b: &T) -> bool {
        match self {
            Self::Ascending => a > b,
            Self::Descending => a < b,
        }
    }

    /// Whether `a` may come before `b` (ties allowed).
    #[inline]
    pub fn precedes<T: Ord>(&self, a: &T, b: &T) -> bool {
        !self.out_of_order(a, b)
    }
}

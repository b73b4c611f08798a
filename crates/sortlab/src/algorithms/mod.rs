//! Layer 2: Algorithms
//!
//! # Purpose
//!
//! This layer implements the narrated sorting algorithms plus the
//! non-narrated helpers (shuffle, order-statistic selection, binary
//! search, sortedness check). Every narrated entry point follows the same
//! contract: clone on entry, mutate only the private clone, and yield
//! intermediate states as owned snapshots.
//!
//! # Architecture
//!
//! ```text
//! High-level API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Bubble sort.
pub mod bubble;

/// Counting sort.
pub mod counting;

/// Heap sort.
pub mod heap;

/// Insertion sort.
pub mod insertion;

/// Merge sort.
pub mod merge;

/// Quicksort and quickselect (shared Lomuto partition).
pub mod quick;

/// Binary search and sortedness checking.
pub mod search;

/// Selection sort.
pub mod selection;

/// Fisher-Yates shuffle and random array generation.
pub mod shuffle;

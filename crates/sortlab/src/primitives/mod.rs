//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the primitive abstractions shared by every algorithm:
//! the step protocol, the recursion range tree, the comparator direction,
//! and the error types. It has zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! High-level API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Comparator direction threaded through every algorithm.
pub mod direction;

/// Shared error types.
pub mod errors;

/// Recursion range tree for divide-and-conquer algorithms.
pub mod range_tree;

/// The step protocol: snapshots, markers, and sequences.
pub mod step;

//! # sortlab — step-narrated classic sorting algorithms
//!
//! An educational sorting engine: every algorithm (bubble, selection,
//! insertion, counting, quicksort, merge sort, heap sort) is implemented as
//! a producer of an ordered sequence of observable **steps** — full-array
//! snapshots, informational markers, and, for the divide-and-conquer
//! algorithms, a folded partition/merge range tree — rather than a function
//! that simply returns a sorted array.
//!
//! ## Guarantees
//!
//! * **Purity**: every entry point clones the caller's array; intermediate
//!   states are only visible through owned snapshots, never through aliases
//!   of the working buffer.
//! * **Determinism**: step ordering matches each algorithm's textbook
//!   behavior, with ascending/descending comparator inversion threaded
//!   through every comparison and pivot/heap decision.
//! * **Uniform protocol**: a consumer can replay any step sequence without
//!   knowing which algorithm produced it; the last snapshot is always the
//!   final result.
//!
//! ## Quick Start
//!
//! ```rust
//! use sortlab::prelude::*;
//!
//! let data = vec![5, -3, 5, 0];
//!
//! let sorter = Sorter::new()
//!     .algorithm(Counting)
//!     .direction(Ascending)
//!     .build()?;
//!
//! let steps = sorter.sort(&data)?;
//! let sorted = drain_steps(steps, |_step| {})?;
//!
//! assert_eq!(sorted, vec![-3, 0, 5, 5]);
//! assert_eq!(data, vec![5, -3, 5, 0]); // caller's array untouched
//! # Result::<(), SortLabError>::Ok(())
//! ```
//!
//! ## Order statistics and search
//!
//! ```rust
//! use sortlab::prelude::*;
//!
//! let (median, _rearranged) = quick_select(&[9, 1, 5, 3, 7], 3)?;
//! assert_eq!(median, 5);
//!
//! assert_eq!(binary_search(&[1, 3, 5, 7, 9], 5)?, 2);
//! # Result::<(), SortLabError>::Ok(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - the step protocol, range tree, and shared types.
mod primitives;

// Layer 2: Algorithms - the sorting, selection, and search algorithms.
mod algorithms;

// Layer 3: Engine - validation, dispatch, and step consumption.
mod engine;

// High-level fluent API for narrated sorting.
mod api;

// Standard sortlab prelude.
pub mod prelude {
    pub use crate::api::{
        Algorithm,
        Algorithm::{Bubble, Counting, Heap, Insertion, Merge, Quick, Selection},
        Direction,
        Direction::{Ascending, Descending},
        NarratedSort, RangeNode, SortLabError, SorterBuilder as Sorter, Step, StepSequence,
        binary_search, drain_steps, generate_array, quick_select, shuffle_array, sorted_check,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}

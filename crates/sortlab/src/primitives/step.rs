//! The step protocol: the closed set of observable algorithm states.
//!
//! ## Purpose
//!
//! This module defines [`Step`], the tagged union every narrated algorithm
//! emits, and [`StepSequence`], the finite, ordered, single-pass container
//! an algorithm invocation produces.
//!
//! ## Design notes
//!
//! * **Closed set**: `Step` has exactly three variants; consumers match
//!   exhaustively, so adding a kind is a compile-time-checked change rather
//!   than a silent default branch.
//! * **Ownership**: Snapshots are owned copies. Once a snapshot is yielded,
//!   no later mutation of the working buffer can alias it.
//! * **Eager realization**: sequences are materialized as an ordered list at
//!   production time; the single-pass, forward-only contract is enforced by
//!   exposing consumption only through `IntoIterator`.
//!
//! ## Invariants
//!
//! * A valid sequence for any array of length >= 1 contains at least one
//!   `Snapshot`, and its last element is a `Snapshot` holding the final
//!   result.
//! * Sequences are built fresh per call; nothing caches or replays a
//!   previous run (`StepSequence` is deliberately not `Clone`).
//!
//! ## Non-goals
//!
//! * This module does not produce steps (algorithms do) and does not
//!   consume them (the engine's consumer does).
//! * This module does not render steps for display.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::String;
#[cfg(feature = "std")]
use std::vec::Vec;

// ============================================================================
// Step Variants
// ============================================================================

/// One observable state emitted by a narrated algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<T> {
    /// An owned copy of the array's complete state at one instant.
    Snapshot(Vec<T>),

    /// A human-readable descriptive marker carrying no array data.
    Info(String),

    /// A lightweight inclusive index range, for consumers that want
    /// range-only progress without a full snapshot.
    Range {
        /// First index of the range (inclusive).
        start: usize,
        /// Last index of the range (inclusive).
        end: usize,
    },
}

impl<T> Step<T> {
    /// Human-readable kind name.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Snapshot(_) => "Snapshot",
            Self::Info(_) => "Info",
            Self::Range { .. } => "Range",
        }
    }

    /// Whether this step is a snapshot.
    pub fn is_snapshot(&self) -> bool {
        matches!(self, Self::Snapshot(_))
    }
}

// ============================================================================
// Step Sequence
// ============================================================================

/// The finite, ordered narration of one algorithm invocation.
///
/// Forward-only and not restartable: consumption goes through
/// [`IntoIterator`], which takes the sequence by value.
#[derive(Debug, PartialEq, Eq)]
pub struct StepSequence<T> {
    steps: Vec<Step<T>>,
}

impl<T> StepSequence<T> {
    /// Wrap an ordered list of steps produced by one invocation.
    pub fn new(steps: Vec<Step<T>>) -> Self {
        Self { steps }
    }

    /// Number of steps in the sequence.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the sequence contains no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Read-only view of the steps, in emission order.
    ///
    /// Inspection does not consume the sequence; replay still requires
    /// `into_iter`, which does.
    pub fn steps(&self) -> &[Step<T>] {
        &self.steps
    }

    /// The last snapshot in the sequence, if any.
    pub fn last_snapshot(&self) -> Option<&[T]> {
        self.steps.iter().rev().find_map(|step| match step {
            Step::Snapshot(state) => Some(state.as_slice()),
            _ => None,
        })
    }
}

impl<T> IntoIterator for StepSequence<T> {
    type Item = Step<T>;
    type IntoIter = <Vec<Step<T>> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

//! Recursion range tree for divide-and-conquer algorithms.
//!
//! ## Purpose
//!
//! This module provides [`RangeNode`], one node of the tree describing how
//! quicksort partitions or merge sort splits an inclusive index interval.
//! The tree is built bottom-up during recursion and folded top-down into a
//! single textual trace once the sort completes.
//!
//! ## Design notes
//!
//! * **Strict ownership**: each node exclusively owns its children; no
//!   back-references are needed since folding is a single top-down
//!   traversal after recursion completes.
//! * **Append order**: children are kept in the order they were appended
//!   (left recursion before right recursion), so the fold is a stable
//!   left-to-right, depth-first trace.
//!
//! ## Invariants
//!
//! * `start <= end` for every node (inclusive interval).
//! * Children cover disjoint sub-intervals of their parent.
//! * A leaf is an interval the algorithm did not subdivide further.
//!
//! ## Non-goals
//!
//! * This module does not decide where to split (algorithms do).
//! * This module does not emit steps; callers fold the finished tree into
//!   one `Info` step.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::string::String;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::Write;

// ============================================================================
// Range Node
// ============================================================================

/// One node of the recursion-partition tree, covering an inclusive interval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeNode {
    /// First index of the interval (inclusive).
    pub start: usize,

    /// Last index of the interval (inclusive).
    pub end: usize,

    /// Sub-intervals produced by subdividing this interval, in append order.
    children: Vec<RangeNode>,
}

impl RangeNode {
    /// Create a node spanning `[start, end]` with no children.
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "RangeNode: start must not exceed end");
        Self {
            start,
            end,
            children: Vec::new(),
        }
    }

    /// Append a child covering `[start, end]` and return it for recursion.
    pub fn child(&mut self, start: usize, end: usize) -> &mut RangeNode {
        let idx = self.children.len();
        self.children.push(RangeNode::new(start, end));
        &mut self.children[idx]
    }

    /// Read-only view of the children, in append order.
    pub fn children(&self) -> &[RangeNode] {
        &self.children
    }

    /// Whether this interval was never subdivided.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Fold the tree into its textual trace.
    ///
    /// A leaf renders as `"start-end"`; an internal node renders as
    /// `"[start-end child child ...]"` with children left to right.
    pub fn fold(&self) -> String {
        let mut out = String::new();
        self.fold_into(&mut out);
        out
    }

    fn fold_into(&self, out: &mut String) {
        if self.is_leaf() {
            // Infallible: writing to a String cannot fail.
            let _ = write!(out, "{}-{}", self.start, self.end);
            return;
        }
        let _ = write!(out, "[{}-{}", self.start, self.end);
        for child in &self.children {
            out.push(' ');
            child.fold_into(out);
        }
        out.push(']');
    }
}

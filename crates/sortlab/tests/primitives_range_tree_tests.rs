#![cfg(feature = "dev")]
//! Tests for the recursion range tree.
//!
//! These tests verify the tree describing how divide-and-conquer sorts
//! subdivide index intervals:
//! - Node construction and child appending
//! - Leaf detection
//! - Folding into the textual trace
//!
//! ## Test Organization
//!
//! 1. **Construction** - Nodes, children, append order
//! 2. **Folding** - Leaf and internal renderings

use sortlab::internals::primitives::range_tree::RangeNode;

// ============================================================================
// Construction Tests
// ============================================================================

/// Test node construction and leaf detection.
#[test]
fn test_node_construction() {
    let node = RangeNode::new(0, 5);
    assert_eq!(node.start, 0);
    assert_eq!(node.end, 5);
    assert!(node.is_leaf());
    assert!(node.children().is_empty());
}

/// Test that children are kept in append order.
#[test]
fn test_child_append_order() {
    let mut root = RangeNode::new(0, 9);
    root.child(0, 4);
    root.child(5, 9);

    assert!(!root.is_leaf());
    assert_eq!(root.children().len(), 2);
    assert_eq!(root.children()[0].start, 0);
    assert_eq!(root.children()[0].end, 4);
    assert_eq!(root.children()[1].start, 5);
    assert_eq!(root.children()[1].end, 9);
}

/// Test that `child` returns the appended node for in-place recursion.
#[test]
fn test_child_returns_appended_node() {
    let mut root = RangeNode::new(0, 3);
    let left = root.child(0, 1);
    left.child(0, 0);
    left.child(1, 1);

    assert_eq!(root.children()[0].children().len(), 2);
}

// ============================================================================
// Folding Tests
// ============================================================================

/// Test that a leaf folds to "start-end".
#[test]
fn test_fold_leaf() {
    assert_eq!(RangeNode::new(2, 2).fold(), "2-2");
    assert_eq!(RangeNode::new(0, 7).fold(), "0-7");
}

/// Test that an internal node folds to "[start-end child ...]".
#[test]
fn test_fold_internal() {
    let mut root = RangeNode::new(0, 2);
    root.child(0, 0);
    root.child(2, 2);

    assert_eq!(root.fold(), "[0-2 0-0 2-2]");
}

/// Test a two-level fold matching a full binary split of four elements.
#[test]
fn test_fold_nested() {
    let mut root = RangeNode::new(0, 3);
    let left = root.child(0, 1);
    left.child(0, 0);
    left.child(1, 1);
    let right = root.child(2, 3);
    right.child(2, 2);
    right.child(3, 3);

    assert_eq!(root.fold(), "[0-3 [0-1 0-0 1-1] [2-3 2-2 3-3]]");
}

#![cfg(feature = "dev")]
//! Tests for the step protocol.
//!
//! These tests verify the step protocol primitives used by every narrated
//! algorithm:
//! - Step variant classification
//! - Sequence inspection without consumption
//! - Forward-only iteration in emission order
//! - Direction comparator polarity
//!
//! ## Test Organization
//!
//! 1. **Step Variants** - Kind names and snapshot detection
//! 2. **Step Sequences** - Length, inspection, last snapshot
//! 3. **Iteration** - Emission order is preserved
//! 4. **Direction** - Comparator polarity for both orders

use sortlab::internals::primitives::direction::Direction;
use sortlab::internals::primitives::step::{Step, StepSequence};

// ============================================================================
// Step Variant Tests
// ============================================================================

/// Test step kind names and snapshot classification.
#[test]
fn test_step_kinds() {
    let snapshot: Step<i32> = Step::Snapshot(vec![1, 2, 3]);
    let info: Step<i32> = Step::Info("halfway".into());
    let range: Step<i32> = Step::Range { start: 0, end: 4 };

    assert_eq!(snapshot.kind(), "Snapshot");
    assert_eq!(info.kind(), "Info");
    assert_eq!(range.kind(), "Range");

    assert!(snapshot.is_snapshot());
    assert!(!info.is_snapshot());
    assert!(!range.is_snapshot());
}

// ============================================================================
// Step Sequence Tests
// ============================================================================

/// Test sequence length and emptiness.
#[test]
fn test_sequence_len() {
    let empty: StepSequence<i32> = StepSequence::new(vec![]);
    assert!(empty.is_empty());
    assert_eq!(empty.len(), 0);

    let seq = StepSequence::new(vec![Step::Snapshot(vec![1]), Step::Info("done".into())]);
    assert!(!seq.is_empty());
    assert_eq!(seq.len(), 2);
}

/// Test that inspection does not consume the sequence.
#[test]
fn test_sequence_inspection() {
    let seq = StepSequence::new(vec![
        Step::Snapshot(vec![2, 1]),
        Step::Snapshot(vec![1, 2]),
    ]);

    assert_eq!(seq.steps().len(), 2);
    assert!(seq.steps()[0].is_snapshot());

    // The sequence is still usable after inspection.
    let collected: Vec<_> = seq.into_iter().collect();
    assert_eq!(collected.len(), 2);
}

/// Test last_snapshot skips trailing non-snapshot steps.
#[test]
fn test_last_snapshot() {
    let empty: StepSequence<i32> = StepSequence::new(vec![]);
    assert_eq!(empty.last_snapshot(), None);

    let seq = StepSequence::new(vec![
        Step::Snapshot(vec![3, 1, 2]),
        Step::Snapshot(vec![1, 2, 3]),
        Step::Info("trace".into()),
    ]);
    assert_eq!(seq.last_snapshot(), Some(&[1, 2, 3][..]));
}

// ============================================================================
// Iteration Tests
// ============================================================================

/// Test that iteration yields steps in emission order.
#[test]
fn test_iteration_order() {
    let seq = StepSequence::new(vec![
        Step::Snapshot(vec![2, 1]),
        Step::Info("swap".into()),
        Step::Snapshot(vec![1, 2]),
    ]);

    let kinds: Vec<_> = seq.into_iter().map(|step| step.kind()).collect();
    assert_eq!(kinds, vec!["Snapshot", "Info", "Snapshot"]);
}

// ============================================================================
// Direction Tests
// ============================================================================

/// Test comparator polarity for both directions.
#[test]
fn test_direction_polarity() {
    let asc = Direction::Ascending;
    let desc = Direction::Descending;

    // Ascending: a pair is out of order when the left is larger.
    assert!(asc.out_of_order(&3, &1));
    assert!(!asc.out_of_order(&1, &3));
    assert!(!asc.out_of_order(&2, &2), "equal keys are never out of order");

    // Descending inverts the polarity.
    assert!(desc.out_of_order(&1, &3));
    assert!(!desc.out_of_order(&3, &1));
    assert!(!desc.out_of_order(&2, &2));

    // precedes is the exact complement, so ties precede in both orders.
    assert!(asc.precedes(&2, &2));
    assert!(desc.precedes(&2, &2));
    assert!(asc.precedes(&1, &3));
    assert!(desc.precedes(&3, &1));
}

/// Test direction defaults and names.
#[test]
fn test_direction_names() {
    assert_eq!(Direction::default(), Direction::Ascending);
    assert_eq!(Direction::Ascending.name(), "ascending");
    assert_eq!(Direction::Descending.name(), "descending");
}

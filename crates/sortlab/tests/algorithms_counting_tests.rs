#![cfg(feature = "dev")]
//! Tests for counting sort.
//!
//! These tests verify the tally-and-restore narration:
//! - Final order in both directions, negatives included
//! - Exactly one snapshot per restored element
//! - Prefix-finality of each snapshot
//! - Precondition errors (empty input, unaddressable range)
//!
//! ## Test Organization
//!
//! 1. **Ordering** - Both directions, duplicates, negatives
//! 2. **Emission Contract** - n snapshots, finalized prefixes
//! 3. **Errors** - Empty input, range too wide

use sortlab::internals::algorithms::counting::counting_sort;
use sortlab::internals::primitives::direction::Direction;
use sortlab::internals::primitives::errors::SortLabError;
use sortlab::internals::primitives::step::Step;

// ============================================================================
// Ordering Tests
// ============================================================================

/// Test ascending order with duplicates and negatives.
#[test]
fn test_counting_ascending() {
    let seq = counting_sort(&[5, -3, 5, 0], Direction::Ascending).unwrap();
    assert_eq!(seq.last_snapshot(), Some(&[-3, 0, 5, 5][..]));
}

/// Test descending order.
#[test]
fn test_counting_descending() {
    let seq = counting_sort(&[5, -3, 5, 0], Direction::Descending).unwrap();
    assert_eq!(seq.last_snapshot(), Some(&[5, 5, 0, -3][..]));
}

/// Test a singleton array.
#[test]
fn test_counting_singleton() {
    let seq = counting_sort(&[7], Direction::Ascending).unwrap();
    assert_eq!(seq.len(), 1);
    assert_eq!(seq.last_snapshot(), Some(&[7][..]));
}

/// Test an array where every element is equal.
#[test]
fn test_counting_all_equal() {
    let seq = counting_sort(&[2, 2, 2], Direction::Descending).unwrap();
    assert_eq!(seq.len(), 3);
    assert_eq!(seq.last_snapshot(), Some(&[2, 2, 2][..]));
}

/// Test narrow integer types spanning their full range.
///
/// `max - min` overflows i8 here; the bucket arithmetic must not.
#[test]
fn test_counting_full_i8_span() {
    let seq = counting_sort(&[i8::MAX, i8::MIN, 0], Direction::Ascending).unwrap();
    assert_eq!(seq.last_snapshot(), Some(&[i8::MIN, 0, i8::MAX][..]));
}

// ============================================================================
// Emission Contract Tests
// ============================================================================

/// Test that n elements yield exactly n snapshots and nothing else.
#[test]
fn test_counting_one_snapshot_per_element() {
    let data = vec![4, 1, 3, 1, 2];
    let seq = counting_sort(&data, Direction::Ascending).unwrap();

    assert_eq!(seq.len(), data.len());
    assert!(seq.steps().iter().all(Step::is_snapshot));
}

/// Test that snapshot i has its first i+1 positions in final order.
#[test]
fn test_counting_prefix_finality() {
    let seq = counting_sort(&[5, -3, 5, 0], Direction::Ascending).unwrap();
    let final_state = [-3, 0, 5, 5];

    for (i, step) in seq.steps().iter().enumerate() {
        let Step::Snapshot(state) = step else {
            panic!("counting sort emits only snapshots");
        };
        assert_eq!(&state[..=i], &final_state[..=i], "prefix not final at step {i}");
    }
}

// ============================================================================
// Error Tests
// ============================================================================

/// Test that empty input is a precondition error.
#[test]
fn test_counting_empty_input() {
    let err = counting_sort(&[] as &[i64], Direction::Ascending).unwrap_err();
    assert_eq!(err, SortLabError::EmptyInput);
    assert!(!err.is_protocol_violation());
}

/// Test that an unaddressable value range is rejected, not allocated.
#[test]
fn test_counting_range_too_wide() {
    let err = counting_sort(&[i64::MIN, i64::MAX], Direction::Ascending).unwrap_err();
    assert!(matches!(err, SortLabError::CountRangeTooWide { .. }));
}

#![cfg(feature = "dev")]
//! Tests for the quadratic exchange sorts.
//!
//! These tests verify bubble, selection, and insertion sort narration:
//! - Final order in both directions
//! - Multiset conservation across every snapshot
//! - Exact snapshot emission counts per algorithm contract
//! - Degenerate inputs (empty, singleton, already sorted)
//!
//! ## Test Organization
//!
//! 1. **Bubble Sort** - Leading/trailing snapshots, per-swap emission
//! 2. **Selection Sort** - One snapshot per pass
//! 3. **Insertion Sort** - Per-shift and per-placement snapshots
//! 4. **Shared Properties** - Purity and multiset conservation

use sortlab::internals::algorithms::bubble::bubble_sort;
use sortlab::internals::algorithms::insertion::insertion_sort;
use sortlab::internals::algorithms::selection::selection_sort;
use sortlab::internals::primitives::direction::Direction;
use sortlab::internals::primitives::step::{Step, StepSequence};

/// Collect every snapshot of a sequence, in emission order.
fn snapshots(sequence: StepSequence<i64>) -> Vec<Vec<i64>> {
    sequence
        .into_iter()
        .filter_map(|step| match step {
            Step::Snapshot(state) => Some(state),
            _ => None,
        })
        .collect()
}

/// Assert the sequence ends on a snapshot holding `expected`.
fn assert_final(sequence: &StepSequence<i64>, expected: &[i64]) {
    let last = sequence.steps().last().unwrap();
    assert!(last.is_snapshot(), "last step must be a snapshot");
    assert_eq!(sequence.last_snapshot(), Some(expected));
}

// ============================================================================
// Bubble Sort Tests
// ============================================================================

/// Test bubble sort final order in both directions.
#[test]
fn test_bubble_sorts() {
    let data = vec![5, 1, 4, 2, 8];

    let asc = bubble_sort(&data, Direction::Ascending);
    assert_final(&asc, &[1, 2, 4, 5, 8]);

    let desc = bubble_sort(&data, Direction::Descending);
    assert_final(&desc, &[8, 5, 4, 2, 1]);
}

/// Test that a sorted array still yields leading and trailing snapshots.
///
/// There is no early exit, so the run performs every comparison but emits
/// exactly the two mandatory snapshots.
#[test]
fn test_bubble_sorted_input_two_snapshots() {
    let seq = bubble_sort(&[1, 2, 3, 4], Direction::Ascending);
    let states = snapshots(seq);

    assert_eq!(states.len(), 2);
    assert_eq!(states[0], vec![1, 2, 3, 4]);
    assert_eq!(states[1], vec![1, 2, 3, 4]);
}

/// Test one snapshot per swap between the mandatory pair.
#[test]
fn test_bubble_snapshot_per_swap() {
    // One inversion, so exactly one swap: leading + swap + trailing.
    let states = snapshots(bubble_sort(&[2, 1], Direction::Ascending));

    assert_eq!(states.len(), 3);
    assert_eq!(states[0], vec![2, 1]);
    assert_eq!(states[1], vec![1, 2]);
    assert_eq!(states[2], vec![1, 2]);
}

/// Test degenerate inputs still satisfy the terminal-snapshot protocol.
#[test]
fn test_bubble_degenerate() {
    let empty = bubble_sort(&[] as &[i64], Direction::Ascending);
    assert_final(&empty, &[]);

    let single = bubble_sort(&[7], Direction::Descending);
    assert_final(&single, &[7]);
}

// ============================================================================
// Selection Sort Tests
// ============================================================================

/// Test selection sort final order in both directions.
#[test]
fn test_selection_sorts() {
    let data = vec![29, 10, 14, 37, 13];

    let asc = selection_sort(&data, Direction::Ascending);
    assert_final(&asc, &[10, 13, 14, 29, 37]);

    let desc = selection_sort(&data, Direction::Descending);
    assert_final(&desc, &[37, 29, 14, 13, 10]);
}

/// Test that selection sort emits exactly one snapshot per pass.
///
/// The swap is unconditional, so n elements always produce n - 1 snapshots.
#[test]
fn test_selection_snapshot_per_pass() {
    let states = snapshots(selection_sort(&[3, 1, 2], Direction::Ascending));

    assert_eq!(states.len(), 2);
    assert_eq!(states[0], vec![1, 3, 2]);
    assert_eq!(states[1], vec![1, 2, 3]);
}

/// Test that singletons get the mandatory terminal snapshot.
#[test]
fn test_selection_singleton() {
    let seq = selection_sort(&[42], Direction::Ascending);
    assert_eq!(seq.len(), 1);
    assert_final(&seq, &[42]);
}

// ============================================================================
// Insertion Sort Tests
// ============================================================================

/// Test insertion sort final order in both directions.
#[test]
fn test_insertion_sorts() {
    let data = vec![12, 11, 13, 5, 6];

    let asc = insertion_sort(&data, Direction::Ascending);
    assert_final(&asc, &[5, 6, 11, 12, 13]);

    let desc = insertion_sort(&data, Direction::Descending);
    assert_final(&desc, &[13, 12, 11, 6, 5]);
}

/// Test the per-shift, per-placement emission pattern.
///
/// During a shift the key is absent from the visible state; the duplicate
/// left behind by the shift is what the snapshot shows.
#[test]
fn test_insertion_shift_and_placement_snapshots() {
    let states = snapshots(insertion_sort(&[3, 1, 2], Direction::Ascending));

    assert_eq!(
        states,
        vec![
            vec![3, 3, 2], // shift of 3 while key 1 is lifted
            vec![1, 3, 2], // placement of key 1
            vec![1, 3, 3], // shift of 3 while key 2 is lifted
            vec![1, 2, 3], // placement of key 2
        ]
    );
}

/// Test that sorted input emits one placement snapshot per key.
#[test]
fn test_insertion_sorted_input() {
    let states = snapshots(insertion_sort(&[1, 2, 3], Direction::Ascending));

    assert_eq!(states.len(), 2);
    assert!(states.iter().all(|state| state == &vec![1, 2, 3]));
}

/// Test that singletons get the mandatory terminal snapshot.
#[test]
fn test_insertion_singleton() {
    let seq = insertion_sort(&[9], Direction::Descending);
    assert_eq!(seq.len(), 1);
    assert_final(&seq, &[9]);
}

// ============================================================================
// Shared Property Tests
// ============================================================================

/// Test that every swap-based snapshot conserves the multiset.
///
/// Bubble and selection only ever swap, so every intermediate state is a
/// permutation. Insertion's shift snapshots intentionally show a duplicate
/// while the key is lifted, so only its final state is checked.
#[test]
fn test_multiset_conservation() {
    let data = vec![5, -3, 5, 0, 2, -3];
    let mut expected = data.clone();
    expected.sort_unstable();

    let runs = [
        bubble_sort(&data, Direction::Ascending),
        selection_sort(&data, Direction::Ascending),
    ];

    for seq in runs {
        for state in snapshots(seq) {
            let mut sorted = state.clone();
            sorted.sort_unstable();
            assert_eq!(sorted, expected, "snapshot lost or invented elements");
        }
    }

    let insertion = insertion_sort(&data, Direction::Ascending);
    assert_eq!(insertion.last_snapshot(), Some(expected.as_slice()));
}

/// Test that the caller's array is never mutated.
#[test]
fn test_purity() {
    let data = vec![4, 2, 7, 1];

    bubble_sort(&data, Direction::Ascending);
    selection_sort(&data, Direction::Descending);
    insertion_sort(&data, Direction::Ascending);

    assert_eq!(data, vec![4, 2, 7, 1]);
}

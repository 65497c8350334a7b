//! Tests for the public API surface.
//!
//! These tests drive the crate the way an experiment driver would: through
//! the prelude, the `SortAlgorithm` registry and plain `SortFn` pointers.
//!
//! ## Test Organization
//!
//! 1. **Registry** - enumeration, names, stability flags
//! 2. **Function Pointers** - `SortFn` entry points
//! 3. **Error Surface** - Display and `std::error::Error`

use dnc::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ============================================================================
// Helper Functions
// ============================================================================

fn random_buffer(n: usize, seed: u64) -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.random_range(0..(n as i32 * 10))).collect()
}

// ============================================================================
// Registry Tests
// ============================================================================

/// Test the registry lists both sorts in report order.
#[test]
fn test_registry_contents() {
    assert_eq!(
        SortAlgorithm::ALL,
        [SortAlgorithm::MergeSort, SortAlgorithm::QuickSort]
    );
    assert_eq!(SortAlgorithm::MergeSort.name(), "MergeSort");
    assert_eq!(SortAlgorithm::QuickSort.to_string(), "QuickSort");
}

/// Test only merge sort claims stability.
#[test]
fn test_registry_stability_flags() {
    assert!(SortAlgorithm::MergeSort.is_stable());
    assert!(!SortAlgorithm::QuickSort.is_stable());
}

/// Test every registered algorithm sorts the same input, each with fresh counters.
#[test]
fn test_registry_runs_every_algorithm() {
    let input = random_buffer(1000, 42);
    let mut expected = input.clone();
    expected.sort();

    for algorithm in SortAlgorithm::ALL {
        let mut buffer = input.clone();
        let mut counters = Counters::new();

        algorithm.run(&mut buffer, &mut counters);

        assert_eq!(buffer, expected, "{algorithm} failed to sort");
        assert!(counters.comparisons() > 0, "{algorithm} recorded no comparisons");
        assert!(counters.max_recursion_depth() > 0);
        assert_eq!(counters.current_depth(), 0);
    }
}

// ============================================================================
// Function Pointer Tests
// ============================================================================

/// Test entry points can be stored and called as plain function pointers.
#[test]
fn test_sort_fn_pointers() {
    let table: [(&str, SortFn<i64>); 2] = [
        ("merge", merge_sort::<i64>),
        ("quick", SortAlgorithm::QuickSort.entry()),
    ];

    for (label, sort) in table {
        let mut buffer: Vec<i64> = vec![9, -2, 7, 7, 0, 3, -11, 5, 8, 1];
        sort(&mut buffer, &mut Counters::new());
        assert!(is_sorted(&buffer), "{label} left {buffer:?}");
    }
}

/// Test the counters reflect only the run they were passed to.
#[test]
fn test_counters_are_per_run() {
    let input = random_buffer(256, 9);
    let sort = SortAlgorithm::MergeSort.entry::<i32>();

    let mut first = Counters::new();
    sort(&mut input.clone(), &mut first);
    let mut second = Counters::new();
    sort(&mut input.clone(), &mut second);

    assert_eq!(first, second, "Merge sort is deterministic");

    let mut shared = Counters::new();
    sort(&mut input.clone(), &mut shared);
    sort(&mut input.clone(), &mut shared);
    assert_eq!(shared.comparisons(), 2 * first.comparisons());
    assert_eq!(shared.max_recursion_depth(), first.max_recursion_depth());
}

// ============================================================================
// Error Surface Tests
// ============================================================================

/// Test error messages carry their context.
#[test]
fn test_error_display() {
    assert_eq!(
        DncError::EmptyInput.to_string(),
        "Invalid argument: buffer must not be empty"
    );
    assert_eq!(
        DncError::RankOutOfRange { k: 5, len: 3 }.to_string(),
        "Invalid argument: k = 5 is out of range [0, 3)"
    );
    assert_eq!(
        DncError::TooFewPoints { got: 1, min: 2 }.to_string(),
        "Invalid argument: got 1 points, need at least 2"
    );
}

/// Test errors propagate through `Box<dyn Error>` with `?`.
#[test]
fn test_error_is_std_error() {
    fn run() -> Result<i32, Box<dyn std::error::Error>> {
        let mut buffer: Vec<i32> = Vec::new();
        Ok(select(&mut buffer, 0, &mut Counters::new())?)
    }

    let err = run().unwrap_err();
    assert!(err.to_string().starts_with("Invalid argument"));
}

//! Tests for the instrumentation counters and recursion guard.
//!
//! ## Test Organization
//!
//! 1. **Counting** - comparison and allocation increments
//! 2. **Depth Tracking** - guard nesting, maximum depth, restoration
//! 3. **Formatting** - Display summary

use dnc::prelude::*;

// ============================================================================
// Counting Tests
// ============================================================================

/// Test a fresh instance starts at zero.
#[test]
fn test_new_counters_are_zero() {
    let counters = Counters::new();

    assert_eq!(counters.comparisons(), 0);
    assert_eq!(counters.allocations(), 0);
    assert_eq!(counters.current_depth(), 0);
    assert_eq!(counters.max_recursion_depth(), 0);
    assert_eq!(counters, Counters::default());
}

/// Test single and bulk comparison increments accumulate.
#[test]
fn test_comparison_increments() {
    let mut counters = Counters::new();

    counters.increment_comparisons();
    counters.increment_comparisons();
    counters.add_comparisons(5);

    assert_eq!(counters.comparisons(), 7);
}

/// Test allocation increments.
#[test]
fn test_allocation_increments() {
    let mut counters = Counters::new();

    counters.increment_allocations();
    counters.increment_allocations();

    assert_eq!(counters.allocations(), 2);
    assert_eq!(counters.comparisons(), 0, "Allocations must not touch comparisons");
}

/// Test reset returns every field to zero.
#[test]
fn test_reset() {
    let mut counters = Counters::new();
    counters.add_comparisons(10);
    counters.increment_allocations();
    drop(counters.enter_recursion());

    counters.reset();

    assert_eq!(counters, Counters::new());
}

// ============================================================================
// Depth Tracking Tests
// ============================================================================

/// Test a guard raises the depth while alive and restores it on drop.
#[test]
fn test_guard_enter_and_exit() {
    let mut counters = Counters::new();

    {
        let frame = counters.enter_recursion();
        assert_eq!(frame.current_depth(), 1);
        assert_eq!(frame.max_recursion_depth(), 1);
    }

    assert_eq!(counters.current_depth(), 0);
    assert_eq!(counters.max_recursion_depth(), 1);
}

/// Test the maximum never decreases across sibling frames.
#[test]
fn test_max_depth_is_monotone() {
    let mut counters = Counters::new();

    {
        let mut outer = counters.enter_recursion();
        {
            let mut middle = outer.enter_recursion();
            let _inner = middle.enter_recursion();
        }
        let sibling = outer.enter_recursion();
        assert_eq!(sibling.current_depth(), 2);
    }

    assert_eq!(counters.max_recursion_depth(), 3);
    assert_eq!(counters.current_depth(), 0);
}

/// Test a guard can be threaded through recursion as `&mut Counters`.
#[test]
fn test_guard_threads_through_recursion() {
    fn walk(counters: &mut Counters, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        let mut frame = counters.enter_recursion();
        frame.increment_comparisons();
        // Early return keeps the guard balanced.
        if n == 3 {
            return 1;
        }
        1 + walk(&mut frame, n - 1)
    }

    let mut counters = Counters::new();
    let visited = walk(&mut counters, 10);

    assert_eq!(visited, 8);
    assert_eq!(counters.comparisons(), 8);
    assert_eq!(counters.max_recursion_depth(), 8);
    assert_eq!(counters.current_depth(), 0);
}

/// Test `RecursionGuard::new` is equivalent to `enter_recursion`.
#[test]
fn test_guard_constructor() {
    let mut counters = Counters::new();
    {
        let guard = RecursionGuard::new(&mut counters);
        assert_eq!(guard.current_depth(), 1);
    }
    assert_eq!(counters.current_depth(), 0);
}

// ============================================================================
// Formatting Tests
// ============================================================================

/// Test the Display summary.
#[test]
fn test_display_summary() {
    let mut counters = Counters::new();
    counters.add_comparisons(12);
    counters.increment_allocations();
    drop(counters.enter_recursion());

    assert_eq!(
        counters.to_string(),
        "comparisons=12 allocations=1 max_depth=1"
    );
}

//! Deterministic linear-time selection (median-of-medians).
//!
//! ## Purpose
//!
//! This module finds the element of a given 0-based rank in an unsorted
//! buffer with worst-case O(n) comparisons.
//!
//! ## Design notes
//!
//! * **Pivot**: Groups of [`GROUP_SIZE`] are insertion-sorted, their medians
//!   gathered into one auxiliary vector, and the median of that vector is
//!   selected recursively. The pivot always splits the span at worst 30/70.
//! * **Partition**: Three-way, so copies of the pivot never recurse. Duplicate-heavy
//!   buffers keep the 30/70 split bound on both outer blocks.
//! * **Side effect**: The buffer is permuted; it is not left sorted.
//!
//! ## Invariants
//!
//! * A one-element span returns its element with zero comparisons.
//! * Each non-trivial frame records at most one allocation.
//! * Recursion depth is O(log n).
//!
//! ## Non-goals
//!
//! * This module does not validate `k`; callers go through the engine validator.

// Internal dependencies
use crate::algorithms::merge_sort::insertion_sort;
use crate::algorithms::partition::three_way;
use crate::primitives::counters::Counters;

/// Number of elements per median group.
pub const GROUP_SIZE: usize = 5;

/// Return the element of rank `k` in `buffer`.
///
/// The caller guarantees `k < buffer.len()`.
pub fn select_kth<T: Ord + Copy>(buffer: &mut [T], k: usize, counters: &mut Counters) -> T {
    if buffer.len() == 1 {
        return buffer[0];
    }

    let mut frame = counters.enter_recursion();

    let pivot = median_of_medians(buffer, &mut frame);
    // The pivot was drawn from this span, so the lookup always succeeds.
    let at = buffer.iter().position(|v| *v == pivot).unwrap_or(0);
    let (lt, gt) = three_way(buffer, at, &mut frame);

    if k < lt {
        select_kth(&mut buffer[..lt], k, &mut frame)
    } else if k >= gt {
        select_kth(&mut buffer[gt..], k - gt, &mut frame)
    } else {
        pivot
    }
}

/// Pick a pivot value guaranteed to split `span` into a constant fraction.
fn median_of_medians<T: Ord + Copy>(span: &mut [T], counters: &mut Counters) -> T {
    if span.len() <= GROUP_SIZE {
        insertion_sort(span, counters);
        return span[(span.len() - 1) / 2];
    }

    let mut medians = Vec::with_capacity(span.len().div_ceil(GROUP_SIZE));
    counters.increment_allocations();

    for group in span.chunks_mut(GROUP_SIZE) {
        insertion_sort(group, counters);
        medians.push(group[(group.len() - 1) / 2]);
    }

    let middle = medians.len() / 2;
    select_kth(&mut medians, middle, counters)
}

//! Three-way partitioning shared by quicksort and selection.
//!
//! ## Purpose
//!
//! This module splits a span into elements less than, equal to and greater
//! than a pivot in a single pass (Dutch national flag).
//!
//! ## Design notes
//!
//! * **Pivot first**: The pivot is parked at index 0, so it starts the equal
//!   block and is never compared against itself.
//! * **Duplicates**: Every copy of the pivot lands in the middle block, so
//!   callers never recurse into it. All-equal spans finish in one pass.
//!
//! ## Invariants
//!
//! * Exactly `len - 1` comparisons are counted.
//! * On return `span[..lt] < pivot`, `span[lt..gt] == pivot`, `span[gt..] > pivot`.
//! * `lt < gt`; the equal block holds at least the pivot.

// External dependencies
use core::cmp::Ordering;

// Internal dependencies
use crate::primitives::counters::Counters;

/// Partition `span` around `span[pivot_index]`; returns the equal block `[lt, gt)`.
pub fn three_way<T: Ord + Copy>(
    span: &mut [T],
    pivot_index: usize,
    counters: &mut Counters,
) -> (usize, usize) {
    span.swap(0, pivot_index);
    let pivot = span[0];

    let (mut lt, mut i, mut gt) = (0, 1, span.len());

    while i < gt {
        counters.increment_comparisons();
        match span[i].cmp(&pivot) {
            Ordering::Less => {
                span.swap(lt, i);
                lt += 1;
                i += 1;
            }
            Ordering::Equal => i += 1,
            Ordering::Greater => {
                gt -= 1;
                span.swap(i, gt);
            }
        }
    }

    (lt, gt)
}

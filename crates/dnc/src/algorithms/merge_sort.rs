//! Stable top-down merge sort.
//!
//! ## Purpose
//!
//! This module sorts a buffer in place by recursive halving, handing short
//! spans to insertion sort and merging sorted halves through a single scratch
//! buffer.
//!
//! ## Design notes
//!
//! * **Scratch**: One buffer sized to the whole input, allocated once at top
//!   level and recorded as a single allocation.
//! * **Cutoff**: Spans of at most [`INSERTION_SORT_CUTOFF`] elements are
//!   insertion-sorted without a recursion guard.
//! * **Stability**: On ties the merge takes the left run's element first.
//!
//! ## Invariants
//!
//! * Every element comparison is charged to the counters.
//! * The scratch slice handed to a frame has the same length as its span.
//!
//! ## Non-goals
//!
//! * This module does not detect pre-existing runs.

// Internal dependencies
use crate::primitives::counters::Counters;

/// Longest span handled by insertion sort instead of recursion.
pub const INSERTION_SORT_CUTOFF: usize = 7;

/// Sort `buffer` ascending in place.
///
/// Empty and single-element buffers are returned untouched at zero cost.
pub fn sort<T: Ord + Copy>(buffer: &mut [T], counters: &mut Counters) {
    if buffer.len() <= 1 {
        return;
    }

    let mut scratch = buffer.to_vec();
    counters.increment_allocations();

    sort_span(buffer, &mut scratch, counters);
}

fn sort_span<T: Ord + Copy>(span: &mut [T], scratch: &mut [T], counters: &mut Counters) {
    if span.len() <= INSERTION_SORT_CUTOFF {
        insertion_sort(span, counters);
        return;
    }

    let mut frame = counters.enter_recursion();
    let mid = span.len().div_ceil(2);

    {
        let (left, right) = span.split_at_mut(mid);
        let (scratch_left, scratch_right) = scratch.split_at_mut(mid);
        sort_span(left, scratch_left, &mut frame);
        sort_span(right, scratch_right, &mut frame);
    }

    merge(span, mid, scratch, &mut frame);
}

/// Insertion sort with one counted comparison per probe.
pub(crate) fn insertion_sort<T: Ord + Copy>(span: &mut [T], counters: &mut Counters) {
    for i in 1..span.len() {
        let key = span[i];
        let mut j = i;

        while j > 0 {
            counters.increment_comparisons();
            if span[j - 1] > key {
                span[j] = span[j - 1];
                j -= 1;
            } else {
                break;
            }
        }

        span[j] = key;
    }
}

/// Merge the sorted runs `span[..mid]` and `span[mid..]`.
fn merge<T: Ord + Copy>(span: &mut [T], mid: usize, scratch: &mut [T], counters: &mut Counters) {
    let len = span.len();
    scratch[..len].copy_from_slice(span);

    let (mut i, mut j, mut k) = (0, mid, 0);

    while i < mid && j < len {
        counters.increment_comparisons();
        // `<=` keeps equal elements in input order.
        if scratch[i] <= scratch[j] {
            span[k] = scratch[i];
            i += 1;
        } else {
            span[k] = scratch[j];
            j += 1;
        }
        k += 1;
    }

    span[k..k + (mid - i)].copy_from_slice(&scratch[i..mid]);
    k += mid - i;
    span[k..].copy_from_slice(&scratch[j..len]);
}

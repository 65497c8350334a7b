//! Randomized quicksort with bounded stack depth.
//!
//! ## Purpose
//!
//! This module sorts a buffer in place with three-way partitioning around a
//! uniformly random pivot.
//!
//! ## Design notes
//!
//! * **Randomization**: The buffer is shuffled once up front and every pivot
//!   index is drawn uniformly, so expected cost is O(n log n) for any input order.
//! * **Depth**: Each frame recurses into the smaller partition and loops on the
//!   larger one. Only true recursive calls take a recursion guard.
//! * **Duplicates**: Copies of the pivot are settled in the partition pass, so
//!   all-equal buffers cost `n - 1` comparisons.
//! * **Injectable RNG**: Callers pass any `rand::Rng`; tests pin a seed.
//!
//! ## Invariants
//!
//! * Every comparison of a non-pivot element against the pivot is counted.
//! * Recursion depth is at most `log2(n) + 1`.
//!
//! ## Non-goals
//!
//! * This module does not provide a stable sort.

// External dependencies
use rand::Rng;

// Internal dependencies
use crate::algorithms::partition::three_way;
use crate::primitives::array::shuffle;
use crate::primitives::counters::Counters;

/// Sort `buffer` ascending in place, drawing randomness from `rng`.
pub fn sort_with_rng<T, R>(buffer: &mut [T], counters: &mut Counters, rng: &mut R)
where
    T: Ord + Copy,
    R: Rng + ?Sized,
{
    if buffer.len() <= 1 {
        return;
    }

    shuffle(buffer, rng);
    sort_span(buffer, counters, rng);
}

fn sort_span<T, R>(span: &mut [T], counters: &mut Counters, rng: &mut R)
where
    T: Ord + Copy,
    R: Rng + ?Sized,
{
    if span.len() <= 1 {
        return;
    }

    let mut frame = counters.enter_recursion();
    let mut rest = span;

    while rest.len() > 1 {
        let pivot_index = rng.random_range(0..rest.len());
        let (lt, gt) = three_way(rest, pivot_index, &mut frame);
        let (left, tail) = std::mem::take(&mut rest).split_at_mut(lt);
        let right = &mut tail[gt - lt..];

        if left.len() < right.len() {
            sort_span(left, &mut frame, rng);
            rest = right;
        } else {
            sort_span(right, &mut frame, rng);
            rest = left;
        }
    }
}

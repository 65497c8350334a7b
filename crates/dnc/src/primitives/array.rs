//! Array utilities shared by the sorting and selection algorithms.
//!
//! ## Purpose
//!
//! This module provides small in-place helpers: element swaps, a uniform
//! Fisher–Yates shuffle, a sortedness check and a median-of-three pivot
//! helper.
//!
//! ## Design notes
//!
//! * **Pure**: None of these helpers touch [`Counters`](super::counters::Counters).
//!   Callers charge comparisons themselves where they are part of the measurement.
//! * **Injectable randomness**: The shuffle takes any `rand::Rng`, so tests can
//!   pin a seed.
//!
//! ## Non-goals
//!
//! * This module does not validate indices beyond slice bounds checks.

// External dependencies
use rand::Rng;

/// Swap the elements at `i` and `j`.
#[inline]
pub fn swap<T>(buffer: &mut [T], i: usize, j: usize) {
    buffer.swap(i, j);
}

/// Shuffle `buffer` uniformly at random (Fisher–Yates).
pub fn shuffle<T, R: Rng + ?Sized>(buffer: &mut [T], rng: &mut R) {
    for i in (1..buffer.len()).rev() {
        let j = rng.random_range(0..=i);
        buffer.swap(i, j);
    }
}

/// Returns `true` if `buffer` is non-decreasing.
pub fn is_sorted<T: PartialOrd>(buffer: &[T]) -> bool {
    buffer.windows(2).all(|w| w[0] <= w[1])
}

/// Order `buffer[left]`, `buffer[mid]`, `buffer[right]` and return `mid`.
///
/// `mid` is the midpoint of the inclusive range `[left, right]`; after the
/// call it holds the median of the three sampled elements.
pub fn median_of_three<T: PartialOrd>(buffer: &mut [T], left: usize, right: usize) -> usize {
    let mid = left + (right - left) / 2;

    if buffer[left] > buffer[mid] {
        buffer.swap(left, mid);
    }
    if buffer[left] > buffer[right] {
        buffer.swap(left, right);
    }
    if buffer[mid] > buffer[right] {
        buffer.swap(mid, right);
    }

    mid
}

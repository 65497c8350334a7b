//! High-level API for the instrumented algorithms.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points. Each takes the data to
//! process and a caller-owned [`Counters`], validates its preconditions, runs
//! the algorithm and logs a one-line summary of the run.
//!
//! ## Design notes
//!
//! * **Validated**: Preconditions are checked before any mutation.
//! * **Enumerable**: [`SortAlgorithm`] and [`SortFn`] let an experiment driver
//!   iterate over the sorts without this crate knowing about the driver.
//! * **Logged**: Completion is reported through the `log` facade at `debug`
//!   level; rejected inputs at `warn`.
//!
//! ## Key concepts
//!
//! * **Entry point**: `(buffer, counters)` for sorts, plus `k` for selection.
//! * **Counters**: Read after the call returns; the algorithms are the only writers.

// External dependencies
use core::fmt::{Display, Formatter};
use num_traits::Float;
use rand::Rng;

// Internal dependencies
use crate::algorithms::{
    closest_pair as pair, merge_sort as merge, quick_sort as quick, select as selection,
};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::primitives::array::{is_sorted, median_of_three, shuffle, swap};
pub use crate::primitives::counters::{Counters, RecursionGuard};
pub use crate::primitives::errors::{DncError, ErrorKind};
pub use crate::primitives::point::Point;

// ============================================================================
// Entry Points
// ============================================================================

/// Sort `buffer` ascending in place with a stable merge sort.
pub fn merge_sort<T: Ord + Copy>(buffer: &mut [T], counters: &mut Counters) {
    merge::sort(buffer, counters);
    log::debug!(target: "dnc::merge_sort", "n={} {}", buffer.len(), counters);
}

/// Sort `buffer` ascending in place with randomized quicksort.
///
/// Randomness comes from the thread-local generator; use
/// [`quick_sort_with_rng`] for reproducible runs.
pub fn quick_sort<T: Ord + Copy>(buffer: &mut [T], counters: &mut Counters) {
    quick_sort_with_rng(buffer, counters, &mut rand::rng());
}

/// Sort `buffer` ascending in place with randomized quicksort driven by `rng`.
pub fn quick_sort_with_rng<T, R>(buffer: &mut [T], counters: &mut Counters, rng: &mut R)
where
    T: Ord + Copy,
    R: Rng + ?Sized,
{
    quick::sort_with_rng(buffer, counters, rng);
    log::debug!(target: "dnc::quick_sort", "n={} {}", buffer.len(), counters);
}

/// Return the element of 0-based rank `k` in `buffer`.
///
/// The buffer is permuted as a side effect.
///
/// # Errors
///
/// Returns [`DncError::EmptyInput`] for an empty buffer and
/// [`DncError::RankOutOfRange`] when `k >= buffer.len()`. The buffer is left
/// untouched in both cases.
pub fn select<T: Ord + Copy>(
    buffer: &mut [T],
    k: usize,
    counters: &mut Counters,
) -> Result<T, DncError> {
    Validator::validate_rank(buffer.len(), k).inspect_err(|e| {
        log::warn!(target: "dnc::select", "rejected: {e}");
    })?;

    let value = selection::select_kth(buffer, k, counters);
    log::debug!(target: "dnc::select", "n={} k={} {}", buffer.len(), k, counters);
    Ok(value)
}

/// Return the minimum pairwise Euclidean distance over `points`.
///
/// The caller's slice is not reordered.
///
/// # Errors
///
/// Returns [`DncError::TooFewPoints`] for fewer than two points and
/// [`DncError::InvalidNumericValue`] if any coordinate is NaN or infinite.
pub fn closest_pair<T: Float>(
    points: &[Point<T>],
    counters: &mut Counters,
) -> Result<T, DncError> {
    Validator::validate_points(points).inspect_err(|e| {
        log::warn!(target: "dnc::closest_pair", "rejected: {e}");
    })?;

    let distance = pair::min_distance(points, counters);
    log::debug!(target: "dnc::closest_pair", "n={} {}", points.len(), counters);
    Ok(distance)
}

// ============================================================================
// Algorithm Registry
// ============================================================================

/// Signature shared by the sort entry points.
pub type SortFn<T> = fn(&mut [T], &mut Counters);

/// The sorting algorithms a driver can enumerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortAlgorithm {
    /// Stable top-down merge sort.
    MergeSort,
    /// Randomized quicksort.
    QuickSort,
}

impl SortAlgorithm {
    /// Every sort algorithm, in report order.
    pub const ALL: [SortAlgorithm; 2] = [SortAlgorithm::MergeSort, SortAlgorithm::QuickSort];

    /// Label used in reports.
    pub fn name(self) -> &'static str {
        match self {
            Self::MergeSort => "MergeSort",
            Self::QuickSort => "QuickSort",
        }
    }

    /// The entry point as a plain function pointer.
    pub fn entry<T: Ord + Copy>(self) -> SortFn<T> {
        match self {
            Self::MergeSort => merge_sort::<T>,
            Self::QuickSort => quick_sort::<T>,
        }
    }

    /// Run the algorithm on `buffer`.
    pub fn run<T: Ord + Copy>(self, buffer: &mut [T], counters: &mut Counters) {
        (self.entry())(buffer, counters);
    }

    /// Returns `true` if equal elements keep their input order.
    pub fn is_stable(self) -> bool {
        matches!(self, Self::MergeSort)
    }
}

impl Display for SortAlgorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

//! Layer 2: Algorithms
//!
//! This layer implements the divide-and-conquer procedures themselves. Every
//! routine here assumes its preconditions already hold; the API layer checks
//! them through the engine validator first.

// Three-way partition shared by quicksort and selection.
pub mod partition;

// Stable merge sort with an insertion-sort cutoff.
pub mod merge_sort;

// Randomized quicksort recursing into the smaller partition.
pub mod quick_sort;

// Median-of-medians selection.
pub mod select;

// Closest pair of points in the plane.
pub mod closest_pair;

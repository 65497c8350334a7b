//! Divide-and-conquer closest pair of points.
//!
//! ## Purpose
//!
//! This module computes the minimum pairwise Euclidean distance in a point
//! set in O(n log n) time.
//!
//! ## Design notes
//!
//! * **Copy**: The caller's slice is copied once and sorted by x; the copy is
//!   recorded as a single allocation. The caller's order is never touched.
//! * **Base case**: Spans of at most [`BRUTE_FORCE_THRESHOLD`] points are
//!   checked pairwise.
//! * **Strip**: Points within the current best distance of the dividing line
//!   are sorted by y and each is compared with at most [`STRIP_WINDOW`]
//!   successors.
//!
//! ## Key concepts
//!
//! * **Strip bound**: Inside a strip of width `2d`, at most seven points can
//!   follow a given point within vertical distance `d`.
//!
//! ## Invariants
//!
//! * Every distance evaluation is counted; collecting the strip is free.
//! * The result is finite and non-negative for finite input.
//!
//! ## Non-goals
//!
//! * This module does not report which pair attains the minimum.

// External dependencies
use core::cmp::Ordering;
use num_traits::Float;

// Internal dependencies
use crate::primitives::counters::Counters;
use crate::primitives::point::Point;

/// Largest span solved by checking every pair.
pub const BRUTE_FORCE_THRESHOLD: usize = 4;

/// Maximum number of strip successors examined per point.
pub const STRIP_WINDOW: usize = 7;

/// Minimum pairwise distance over `points`.
///
/// The caller guarantees at least two finite points.
pub fn min_distance<T: Float>(points: &[Point<T>], counters: &mut Counters) -> T {
    let mut by_x = points.to_vec();
    counters.increment_allocations();
    by_x.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal));

    solve(&by_x, counters)
}

fn solve<T: Float>(by_x: &[Point<T>], counters: &mut Counters) -> T {
    if by_x.len() <= BRUTE_FORCE_THRESHOLD {
        return brute_force(by_x, counters);
    }

    let mut frame = counters.enter_recursion();

    let mid = (by_x.len() - 1) / 2;
    let mid_x = by_x[mid].x;
    let (left, right) = by_x.split_at(mid + 1);

    let d_left = solve(left, &mut frame);
    let d_right = solve(right, &mut frame);
    let d = d_left.min(d_right);

    d.min(strip_minimum(by_x, mid_x, d, &mut frame))
}

fn brute_force<T: Float>(span: &[Point<T>], counters: &mut Counters) -> T {
    let mut best = T::infinity();

    for (i, p) in span.iter().enumerate() {
        for q in &span[i + 1..] {
            let dist = p.distance_to(q);
            counters.increment_comparisons();
            if dist < best {
                best = dist;
            }
        }
    }

    best
}

/// Best distance across the dividing line at `mid_x`, or `d` if none is closer.
fn strip_minimum<T: Float>(span: &[Point<T>], mid_x: T, d: T, counters: &mut Counters) -> T {
    let mut strip: Vec<Point<T>> = span
        .iter()
        .filter(|p| (p.x - mid_x).abs() < d)
        .copied()
        .collect();
    strip.sort_by(|a, b| a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal));

    let mut best = d;

    for (i, p) in strip.iter().enumerate() {
        for q in strip[i + 1..].iter().take(STRIP_WINDOW) {
            if q.y - p.y >= best {
                break;
            }
            let dist = p.distance_to(q);
            counters.increment_comparisons();
            if dist < best {
                best = dist;
            }
        }
    }

    best
}

//! Instrumentation counters and the scoped recursion guard.
//!
//! ## Purpose
//!
//! This module provides the mutable metrics object every algorithm writes
//! into, and the guard value each recursive frame holds while it is active.
//!
//! ## Design notes
//!
//! * **Caller-owned**: The caller creates one `Counters` per run and passes `&mut`.
//! * **RAII depth tracking**: Entering a frame returns a [`RecursionGuard`];
//!   dropping it restores the depth on every exit path, unwinding included.
//! * **Threading**: The guard derefs to `Counters`, so a frame passes
//!   `&mut guard` straight into its own recursive calls.
//!
//! ## Invariants
//!
//! * `max_depth` is non-decreasing over the lifetime of the object.
//! * `max_depth >= current_depth` after every guard update.
//! * `current_depth` returns to its prior value when a guard is dropped.
//!
//! ## Non-goals
//!
//! * This module provides no synchronisation; counters are single-threaded.
//! * This module does not measure wall-clock time or allocation sizes.

// External dependencies
use std::fmt::{Display, Formatter, Result};
use std::ops::{Deref, DerefMut};

// ============================================================================
// Counters
// ============================================================================

/// Metrics collected while an algorithm runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counters {
    comparisons: u64,
    allocations: u64,
    current_depth: u64,
    max_depth: u64,
}

impl Counters {
    /// Create a zeroed set of counters.
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Record one element comparison.
    #[inline]
    pub fn increment_comparisons(&mut self) {
        self.comparisons += 1;
    }

    /// Record `n` element comparisons at once.
    #[inline]
    pub fn add_comparisons(&mut self, n: u64) {
        self.comparisons += n;
    }

    /// Record one scratch-buffer allocation.
    #[inline]
    pub fn increment_allocations(&mut self) {
        self.allocations += 1;
    }

    /// Enter a recursive frame.
    ///
    /// The returned guard holds the counters for as long as the frame runs and
    /// leaves the frame when it is dropped.
    #[inline]
    pub fn enter_recursion(&mut self) -> RecursionGuard<'_> {
        RecursionGuard::new(self)
    }

    /// Return every counter to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of element comparisons recorded.
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    /// Number of scratch-buffer allocations recorded.
    pub fn allocations(&self) -> u64 {
        self.allocations
    }

    /// Depth of the frame currently executing (0 outside any guard).
    pub fn current_depth(&self) -> u64 {
        self.current_depth
    }

    /// Deepest nesting of guarded frames observed so far.
    pub fn max_recursion_depth(&self) -> u64 {
        self.max_depth
    }

    fn enter(&mut self) {
        self.current_depth += 1;
        self.max_depth = self.max_depth.max(self.current_depth);
    }

    fn exit(&mut self) {
        self.current_depth = self.current_depth.saturating_sub(1);
    }
}

impl Display for Counters {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "comparisons={} allocations={} max_depth={}",
            self.comparisons, self.allocations, self.max_depth
        )
    }
}

// ============================================================================
// Recursion Guard
// ============================================================================

/// Depth marker owned by one recursive frame.
///
/// Construction increments the depth and updates the maximum; `Drop`
/// decrements it again.
#[derive(Debug)]
pub struct RecursionGuard<'a> {
    counters: &'a mut Counters,
}

impl<'a> RecursionGuard<'a> {
    /// Enter a frame on `counters`.
    pub fn new(counters: &'a mut Counters) -> Self {
        counters.enter();
        Self { counters }
    }
}

impl Deref for RecursionGuard<'_> {
    type Target = Counters;

    fn deref(&self) -> &Counters {
        self.counters
    }
}

impl DerefMut for RecursionGuard<'_> {
    fn deref_mut(&mut self) -> &mut Counters {
        self.counters
    }
}

impl Drop for RecursionGuard<'_> {
    fn drop(&mut self) {
        self.counters.exit();
    }
}

//! Error types for divide-and-conquer operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions an algorithm entry point can
//! report. Every condition is a precondition violation detected before the
//! input is touched.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., the rank and the length).
//! * **Single kind**: Every variant is an invalid-argument failure; `kind()` exposes that.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Numeric values in errors use the same types as the public API.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or retry strategies.

// External dependencies
use std::error::Error;
use std::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Kind
// ============================================================================

/// Broad classification of a [`DncError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The caller passed input that violates an entry point's precondition.
    InvalidArgument,
}

// ============================================================================
// Error Type
// ============================================================================

/// Error type for divide-and-conquer operations.
#[derive(Debug, Clone, PartialEq)]
pub enum DncError {
    /// Input buffer is empty; selection needs at least one element.
    EmptyInput,

    /// Requested rank lies outside `[0, len)`.
    RankOutOfRange {
        /// The 0-based rank requested.
        k: usize,
        /// Number of elements in the buffer.
        len: usize,
    },

    /// Number of points is below the minimum requirement.
    TooFewPoints {
        /// Number of points provided.
        got: usize,
        /// Minimum required points.
        min: usize,
    },

    /// Input contains NaN or infinite coordinates.
    InvalidNumericValue(String),
}

impl DncError {
    /// Classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput
            | Self::RankOutOfRange { .. }
            | Self::TooFewPoints { .. }
            | Self::InvalidNumericValue(_) => ErrorKind::InvalidArgument,
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for DncError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Invalid argument: buffer must not be empty"),
            Self::RankOutOfRange { k, len } => {
                write!(f, "Invalid argument: k = {k} is out of range [0, {len})")
            }
            Self::TooFewPoints { got, min } => {
                write!(
                    f,
                    "Invalid argument: got {got} points, need at least {min}"
                )
            }
            Self::InvalidNumericValue(s) => {
                write!(f, "Invalid argument: non-finite coordinate {s}")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

impl Error for DncError {}

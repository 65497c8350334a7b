//! Precondition checks for the algorithm entry points.
//!
//! ## Purpose
//!
//! This module checks entry-point inputs before any algorithm touches them:
//! non-empty buffers, in-range ranks, enough points, finite coordinates.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Side-effect free**: Nothing is mutated and no counters are charged.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not provide automatic correction of invalid inputs.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::DncError;
use crate::primitives::point::Point;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for algorithm inputs.
///
/// All methods return `Result<(), DncError>` and fail fast upon identifying
/// the first violation.
pub struct Validator;

impl Validator {
    /// Minimum number of points for a closest-pair search.
    pub const MIN_POINTS: usize = 2;

    /// Validate a selection request of rank `k` over `len` elements.
    pub fn validate_rank(len: usize, k: usize) -> Result<(), DncError> {
        if len == 0 {
            return Err(DncError::EmptyInput);
        }
        if k >= len {
            return Err(DncError::RankOutOfRange { k, len });
        }
        Ok(())
    }

    /// Validate a point set for the closest-pair search.
    pub fn validate_points<T: Float>(points: &[Point<T>]) -> Result<(), DncError> {
        if points.len() < Self::MIN_POINTS {
            return Err(DncError::TooFewPoints {
                got: points.len(),
                min: Self::MIN_POINTS,
            });
        }

        if let Some(i) = points.iter().position(|p| !p.is_finite()) {
            let p = points[i];
            return Err(DncError::InvalidNumericValue(format!(
                "points[{}]=({}, {})",
                i,
                p.x.to_f64().unwrap_or(f64::NAN),
                p.y.to_f64().unwrap_or(f64::NAN)
            )));
        }

        Ok(())
    }
}

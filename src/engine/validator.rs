//! Input validation for Taylor approximation configuration and inputs.
//!
//! ## Purpose
//!
//! This module provides the validation functions applied when a model is
//! built and when a point is handed to the convergence driver. It checks
//! parameter bounds, finiteness, sweep geometry, and the logarithm domain.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Parameter Bounds**: `max_terms` and `order` must lie in `[1, 1000]`.
//! * **Finite Checks**: Scalars must be finite (no NaN/Inf).
//! * **Sweep Geometry**: Ranges must be non-empty and the grid bounded.
//! * **Domain Guard**: ln needs `x > 0` and a positive center.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not clamp or correct invalid inputs.
//! * This module does not detect non-convergence or overflow.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::constants::{MAX_SAMPLES, TERM_LIMIT};
use crate::primitives::errors::TaylorError;
use crate::primitives::function::SeriesFunction;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for Taylor configuration and inputs.
///
/// All methods return `Result<(), TaylorError>` and fail fast upon
/// identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Scalar Validation
    // ========================================================================

    /// Validate a single numeric value for finiteness.
    pub fn validate_scalar<T: Float>(val: T, name: &str) -> Result<(), TaylorError> {
        if !val.is_finite() {
            return Err(TaylorError::InvalidNumericValue(format!(
                "{}={}",
                name,
                val.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(())
    }

    /// Validate that `function` is defined at `x` with parameter `center`.
    pub fn validate_domain<T: Float>(
        function: SeriesFunction,
        x: T,
        center: T,
    ) -> Result<(), TaylorError> {
        if !function.in_domain(x, center) {
            return Err(TaylorError::DomainError {
                function: function.tag(),
                x: x.to_f64().unwrap_or(f64::NAN),
                center: center.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the absolute error tolerance.
    pub fn validate_tolerance<T: Float>(tol: T) -> Result<(), TaylorError> {
        if !tol.is_finite() || tol <= T::zero() {
            return Err(TaylorError::InvalidTolerance(
                tol.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the cap on the convergence search.
    pub fn validate_max_terms(max_terms: usize) -> Result<(), TaylorError> {
        if max_terms == 0 || max_terms > TERM_LIMIT {
            return Err(TaylorError::InvalidMaxTerms(max_terms));
        }
        Ok(())
    }

    /// Validate the fixed order used by the sweep.
    pub fn validate_order(order: usize) -> Result<(), TaylorError> {
        if order == 0 || order > TERM_LIMIT {
            return Err(TaylorError::InvalidOrder(order));
        }
        Ok(())
    }

    // ========================================================================
    // Sweep Validation
    // ========================================================================

    /// Validate an axis range `[low, high)`.
    pub fn validate_range<T: Float>(
        axis: &'static str,
        low: T,
        high: T,
    ) -> Result<(), TaylorError> {
        if !low.is_finite() || !high.is_finite() || low >= high {
            return Err(TaylorError::InvalidRange {
                axis,
                low: low.to_f64().unwrap_or(f64::NAN),
                high: high.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Validate the sweep step against an already validated x range.
    ///
    /// The step must be positive and finite, and the resulting grid must not
    /// exceed `MAX_SAMPLES` points.
    pub fn validate_step<T: Float>(step: T, low: T, high: T) -> Result<(), TaylorError> {
        let step_f64 = step.to_f64().unwrap_or(f64::NAN);
        if !step.is_finite() || step <= T::zero() {
            return Err(TaylorError::InvalidStep(step_f64));
        }

        let samples = ((high - low) / step).ceil().to_f64().unwrap_or(f64::INFINITY);
        if samples > MAX_SAMPLES as f64 {
            return Err(TaylorError::InvalidStep(step_f64));
        }
        Ok(())
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), TaylorError> {
        if let Some(param) = duplicate_param {
            return Err(TaylorError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}

//! Error types for Taylor series configuration and evaluation.
//!
//! ## Purpose
//!
//! This module defines `TaylorError`, the single error type returned by every
//! fallible operation in the crate: builder validation, convergence requests,
//! sweep construction and function-tag parsing.
//!
//! ## Design notes
//!
//! * **no_std friendly**: Implements `core::fmt::Display`; `std::error::Error`
//!   is only implemented with the `std` feature.
//! * **Comparable**: Derives `Clone` and `PartialEq` so tests can match on
//!   exact variants.
//!
//! ## Non-goals
//!
//! * Non-convergence is not an error. A series that never reaches the
//!   tolerance is reported through `ConvergenceResult::converged`.
//! * Floating-point overflow is not detected.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

use core::fmt;

// ============================================================================
// Error Type
// ============================================================================

/// Errors produced while configuring or evaluating Taylor approximations.
#[derive(Debug, Clone, PartialEq)]
pub enum TaylorError {
    /// Tolerance was not finite or not strictly positive.
    InvalidTolerance(f64),

    /// Maximum term count outside `[1, 1000]`.
    InvalidMaxTerms(usize),

    /// Fixed sweep order outside `[1, 1000]`.
    InvalidOrder(usize),

    /// Sweep step was not finite, not positive, or produced too many samples.
    InvalidStep(f64),

    /// An axis range was empty, inverted, or non-finite.
    InvalidRange {
        /// Axis name (`"x"` or `"y"`).
        axis: &'static str,
        /// Lower bound supplied.
        low: f64,
        /// Upper bound supplied.
        high: f64,
    },

    /// A scalar input was NaN or infinite.
    InvalidNumericValue(String),

    /// The function is undefined at the requested point.
    DomainError {
        /// Function tag (`"ln"`, ...).
        function: &'static str,
        /// Evaluation point.
        x: f64,
        /// Expansion center.
        center: f64,
    },

    /// A function tag did not name a supported function.
    UnknownFunction(String),

    /// A builder parameter was configured more than once.
    DuplicateParameter {
        /// Name of the repeated parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for TaylorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {} (must be > 0 and finite)", tol)
            }
            Self::InvalidMaxTerms(n) => {
                write!(f, "Invalid max_terms: {} (must be in [1, 1000])", n)
            }
            Self::InvalidOrder(n) => write!(f, "Invalid order: {} (must be in [1, 1000])", n),
            Self::InvalidStep(step) => write!(
                f,
                "Invalid step: {} (must be > 0, finite, and yield at most 1000000 samples)",
                step
            ),
            Self::InvalidRange { axis, low, high } => write!(
                f,
                "Invalid {} range: [{}, {}] (bounds must be finite with low < high)",
                axis, low, high
            ),
            Self::InvalidNumericValue(msg) => write!(f, "Invalid numeric value: {}", msg),
            Self::DomainError {
                function,
                x,
                center,
            } => write!(
                f,
                "Domain error: {} is undefined at x={} with center a={}",
                function, x, center
            ),
            Self::UnknownFunction(tag) => write!(
                f,
                "Unknown function '{}' (expected one of: exp, cos, binom, ln)",
                tag
            ),
            Self::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TaylorError {}

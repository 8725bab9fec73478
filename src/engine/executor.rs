//! Convergence search over the number of series terms.
//!
//! ## Purpose
//!
//! This module finds, for a single input, the smallest number of terms at
//! which a truncated series lies within an absolute tolerance of the value
//! it approximates. The loop is written once in [`converge`] and is
//! parameterized by an evaluator closure; [`ConvergenceDriver`] binds it to a
//! `SeriesFunction`.
//!
//! ## Design notes
//!
//! * **Counted loop**: Term counts 1, 2, ... are tried in order; the first
//!   one meeting the tolerance wins.
//! * **Silent degradation**: Hitting `max_terms` is not an error. The result
//!   at the cap is returned with `converged == false`; NaN or infinite
//!   errors never compare below the tolerance and run to the cap.
//! * **Domain guard**: The driver rejects ln at `x <= 0` (or a non-positive
//!   center) with `TaylorError::DomainError` before evaluating anything.
//!
//! ## Invariants
//!
//! * `1 <= terms <= max_terms`.
//! * If `terms < max_terms`, then `error < tolerance` and the error with
//!   `terms - 1` terms was not below the tolerance.
//!
//! ## Non-goals
//!
//! * Searching several inputs at once.
//! * Adaptive or bisection search over the term count.

// External dependencies
use core::fmt::Debug;
use num_traits::Float;
use tracing::{debug, trace, warn};

// Internal dependencies
use crate::engine::output::ConvergenceResult;
use crate::engine::validator::Validator;
use crate::primitives::constants::{cast, DEFAULT_CENTER, DEFAULT_MAX_TERMS, DEFAULT_TOLERANCE};
use crate::primitives::errors::TaylorError;
use crate::primitives::function::SeriesFunction;

// ============================================================================
// Generic Search
// ============================================================================

/// Outcome of the generic search, before it is tied to a function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Convergence<T> {
    /// Term count at which the search stopped.
    pub terms: usize,
    /// Approximation with `terms` terms.
    pub approx: T,
    /// Reference value.
    pub actual: T,
    /// `|approx - actual|`.
    pub error: T,
    /// Whether `error < tolerance`.
    pub converged: bool,
}

/// Increase the term count until `evaluate(n)` is within `tolerance` of
/// `actual`, or `max_terms` is reached.
///
/// A `max_terms` of 0 is treated as 1: at least one evaluation is always made.
pub fn converge<T, F>(evaluate: F, actual: T, tolerance: T, max_terms: usize) -> Convergence<T>
where
    T: Float + Debug,
    F: Fn(usize) -> T,
{
    let cap = max_terms.max(1);
    let mut terms = 1;

    loop {
        let approx = evaluate(terms);
        let error = (approx - actual).abs();
        trace!(terms, ?approx, ?error, "series step");

        let converged = error < tolerance;
        if converged || terms == cap {
            return Convergence {
                terms,
                approx,
                actual,
                error,
                converged,
            };
        }
        terms += 1;
    }
}

// ============================================================================
// Driver
// ============================================================================

/// Convergence search bound to a tolerance, a term cap and an expansion
/// parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvergenceDriver<T> {
    /// Absolute error threshold.
    pub tolerance: T,

    /// Largest term count tried.
    pub max_terms: usize,

    /// Binomial exponent / logarithm center.
    pub center: T,
}

impl<T: Float> Default for ConvergenceDriver<T> {
    fn default() -> Self {
        Self {
            tolerance: cast(DEFAULT_TOLERANCE),
            max_terms: DEFAULT_MAX_TERMS,
            center: cast(DEFAULT_CENTER),
        }
    }
}

impl<T: Float + Debug> ConvergenceDriver<T> {
    /// Create a validated driver.
    pub fn new(tolerance: T, max_terms: usize, center: T) -> Result<Self, TaylorError> {
        Validator::validate_tolerance(tolerance)?;
        Validator::validate_max_terms(max_terms)?;
        Validator::validate_scalar(center, "center")?;

        Ok(Self {
            tolerance,
            max_terms,
            center,
        })
    }

    /// Find the smallest term count for which `function` is within tolerance
    /// at `x`, using the driver's center.
    ///
    /// # Errors
    ///
    /// * `InvalidNumericValue` if `x` is not finite.
    /// * `DomainError` for ln at `x <= 0` or with a non-positive center.
    pub fn approximate(
        &self,
        x: T,
        function: SeriesFunction,
    ) -> Result<ConvergenceResult<T>, TaylorError> {
        self.approximate_with(x, function, self.center)
    }

    /// Like [`approximate`](Self::approximate), with an explicit binomial
    /// exponent / logarithm center in place of the driver's.
    ///
    /// # Errors
    ///
    /// * `InvalidNumericValue` if `x` or `center` is not finite.
    /// * `DomainError` for ln at `x <= 0` or with a non-positive center.
    pub fn approximate_with(
        &self,
        x: T,
        function: SeriesFunction,
        center: T,
    ) -> Result<ConvergenceResult<T>, TaylorError> {
        Validator::validate_scalar(x, "x")?;
        Validator::validate_scalar(center, "center")?;
        Validator::validate_domain(function, x, center)?;

        let actual = function.reference(x, center);
        let found = converge(
            |n| function.evaluate(x, center, n),
            actual,
            self.tolerance,
            self.max_terms,
        );

        if found.converged {
            debug!(
                function = function.tag(),
                ?x,
                terms = found.terms,
                error = ?found.error,
                "series converged"
            );
        } else {
            warn!(
                function = function.tag(),
                ?x,
                max_terms = self.max_terms,
                error = ?found.error,
                "series did not reach tolerance"
            );
        }

        Ok(ConvergenceResult {
            function,
            x,
            center,
            terms: found.terms,
            approx: found.approx,
            actual: found.actual,
            error: found.error,
            converged: found.converged,
        })
    }
}

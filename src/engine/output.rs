//! Result of a convergence search.
//!
//! ## Purpose
//!
//! `ConvergenceResult` carries everything the driver learned about one
//! input: how many terms were used, the approximation, the reference value
//! and the residual.
//!
//! ## Invariants
//!
//! * `error == |approx - actual|`.
//! * `1 <= terms <= max_terms`.
//! * `terms < max_terms` implies `converged`.
//! * `converged == (error < tolerance)`.

use core::fmt::{self, Display};
use num_traits::Float;

// Internal dependencies
use crate::primitives::function::SeriesFunction;

/// Outcome of searching for the smallest sufficient term count.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConvergenceResult<T> {
    /// Function that was expanded.
    pub function: SeriesFunction,

    /// Evaluation point.
    pub x: T,

    /// Exponent (binom) or expansion center (ln); unused otherwise.
    pub center: T,

    /// Number of terms in the returned approximation.
    pub terms: usize,

    /// Truncated series value.
    pub approx: T,

    /// Reference value of the function.
    pub actual: T,

    /// Absolute error `|approx - actual|`.
    pub error: T,

    /// Whether `error` fell below the tolerance before the cap was reached.
    pub converged: bool,
}

impl<T: Float> ConvergenceResult<T> {
    /// Error relative to the reference value, `None` when the reference is 0.
    pub fn relative_error(&self) -> Option<T> {
        if self.actual == T::zero() {
            None
        } else {
            Some(self.error / self.actual.abs())
        }
    }
}

impl<T: Float + Display> Display for ConvergenceResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Function:  {}", self.function.label())?;
        writeln!(f, "  x:         {}", self.x)?;
        if self.function.uses_center() {
            writeln!(f, "  a:         {}", self.center)?;
        }
        writeln!(f, "  Terms:     {}", self.terms)?;
        writeln!(f, "  Approx:    {:.6}", self.approx)?;
        writeln!(f, "  Actual:    {:.6}", self.actual)?;
        writeln!(f, "  Error:     {:.6}", self.error)?;
        write!(
            f,
            "  Converged: {}",
            if self.converged { "yes" } else { "no" }
        )
    }
}

//! Fixed-order sweep of the series over a sampled domain.
//!
//! ## Purpose
//!
//! This module samples each truncated series and its reference function on
//! a regular x grid at a single, fixed order. The output is the data behind
//! an "approximation vs. actual" plot: per-function curves, the axis bounds
//! a plot should use, and legend entries.
//!
//! ## Design notes
//!
//! * **Bypasses the driver**: Samples are produced by calling the evaluators
//!   directly; no convergence search happens here.
//! * **Grid**: `x_k = x_low + k * step` for `k < ceil((x_high - x_low) / step)`,
//!   a half-open grid. Each point is computed from `k`.
//! * **Sentinel**: Where a function is undefined (ln at `x <= 0`), both the
//!   approximation and the reference are NaN so plotting tools leave a gap.
//!
//! ## Invariants
//!
//! * Every series has exactly `x.len()` samples.
//! * Series appear in the order requested.
//!
//! ## Non-goals
//!
//! * This module does not render figures.
//! * This module does not clip samples to the y display bounds.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::String, vec::Vec};

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::constants::{
    cast, DEFAULT_CENTER, DEFAULT_ORDER, DEFAULT_STEP, DEFAULT_X_BOUNDS, DEFAULT_Y_BOUNDS,
};
use crate::primitives::errors::TaylorError;
use crate::primitives::function::SeriesFunction;

// ============================================================================
// Configuration
// ============================================================================

/// Grid and order used by [`sweep`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepConfig<T> {
    /// Inclusive lower end of the x grid.
    pub x_low: T,

    /// Exclusive upper end of the x grid.
    pub x_high: T,

    /// Spacing between samples.
    pub step: T,

    /// Number of terms in every evaluated series.
    pub order: usize,

    /// Binomial exponent / logarithm center.
    pub center: T,

    /// Lower y bound for display.
    pub y_low: T,

    /// Upper y bound for display.
    pub y_high: T,
}

impl<T: Float> Default for SweepConfig<T> {
    fn default() -> Self {
        Self {
            x_low: cast(DEFAULT_X_BOUNDS.0),
            x_high: cast(DEFAULT_X_BOUNDS.1),
            step: cast(DEFAULT_STEP),
            order: DEFAULT_ORDER,
            center: cast(DEFAULT_CENTER),
            y_low: cast(DEFAULT_Y_BOUNDS.0),
            y_high: cast(DEFAULT_Y_BOUNDS.1),
        }
    }
}

impl<T: Float> SweepConfig<T> {
    /// Check the grid geometry, order and center.
    pub fn validate(&self) -> Result<(), TaylorError> {
        Validator::validate_range("x", self.x_low, self.x_high)?;
        Validator::validate_range("y", self.y_low, self.y_high)?;
        Validator::validate_step(self.step, self.x_low, self.x_high)?;
        Validator::validate_order(self.order)?;
        Validator::validate_scalar(self.center, "center")?;
        Ok(())
    }

    /// Number of grid points.
    pub fn sample_count(&self) -> usize {
        ((self.x_high - self.x_low) / self.step)
            .ceil()
            .to_usize()
            .unwrap_or(0)
    }

    /// The x grid.
    pub fn grid(&self) -> Vec<T> {
        let mut k = T::zero();
        let mut grid = Vec::with_capacity(self.sample_count());
        for _ in 0..self.sample_count() {
            grid.push(self.x_low + k * self.step);
            k = k + T::one();
        }
        grid
    }
}

// ============================================================================
// Output
// ============================================================================

/// Samples of one function over the sweep grid.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepSeries<T> {
    /// Function sampled.
    pub function: SeriesFunction,

    /// Truncated series values (NaN where undefined).
    pub approx: Vec<T>,

    /// Reference values (NaN where undefined).
    pub actual: Vec<T>,
}

impl<T: Float> SweepSeries<T> {
    /// Largest `|approx - actual|` over samples where the error is defined.
    ///
    /// NaN samples and NaN differences (`inf - inf`) are skipped. Returns
    /// `None` when no sample has a defined error.
    pub fn max_error(&self) -> Option<T> {
        self.approx
            .iter()
            .zip(&self.actual)
            .map(|(&a, &b)| (a - b).abs())
            .filter(|e| !e.is_nan())
            .fold(None, |acc: Option<T>, e| {
                Some(match acc {
                    Some(m) if m >= e => m,
                    _ => e,
                })
            })
    }
}

/// Full output of a sweep.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SweepResult<T> {
    /// Number of terms used for every series.
    pub order: usize,

    /// Binomial exponent / logarithm center.
    pub center: T,

    /// Displayed x interval.
    pub x_bounds: (T, T),

    /// Displayed y interval.
    pub y_bounds: (T, T),

    /// Shared x grid.
    pub x: Vec<T>,

    /// One entry per requested function.
    pub series: Vec<SweepSeries<T>>,
}

impl<T: Float> SweepResult<T> {
    /// Plot title.
    pub fn title(&self) -> String {
        format!("Taylor Approximations (Order {})", self.order)
    }

    /// Legend entries, two per series: the approximation then the reference.
    pub fn legend(&self) -> Vec<String> {
        self.series
            .iter()
            .flat_map(|s| {
                let label = s.function.label();
                [
                    format!("Taylor {} (order {})", label, self.order),
                    format!("Actual {}", label),
                ]
            })
            .collect()
    }

    /// Samples for `function`, if it was swept.
    pub fn series_for(&self, function: SeriesFunction) -> Option<&SweepSeries<T>> {
        self.series.iter().find(|s| s.function == function)
    }
}

// ============================================================================
// Sweep
// ============================================================================

/// Sample `functions` over the grid described by `config`.
pub fn sweep<T: Float>(
    config: &SweepConfig<T>,
    functions: &[SeriesFunction],
) -> Result<SweepResult<T>, TaylorError> {
    config.validate()?;

    let x = config.grid();
    let series = functions
        .iter()
        .map(|&function| sample(function, &x, config.center, config.order))
        .collect();

    Ok(SweepResult {
        order: config.order,
        center: config.center,
        x_bounds: (config.x_low, config.x_high),
        y_bounds: (config.y_low, config.y_high),
        x,
        series,
    })
}

fn sample<T: Float>(function: SeriesFunction, x: &[T], center: T, order: usize) -> SweepSeries<T> {
    let mut approx = Vec::with_capacity(x.len());
    let mut actual = Vec::with_capacity(x.len());

    for &xi in x {
        if function.in_domain(xi, center) {
            approx.push(function.evaluate(xi, center, order));
            actual.push(function.reference(xi, center));
        } else {
            approx.push(T::nan());
            actual.push(T::nan());
        }
    }

    SweepSeries {
        function,
        approx,
        actual,
    }
}

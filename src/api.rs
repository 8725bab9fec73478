//! High-level API for Taylor series approximation.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for the convergence and sweep parameters and produces a
//! validated [`TaylorModel`].
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with defaults for every parameter.
//! * **Validated**: All parameters are checked once, in `.build()`.
//! * **Strict**: Setting a parameter twice is reported as an error rather
//!   than silently keeping the last value.
//! * **Type-Safe**: Generic over `Float` types.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`TaylorBuilder`] via `Taylor::new()`.
//! 2. Chain configuration methods (`.tolerance()`, `.max_terms()`, ...).
//! 3. Call `.build()` to obtain a [`TaylorModel`].

// External dependencies
use core::fmt::Debug;
use num_traits::Float;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::evaluation::sweep as sweeping;
use crate::primitives::constants::cast;

// Publicly re-exported types
pub use crate::engine::executor::ConvergenceDriver;
pub use crate::engine::output::ConvergenceResult;
pub use crate::evaluation::sweep::{SweepConfig, SweepResult, SweepSeries};
pub use crate::primitives::constants::{
    DEFAULT_CENTER, DEFAULT_MAX_TERMS, DEFAULT_ORDER, DEFAULT_STEP, DEFAULT_TOLERANCE,
    DEFAULT_X_BOUNDS, DEFAULT_Y_BOUNDS,
};
pub use crate::primitives::errors::TaylorError;
pub use crate::primitives::function::SeriesFunction;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for Taylor approximation parameters.
#[derive(Debug, Clone)]
pub struct TaylorBuilder<T: Float> {
    /// Absolute error tolerance for the convergence search.
    pub tolerance: Option<T>,

    /// Term cap for the convergence search.
    pub max_terms: Option<usize>,

    /// Binomial exponent / logarithm center.
    pub center: Option<T>,

    /// Fixed order for sweeps.
    pub order: Option<usize>,

    /// Sweep x interval `[low, high)`.
    pub x_range: Option<(T, T)>,

    /// Display y interval.
    pub y_range: Option<(T, T)>,

    /// Sweep step.
    pub step: Option<T>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float + Debug> Default for TaylorBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + Debug> TaylorBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tolerance: None,
            max_terms: None,
            center: None,
            order: None,
            x_range: None,
            y_range: None,
            step: None,
            duplicate_param: None,
        }
    }

    fn mark(&mut self, already_set: bool, name: &'static str) {
        if already_set && self.duplicate_param.is_none() {
            self.duplicate_param = Some(name);
        }
    }

    /// Set the absolute error tolerance (default 0.005).
    pub fn tolerance(mut self, tolerance: T) -> Self {
        self.mark(self.tolerance.is_some(), "tolerance");
        self.tolerance = Some(tolerance);
        self
    }

    /// Set the maximum number of terms tried (default 85).
    pub fn max_terms(mut self, max_terms: usize) -> Self {
        self.mark(self.max_terms.is_some(), "max_terms");
        self.max_terms = Some(max_terms);
        self
    }

    /// Set the binomial exponent / logarithm center (default 1.0).
    pub fn center(mut self, center: T) -> Self {
        self.mark(self.center.is_some(), "center");
        self.center = Some(center);
        self
    }

    /// Set the fixed order used by sweeps (default 5).
    pub fn order(mut self, order: usize) -> Self {
        self.mark(self.order.is_some(), "order");
        self.order = Some(order);
        self
    }

    /// Set the sweep x interval `[low, high)` (default `[-10, 10)`).
    pub fn x_range(mut self, low: T, high: T) -> Self {
        self.mark(self.x_range.is_some(), "x_range");
        self.x_range = Some((low, high));
        self
    }

    /// Set the display y interval (default `[-10, 50]`).
    pub fn y_range(mut self, low: T, high: T) -> Self {
        self.mark(self.y_range.is_some(), "y_range");
        self.y_range = Some((low, high));
        self
    }

    /// Set the sweep step (default 0.1).
    pub fn step(mut self, step: T) -> Self {
        self.mark(self.step.is_some(), "step");
        self.step = Some(step);
        self
    }

    /// Validate the configuration and build the model.
    pub fn build(self) -> Result<TaylorModel<T>, TaylorError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let center = self.center.unwrap_or_else(|| cast(DEFAULT_CENTER));
        let driver = ConvergenceDriver::new(
            self.tolerance.unwrap_or_else(|| cast(DEFAULT_TOLERANCE)),
            self.max_terms.unwrap_or(DEFAULT_MAX_TERMS),
            center,
        )?;

        let (x_low, x_high) = self
            .x_range
            .unwrap_or_else(|| (cast(DEFAULT_X_BOUNDS.0), cast(DEFAULT_X_BOUNDS.1)));
        let (y_low, y_high) = self
            .y_range
            .unwrap_or_else(|| (cast(DEFAULT_Y_BOUNDS.0), cast(DEFAULT_Y_BOUNDS.1)));
        let sweep = SweepConfig {
            x_low,
            x_high,
            step: self.step.unwrap_or_else(|| cast(DEFAULT_STEP)),
            order: self.order.unwrap_or(DEFAULT_ORDER),
            center,
            y_low,
            y_high,
        };
        sweep.validate()?;

        Ok(TaylorModel { driver, sweep })
    }
}

// ============================================================================
// Model
// ============================================================================

/// A validated configuration ready to approximate and sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TaylorModel<T> {
    driver: ConvergenceDriver<T>,
    sweep: SweepConfig<T>,
}

impl<T: Float + Debug> TaylorModel<T> {
    /// Find the smallest term count reaching the tolerance at `x`.
    pub fn approximate(
        &self,
        x: T,
        function: SeriesFunction,
    ) -> Result<ConvergenceResult<T>, TaylorError> {
        self.driver.approximate(x, function)
    }

    /// Like [`approximate`](Self::approximate), with an explicit binomial
    /// exponent / logarithm center.
    pub fn approximate_with(
        &self,
        x: T,
        function: SeriesFunction,
        center: T,
    ) -> Result<ConvergenceResult<T>, TaylorError> {
        self.driver.approximate_with(x, function, center)
    }

    /// Evaluate the `n`-term expansion of `function` at `x` directly.
    ///
    /// No domain check is made; see [`SeriesFunction::in_domain`].
    pub fn evaluate(&self, function: SeriesFunction, x: T, n: usize) -> T {
        function.evaluate(x, self.driver.center, n)
    }

    /// Sweep every supported function over the configured grid.
    pub fn sweep(&self) -> Result<SweepResult<T>, TaylorError> {
        self.sweep_functions(&SeriesFunction::ALL)
    }

    /// Sweep the given functions over the configured grid.
    pub fn sweep_functions(
        &self,
        functions: &[SeriesFunction],
    ) -> Result<SweepResult<T>, TaylorError> {
        sweeping::sweep(&self.sweep, functions)
    }

    /// The convergence driver settings.
    pub fn driver(&self) -> &ConvergenceDriver<T> {
        &self.driver
    }

    /// The sweep settings.
    pub fn sweep_config(&self) -> &SweepConfig<T> {
        &self.sweep
    }
}

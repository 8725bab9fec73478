//! # taylor-rs — Truncated Taylor series approximation for Rust
//!
//! Approximates elementary functions with truncated Taylor/Maclaurin series,
//! finds how many terms are needed to reach a target accuracy, and samples
//! the approximation error across a domain for visualization.
//!
//! ## Supported series
//!
//! | Selector | Function  | Expansion                                        |
//! |----------|-----------|--------------------------------------------------|
//! | `Exp`    | e^x       | Σ x^i / i!                                       |
//! | `Cos`    | cos(x)    | Σ (-1)^i x^(2i) / (2i)!                          |
//! | `Binom`  | (1+x)^a   | Σ C(a, i) x^i, for real exponent `a`             |
//! | `Ln`     | ln(x)     | ln(a) + Σ (-1)^(i+1) (x-a)^i / (i a^i), at `a`   |
//!
//! ## Quick Start
//!
//! ```rust
//! use taylor_rs::prelude::*;
//!
//! // Build the model
//! let model = Taylor::new()
//!     .tolerance(0.005)   // Absolute error target
//!     .max_terms(85)      // Give up after 85 terms
//!     .build()?;
//!
//! // Smallest term count for e^1
//! let result = model.approximate(1.0, Exp)?;
//! assert!(result.converged);
//! assert_eq!(result.terms, 6);
//!
//! println!("{}", result);
//! # Result::<(), TaylorError>::Ok(())
//! ```
//!
//! ```text
//! Summary:
//!   Function:  exp(x)
//!   x:         1
//!   Terms:     6
//!   Approx:    2.716667
//!   Actual:    2.718282
//!   Error:     0.001615
//!   Converged: yes
//! ```
//!
//! ## Convergence
//!
//! `approximate` tries 1, 2, ... terms and returns the first count whose
//! absolute error is below the tolerance. If the cap is reached first, the
//! result at the cap is returned with `converged == false`; this is not an
//! error.
//!
//! ```rust
//! use taylor_rs::prelude::*;
//!
//! let model = Taylor::new().tolerance(1e-12).max_terms(3).build()?;
//! let result = model.approximate(2.0, Exp)?;
//! assert_eq!(result.terms, 3);
//! assert!(!result.converged);
//! # Result::<(), TaylorError>::Ok(())
//! ```
//!
//! The logarithm is only defined for positive `x`. Asking the driver for it
//! elsewhere is reported as a domain error:
//!
//! ```rust
//! use taylor_rs::prelude::*;
//!
//! let model = Taylor::<f64>::new().build()?;
//! assert!(matches!(
//!     model.approximate(-1.0, Ln),
//!     Err(TaylorError::DomainError { .. })
//! ));
//! # Result::<(), TaylorError>::Ok(())
//! ```
//!
//! ## Sweeps
//!
//! A sweep evaluates every series at a fixed order over a regular grid,
//! producing the data for an "approximation vs. actual" plot. Undefined
//! samples (ln at `x <= 0`) are NaN.
//!
//! ```rust
//! use taylor_rs::prelude::*;
//!
//! let model = Taylor::<f64>::new()
//!     .order(5)
//!     .center(1.0)
//!     .x_range(-2.0, 2.0)
//!     .step(0.5)
//!     .build()?;
//!
//! let sweep = model.sweep()?;
//! assert_eq!(sweep.x.len(), 8);
//! assert_eq!(sweep.series.len(), 4);
//! assert!(sweep.series_for(Ln).unwrap().approx[0].is_nan());
//! # Result::<(), TaylorError>::Ok(())
//! ```
//!
//! ## Parameters
//!
//! | Parameter      | Default       | Range/Options       | Description                               |
//! |----------------|---------------|---------------------|-------------------------------------------|
//! | **tolerance**  | 0.005         | (0, ∞)              | Absolute error target                     |
//! | **max_terms**  | 85            | [1, 1000]           | Cap on the convergence search             |
//! | **center**     | 1.0           | finite              | Binomial exponent / logarithm center      |
//! | **order**      | 5             | [1, 1000]           | Terms used by sweeps                      |
//! | **x_range**    | [-10, 10)     | low < high          | Sweep interval                            |
//! | **step**       | 0.1           | (0, ∞)              | Sweep spacing                             |
//! | **y_range**    | [-10, 50]     | low < high          | Display bounds reported with the sweep    |
//!
//! Each parameter may be set once; setting one twice makes `build()` fail
//! with `TaylorError::DuplicateParameter`.
//!
//! ## Direct evaluation
//!
//! The evaluators are plain functions and can be called without a model:
//!
//! ```rust
//! use taylor_rs::{binomial_series, exp_series};
//!
//! assert_eq!(exp_series(3.0_f64, 1), 1.0);
//! assert!((binomial_series(0.5_f64, 0.5, 20) - 1.5_f64.sqrt()).abs() < 1e-6);
//! ```
//!
//! ## Logging
//!
//! The convergence driver emits `tracing` events: `trace` per tried term
//! count, `debug` on convergence and `warn` when the cap is hit. Install any
//! `tracing` subscriber to see them.
//!
//! ## Minimal Usage (no_std)
//!
//! Disable default features to build without the standard library; the
//! floating-point functions then come from `libm`:
//!
//! ```toml
//! [dependencies]
//! taylor-rs = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - error type, function selector, default constants.
mod primitives;

// Layer 2: Math - generalized combination numbers.
mod math;

// Layer 3: Algorithms - the truncated series evaluators.
mod algorithms;

// Layer 4: Engine - validation and the convergence search.
mod engine;

// Layer 5: Evaluation - fixed-order domain sweeps.
mod evaluation;

// High-level fluent API.
//
// Provides the `Taylor` builder and the validated `TaylorModel`.
mod api;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use algorithms::series::{binomial_series, cos_series, exp_series, ln_series};
pub use api::{
    ConvergenceDriver, ConvergenceResult, SeriesFunction, SweepConfig, SweepResult, SweepSeries,
    TaylorBuilder, TaylorError, TaylorModel, DEFAULT_CENTER, DEFAULT_MAX_TERMS, DEFAULT_ORDER,
    DEFAULT_STEP, DEFAULT_TOLERANCE, DEFAULT_X_BOUNDS, DEFAULT_Y_BOUNDS,
};
pub use math::combination::generalized_binomial;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use taylor_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        ConvergenceResult,
        SeriesFunction::{self, Binom, Cos, Exp, Ln},
        SweepResult, TaylorBuilder as Taylor, TaylorError, TaylorModel,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// Only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and constants.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal series evaluators.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal convergence engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal sweep evaluation.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}

//! Default configuration values.
//!
//! These are the values a `TaylorBuilder` falls back to for every parameter
//! left unset. They are exposed so callers can show or reuse them.

// External dependencies
use num_traits::Float;

/// Absolute error below which a series is considered converged.
pub const DEFAULT_TOLERANCE: f64 = 0.005;

/// Upper bound on the number of terms the convergence search will try.
pub const DEFAULT_MAX_TERMS: usize = 85;

/// Hard limit for both `max_terms` and `order`.
pub const TERM_LIMIT: usize = 1000;

/// Fixed number of terms used when sweeping a domain.
pub const DEFAULT_ORDER: usize = 5;

/// Binomial exponent / logarithm expansion center.
pub const DEFAULT_CENTER: f64 = 1.0;

/// Half-open x interval `[low, high)` sampled by the sweep.
pub const DEFAULT_X_BOUNDS: (f64, f64) = (-10.0, 10.0);

/// Distance between consecutive sweep samples.
pub const DEFAULT_STEP: f64 = 0.1;

/// y interval a plot of the sweep should display.
pub const DEFAULT_Y_BOUNDS: (f64, f64) = (-10.0, 50.0);

/// Largest sweep grid the validator accepts.
pub const MAX_SAMPLES: usize = 1_000_000;

/// Convert an `f64` constant into `T`.
///
/// Every `Float` can represent (possibly rounded) `f64` values; NaN is only
/// returned by exotic `Float` implementations that refuse the conversion.
#[inline]
pub fn cast<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}

//! Truncated Taylor series evaluators.
//!
//! ## Purpose
//!
//! This module computes the degree-N partial sums of the four supported
//! expansions and the reference ("true") values they approximate. The
//! convergence driver and the sweep both evaluate through here.
//!
//! ## Design notes
//!
//! * **Recurrences**: Exp, cos and ln build each term from the previous one
//!   (`t_i = t_{i-1} * ratio`) instead of forming powers and factorials, so
//!   no intermediate overflows before the term itself does.
//! * **Summation**: Plain left-to-right floating-point accumulation. No
//!   compensated summation.
//! * **Dispatch**: `SeriesFunction::evaluate` / `reference` use an exhaustive
//!   `match`; `a` is ignored for exp and cos.
//!
//! ## Key concepts
//!
//! | Function | Term i                                  | Range       | Reference  |
//! |----------|-----------------------------------------|-------------|------------|
//! | exp      | x^i / i!                                | 0..N-1      | e^x        |
//! | cos      | (-1)^i x^(2i) / (2i)!                   | 0..N-1      | cos(x)     |
//! | binom    | C(a, i) x^i                             | 0..N-1      | (1+x)^a    |
//! | ln       | ln(a) + (-1)^(i+1) (x-a)^i / (i a^i)    | 1..N-1      | ln(x)      |
//!
//! ## Invariants
//!
//! * Evaluators are pure: identical inputs give bit-identical outputs.
//! * N = 1 yields the leading term alone (1 for exp/cos/binom, ln(a) for ln).
//! * N = 0 yields the empty sum (0), or ln(a) for ln.
//!
//! ## Non-goals
//!
//! * Evaluators do not check the domain or radius of convergence. Outside it
//!   they return whatever the arithmetic produces (NaN, inf, or a diverging
//!   partial sum).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::combination::generalized_binomial;
use crate::primitives::function::SeriesFunction;

// ============================================================================
// Evaluators
// ============================================================================

/// Partial sum of the Maclaurin series of `exp(x)` with `n` terms.
pub fn exp_series<T: Float>(x: T, n: usize) -> T {
    let mut sum = T::zero();
    let mut term = T::one();
    let mut k = T::zero();

    for i in 0..n {
        if i > 0 {
            k = k + T::one();
            term = term * x / k;
        }
        sum = sum + term;
    }
    sum
}

/// Partial sum of the Maclaurin series of `cos(x)` with `n` even-power terms.
pub fn cos_series<T: Float>(x: T, n: usize) -> T {
    let neg_x2 = -(x * x);
    let mut sum = T::zero();
    let mut term = T::one();
    let mut k = T::zero();

    for i in 0..n {
        if i > 0 {
            // (2i - 1) * (2i)
            let lo = k + T::one();
            let hi = lo + T::one();
            k = hi;
            term = term * neg_x2 / (lo * hi);
        }
        sum = sum + term;
    }
    sum
}

/// Partial sum of the binomial series of `(1 + x)^a` with `n` terms.
pub fn binomial_series<T: Float>(x: T, a: T, n: usize) -> T {
    let mut sum = T::zero();
    let mut x_pow = T::one();

    for i in 0..n {
        sum = sum + generalized_binomial(a, i as i64) * x_pow;
        x_pow = x_pow * x;
    }
    sum
}

/// Partial sum of the Taylor series of `ln(x)` around `a`.
///
/// The constant `ln(a)` is always included; `n` counts it as the first term,
/// so terms `1..n` of the alternating tail are added.
pub fn ln_series<T: Float>(x: T, a: T, n: usize) -> T {
    let ratio = (x - a) / a;
    let mut sum = a.ln();
    let mut ratio_pow = T::one();
    let mut k = T::zero();

    for i in 1..n {
        k = k + T::one();
        ratio_pow = ratio_pow * ratio;
        let term = ratio_pow / k;
        sum = if i % 2 == 1 { sum + term } else { sum - term };
    }
    sum
}

// ============================================================================
// Dispatch
// ============================================================================

impl SeriesFunction {
    /// Evaluate the `n`-term expansion at `x`; `a` is the exponent (binom) or
    /// center (ln) and is ignored otherwise.
    #[inline]
    pub fn evaluate<T: Float>(self, x: T, a: T, n: usize) -> T {
        match self {
            Self::Exp => exp_series(x, n),
            Self::Cos => cos_series(x, n),
            Self::Binom => binomial_series(x, a, n),
            Self::Ln => ln_series(x, a, n),
        }
    }

    /// The value the expansion approximates.
    #[inline]
    pub fn reference<T: Float>(self, x: T, a: T) -> T {
        match self {
            Self::Exp => x.exp(),
            Self::Cos => x.cos(),
            Self::Binom => (T::one() + x).powf(a),
            Self::Ln => x.ln(),
        }
    }

    /// Whether the function and its expansion are defined at `x` with
    /// parameter `a`.
    ///
    /// Only ln is restricted: it needs `x > 0` and a positive center.
    #[inline]
    pub fn in_domain<T: Float>(self, x: T, a: T) -> bool {
        match self {
            Self::Exp | Self::Cos | Self::Binom => true,
            Self::Ln => x > T::zero() && a > T::zero(),
        }
    }
}

#![cfg(feature = "dev")]
//! Tests for the truncated series evaluators.
//!
//! ## Test Organization
//!
//! 1. **Leading Terms** - N = 1 yields the i = 0 term alone
//! 2. **Accuracy** - Partial sums approach the reference values
//! 3. **Monotonicity** - Error does not grow once terms shrink
//! 4. **Purity** - Repeated calls are bit-identical
//! 5. **Degenerate Inputs** - x = 0, x = a, integer exponents

use approx::assert_relative_eq;

use taylor_rs::internals::algorithms::series::{
    binomial_series, cos_series, exp_series, ln_series,
};
use taylor_rs::internals::primitives::function::SeriesFunction;

// ============================================================================
// Leading Terms
// ============================================================================

#[test]
fn test_single_term_is_leading_term() {
    for &x in &[-3.0, -0.5, 0.0, 0.7, 4.0] {
        assert_eq!(exp_series(x, 1), 1.0);
        assert_eq!(cos_series(x, 1), 1.0);
        assert_eq!(binomial_series(x, 2.5, 1), 1.0);
        assert_eq!(ln_series(x, 2.0, 1), 2.0_f64.ln());
    }
}

#[test]
fn test_zero_terms_is_empty_sum() {
    assert_eq!(exp_series(1.0_f64, 0), 0.0);
    assert_eq!(cos_series(1.0_f64, 0), 0.0);
    assert_eq!(binomial_series(1.0_f64, 0.5, 0), 0.0);
    assert_eq!(ln_series(1.5_f64, 2.0, 0), 2.0_f64.ln());
}

// ============================================================================
// Accuracy
// ============================================================================

#[test]
fn test_exp_converges() {
    for &x in &[-4.0_f64, -1.0, 0.5, 1.0, 3.0] {
        assert_relative_eq!(exp_series(x, 40), x.exp(), max_relative = 1e-10);
    }
}

#[test]
fn test_cos_converges() {
    for &x in &[-5.0_f64, -1.0, 0.25, 2.0, 5.0] {
        assert_relative_eq!(cos_series(x, 30), x.cos(), epsilon = 1e-10);
    }
}

#[test]
fn test_square_root_series() {
    // a = 1/2 gives sqrt(1 + x)
    assert_relative_eq!(binomial_series(0.5_f64, 0.5, 40), 1.5_f64.sqrt(), epsilon = 1e-10);
    assert_relative_eq!(binomial_series(-0.5_f64, 0.5, 60), 0.5_f64.sqrt(), epsilon = 1e-10);
}

#[test]
fn test_geometric_series() {
    // a = -1 gives 1 / (1 + x) = 1 - x + x^2 - ...
    assert_relative_eq!(binomial_series(0.25_f64, -1.0, 50), 0.8, epsilon = 1e-12);
}

#[test]
fn test_ln_converges_inside_radius() {
    // |x - a| < a
    assert_relative_eq!(ln_series(1.5_f64, 1.0, 60), 1.5_f64.ln(), epsilon = 1e-10);
    assert_relative_eq!(ln_series(3.0_f64, 2.0, 60), 3.0_f64.ln(), epsilon = 1e-10);
}

#[test]
fn test_ln_diverges_outside_radius() {
    // |x - a| = 2 > a = 1
    let few = (ln_series(3.0_f64, 1.0, 5) - 3.0_f64.ln()).abs();
    let many = (ln_series(3.0_f64, 1.0, 40) - 3.0_f64.ln()).abs();
    assert!(many > few);
}

// ============================================================================
// Monotonicity
// ============================================================================

#[test]
fn test_exp_error_non_increasing_for_positive_x() {
    for &x in &[0.0_f64, 0.5, 1.0, 2.5, 5.0] {
        let mut prev = f64::INFINITY;
        for n in 1..40 {
            let err = (exp_series(x, n) - x.exp()).abs();
            assert!(err <= prev + 1e-12, "x={} n={}", x, n);
            prev = err;
        }
    }
}

#[test]
fn test_error_non_increasing_once_terms_shrink() {
    for &x in &[-5.0_f64, -2.0, 1.5, 3.0, 5.0] {
        let start = 2 * x.abs().ceil() as usize + 2;
        for func in [SeriesFunction::Exp, SeriesFunction::Cos] {
            let actual = func.reference(x, 0.0);
            let mut prev = f64::INFINITY;
            for n in start..50 {
                let err = (func.evaluate(x, 0.0, n) - actual).abs();
                assert!(err <= prev + 1e-12, "{} x={} n={}", func, x, n);
                prev = err;
            }
        }
    }
}

// ============================================================================
// Purity
// ============================================================================

#[test]
fn test_repeated_evaluation_is_bit_identical() {
    for func in SeriesFunction::ALL {
        let first = func.evaluate(0.37_f64, 1.3, 17);
        let second = func.evaluate(0.37_f64, 1.3, 17);
        assert_eq!(first.to_bits(), second.to_bits(), "{}", func);
    }
}

// ============================================================================
// Degenerate Inputs
// ============================================================================

#[test]
fn test_ln_at_center_is_ln_center() {
    for n in 0..20 {
        assert_eq!(ln_series(1.0_f64, 1.0, n), 0.0);
        assert_eq!(ln_series(4.0_f64, 4.0, n), 4.0_f64.ln());
    }
}

#[test]
fn test_binomial_at_zero_is_one() {
    for n in 1..10 {
        assert_eq!(binomial_series(0.0_f64, -2.7, n), 1.0);
    }
}

#[test]
fn test_f32_evaluation() {
    assert_relative_eq!(exp_series(1.0_f32, 12), core::f32::consts::E, max_relative = 1e-6);
    assert_relative_eq!(cos_series(1.0_f32, 8), 1.0_f32.cos(), epsilon = 1e-6);
}

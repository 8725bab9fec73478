#![cfg(feature = "dev")]
//! Tests for fixed-order domain sweeps.
//!
//! ## Test Organization
//!
//! 1. **Grid** - Sample count and spacing
//! 2. **Samples** - Values match direct evaluation
//! 3. **Sentinels** - Undefined ln samples are NaN
//! 4. **Plot Metadata** - Title, legend and bounds
//! 5. **Validation** - Rejected configurations

use approx::assert_relative_eq;

use taylor_rs::internals::evaluation::sweep::{sweep, SweepConfig};
use taylor_rs::internals::primitives::errors::TaylorError;
use taylor_rs::internals::primitives::function::SeriesFunction;

// ============================================================================
// Grid
// ============================================================================

#[test]
fn test_grid_is_half_open() {
    let config = SweepConfig::<f64> {
        x_low: 0.0,
        x_high: 1.0,
        step: 0.25,
        ..SweepConfig::default()
    };
    assert_eq!(config.grid(), vec![0.0, 0.25, 0.5, 0.75]);
}

#[test]
fn test_grid_partial_last_step() {
    let config = SweepConfig::<f64> {
        x_low: 0.0,
        x_high: 1.0,
        step: 0.3,
        ..SweepConfig::default()
    };
    let grid = config.grid();
    assert_eq!(grid.len(), 4);
    assert_relative_eq!(grid[3], 0.9, epsilon = 1e-12);
}

// ============================================================================
// Samples
// ============================================================================

#[test]
fn test_samples_match_direct_evaluation() {
    let config = SweepConfig::<f64>::default();
    let result = sweep(&config, &SeriesFunction::ALL).unwrap();

    assert_eq!(result.x.len(), 200);
    assert_eq!(result.series.len(), 4);

    for series in &result.series {
        assert_eq!(series.approx.len(), result.x.len());
        assert_eq!(series.actual.len(), result.x.len());
        for (i, &x) in result.x.iter().enumerate() {
            if !series.function.in_domain(x, config.center) {
                continue;
            }
            assert_eq!(
                series.approx[i],
                series.function.evaluate(x, config.center, config.order)
            );
            assert_eq!(series.actual[i], series.function.reference(x, config.center));
        }
    }
}

#[test]
fn test_order_five_exp_at_one() {
    let config = SweepConfig::<f64> {
        x_low: 1.0,
        x_high: 2.0,
        step: 1.0,
        ..SweepConfig::default()
    };
    let result = sweep(&config, &[SeriesFunction::Exp]).unwrap();
    let exp = result.series_for(SeriesFunction::Exp).unwrap();

    // 1 + 1 + 1/2 + 1/6 + 1/24
    assert_relative_eq!(exp.approx[0], 65.0 / 24.0, epsilon = 1e-12);
    assert_relative_eq!(exp.actual[0], core::f64::consts::E);
}

#[test]
fn test_requested_order_is_kept() {
    let config = SweepConfig::<f64>::default();
    let order = [SeriesFunction::Ln, SeriesFunction::Exp];
    let result = sweep(&config, &order).unwrap();

    let got: Vec<_> = result.series.iter().map(|s| s.function).collect();
    assert_eq!(got, order);
    assert!(result.series_for(SeriesFunction::Cos).is_none());
}

// ============================================================================
// Sentinels
// ============================================================================

#[test]
fn test_ln_undefined_samples_are_nan() {
    let config = SweepConfig::<f64>::default();
    let result = sweep(&config, &[SeriesFunction::Ln]).unwrap();
    let ln = &result.series[0];

    for (i, &x) in result.x.iter().enumerate() {
        if x <= 0.0 {
            assert!(ln.approx[i].is_nan(), "x={}", x);
            assert!(ln.actual[i].is_nan(), "x={}", x);
        } else {
            assert!(!ln.approx[i].is_nan(), "x={}", x);
            assert!(!ln.actual[i].is_nan(), "x={}", x);
        }
    }
    assert!(ln.max_error().is_some());
}

#[test]
fn test_max_error_over_defined_samples() {
    let config = SweepConfig::<f64> {
        x_low: 0.5,
        x_high: 1.5,
        step: 0.5,
        ..SweepConfig::default()
    };
    let result = sweep(&config, &[SeriesFunction::Ln]).unwrap();
    let ln = &result.series[0];

    let expected = result
        .x
        .iter()
        .zip(ln.approx.iter().zip(&ln.actual))
        .map(|(_, (a, b))| (a - b).abs())
        .fold(0.0_f64, f64::max);
    assert_eq!(ln.max_error(), Some(expected));
}

// ============================================================================
// Plot Metadata
// ============================================================================

#[test]
fn test_title_legend_and_bounds() {
    let config = SweepConfig::<f64>::default();
    let result = sweep(&config, &SeriesFunction::ALL).unwrap();

    assert_eq!(result.title(), "Taylor Approximations (Order 5)");
    assert_eq!(result.x_bounds, (-10.0, 10.0));
    assert_eq!(result.y_bounds, (-10.0, 50.0));

    let legend = result.legend();
    assert_eq!(legend.len(), 8);
    assert_eq!(legend[0], "Taylor exp(x) (order 5)");
    assert_eq!(legend[1], "Actual exp(x)");
    assert_eq!(legend[4], "Taylor (1+x)^a (order 5)");
    assert_eq!(legend[7], "Actual ln(x)");
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_rejects_inverted_x_range() {
    let config = SweepConfig::<f64> {
        x_low: 1.0,
        x_high: -1.0,
        ..SweepConfig::default()
    };
    assert_eq!(
        sweep(&config, &SeriesFunction::ALL),
        Err(TaylorError::InvalidRange {
            axis: "x",
            low: 1.0,
            high: -1.0,
        })
    );
}

#[test]
fn test_rejects_bad_step() {
    for step in [0.0, -0.1, f64::INFINITY, 1e-9] {
        let config = SweepConfig::<f64> {
            step,
            ..SweepConfig::default()
        };
        assert!(
            matches!(
                sweep(&config, &SeriesFunction::ALL),
                Err(TaylorError::InvalidStep(_))
            ),
            "step={}",
            step
        );
    }
}

#[test]
fn test_rejects_zero_order() {
    let config = SweepConfig::<f64> {
        order: 0,
        ..SweepConfig::default()
    };
    assert_eq!(
        sweep(&config, &SeriesFunction::ALL),
        Err(TaylorError::InvalidOrder(0))
    );
}

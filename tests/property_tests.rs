//! Property-based tests for the evaluators and the convergence search.

use proptest::prelude::*;

use taylor_rs::generalized_binomial;
use taylor_rs::prelude::*;

fn model(center: f64) -> TaylorModel<f64> {
    Taylor::new().center(center).build().unwrap()
}

fn check_invariants(model: &TaylorModel<f64>, x: f64, func: SeriesFunction) -> Result<(), TestCaseError> {
    let tol = model.driver().tolerance;
    let cap = model.driver().max_terms;
    let r = model.approximate(x, func).unwrap();

    prop_assert!(r.terms >= 1 && r.terms <= cap);
    prop_assert_eq!(r.converged, r.error < tol);
    if r.terms < cap {
        prop_assert!(r.converged);
    }
    if r.converged && r.terms > 1 {
        let before = (model.evaluate(func, x, r.terms - 1) - r.actual).abs();
        prop_assert!(!(before < tol));
    }
    Ok(())
}

proptest! {
    // Evaluators are pure

    #[test]
    fn evaluators_are_bit_identical(x in -5.0f64..5.0, a in 0.1f64..3.0, n in 0usize..60) {
        for func in SeriesFunction::ALL {
            let first = func.evaluate(x, a, n);
            let second = func.evaluate(x, a, n);
            prop_assert_eq!(first.to_bits(), second.to_bits());
        }
    }

    // Pascal's rule holds for real upper index

    #[test]
    fn binomial_pascal_rule(a in -4.0f64..4.0, i in 0i64..12) {
        let lhs = generalized_binomial(a, i) + generalized_binomial(a, i + 1);
        let rhs = generalized_binomial(a + 1.0, i + 1);
        prop_assert!((lhs - rhs).abs() <= 1e-9 * (1.0 + rhs.abs()));
    }

    // Driver invariants

    #[test]
    fn exp_driver_invariants(x in -5.0f64..5.0) {
        check_invariants(&model(1.0), x, Exp)?;
    }

    #[test]
    fn cos_driver_invariants(x in -5.0f64..5.0) {
        check_invariants(&model(1.0), x, Cos)?;
    }

    #[test]
    fn binom_driver_invariants(x in -0.9f64..0.9, a in -3.0f64..3.0) {
        check_invariants(&model(a), x, Binom)?;
    }

    #[test]
    fn explicit_center_matches_rebuilt_model(x in -0.9f64..0.9, a in -3.0f64..3.0) {
        let explicit = model(1.0).approximate_with(x, Binom, a).unwrap();
        let rebuilt = model(a).approximate(x, Binom).unwrap();
        prop_assert_eq!(explicit, rebuilt);
    }

    #[test]
    fn ln_driver_invariants(x in 0.1f64..1.9) {
        check_invariants(&model(1.0), x, Ln)?;
    }

    // Inside the radius of convergence the search always succeeds

    #[test]
    fn exp_and_cos_converge_near_origin(x in -5.0f64..5.0) {
        let m = model(1.0);
        prop_assert!(m.approximate(x, Exp).unwrap().converged);
        prop_assert!(m.approximate(x, Cos).unwrap().converged);
    }
}

use super::*;
use test_log::test;

fn assert_near(a: f64, b: f64, tol: f64, msg: &str) {
    assert!(
        (a - b).abs() < tol,
        "{}: {} vs {} (diff {})",
        msg,
        a,
        b,
        (a - b).abs()
    );
}

// ═══════════════════════════════════════════════════════════════════
// Convergence
// ═══════════════════════════════════════════════════════════════════

#[test]
fn bisect_square() {
    let r = bisect_log10(|x: f64| x * x, 4.0, -1.0, 1.0, &BisectSettings::default()).unwrap();
    assert!(r.fx.abs() < 1e-6, "|f(x) - 4| = {}", r.fx.abs());
    assert_near(r.x, 2.0, 1e-6, "bisect x² = 4");
    assert_eq!(r.evals, r.iterations + 3);
}

#[test]
fn bisect_decreasing() {
    // 1/x is decreasing; 1/x = 0.01 at x = 100
    let r = bisect_log10(|x: f64| x.recip(), 0.01, -10.0, 10.0, &BisectSettings::default())
        .unwrap();
    assert!(r.fx.abs() < 1e-6);
    assert!((r.x - 100.0).abs() < 1.0, "x = {}", r.x);
}

#[test]
fn bisect_default_bracket_spans_decades() {
    let (lo, hi) = DEFAULT_LOG_BRACKET;
    let r = bisect_log10(|x: f64| x.log10(), 7.5, lo, hi, &BisectSettings::default()).unwrap();
    assert_near(r.x.log10(), 7.5, 1e-6, "log10 inversion");
}

#[test]
fn bisect_exact_midpoint_hit() {
    // First midpoint of [-2, 2] is 10^0 = 1, already the root
    let r = bisect_log10(|x: f64| x, 1.0, -2.0, 2.0, &BisectSettings::default()).unwrap();
    assert_eq!(r.iterations, 0);
    assert_eq!(r.x, 1.0);
}

#[test]
fn bisect_f32() {
    let r = bisect_log10(|x: f32| x * x, 2.0, -1.0, 1.0, &BisectSettings::<f32>::default())
        .unwrap();
    assert!((r.x - core::f32::consts::SQRT_2).abs() < 2e-4, "bisect f32: {}", r.x);
}

#[test]
fn default_tolerance_follows_precision() {
    assert_eq!(BisectSettings::<f64>::default().f_tol, 1e-6);
    let f32_tol = BisectSettings::<f32>::default().f_tol;
    assert_eq!(f32_tol, f32::EPSILON.sqrt());
    assert!(f32_tol > 1e-6);
}

// ═══════════════════════════════════════════════════════════════════
// Failure modes
// ═══════════════════════════════════════════════════════════════════

#[test]
fn bisect_not_bracketed() {
    let r = bisect_log10(|x: f64| x, 100.0, -10.0, -1.0, &BisectSettings::default());
    assert_eq!(r.unwrap_err(), OptimError::BracketInvalid);
}

#[test]
fn bisect_endpoint_on_target_is_not_a_bracket() {
    // d_lo = 0, so d_lo · d_hi is not strictly negative
    let r = bisect_log10(|x: f64| x, 1.0, 0.0, 1.0, &BisectSettings::default());
    assert_eq!(r.unwrap_err(), OptimError::BracketInvalid);
}

#[test]
fn bisect_nan_function_is_not_a_bracket() {
    let r = bisect_log10(|_: f64| f64::NAN, 1.0, -1.0, 1.0, &BisectSettings::default());
    assert_eq!(r.unwrap_err(), OptimError::BracketInvalid);
}

#[test]
fn bisect_step_function_hits_iteration_limit() {
    // Brackets 5 but never gets within tolerance of it
    let step = |x: f64| if x < 2.0 { 0.0 } else { 10.0 };
    let r = bisect_log10(step, 5.0, -10.0, 10.0, &BisectSettings::default());
    assert_eq!(r.unwrap_err(), OptimError::MaxIterations);
}

#[test]
fn bisect_zero_tolerance_hits_iteration_limit() {
    let settings = BisectSettings {
        f_tol: 0.0,
        max_iter: 10,
    };
    let mut calls = 0;
    let r = bisect_log10(
        |x: f64| {
            calls += 1;
            x * x
        },
        3.0,
        -1.0,
        1.0,
        &settings,
    );
    assert_eq!(r.unwrap_err(), OptimError::MaxIterations);
    // two endpoints plus max_iter + 1 midpoints
    assert_eq!(calls, 13);
}

// ═══════════════════════════════════════════════════════════════════
// NaN propagation
// ═══════════════════════════════════════════════════════════════════

#[test]
fn bisect_nan_inputs_propagate() {
    let s = BisectSettings::default();
    for (target, lo, hi) in [
        (f64::NAN, -1.0, 1.0),
        (4.0, f64::NAN, 1.0),
        (4.0, -1.0, f64::NAN),
    ] {
        let mut called = false;
        let r = bisect_log10(
            |x: f64| {
                called = true;
                x * x
            },
            target,
            lo,
            hi,
            &s,
        )
        .unwrap();
        assert!(r.x.is_nan() && r.fx.is_nan());
        assert!(!r.is_defined());
        assert!(!called, "function evaluated for NaN input");
    }
}

#[test]
fn error_display() {
    use alloc::string::ToString;
    assert!(OptimError::BracketInvalid.to_string().contains("bracket"));
    assert!(OptimError::MaxIterations.to_string().contains("iterations"));
}

mod proptests {
    use super::super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn power_law_inverted(k in 0.5_f64..3.0, log_root in -5.0_f64..5.0) {
            // f(x) = x^k, target chosen so the root is 10^log_root
            let root = 10f64.powf(log_root);
            let target = root.powf(k);
            prop_assume!(target < 1e6);
            let r = bisect_log10(|x: f64| x.powf(k), target, -10.0, 10.0, &BisectSettings::default())
                .unwrap();
            prop_assert!(r.fx.abs() < 1e-6);
        }

        #[test]
        fn nan_target_never_errors(lo in -10.0_f64..0.0, hi in 0.0_f64..10.0) {
            let r = bisect_log10(|x: f64| x, f64::NAN, lo, hi, &BisectSettings::default()).unwrap();
            prop_assert!(r.x.is_nan());
            prop_assert!(r.fx.is_nan());
        }
    }
}

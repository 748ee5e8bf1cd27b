use super::*;

#[test]
fn endpoints_are_exact() {
    let curves = [
        CubicBezier::ease_in_out(),
        CubicBezier::ease(),
        CubicBezier::new(0.25, 0.1, 0.25, 1.0).unwrap(),
        CubicBezier::new(1.0, -0.5, 0.0, 1.5).unwrap(),
    ];
    for curve in curves {
        assert_eq!(curve.eval(0.0), 0.0);
        assert_eq!(curve.eval(1.0), 1.0);
    }
}

#[test]
fn ease_in_out_is_monotonic() {
    let curve = CubicBezier::ease_in_out();
    let mut prev = 0.0;
    for i in 0..=100 {
        let y = curve.eval(i as f64 / 100.0);
        assert!(y >= prev - 1e-9, "not monotonic at sample {i}");
        prev = y;
    }
}

#[test]
fn ease_in_out_is_symmetric() {
    let curve = CubicBezier::ease_in_out();
    assert_eq!(curve.eval(0.5), 0.5);
    for i in 1..100 {
        let x = i as f64 / 100.0;
        let sum = curve.eval(x) + curve.eval(1.0 - x);
        assert!((sum - 1.0).abs() < 1e-3, "asymmetric at x = {x}: {sum}");
    }
}

#[test]
fn near_one_values_snap_to_one() {
    // The long tail just below the end state settles at exactly 1.0.
    let curve = CubicBezier::ease_in_out();
    assert_eq!(curve.eval(0.999), 1.0);
    assert_eq!(curve.eval(0.9999), 1.0);
}

#[test]
fn zero_slope_start_does_not_diverge() {
    // x-polynomial with zero derivative at t = 0; the solver must bail out
    // instead of dividing by zero.
    let curve = CubicBezier::new(0.0, 0.3, 1.0, 0.7).unwrap();
    assert_eq!(curve.eval(0.0), 0.0);
    let mid = curve.eval(0.5);
    assert!(mid.is_finite());
}

#[test]
fn x_control_points_are_validated() {
    assert!(CubicBezier::new(-0.1, 0.0, 0.5, 1.0).is_err());
    assert!(CubicBezier::new(0.5, 0.0, 1.1, 1.0).is_err());
    assert!(CubicBezier::new(f64::NAN, 0.0, 0.5, 1.0).is_err());
    assert!(CubicBezier::new(0.5, f64::INFINITY, 0.5, 1.0).is_err());
    // y values outside [0, 1] are legal (overshooting curves).
    assert!(CubicBezier::new(0.5, -2.0, 0.5, 3.0).is_ok());
}

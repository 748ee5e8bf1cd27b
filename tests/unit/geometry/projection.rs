use super::*;
use kurbo::Size;

#[test]
fn identity_leaves_points_unchanged() {
    let p = Point::new(12.5, -3.0);
    assert_eq!(Transform3D::IDENTITY.project(p, 0.0), p);
    assert_eq!(Transform3D::IDENTITY.project(p, 60.0), p);
}

#[test]
fn perspective_magnifies_lifted_points() {
    // w = 1 - z / eye_distance, so a point at z = 60 with a 200 eye distance
    // projects scaled by 1 / 0.7.
    let transform = Transform3D::perspective(200.0);
    let projected = transform.project(Point::new(10.0, -20.0), 60.0);
    assert!((projected.x - 10.0 / 0.7).abs() < 1e-12);
    assert!((projected.y - -20.0 / 0.7).abs() < 1e-12);

    // Points on the surface are unaffected.
    let flat = transform.project(Point::new(10.0, -20.0), 0.0);
    assert_eq!(flat, Point::new(10.0, -20.0));
}

#[test]
fn zero_w_skips_the_perspective_division() {
    // A degenerate matrix mapping every surface point to w = 0; the
    // projection returns the untransformed coordinates instead of dividing
    // by zero.
    let transform = Transform3D {
        m44: 0.0,
        ..Transform3D::IDENTITY
    };
    let projected = transform.project(Point::new(7.0, 9.0), 0.0);
    assert_eq!(projected, Point::new(7.0, 9.0));
}

#[test]
fn overlay_bounds_match_hand_computed_frame() {
    let spec = SheetSpec::new(20, Size::new(200.0, 200.0)).unwrap();
    let bounds = overlay_bounds(&spec);

    // Corners at (±120, ±120, 60) with w = 0.7, recentered by +100.
    let expected_min = -120.0 / 0.7 + 100.0;
    let expected_max = 120.0 / 0.7 + 100.0;
    assert!((bounds.x0 - expected_min).abs() < 1e-9);
    assert!((bounds.y0 - expected_min).abs() < 1e-9);
    assert!((bounds.x1 - expected_max).abs() < 1e-9);
    assert!((bounds.y1 - expected_max).abs() < 1e-9);

    // The projected overlay is strictly larger than the padded sheet.
    assert!(bounds.width() > spec.bounding_size().width);
    assert!(bounds.height() > spec.bounding_size().height);
}

#[test]
fn overlay_bounds_shrink_toward_sheet_at_large_eye_distance() {
    let spec = SheetSpec::new(20, Size::new(200.0, 200.0))
        .unwrap()
        .with_eye_distance(1e9);
    let bounds = overlay_bounds(&spec);
    let padded = spec.bounding_size();
    assert!((bounds.width() - padded.width).abs() < 1e-4);
    assert!((bounds.height() - padded.height).abs() < 1e-4);
}

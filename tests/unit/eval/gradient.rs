use super::*;

#[test]
fn stop_counts_track_segment_count() {
    for n in [1usize, 7, 20, 64] {
        assert_eq!(shadow_mask_curve(n, 0.5, Direction::Forward).len(), n + 1);
        assert_eq!(glare_curve(n, 0.5).len(), 2 * n + 1);
    }
    assert!(shadow_mask_curve(0, 0.5, Direction::Forward).is_empty());
    assert!(glare_curve(0, 0.5).is_empty());
}

#[test]
fn stops_are_evenly_spaced_over_the_sheet() {
    let curve = shadow_mask_curve(20, 0.3, Direction::Forward);
    assert_eq!(curve.stops[0].position, 0.0);
    assert_eq!(curve.stops[20].position, 1.0);
    for (i, stop) in curve.stops.iter().enumerate() {
        assert!((stop.position - i as f64 / 20.0).abs() < 1e-12);
    }
}

#[test]
fn shadow_alphas_stay_in_unit_range() {
    for direction in [Direction::Forward, Direction::Reverse] {
        for fi in 0..=20 {
            let fraction = fi as f64 / 20.0;
            for stop in shadow_mask_curve(20, fraction, direction).stops {
                assert!((0.0..=1.0).contains(&stop.alpha));
            }
        }
    }
}

#[test]
fn shadow_mask_tracks_the_lift() {
    // Flat sheet: no shadow anywhere. Fully lifted: full shadow everywhere.
    for stop in shadow_mask_curve(20, 0.0, Direction::Forward).stops {
        assert_eq!(stop.alpha, 0.0);
    }
    for stop in shadow_mask_curve(20, 1.0, Direction::Forward).stops {
        assert_eq!(stop.alpha, 1.0);
    }
}

#[test]
fn glare_alphas_peak_at_the_band_maximum() {
    let mut peak: f64 = 0.0;
    for fi in 0..=100 {
        let fraction = fi as f64 / 100.0;
        for stop in glare_curve(20, fraction).stops {
            assert!(stop.alpha >= 0.0);
            assert!(stop.alpha <= GLARE_PEAK_ALPHA + 1e-12);
            peak = peak.max(stop.alpha);
        }
    }
    assert!(peak > GLARE_PEAK_ALPHA * 0.99);
}

#[test]
fn glare_always_sweeps_from_the_top_edge() {
    // Early in the sweep the band sits in the sheet's top half. The sweep
    // direction is fixed: there is deliberately no way to point the band the
    // other way, whichever direction the sheet itself peels.
    let curve = glare_curve(20, 0.25);
    let brightest = curve
        .stops
        .iter()
        .max_by(|a, b| a.alpha.total_cmp(&b.alpha))
        .unwrap();
    assert!(brightest.alpha > 0.0);
    assert!(brightest.position < 0.5);

    // Late in the sweep it has moved to the bottom half.
    let curve = glare_curve(20, 0.75);
    let brightest = curve
        .stops
        .iter()
        .max_by(|a, b| a.alpha.total_cmp(&b.alpha))
        .unwrap();
    assert!(brightest.position > 0.5);
}

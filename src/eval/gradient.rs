use crate::animation::window::SweepWindow;
use crate::foundation::core::Direction;

/// Peak alpha of the glare band.
pub const GLARE_PEAK_ALPHA: f64 = 0.15;

/// One sample of a 1D alpha profile over the sheet.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GradientStop {
    /// Normalized position along the sheet, `0` at the top edge.
    pub position: f64,
    /// Sample alpha in `[0, 1]`.
    pub alpha: f64,
}

/// Ordered alpha profile over the sheet, recomputed every frame.
///
/// Stops are evenly spaced; their count is a resolution choice independent of
/// the segment count driving the layer geometry.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GradientCurve {
    /// Samples in ascending position order.
    pub stops: Vec<GradientStop>,
}

impl GradientCurve {
    /// Number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// `true` when the curve has no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}

fn sampled(sample_count: usize, alpha_at: impl Fn(f64) -> f64) -> GradientCurve {
    if sample_count == 0 {
        return GradientCurve::default();
    }
    let stops = (0..=sample_count)
        .map(|i| {
            let position = i as f64 / sample_count as f64;
            GradientStop {
                position,
                alpha: alpha_at(position),
            }
        })
        .collect();
    GradientCurve { stops }
}

/// Alpha mask over the drop-shadow stack: `segment_count + 1` stops, each the
/// rotation-window activation at its position.
///
/// The mask fades the blurred shadow in step with the lift of the sheet above
/// it. A zero `segment_count` yields an empty curve.
pub fn shadow_mask_curve(
    segment_count: usize,
    fraction: f64,
    direction: Direction,
) -> GradientCurve {
    let window = SweepWindow::rotation();
    sampled(segment_count, |position| {
        window.activation(fraction, position, direction)
    })
}

/// Specular glare band: `2 * segment_count + 1` stops peaking at
/// [`GLARE_PEAK_ALPHA`].
///
/// The band always sweeps from the top edge, whatever direction the sheet
/// itself peels; callers wanting a direction-matched glare must remap
/// `fraction` themselves. A zero `segment_count` yields an empty curve.
pub fn glare_curve(segment_count: usize, fraction: f64) -> GradientCurve {
    let window = SweepWindow::glare();
    sampled(segment_count * 2, |position| {
        window.activation(fraction, position, Direction::Forward) * GLARE_PEAK_ALPHA
    })
}

#[cfg(test)]
#[path = "../../tests/unit/eval/gradient.rs"]
mod tests;

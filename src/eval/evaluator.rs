use std::f64::consts::FRAC_PI_2;

use kurbo::{Point, Rect, Size};

use crate::{
    animation::driver::{FrameInput, PhaseSchedule},
    animation::window::SweepWindow,
    eval::gradient::{GradientCurve, glare_curve, shadow_mask_curve},
    foundation::core::Direction,
    foundation::error::{PeelError, PeelResult},
    geometry::sheet::SheetLayout,
};

/// Fully evaluated sticker state for one tick.
#[derive(Clone, Debug, serde::Serialize)]
pub struct FrameState {
    /// Global progress the frame was evaluated at, clamped to `[0, 1]`.
    pub fraction: f64,
    /// Sweep direction the frame was evaluated with.
    pub direction: Direction,
    /// Per-segment geometry in top-to-bottom order.
    pub segments: Vec<SegmentGeometry>,
    /// Alpha mask over the drop-shadow stack.
    pub shadow_mask: GradientCurve,
    /// Specular glare band profile.
    pub glare: GradientCurve,
}

/// Geometry of one segment for one frame.
///
/// The content, shadow, and glare stacks share this geometry 1:1. A renderer
/// applies the same rotation, depth, position, and bounds to all three layers
/// of a segment index and varies only the source bitmap per stack.
#[derive(Clone, Copy, Debug, serde::Serialize)]
pub struct SegmentGeometry {
    /// Segment index, `0` at the top of the sheet.
    pub index: usize,
    /// Rotation about the x axis through the segment's top edge, in radians;
    /// `0` is flat on the surface.
    pub angle: f64,
    /// Depth of the segment's top edge.
    pub z_position: f64,
    /// Rest-frame position of the segment's anchor (its top-left corner).
    pub position: Point,
    /// Segment bounds: full padded width by the slant height between the two
    /// edges. Flat segments keep the sheet's segment height; tilted segments
    /// take the hypotenuse, so `size.height * angle.cos()` always recovers
    /// the flat height.
    pub size: Size,
    /// Normalized crop rect into the padded snapshot, copied from the layout.
    pub content_rect: Rect,
}

/// Stateless evaluator from sheet layout and driver input to frame state.
pub struct Evaluator;

impl Evaluator {
    /// Evaluate one frame.
    ///
    /// Pure and synchronous: every segment transform and both gradient curves
    /// are recomputed before the call returns, and nothing carries over
    /// between calls. The fraction is clamped into `[0, 1]`; a non-finite
    /// fraction is an evaluation error. An empty layout evaluates to an empty
    /// frame.
    #[tracing::instrument(skip(layout))]
    pub fn eval_frame(layout: &SheetLayout, input: FrameInput) -> PeelResult<FrameState> {
        if !input.fraction.is_finite() {
            return Err(PeelError::evaluation("fraction must be finite"));
        }
        let fraction = input.fraction.clamp(0.0, 1.0);
        let direction = input.direction;

        if layout.is_empty() {
            return Ok(FrameState {
                fraction,
                direction,
                segments: Vec::new(),
                shadow_mask: GradientCurve::default(),
                glare: GradientCurve::default(),
            });
        }

        let spec = layout.spec();
        let window = SweepWindow::rotation();
        let bounding = spec.bounding_size();

        let segments = layout
            .segments()
            .iter()
            .map(|slot| {
                let top_z = spec.elevation * window.activation(fraction, slot.top_fraction, direction);
                let bottom_z =
                    spec.elevation * window.activation(fraction, slot.bottom_fraction, direction);

                let top_y = -spec.inset + slot.top_fraction * bounding.height;
                let bottom_y = -spec.inset + slot.bottom_fraction * bounding.height;

                // A rigid plane hinged at its top edge: the depth difference
                // between the two edges fixes the tilt, and the segment takes
                // the slant length between the edges so its projection stays
                // contiguous with its neighbors.
                let dy = bottom_y - top_y;
                let dz = bottom_z - top_z;
                let angle = FRAC_PI_2 - dy.atan2(dz);
                let height = (dy * dy + dz * dz).sqrt();

                SegmentGeometry {
                    index: slot.index,
                    angle,
                    z_position: top_z,
                    position: Point::new(-spec.inset, top_y),
                    size: Size::new(bounding.width, height),
                    content_rect: slot.content_rect,
                }
            })
            .collect();

        Ok(FrameState {
            fraction,
            direction,
            segments,
            shadow_mask: shadow_mask_curve(spec.segment_count, fraction, direction),
            glare: glare_curve(spec.segment_count, fraction),
        })
    }

    /// Evaluate straight from a schedule clock value: `sample` then
    /// [`Evaluator::eval_frame`].
    #[tracing::instrument(skip(layout, schedule))]
    pub fn eval_clock(
        layout: &SheetLayout,
        schedule: &PhaseSchedule,
        t: f64,
    ) -> PeelResult<FrameState> {
        Self::eval_frame(layout, schedule.sample(t))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;

//! Peelfx computes, frame by frame, the geometry of a "peeling sticker"
//! effect: a rectangular sheet sliced into horizontal segments that
//! independently rotate about a horizontal axis in 3D, so the sheet appears
//! to curl away from (or settle back onto) a surface, with synchronized
//! drop-shadow and specular-glare alpha profiles.
//!
//! # Pipeline overview
//!
//! 1. **Configure**: `SheetSpec -> SheetLayout` (fixed per-size segment table)
//! 2. **Drive**: `PhaseSchedule + clock t -> FrameInput` (progress fraction + sweep direction)
//! 3. **Evaluate**: `SheetLayout + FrameInput -> FrameState` (segment transforms, shadow mask, glare band)
//! 4. **Render** (external): composite the content, blurred-shadow, and glare
//!    segment stacks from one shared [`SegmentGeometry`] per segment
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic**: evaluation is a pure function of `(SheetLayout, FrameInput)`;
//!   nothing is cached between frames.
//! - **No IO, no clock**: the host injects progress (e.g. from a display link
//!   or a test harness) and owns all pixels. [`SnapshotPlan`] describes the
//!   bitmaps the host must prepare; the crate never touches image data.
//!
//! Evaluation is synchronous call-and-return on whatever single thread the
//! host uses; resizing a [`SheetLayout`] must be serialized with evaluation
//! by the caller.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod eval;
mod foundation;
mod geometry;

pub use animation::bezier::CubicBezier;
pub use animation::driver::{FrameInput, Phase, PhaseSchedule};
pub use animation::window::{SweepWindow, WindowShape};
pub use eval::evaluator::{Evaluator, FrameState, SegmentGeometry};
pub use eval::gradient::{
    GLARE_PEAK_ALPHA, GradientCurve, GradientStop, glare_curve, shadow_mask_curve,
};
pub use foundation::core::{Direction, Point, Rect, SheetSpec, Size, Vec2};
pub use foundation::error::{PeelError, PeelResult};
pub use geometry::projection::{Transform3D, overlay_bounds};
pub use geometry::sheet::{SHADOW_OPACITY, SegmentSlot, SheetLayout, SnapshotPlan};

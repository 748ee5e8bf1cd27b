use kurbo::{Point, Rect, Size, Vec2};

use crate::foundation::core::SheetSpec;
use crate::foundation::error::PeelResult;

/// Composited opacity of the drop-shadow stack.
pub const SHADOW_OPACITY: f64 = 0.5;

/// One horizontal slice of the sheet, fixed at layout time.
///
/// Slots carry only what never changes between frames: where the slice sits
/// along the sheet and which part of the snapshot it shows. Everything
/// frame-dependent lives in [`crate::SegmentGeometry`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SegmentSlot {
    /// Segment index, `0` at the top of the sheet.
    pub index: usize,
    /// Normalized position of the slice's top edge along the sheet, `i / N`.
    pub top_fraction: f64,
    /// Normalized position of the slice's bottom edge, `(i + 1) / N`.
    pub bottom_fraction: f64,
    /// Normalized crop rect into the padded snapshot bitmap.
    pub content_rect: Rect,
}

/// The bitmaps an external image source must prepare for rendering.
///
/// The crate computes geometry only; the host produces a padded snapshot of
/// the source image plus a blurred copy for the shadow stack, sized per this
/// plan. Absent bitmaps are not an error; geometry evaluation proceeds
/// unchanged, the segments just have nothing to show.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SnapshotPlan {
    /// Full padded size of both snapshot bitmaps.
    pub bounding_size: Size,
    /// Placement of the source image inside the padded bitmap.
    pub content_frame: Rect,
    /// Blur radius for the shadow bitmap.
    pub shadow_blur_radius: f64,
}

/// Segment-index table for one sheet configuration.
///
/// Built once per spec and rebuilt explicitly via [`SheetLayout::resize`]
/// when the sheet size or segment count changes; a zero-area sheet yields an
/// empty table and evaluation over it is a no-op. Rebuilds must be serialized
/// with evaluation by the host; the layout itself never mutates during
/// [`crate::Evaluator::eval_frame`].
#[derive(Clone, Debug, serde::Serialize)]
pub struct SheetLayout {
    spec: SheetSpec,
    segments: Vec<SegmentSlot>,
}

impl SheetLayout {
    /// Validate the spec and build its segment table.
    pub fn new(spec: SheetSpec) -> PeelResult<Self> {
        spec.validate()?;
        let mut layout = Self {
            spec,
            segments: Vec::new(),
        };
        layout.rebuild();
        Ok(layout)
    }

    /// Replace the spec and rebuild the segment table.
    pub fn resize(&mut self, spec: SheetSpec) -> PeelResult<()> {
        spec.validate()?;
        self.spec = spec;
        self.rebuild();
        Ok(())
    }

    fn rebuild(&mut self) {
        self.segments.clear();
        if !self.spec.has_area() {
            tracing::debug!("sheet has no area, leaving layout empty");
            return;
        }

        let count = self.spec.segment_count;
        self.segments.reserve(count);
        for index in 0..count {
            let top_fraction = index as f64 / count as f64;
            let bottom_fraction = (index + 1) as f64 / count as f64;
            self.segments.push(SegmentSlot {
                index,
                top_fraction,
                bottom_fraction,
                content_rect: Rect::new(0.0, top_fraction, 1.0, bottom_fraction),
            });
        }
        tracing::debug!(segments = count, "rebuilt sheet layout");
    }

    /// The spec the table was built from.
    pub fn spec(&self) -> &SheetSpec {
        &self.spec
    }

    /// The segment table, in top-to-bottom order.
    pub fn segments(&self) -> &[SegmentSlot] {
        &self.segments
    }

    /// `true` when the sheet has no area and therefore no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// What the host's image collaborator must produce for this layout.
    pub fn snapshot_plan(&self) -> SnapshotPlan {
        SnapshotPlan {
            bounding_size: self.spec.bounding_size(),
            content_frame: Rect::from_origin_size(
                Point::new(self.spec.inset, self.spec.inset),
                self.spec.size,
            ),
            shadow_blur_radius: self.spec.inset * 2.0,
        }
    }

    /// Offset of the drop-shadow stack relative to the content stack.
    pub fn shadow_offset(&self) -> Vec2 {
        Vec2::new(0.0, self.spec.shadow_distance)
    }
}

use crate::foundation::error::{PeelError, PeelResult};

pub use kurbo::{Point, Rect, Size, Vec2};

/// Which physical edge of the sheet the peel wavefront starts from.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum Direction {
    /// The wavefront sweeps from the top edge toward the bottom edge.
    #[default]
    Forward,
    /// The wavefront sweeps from the bottom edge toward the top edge.
    Reverse,
}

impl Direction {
    /// The opposite sweep direction.
    pub fn flip(self) -> Self {
        match self {
            Self::Forward => Self::Reverse,
            Self::Reverse => Self::Forward,
        }
    }

    /// `true` for [`Direction::Reverse`].
    pub fn is_reverse(self) -> bool {
        matches!(self, Self::Reverse)
    }
}

/// Immutable configuration of one sticker sheet.
///
/// A spec is pure data; geometry is derived from it every frame by
/// [`crate::Evaluator::eval_frame`] via a [`crate::SheetLayout`]. A zero-area
/// `size` is valid and produces an empty layout (nothing to peel yet), not an
/// error.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SheetSpec {
    /// Number of horizontal segments the sheet is sliced into.
    pub segment_count: usize,
    /// Sheet dimensions, before the inset padding is applied.
    pub size: Size,
    /// Margin added around the sheet on every side; segments extend into it.
    pub inset: f64,
    /// Maximum Z lift of a fully peeled point.
    pub elevation: f64,
    /// Vertical offset of the drop-shadow stack below the content stack.
    pub shadow_distance: f64,
    /// Perspective eye distance; the projection carries `m34 = -1 / eye_distance`.
    pub eye_distance: f64,
}

impl SheetSpec {
    /// Build a spec with the default inset (20), elevation (60), shadow
    /// distance (20), and eye distance (200).
    pub fn new(segment_count: usize, size: Size) -> PeelResult<Self> {
        let spec = Self {
            segment_count,
            size,
            inset: 20.0,
            elevation: 60.0,
            shadow_distance: 20.0,
            eye_distance: 200.0,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Replace the inset margin.
    pub fn with_inset(mut self, inset: f64) -> Self {
        self.inset = inset;
        self
    }

    /// Replace the maximum Z lift.
    pub fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = elevation;
        self
    }

    /// Replace the drop-shadow offset.
    pub fn with_shadow_distance(mut self, shadow_distance: f64) -> Self {
        self.shadow_distance = shadow_distance;
        self
    }

    /// Replace the perspective eye distance.
    pub fn with_eye_distance(mut self, eye_distance: f64) -> Self {
        self.eye_distance = eye_distance;
        self
    }

    /// Check the spec invariants.
    ///
    /// Called by [`crate::SheetLayout::new`] and `resize`, so field edits made
    /// after construction are still caught before any geometry is derived.
    pub fn validate(&self) -> PeelResult<()> {
        if self.segment_count == 0 {
            return Err(PeelError::validation("segment_count must be >= 1"));
        }
        if !self.size.width.is_finite()
            || !self.size.height.is_finite()
            || self.size.width < 0.0
            || self.size.height < 0.0
        {
            return Err(PeelError::validation(
                "sheet size must be finite and non-negative",
            ));
        }
        if !self.inset.is_finite() || self.inset < 0.0 {
            return Err(PeelError::validation("inset must be finite and >= 0"));
        }
        if !self.elevation.is_finite() {
            return Err(PeelError::validation("elevation must be finite"));
        }
        if !self.shadow_distance.is_finite() {
            return Err(PeelError::validation("shadow_distance must be finite"));
        }
        if !self.eye_distance.is_finite() || self.eye_distance <= 0.0 {
            return Err(PeelError::validation("eye_distance must be > 0"));
        }
        Ok(())
    }

    /// Padded bounds covered by the segments: `size` grown by `inset` on every side.
    pub fn bounding_size(&self) -> Size {
        Size::new(
            self.size.width + self.inset * 2.0,
            self.size.height + self.inset * 2.0,
        )
    }

    /// Height of one flat (unrotated) segment.
    pub fn segment_height(&self) -> f64 {
        self.bounding_size().height / self.segment_count as f64
    }

    /// `true` when the sheet covers a non-zero area.
    pub fn has_area(&self) -> bool {
        self.size.width > 0.0 && self.size.height > 0.0
    }
}

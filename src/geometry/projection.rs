use kurbo::{Point, Rect};

use crate::foundation::core::SheetSpec;

/// Row-major 4×4 homogeneous transform.
///
/// Only the rows touched by the peel effect are ever non-identity in
/// practice, but the full matrix is kept so hosts can hand in their own
/// layer transforms unchanged.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[allow(missing_docs)]
pub struct Transform3D {
    pub m11: f64,
    pub m12: f64,
    pub m13: f64,
    pub m14: f64,
    pub m21: f64,
    pub m22: f64,
    pub m23: f64,
    pub m24: f64,
    pub m31: f64,
    pub m32: f64,
    pub m33: f64,
    pub m34: f64,
    pub m41: f64,
    pub m42: f64,
    pub m43: f64,
    pub m44: f64,
}

impl Transform3D {
    /// The identity transform.
    pub const IDENTITY: Self = Self {
        m11: 1.0,
        m12: 0.0,
        m13: 0.0,
        m14: 0.0,
        m21: 0.0,
        m22: 1.0,
        m23: 0.0,
        m24: 0.0,
        m31: 0.0,
        m32: 0.0,
        m33: 1.0,
        m34: 0.0,
        m41: 0.0,
        m42: 0.0,
        m43: 0.0,
        m44: 1.0,
    };

    /// Identity with the perspective term `m34 = -1 / eye_distance`.
    pub fn perspective(eye_distance: f64) -> Self {
        Self {
            m34: -1.0 / eye_distance,
            ..Self::IDENTITY
        }
    }

    /// Apply the transform to the 3D point `(point.x, point.y, z, 1)` and
    /// project back to 2D via the perspective division.
    ///
    /// A resulting `w` of exactly zero (a point on the eye plane) skips the
    /// division and returns the unprojected `(x, y)` rather than dividing by
    /// zero; the fixed matrices used by the effect never produce it for
    /// points inside the sheet volume.
    pub fn project(&self, point: Point, z: f64) -> Point {
        let x = point.x * self.m11 + point.y * self.m21 + z * self.m31 + self.m41;
        let y = point.x * self.m12 + point.y * self.m22 + z * self.m32 + self.m42;
        let w = point.x * self.m14 + point.y * self.m24 + z * self.m34 + self.m44;

        if w == 0.0 {
            return Point::new(x, y);
        }
        Point::new(x / w, y / w)
    }
}

/// Screen-space bounding box of the volumetric overlay planes (the shadow
/// mask and the glare plane), in sheet view coordinates.
///
/// The overlays sit at the sheet's full elevation, so their on-screen extent
/// is the inset-expanded sheet rect pushed through the perspective transform
/// at `z = elevation`, centered back onto the sheet. A renderer sizes the
/// gradient planes with this rect so the curves from
/// [`crate::shadow_mask_curve`] and [`crate::glare_curve`] span the whole
/// projected sheet.
pub fn overlay_bounds(spec: &SheetSpec) -> Rect {
    let transform = Transform3D::perspective(spec.eye_distance);
    let half_w = spec.size.width * 0.5;
    let half_h = spec.size.height * 0.5;

    let top_left = transform.project(
        Point::new(-spec.inset - half_w, -spec.inset - half_h),
        spec.elevation,
    );
    let bottom_right = transform.project(
        Point::new(half_w + spec.inset, half_h + spec.inset),
        spec.elevation,
    );

    Rect::new(
        top_left.x + half_w,
        top_left.y + half_h,
        bottom_right.x + half_w,
        bottom_right.y + half_h,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/projection.rs"]
mod tests;

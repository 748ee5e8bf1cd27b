use std::f64::consts::PI;

use crate::animation::bezier::CubicBezier;
use crate::foundation::core::Direction;
use crate::foundation::error::{PeelError, PeelResult};

/// Window width of the rotation wavefront, as a fraction of the sheet.
pub(crate) const ROTATION_WINDOW_WIDTH: f64 = 0.8;

/// Window width of the glare band sweep.
pub(crate) const GLARE_WINDOW_WIDTH: f64 = 0.8;

/// Width of the half-sine pulse inside the glare window.
pub(crate) const GLARE_PULSE_WIDTH: f64 = 0.6;

/// Shaping function applied to a point's local progress through the window.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum WindowShape {
    /// Ease the local progress through a Bézier timing curve.
    Ease(CubicBezier),
    /// Inverted half-sine pulse of the given width, centered in the window.
    ///
    /// After the activation inversion this yields a positive sine bump while
    /// the wavefront passes a point and zero on both sides of it; it shapes
    /// the glare band.
    HalfSinePulse {
        /// Pulse width as a fraction of the window, in `(0, 1]`.
        width: f64,
    },
}

impl WindowShape {
    fn apply(self, u: f64) -> f64 {
        match self {
            Self::Ease(curve) => curve.eval(u),
            Self::HalfSinePulse { width } => {
                let start = (1.0 - width) * 0.5;
                let rescaled = (u - start).clamp(0.0, width) / width;
                1.0 - (rescaled * PI).sin()
            }
        }
    }
}

/// A wavefront window sweeping across the sheet.
///
/// For a point at normalized position `t` along the sheet,
/// [`SweepWindow::activation`] answers "how far has the wavefront lifted this
/// point" as a value in `[0, 1]`. The window's leading edge moves linearly
/// with the global fraction from one sheet edge to the other; each point's
/// local progress through the window is then shaped by the window's
/// [`WindowShape`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SweepWindow {
    width: f64,
    shape: WindowShape,
}

impl SweepWindow {
    /// Build a window; `width` is the wavefront's extent as a fraction of the
    /// sheet and must be positive.
    pub fn new(width: f64, shape: WindowShape) -> PeelResult<Self> {
        if !width.is_finite() || width <= 0.0 {
            return Err(PeelError::validation("window width must be > 0"));
        }
        if let WindowShape::HalfSinePulse { width: pulse } = shape {
            if !pulse.is_finite() || pulse <= 0.0 || pulse > 1.0 {
                return Err(PeelError::validation("pulse width must be in (0, 1]"));
            }
        }
        Ok(Self { width, shape })
    }

    /// The window that drives segment rotation and the shadow mask.
    pub fn rotation() -> Self {
        Self {
            width: ROTATION_WINDOW_WIDTH,
            shape: WindowShape::Ease(CubicBezier::ease_in_out()),
        }
    }

    /// The window that drives the glare band.
    pub fn glare() -> Self {
        Self {
            width: GLARE_WINDOW_WIDTH,
            shape: WindowShape::HalfSinePulse {
                width: GLARE_PULSE_WIDTH,
            },
        }
    }

    /// Local activation of the point at normalized position `t` for the given
    /// global `fraction` and sweep `direction`.
    ///
    /// For the rotation window this is the lift value: `0` everywhere at
    /// `(fraction 0, Forward)` (flat sheet), `1` everywhere at
    /// `(fraction 1, Forward)` (fully lifted), monotone non-decreasing in
    /// `fraction` for any fixed `t`. Reverse runs the sweep from the opposite
    /// sheet edge, so `(fraction 1, Reverse)` is flat again.
    pub fn activation(&self, fraction: f64, t: f64, direction: Direction) -> f64 {
        let (effective_t, window_start, window_end) = match direction {
            Direction::Forward => (t, -self.width, 1.0),
            Direction::Reverse => (1.0 - t, 1.0, -self.width),
        };

        let window_position = (1.0 - fraction) * window_start + fraction * window_end;
        let window_t = (effective_t - window_position).clamp(0.0, self.width) / self.width;

        1.0 - self.shape.apply(window_t)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/window.rs"]
mod tests;

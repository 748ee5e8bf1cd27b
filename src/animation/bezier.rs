use crate::foundation::error::{PeelError, PeelResult};

const NEWTON_ITERATIONS: usize = 4;
const SNAP_TO_ONE: f64 = 0.999;

/// Cubic Bézier easing curve anchored at `(0, 0)` and `(1, 1)`.
///
/// [`CubicBezier::eval`] maps an input progress `x` to an eased output by
/// solving the curve's X polynomial for its parameter with a fixed four-step
/// Newton iteration, then evaluating the Y polynomial there. Four steps with
/// no convergence check is enough for animation-grade precision as long as
/// the interior X control points stay inside `[0, 1]`, which
/// [`CubicBezier::new`] enforces.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CubicBezier {
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
}

impl CubicBezier {
    /// Build a curve from its two interior control points `(x1, y1)` and `(x2, y2)`.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> PeelResult<Self> {
        for (name, v) in [("x1", x1), ("x2", x2)] {
            if !v.is_finite() || !(0.0..=1.0).contains(&v) {
                return Err(PeelError::validation(format!(
                    "bezier {name} must be in [0, 1]"
                )));
            }
        }
        if !y1.is_finite() || !y2.is_finite() {
            return Err(PeelError::validation("bezier y1/y2 must be finite"));
        }
        Ok(Self { x1, y1, x2, y2 })
    }

    /// Symmetric ease-in-out, control points `(0.5, 0)` and `(0.5, 1)`.
    ///
    /// This is the shaping curve of the rotation wavefront.
    pub fn ease_in_out() -> Self {
        Self {
            x1: 0.5,
            y1: 0.0,
            x2: 0.5,
            y2: 1.0,
        }
    }

    /// The standard `ease` timing curve, control points `(0.42, 0)` and `(0.58, 1)`.
    ///
    /// Used by [`crate::PhaseSchedule`] as the outer per-cycle easing.
    pub fn ease() -> Self {
        Self {
            x1: 0.42,
            y1: 0.0,
            x2: 0.58,
            y2: 1.0,
        }
    }

    /// Evaluate the curve's Y for a given X in `[0, 1]`.
    ///
    /// Results at or above `0.999` snap to exactly `1.0`, so eased values
    /// settle instead of flickering just below the end state.
    pub fn eval(&self, x: f64) -> f64 {
        let t = self.solve_t_for_x(x);
        let y = eval_poly(t, self.y1, self.y2);
        if y >= SNAP_TO_ONE { 1.0 } else { y }
    }

    fn solve_t_for_x(&self, x: f64) -> f64 {
        let mut t = x;
        for _ in 0..NEWTON_ITERATIONS {
            let slope = eval_slope(t, self.x1, self.x2);
            if slope == 0.0 {
                return t;
            }
            let err = eval_poly(t, self.x1, self.x2) - x;
            t -= err / slope;
        }
        t
    }
}

// One-dimensional component of the curve with control values a1, a2,
// in Horner form: ((A t + B) t + C) t.
fn coeff_a(a1: f64, a2: f64) -> f64 {
    1.0 - 3.0 * a2 + 3.0 * a1
}

fn coeff_b(a1: f64, a2: f64) -> f64 {
    3.0 * a2 - 6.0 * a1
}

fn coeff_c(a1: f64) -> f64 {
    3.0 * a1
}

fn eval_poly(t: f64, a1: f64, a2: f64) -> f64 {
    ((coeff_a(a1, a2) * t + coeff_b(a1, a2)) * t + coeff_c(a1)) * t
}

fn eval_slope(t: f64, a1: f64, a2: f64) -> f64 {
    3.0 * coeff_a(a1, a2) * t * t + 2.0 * coeff_b(a1, a2) * t + coeff_c(a1)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/bezier.rs"]
mod tests;

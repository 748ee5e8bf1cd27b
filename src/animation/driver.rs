use crate::animation::bezier::CubicBezier;
use crate::foundation::core::Direction;
use crate::foundation::error::{PeelError, PeelResult};

/// One tick's worth of driver input: global progress plus sweep direction.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FrameInput {
    /// Global animation progress in `[0, 1]`.
    pub fraction: f64,
    /// Which sheet edge the wavefront sweeps from.
    pub direction: Direction,
}

impl FrameInput {
    /// Forward-sweeping input at the given fraction.
    pub fn forward(fraction: f64) -> Self {
        Self {
            fraction,
            direction: Direction::Forward,
        }
    }

    /// Reverse-sweeping input at the given fraction.
    pub fn reverse(fraction: f64) -> Self {
        Self {
            fraction,
            direction: Direction::Reverse,
        }
    }
}

/// Phase of one peel cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Phase {
    /// The sheet peels up, fraction rising `0 -> 1`, forward sweep.
    Rising,
    /// The sheet hovers fully lifted, fraction held at `1`.
    Held,
    /// The sheet settles back down, fraction rising `0 -> 1`, reverse sweep.
    Falling,
}

/// Maps an externally driven clock value in `[0, 1)` to per-frame input.
///
/// The schedule owns no clock: the host advances `t` however it likes (a
/// display link, a test loop) and calls [`PhaseSchedule::sample`] each tick.
/// A cycle rises until `rise_end`, holds until `fall_start`, then falls until
/// the cycle wraps; both moving phases are eased by the schedule's timing
/// curve.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PhaseSchedule {
    rise_end: f64,
    fall_start: f64,
    easing: CubicBezier,
}

impl Default for PhaseSchedule {
    fn default() -> Self {
        Self {
            rise_end: 0.3,
            fall_start: 0.6,
            easing: CubicBezier::ease(),
        }
    }
}

impl PhaseSchedule {
    /// Build a schedule with phase boundaries `0 < rise_end <= fall_start < 1`
    /// and the standard `ease` timing curve.
    pub fn new(rise_end: f64, fall_start: f64) -> PeelResult<Self> {
        if !rise_end.is_finite() || !fall_start.is_finite() {
            return Err(PeelError::validation("phase boundaries must be finite"));
        }
        if !(rise_end > 0.0 && rise_end <= fall_start && fall_start < 1.0) {
            return Err(PeelError::validation(
                "phase boundaries must satisfy 0 < rise_end <= fall_start < 1",
            ));
        }
        Ok(Self {
            rise_end,
            fall_start,
            easing: CubicBezier::ease(),
        })
    }

    /// Replace the outer easing curve.
    pub fn with_easing(mut self, easing: CubicBezier) -> Self {
        self.easing = easing;
        self
    }

    /// Phase of the cycle at clock value `t` (taken modulo 1).
    pub fn phase(&self, t: f64) -> Phase {
        let t = wrap01(t);
        if t < self.rise_end {
            Phase::Rising
        } else if t < self.fall_start {
            Phase::Held
        } else {
            Phase::Falling
        }
    }

    /// Evaluator input at clock value `t` (taken modulo 1).
    pub fn sample(&self, t: f64) -> FrameInput {
        let t = wrap01(t);
        match self.phase(t) {
            Phase::Rising => FrameInput::forward(self.easing.eval(t / self.rise_end)),
            Phase::Held => FrameInput::forward(1.0),
            Phase::Falling => {
                let local = (t - self.fall_start) / (1.0 - self.fall_start);
                FrameInput::reverse(self.easing.eval(local))
            }
        }
    }

    /// Step a clock value by `dt`, wrapping back into `[0, 1)`.
    pub fn advance(t: f64, dt: f64) -> f64 {
        wrap01(t + dt)
    }
}

fn wrap01(t: f64) -> f64 {
    t.rem_euclid(1.0)
}

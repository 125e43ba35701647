/// Time-based scalar interpolation driven by frame deltas
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use std::time::Duration;

/// Easing curve applied to normalized time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    Linear,
    /// Cubic ease-in-out
    #[default]
    Power2InOut,
    Cosine,
}

impl Easing {
    /// Map `t` in [0, 1] to eased progress in [0, 1]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Power2InOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::Cosine => (1.0 - (PI * t).cos()) / 2.0,
        }
    }
}

/// Interpolates from `from` to `to` over `duration`.
///
/// Once finished the value is exactly `to`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: Duration,
    elapsed: Duration,
    easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration,
            elapsed: Duration::ZERO,
            easing,
        }
    }

    /// Step forward by `dt` and return the new value
    pub fn advance(&mut self, dt: Duration) -> f32 {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.value()
    }

    /// Normalized time in [0, 1]
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            1.0
        } else {
            (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
        }
    }

    pub fn value(&self) -> f32 {
        if self.is_finished() {
            self.to
        } else {
            self.from + (self.to - self.from) * self.easing.apply(self.progress())
        }
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

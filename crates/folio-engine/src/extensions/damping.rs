// extensions/damping.rs
//
// Exponential approach toward a moving or fixed goal. Used for the camera
// look target, which eases toward the focus point and never strictly arrives.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// How much of the remaining distance is covered on each update.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Damping {
    /// Cover `fraction` of the remaining distance every frame, whatever the
    /// frame duration. Convergence speed follows the display refresh rate.
    PerFrame { fraction: f32 },
    /// Cover `fraction` of the remaining distance per frame at `reference_hz`,
    /// rescaled to the actual frame duration.
    TimeBased { fraction: f32, reference_hz: f32 },
}

impl Default for Damping {
    fn default() -> Self {
        Damping::PerFrame { fraction: 0.08 }
    }
}

impl Damping {
    /// Blend factor for a frame that lasted `dt_ms` milliseconds.
    pub fn factor(&self, dt_ms: f64) -> f32 {
        match *self {
            Damping::PerFrame { fraction } => fraction.clamp(0.0, 1.0),
            Damping::TimeBased { fraction, reference_hz } => {
                let keep = 1.0 - fraction.clamp(0.0, 1.0);
                let frames = (dt_ms.max(0.0) / 1000.0) as f32 * reference_hz;
                1.0 - keep.powf(frames)
            }
        }
    }

    /// Move `current` toward `goal` for one frame of `dt_ms`.
    #[inline]
    pub fn step(&self, current: Vec3, goal: Vec3, dt_ms: f64) -> Vec3 {
        current + (goal - current) * self.factor(dt_ms)
    }
}

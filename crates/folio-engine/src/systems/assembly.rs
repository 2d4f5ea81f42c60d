//! Assembly system — raises every element from its dropped start to rest.

use crate::core::scene::Scene;
use crate::extensions::{lerp, Easing, Tween};

/// Timing shared by all elements: they rise together over one duration,
/// each from its own depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Assembly {
    curve: Tween<f32>,
}

impl Assembly {
    pub fn new(duration_ms: f64, easing: Easing) -> Self {
        Self {
            curve: Tween::new(0.0, 1.0, duration_ms, easing),
        }
    }

    pub fn duration_ms(&self) -> f64 {
        self.curve.duration_ms
    }

    /// Linear progress at `elapsed_ms`, clamped to [0, 1].
    pub fn progress(&self, elapsed_ms: f64) -> f32 {
        self.curve.progress(elapsed_ms)
    }

    /// Eased progress at `elapsed_ms`.
    pub fn eased(&self, elapsed_ms: f64) -> f32 {
        self.curve.eased(elapsed_ms)
    }

    /// Position every element still animating for time `elapsed_ms`.
    /// Elements reaching full progress are snapped to rest and marked settled;
    /// settled elements are skipped. Returns how many settled this frame.
    pub fn tick(&self, scene: &mut Scene, elapsed_ms: f64) -> usize {
        let progress = self.progress(elapsed_ms);
        let eased = self.eased(elapsed_ms);
        let mut settled = 0;

        for element in scene.iter_mut() {
            if element.is_settled() {
                continue;
            }
            if progress >= 1.0 {
                element.settle();
                settled += 1;
            } else {
                element.pos.y = lerp(element.start_y(), element.rest().y, eased);
            }
        }

        settled
    }
}

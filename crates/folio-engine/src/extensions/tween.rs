// extensions/tween.rs
//
// Time-addressed tweens. Unlike an accumulating tween, the value is a pure
// function of elapsed time since the loop began, so sampling the same time
// twice yields the same value and a late frame never drifts.
//
// Usage:
//   let dolly = Tween::new(start, end, 3500.0, Easing::QuadInOut).with_delay(900.0);
//   camera.position = dolly.sample(clock.elapsed_ms());

use glam::Vec3;
use super::easing::{Easing, ease, ease_vec3};

/// Values a tween can blend between.
pub trait Tweenable: Copy {
    fn blend(from: Self, to: Self, t: f32, easing: Easing) -> Self;
}

impl Tweenable for f32 {
    #[inline]
    fn blend(from: Self, to: Self, t: f32, easing: Easing) -> Self {
        ease(from, to, t, easing)
    }
}

impl Tweenable for Vec3 {
    #[inline]
    fn blend(from: Self, to: Self, t: f32, easing: Easing) -> Self {
        ease_vec3(from, to, t, easing)
    }
}

/// Where a tween is relative to a given time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenPhase {
    /// Before the delay has elapsed. Value is `from`.
    Pending,
    /// Between delay and delay + duration.
    Running,
    /// At or past delay + duration. Value is `to`, forever.
    Finished,
}

/// A single tween from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween<V: Tweenable> {
    pub from: V,
    pub to: V,
    /// Time before the tween starts moving, in milliseconds.
    pub delay_ms: f64,
    /// Duration in milliseconds.
    pub duration_ms: f64,
    pub easing: Easing,
}

impl<V: Tweenable> Tween<V> {
    pub fn new(from: V, to: V, duration_ms: f64, easing: Easing) -> Self {
        Self {
            from,
            to,
            delay_ms: 0.0,
            duration_ms,
            easing,
        }
    }

    pub fn with_delay(mut self, delay_ms: f64) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Time at which the tween reaches `to`.
    pub fn end_ms(&self) -> f64 {
        self.delay_ms + self.duration_ms.max(0.0)
    }

    /// Normalized progress at `elapsed_ms`, clamped to [0, 1].
    pub fn progress(&self, elapsed_ms: f64) -> f32 {
        let local = elapsed_ms - self.delay_ms;
        if self.duration_ms <= 0.0 {
            return if local >= 0.0 { 1.0 } else { 0.0 };
        }
        (local / self.duration_ms).clamp(0.0, 1.0) as f32
    }

    /// Eased progress at `elapsed_ms`.
    pub fn eased(&self, elapsed_ms: f64) -> f32 {
        self.easing.apply(self.progress(elapsed_ms))
    }

    /// Value at `elapsed_ms`.
    pub fn sample(&self, elapsed_ms: f64) -> V {
        V::blend(self.from, self.to, self.progress(elapsed_ms), self.easing)
    }

    pub fn phase(&self, elapsed_ms: f64) -> TweenPhase {
        if elapsed_ms >= self.end_ms() {
            TweenPhase::Finished
        } else if elapsed_ms <= self.delay_ms {
            TweenPhase::Pending
        } else {
            TweenPhase::Running
        }
    }

    pub fn is_finished(&self, elapsed_ms: f64) -> bool {
        self.phase(elapsed_ms) == TweenPhase::Finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_halfway() {
        let tween = Tween::new(100.0_f32, 200.0, 1000.0, Easing::Linear);
        assert!((tween.sample(500.0) - 150.0).abs() < 1e-4);
    }

    #[test]
    fn delay_holds_start_value() {
        let tween = Tween::new(0.0_f32, 1.0, 1000.0, Easing::Linear).with_delay(900.0);
        assert_eq!(tween.sample(0.0), 0.0);
        assert_eq!(tween.sample(900.0), 0.0);
        assert_eq!(tween.phase(450.0), TweenPhase::Pending);
        assert_eq!(tween.phase(1200.0), TweenPhase::Running);
    }

    #[test]
    fn progress_is_clamped() {
        let tween = Tween::new(Vec3::ZERO, Vec3::ONE, 1000.0, Easing::QuadInOut).with_delay(100.0);
        assert_eq!(tween.progress(-5000.0), 0.0);
        assert_eq!(tween.progress(1.0e9), 1.0);
        assert_eq!(tween.sample(1.0e9), Vec3::ONE);
    }

    #[test]
    fn finished_is_terminal() {
        let tween = Tween::new(0.0_f32, 10.0, 250.0, Easing::CubicOut);
        assert!(tween.is_finished(250.0));
        assert!(tween.is_finished(10_000.0));
        assert_eq!(tween.sample(250.0), 10.0);
    }

    #[test]
    fn zero_duration_jumps_at_delay() {
        let tween = Tween::new(0.0_f32, 1.0, 0.0, Easing::Linear).with_delay(50.0);
        assert_eq!(tween.sample(49.0), 0.0);
        assert_eq!(tween.sample(50.0), 1.0);
        assert_eq!(tween.phase(50.0), TweenPhase::Finished);
    }
}

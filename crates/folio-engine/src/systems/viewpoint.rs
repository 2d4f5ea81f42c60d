//! Viewpoint system — the camera dolly toward the front door and the
//! look-target drift toward the focus point.

use glam::Vec3;
use crate::extensions::{Damping, Easing, Tween, TweenPhase};

/// Dolly state. One way: `Moving` never comes back after `Arrived`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewpointPhase {
    /// Before or during the dolly.
    Moving,
    /// Holding at the end point.
    Arrived,
}

/// Observer position and look target.
#[derive(Debug, Clone)]
pub struct Viewpoint {
    dolly: Tween<Vec3>,
    damping: Damping,
    focus: Vec3,
    position: Vec3,
    target: Vec3,
    progress: f32,
    phase: ViewpointPhase,
}

impl Viewpoint {
    /// `target` is where the look target starts; it drifts toward `focus`.
    pub fn new(dolly: Tween<Vec3>, focus: Vec3, target: Vec3, damping: Damping) -> Self {
        Self {
            position: dolly.from,
            dolly,
            damping,
            focus,
            target,
            progress: 0.0,
            phase: ViewpointPhase::Moving,
        }
    }

    /// Dolly from `start` to `end` over `duration_ms`, beginning at `delay_ms`.
    pub fn dolly(start: Vec3, end: Vec3, delay_ms: f64, duration_ms: f64, easing: Easing) -> Tween<Vec3> {
        Tween::new(start, end, duration_ms, easing).with_delay(delay_ms)
    }

    /// Recompute for one frame. Position follows the elapsed time; the look
    /// target moves one damping step regardless of elapsed time.
    pub fn tick(&mut self, elapsed_ms: f64, dt_ms: f64) {
        self.progress = self.dolly.progress(elapsed_ms);
        self.position = self.dolly.sample(elapsed_ms);
        if self.phase == ViewpointPhase::Moving && self.dolly.phase(elapsed_ms) == TweenPhase::Finished {
            self.phase = ViewpointPhase::Arrived;
            log::debug!("viewpoint arrived at {:?}", self.position);
        }
        self.target = self.damping.step(self.target, self.focus, dt_ms);
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Linear dolly progress, always in [0, 1].
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn phase(&self) -> ViewpointPhase {
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: Vec3 = Vec3::new(6.0, 4.0, 8.0);
    const END: Vec3 = Vec3::new(2.2, 1.6, 3.2);
    const FOCUS: Vec3 = Vec3::new(0.0, 1.2, 0.0);

    fn hero_viewpoint() -> Viewpoint {
        let dolly = Viewpoint::dolly(START, END, 900.0, 3500.0, Easing::QuadInOut);
        Viewpoint::new(dolly, FOCUS, FOCUS, Damping::default())
    }

    #[test]
    fn starts_at_start_point() {
        let mut vp = hero_viewpoint();
        vp.tick(0.0, 0.0);
        assert!((vp.position() - START).length() < 1e-6);
        assert_eq!(vp.phase(), ViewpointPhase::Moving);
    }

    #[test]
    fn holds_start_through_delay() {
        let mut vp = hero_viewpoint();
        vp.tick(900.0, 16.0);
        assert!((vp.position() - START).length() < 1e-6);
    }

    #[test]
    fn arrives_at_end_point() {
        let mut vp = hero_viewpoint();
        vp.tick(4400.0, 16.0);
        assert!((vp.position() - END).length() < 1e-5);
        assert_eq!(vp.phase(), ViewpointPhase::Arrived);
        vp.tick(60_000.0, 16.0);
        assert!((vp.position() - END).length() < 1e-5);
        assert_eq!(vp.phase(), ViewpointPhase::Arrived);
    }

    #[test]
    fn midpoint_of_dolly() {
        let mut vp = hero_viewpoint();
        // progress 0.5 -> eased 0.5
        vp.tick(900.0 + 1750.0, 16.0);
        let mid = (START + END) / 2.0;
        assert!((vp.position() - mid).length() < 1e-5);
    }

    #[test]
    fn progress_clamped_for_any_time() {
        let mut vp = hero_viewpoint();
        vp.tick(-10_000.0, 16.0);
        assert_eq!(vp.progress(), 0.0);
        vp.tick(1.0e12, 16.0);
        assert_eq!(vp.progress(), 1.0);
    }

    #[test]
    fn target_drifts_toward_focus() {
        let dolly = Viewpoint::dolly(START, END, 900.0, 3500.0, Easing::QuadInOut);
        let mut vp = Viewpoint::new(dolly, FOCUS, Vec3::ZERO, Damping::default());
        vp.tick(0.0, 16.0);
        assert!((vp.target().y - 0.096).abs() < 1e-6);
        for i in 1..500 {
            vp.tick(i as f64 * 16.0, 16.0);
        }
        assert!((vp.target() - FOCUS).length() < 1e-4);
    }
}

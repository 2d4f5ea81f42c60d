/// Monotonic animation clock.
/// Tracks milliseconds since the animation loop began, fed by host frame timestamps.
#[derive(Debug, Clone, Default)]
pub struct SceneClock {
    /// Elapsed time since the first frame, in milliseconds.
    elapsed_ms: f64,
    /// Host timestamp of the first frame.
    origin_ms: Option<f64>,
    /// Duration of the most recent frame.
    last_dt_ms: f64,
}

impl SceneClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by a frame delta. Negative or non-finite deltas are dropped,
    /// so elapsed time never goes backwards.
    pub fn advance(&mut self, dt_ms: f64) -> f64 {
        if dt_ms.is_finite() && dt_ms > 0.0 {
            self.elapsed_ms += dt_ms;
            self.last_dt_ms = dt_ms;
        } else {
            self.last_dt_ms = 0.0;
        }
        self.elapsed_ms
    }

    /// Advance from an absolute host timestamp (e.g. `requestAnimationFrame`'s
    /// `DOMHighResTimeStamp`). The first call pins the origin.
    pub fn sync(&mut self, now_ms: f64) -> f64 {
        match self.origin_ms {
            None => {
                self.origin_ms = Some(now_ms);
                self.last_dt_ms = 0.0;
                self.elapsed_ms
            }
            Some(origin) => {
                let target = now_ms - origin;
                self.advance(target - self.elapsed_ms)
            }
        }
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    pub fn last_dt_ms(&self) -> f64 {
        self.last_dt_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accumulates_deltas() {
        let mut clock = SceneClock::new();
        clock.advance(16.0);
        clock.advance(17.0);
        assert_eq!(clock.elapsed_ms(), 33.0);
        assert_eq!(clock.last_dt_ms(), 17.0);
    }

    #[test]
    fn ignores_backwards_and_nan() {
        let mut clock = SceneClock::new();
        clock.advance(100.0);
        clock.advance(-50.0);
        clock.advance(f64::NAN);
        assert_eq!(clock.elapsed_ms(), 100.0);
        assert_eq!(clock.last_dt_ms(), 0.0);
    }

    #[test]
    fn sync_pins_first_timestamp_as_origin() {
        let mut clock = SceneClock::new();
        assert_eq!(clock.sync(12_000.0), 0.0);
        assert_eq!(clock.sync(12_016.0), 16.0);
        assert_eq!(clock.sync(13_500.0), 1500.0);
        assert_eq!(clock.last_dt_ms(), 1484.0);
    }

    #[test]
    fn sync_never_rewinds() {
        let mut clock = SceneClock::new();
        clock.sync(1000.0);
        clock.sync(2000.0);
        clock.sync(1500.0);
        assert_eq!(clock.elapsed_ms(), 1000.0);
    }
}

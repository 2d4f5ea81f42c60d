//! Reveal gate for the hero call-to-action.
//!
//! Two independent signals must both arrive before the page shows the
//! button: the scene's `Ready` event and a fixed delay counted from when the
//! hero view was created. The delay is deliberately decoupled from the
//! actual load, so a fast load still gets the full assembly moment.

/// Where the hero overlay is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    /// Waiting for the model. The page shows its loading hint.
    Loading,
    /// Model ready, delay still running. Nothing extra is shown.
    Assembling,
    /// Both signals in. The call-to-action may appear.
    Ready,
}

impl RevealState {
    /// Numeric code for the JS side.
    pub fn code(self) -> u32 {
        match self {
            RevealState::Loading => 0,
            RevealState::Assembling => 1,
            RevealState::Ready => 2,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RevealGate {
    delay_ms: f64,
    waited_ms: f64,
    asset_ready: bool,
}

impl RevealGate {
    pub fn new(delay_ms: f64) -> Self {
        Self {
            delay_ms: delay_ms.max(0.0),
            waited_ms: 0.0,
            asset_ready: false,
        }
    }

    /// Record the scene's ready signal (success or failure alike).
    pub fn asset_ready(&mut self) {
        self.asset_ready = true;
    }

    /// Count down the reveal delay. Non-positive deltas are ignored.
    pub fn advance(&mut self, dt_ms: f64) {
        if dt_ms.is_finite() && dt_ms > 0.0 {
            self.waited_ms += dt_ms;
        }
    }

    pub fn delay_elapsed(&self) -> bool {
        self.waited_ms >= self.delay_ms
    }

    pub fn state(&self) -> RevealState {
        match (self.asset_ready, self.delay_elapsed()) {
            (false, _) => RevealState::Loading,
            (true, false) => RevealState::Assembling,
            (true, true) => RevealState::Ready,
        }
    }

    pub fn cta_visible(&self) -> bool {
        self.state() == RevealState::Ready
    }

    pub fn loading_hint_visible(&self) -> bool {
        !self.asset_ready
    }
}

//! Hero view session: owns the animator for the lifetime of the view and
//! everything acquired on its behalf, and gives all of it back on teardown.
//!
//! The host platform is abstracted behind [`SessionHost`] so the same
//! lifecycle runs against `requestAnimationFrame` in the browser and against
//! a recording fake in tests.

use crate::api::animator::SceneAnimator;
use crate::api::config::SceneConfig;
use crate::api::types::SceneEvent;
use crate::assets::ElementDesc;
use crate::errors::AssetError;
use crate::host::reveal::RevealGate;

/// Id of a pending display-refresh callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub i32);

/// Id of a registered viewport resize listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerHandle(pub u32);

/// Id of a renderer-side buffer (geometry, material, context) the view owns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferHandle(pub u32);

/// The host's display-refresh scheduler.
pub trait FrameScheduler {
    /// Ask for one callback on the next frame. `None` if the host refused.
    fn request_frame(&mut self) -> Option<FrameHandle>;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Resize notifications for the container the scene is drawn into.
pub trait ViewportEvents {
    fn attach_resize(&mut self) -> Option<ListenerHandle>;
    fn detach_resize(&mut self, handle: ListenerHandle);
}

/// Disposal of renderer-side resources.
pub trait ResourceSink {
    fn release(&mut self, buffer: BufferHandle);
}

/// Everything a session needs from the platform, plus the ready callback.
pub trait SessionHost: FrameScheduler + ViewportEvents + ResourceSink {
    fn scene_event(&mut self, event: SceneEvent);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Created, loop not started.
    Idle,
    /// Frame loop active.
    Running,
    /// Everything released. Terminal.
    TornDown,
}

pub struct SceneSession<H: SessionHost> {
    animator: SceneAnimator,
    gate: RevealGate,
    host: H,
    state: SessionState,
    pending_frame: Option<FrameHandle>,
    resize_listener: Option<ListenerHandle>,
    buffers: Vec<BufferHandle>,
}

impl<H: SessionHost> SceneSession<H> {
    pub fn new(config: SceneConfig, host: H) -> Self {
        let gate = RevealGate::new(config.reveal_delay_ms);
        Self {
            animator: SceneAnimator::new(config),
            gate,
            host,
            state: SessionState::Idle,
            pending_frame: None,
            resize_listener: None,
            buffers: Vec::new(),
        }
    }

    /// Attach the resize listener and schedule the first frame.
    pub fn start(&mut self) {
        if self.state != SessionState::Idle {
            return;
        }
        self.resize_listener = self.host.attach_resize();
        self.pending_frame = self.host.request_frame();
        self.state = SessionState::Running;
        log::info!("hero session started ({})", self.animator.config().asset_path);
    }

    /// Frame callback. Advances the scene and the reveal delay, then
    /// schedules the next frame. Returns false once torn down.
    pub fn on_frame(&mut self, now_ms: f64) -> bool {
        if self.state != SessionState::Running {
            return false;
        }
        // Usually the handle that just fired; cancelling it is a no-op. If the
        // host drove this frame by hand, it stops the old callback.
        if let Some(stale) = self.pending_frame.take() {
            self.host.cancel_frame(stale);
        }

        self.animator.frame(now_ms);
        self.gate.advance(self.animator.clock().last_dt_ms());
        self.forward_events();

        self.pending_frame = self.host.request_frame();
        true
    }

    /// Outcome of the asset fetch + decode. Dropped if the view is already gone.
    pub fn asset_loaded(&mut self, result: Result<Vec<ElementDesc>, AssetError>) {
        if self.state == SessionState::TornDown {
            log::debug!("hero session torn down; dropping late asset result");
            return;
        }
        if self.animator.asset_loaded(result) {
            self.gate.asset_ready();
        }
        self.forward_events();
    }

    /// Take ownership of a renderer buffer so teardown releases it.
    /// Buffers handed over after teardown are released immediately.
    pub fn adopt_buffer(&mut self, buffer: BufferHandle) {
        if self.state == SessionState::TornDown {
            self.host.release(buffer);
        } else {
            self.buffers.push(buffer);
        }
    }

    pub fn resize(&mut self, width: f32, height: f32, pixel_ratio: f32) {
        if self.state != SessionState::TornDown {
            self.animator.resize(width, height, pixel_ratio);
        }
    }

    /// Stop the loop and release everything. Safe to call more than once;
    /// also runs on drop.
    pub fn teardown(&mut self) {
        if self.state == SessionState::TornDown {
            return;
        }
        if let Some(frame) = self.pending_frame.take() {
            self.host.cancel_frame(frame);
        }
        if let Some(listener) = self.resize_listener.take() {
            self.host.detach_resize(listener);
        }
        let released = self.buffers.len();
        for buffer in self.buffers.drain(..) {
            self.host.release(buffer);
        }
        self.animator.dispose();
        self.state = SessionState::TornDown;
        log::info!("hero session torn down, released {} buffers", released);
    }

    fn forward_events(&mut self) {
        for event in self.animator.drain_events() {
            self.host.scene_event(event);
        }
    }

    pub fn animator(&self) -> &SceneAnimator {
        &self.animator
    }

    pub fn gate(&self) -> &RevealGate {
        &self.gate
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn state(&self) -> SessionState {
        self.state
    }
}

impl<H: SessionHost> Drop for SceneSession<H> {
    fn drop(&mut self) {
        self.teardown();
    }
}

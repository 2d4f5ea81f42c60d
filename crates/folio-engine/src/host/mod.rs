pub mod reveal;
pub mod session;

pub use reveal::{RevealGate, RevealState};
pub use session::{
    BufferHandle, FrameHandle, FrameScheduler, ListenerHandle, ResourceSink,
    SceneSession, SessionHost, SessionState, ViewportEvents,
};

pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod assets;
pub mod extensions;
pub mod host;
pub mod errors;

// Re-export key types at crate root for convenience
pub use api::animator::{SceneAnimator, LoadState};
pub use api::config::{SceneConfig, DEFAULT_ASSET_PATH};
pub use api::types::{ElementId, SceneEvent};
pub use components::element::{AnimatedElement, AssemblyPhase};
pub use crate::core::clock::SceneClock;
pub use crate::core::scene::Scene;
pub use renderer::camera::{Camera3D, CameraUniform};
pub use renderer::instance::{ElementBuffer, ElementInstance};
pub use systems::assembly::Assembly;
pub use systems::viewpoint::{Viewpoint, ViewpointPhase};
pub use assets::{decode_scene, spawn_elements, AssetSource, ElementDesc};
pub use errors::{AssetError, ConfigError};
pub use host::{
    RevealGate, RevealState, SceneSession, SessionHost, SessionState,
    FrameScheduler, ViewportEvents, ResourceSink,
    FrameHandle, ListenerHandle, BufferHandle,
};

pub use extensions::{
    Damping, Easing, Tween, TweenPhase, Tweenable,
    lerp, lerp_vec3, ease, ease_vec3,
};

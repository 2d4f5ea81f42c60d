// extensions/mod.rs
//
// Animation math shared by the engine systems.
// Decoupled from Scene/Viewpoint — plain values in, plain values out.

pub mod damping;
pub mod easing;
pub mod tween;

pub use damping::Damping;
pub use easing::{Easing, lerp, lerp_vec3, ease, ease_vec3};
pub use tween::{Tween, TweenPhase, Tweenable};

pub mod assembly;
pub mod viewpoint;

pub use assembly::Assembly;
pub use viewpoint::{Viewpoint, ViewpointPhase};

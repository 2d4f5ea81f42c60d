pub mod decode;
pub mod source;
pub mod spawn;

pub use decode::{decode_scene, ElementDesc};
pub use source::AssetSource;
pub use spawn::spawn_elements;

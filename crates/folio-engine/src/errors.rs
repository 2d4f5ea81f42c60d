//! Error types.
//!
//! Two families:
//! - [`AssetError`] — the scene asset could not be fetched or decoded. Never
//!   fatal: the animator logs it, fires the ready signal and keeps running
//!   with an empty scene.
//! - [`ConfigError`] — a scene config supplied by the page was malformed.

use thiserror::Error;

/// Failure to obtain the model's elements from the scene asset.
#[derive(Error, Debug)]
pub enum AssetError {
    /// Network or filesystem failure while fetching the asset bytes.
    #[error("failed to fetch scene asset: {0}")]
    Fetch(String),

    /// The bytes were fetched but are not a readable scene file.
    #[error("failed to parse scene asset: {0}")]
    Parse(String),

    /// The file parsed but contains no scene to traverse.
    #[error("scene asset contains no scene")]
    NoScene,

    /// The crate was built without a decoder for this format.
    #[error("no decoder available for scene asset format")]
    Unsupported,
}

#[cfg(feature = "gltf")]
impl From<gltf::Error> for AssetError {
    fn from(err: gltf::Error) -> Self {
        AssetError::Parse(err.to_string())
    }
}

/// Invalid scene configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid scene config JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A duration was zero, negative or not a number.
    #[error("{field} must be a positive number of milliseconds (got {value})")]
    Duration { field: &'static str, value: f64 },

    /// The element offset range was empty or negative.
    #[error("offset range must satisfy 0 <= min < max (got {min}..{max})")]
    OffsetRange { min: f32, max: f32 },

    #[error("{field} is out of range (got {value})")]
    OutOfRange { field: &'static str, value: f32 },
}

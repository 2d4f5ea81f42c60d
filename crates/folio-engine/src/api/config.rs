use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;
use crate::extensions::{Damping, Easing};

/// Default location of the model, relative to the site root.
pub const DEFAULT_ASSET_PATH: &str = "/models/house.glb";

/// Configuration for the hero scene, provided by the page.
///
/// Every field has a default, so the page only sends what it overrides:
/// `{ "asset_path": "/models/cabin.glb", "reveal_delay_ms": 2000 }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Binary scene file to load (default: `/models/house.glb`).
    pub asset_path: String,

    /// Time for elements to rise into place, in ms (default: 3000).
    pub assembly_duration_ms: f64,
    /// Curve for the rise (default: cubic ease-out).
    pub assembly_easing: Easing,
    /// Lower bound of the random per-element drop, in model units (default: 0.2).
    pub offset_min: f32,
    /// Upper bound (exclusive) of the random drop (default: 0.8).
    pub offset_max: f32,
    /// Fixed seed for the offset RNG. `None` draws from entropy.
    pub rng_seed: Option<u64>,

    /// Time for the camera dolly, in ms (default: 3500).
    pub viewpoint_duration_ms: f64,
    /// Dolly start, as a fraction of the assembly duration (default: 0.3).
    pub viewpoint_delay_fraction: f64,
    /// Curve for the dolly (default: quadratic ease-in-out).
    pub viewpoint_easing: Easing,
    /// Where the camera starts (default: (6, 4, 8)).
    pub camera_start: Vec3,
    /// Where the camera stops (default: (2.2, 1.6, 3.2), facing the front door).
    pub camera_end: Vec3,
    /// Point the look target settles on (default: (0, 1.2, 0)).
    pub focus: Vec3,
    /// Where the look target starts (default: the focus point).
    pub initial_target: Vec3,
    /// How the look target approaches `focus` (default: 8% per frame).
    pub damping: Damping,

    /// Vertical field of view in degrees (default: 50).
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
    /// Upper bound on device pixel ratio for the drawing surface (default: 2).
    pub max_pixel_ratio: f32,

    /// Delay before the page may reveal its call-to-action, in ms (default: 3000).
    pub reveal_delay_ms: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            asset_path: DEFAULT_ASSET_PATH.to_string(),
            assembly_duration_ms: 3000.0,
            assembly_easing: Easing::CubicOut,
            offset_min: 0.2,
            offset_max: 0.8,
            rng_seed: None,
            viewpoint_duration_ms: 3500.0,
            viewpoint_delay_fraction: 0.3,
            viewpoint_easing: Easing::QuadInOut,
            camera_start: Vec3::new(6.0, 4.0, 8.0),
            camera_end: Vec3::new(2.2, 1.6, 3.2),
            focus: Vec3::new(0.0, 1.2, 0.0),
            initial_target: Vec3::new(0.0, 1.2, 0.0),
            damping: Damping::default(),
            fov_deg: 50.0,
            near: 0.1,
            far: 1000.0,
            max_pixel_ratio: 2.0,
            reveal_delay_ms: 3000.0,
        }
    }
}

impl SceneConfig {
    /// Parse and validate a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SceneConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that durations are usable and the offset range is non-empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_duration("assembly_duration_ms", self.assembly_duration_ms)?;
        check_duration("viewpoint_duration_ms", self.viewpoint_duration_ms)?;
        if !(self.reveal_delay_ms.is_finite() && self.reveal_delay_ms >= 0.0) {
            return Err(ConfigError::Duration {
                field: "reveal_delay_ms",
                value: self.reveal_delay_ms,
            });
        }
        if !(self.offset_min >= 0.0 && self.offset_min < self.offset_max && self.offset_max.is_finite()) {
            return Err(ConfigError::OffsetRange {
                min: self.offset_min,
                max: self.offset_max,
            });
        }
        if !(self.viewpoint_delay_fraction.is_finite() && self.viewpoint_delay_fraction >= 0.0) {
            return Err(ConfigError::OutOfRange {
                field: "viewpoint_delay_fraction",
                value: self.viewpoint_delay_fraction as f32,
            });
        }
        if !(self.fov_deg > 0.0 && self.fov_deg < 180.0) {
            return Err(ConfigError::OutOfRange { field: "fov_deg", value: self.fov_deg });
        }
        if !(self.near > 0.0 && self.far > self.near) {
            return Err(ConfigError::OutOfRange { field: "near", value: self.near });
        }
        Ok(())
    }

    /// When the camera dolly begins, in ms since loop start.
    pub fn viewpoint_delay_ms(&self) -> f64 {
        self.assembly_duration_ms * self.viewpoint_delay_fraction
    }

    /// When the camera reaches `camera_end`, in ms since loop start.
    pub fn viewpoint_end_ms(&self) -> f64 {
        self.viewpoint_delay_ms() + self.viewpoint_duration_ms
    }
}

fn check_duration(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Duration { field, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_hero_scene() {
        let cfg = SceneConfig::default();
        assert_eq!(cfg.asset_path, "/models/house.glb");
        assert_eq!(cfg.viewpoint_delay_ms(), 900.0);
        assert_eq!(cfg.viewpoint_end_ms(), 4400.0);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn empty_json_yields_defaults() {
        let cfg = SceneConfig::from_json("{}").unwrap();
        assert_eq!(cfg, SceneConfig::default());
    }

    #[test]
    fn partial_override() {
        let json = r#"{
            "asset_path": "/models/cabin.glb",
            "camera_end": [1.0, 1.0, 2.0],
            "assembly_easing": "quad_out",
            "damping": { "mode": "time_based", "fraction": 0.08, "reference_hz": 60.0 }
        }"#;
        let cfg = SceneConfig::from_json(json).unwrap();
        assert_eq!(cfg.asset_path, "/models/cabin.glb");
        assert_eq!(cfg.camera_end, Vec3::new(1.0, 1.0, 2.0));
        assert_eq!(cfg.assembly_easing, Easing::QuadOut);
        assert_eq!(cfg.assembly_duration_ms, 3000.0);
        assert!(matches!(cfg.damping, Damping::TimeBased { .. }));
    }

    #[test]
    fn rejects_zero_duration() {
        let err = SceneConfig::from_json(r#"{ "assembly_duration_ms": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Duration { field: "assembly_duration_ms", .. }));
    }

    #[test]
    fn rejects_inverted_offset_range() {
        let err = SceneConfig::from_json(r#"{ "offset_min": 0.8, "offset_max": 0.2 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::OffsetRange { .. }));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = SceneConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }
}

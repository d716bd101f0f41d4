//! Follow settings as the host stores them.
//!
//! The host persists plugin settings as a flat JSON object; the keys below
//! (`source`, `zoom`, `smoothness`) are the ones its settings UI writes.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ZoomFollowError, ZoomFollowResult};

/// Lowest accepted zoom factor (no magnification).
pub const MIN_ZOOM: f64 = 1.0;
/// Highest accepted zoom factor.
pub const MAX_ZOOM: f64 = 4.0;
/// Largest accepted smoothing factor (filter disabled).
/// Any positive value below it is used as configured.
pub const MAX_SMOOTHING: f64 = 1.0;

pub const DEFAULT_ZOOM: f64 = 1.5;
pub const DEFAULT_SMOOTHING: f64 = 0.08;

/// Settings read by the follow controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FollowConfig {
    /// Name of the layer to move. Empty means "not configured".
    #[serde(rename = "source")]
    pub target_layer: String,

    /// Uniform scale applied to the layer, in `[1.0, 4.0]`.
    pub zoom: f64,

    /// Blend factor of the camera filter, in `(0.0, 1.0]`.
    /// Higher tracks the cursor faster.
    #[serde(rename = "smoothness")]
    pub smoothing: f64,
}

impl Default for FollowConfig {
    fn default() -> Self {
        Self {
            target_layer: String::new(),
            zoom: DEFAULT_ZOOM,
            smoothing: DEFAULT_SMOOTHING,
        }
    }
}

impl FollowConfig {
    pub fn new(target_layer: impl Into<String>, zoom: f64, smoothing: f64) -> Self {
        Self {
            target_layer: target_layer.into(),
            zoom,
            smoothing,
        }
    }

    /// Whether a target layer name has been set.
    pub fn has_target(&self) -> bool {
        !self.target_layer.trim().is_empty()
    }

    /// Return a copy with `zoom` and `smoothing` forced into range.
    ///
    /// Non-finite values fall back to the defaults, as does a smoothing
    /// factor of zero or below. The layer name is kept byte for byte.
    pub fn sanitized(&self) -> Self {
        let zoom = sanitize(self.zoom, MIN_ZOOM, MAX_ZOOM, DEFAULT_ZOOM);
        let smoothing = if self.smoothing > 0.0 {
            sanitize(self.smoothing, 0.0, MAX_SMOOTHING, DEFAULT_SMOOTHING)
        } else {
            DEFAULT_SMOOTHING
        };

        if zoom != self.zoom {
            tracing::warn!(requested = self.zoom, applied = zoom, "Zoom out of range");
        }
        if smoothing != self.smoothing {
            tracing::warn!(
                requested = self.smoothing,
                applied = smoothing,
                "Smoothing out of range"
            );
        }

        Self {
            target_layer: self.target_layer.clone(),
            zoom,
            smoothing,
        }
    }

    /// Parse the host's settings blob. Missing keys take defaults.
    pub fn from_settings_json(json: &str) -> ZoomFollowResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Serialize into the host's settings blob.
    pub fn to_settings_json(&self) -> ZoomFollowResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a settings file exported from the host.
    pub fn load(path: &Path) -> ZoomFollowResult<Self> {
        if !path.exists() {
            return Err(ZoomFollowError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_settings_json(&content).map_err(|e| {
            ZoomFollowError::config(format!("Invalid settings at {}: {e}", path.display()))
        })
    }
}

fn sanitize(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_take_defaults() {
        let config = FollowConfig::from_settings_json(r#"{ "source": "Display Capture" }"#)
            .expect("settings should parse");
        assert_eq!(config.target_layer, "Display Capture");
        assert_eq!(config.zoom, DEFAULT_ZOOM);
        assert_eq!(config.smoothing, DEFAULT_SMOOTHING);
    }

    #[test]
    fn uses_host_setting_keys() {
        let config = FollowConfig::new("Screen", 2.0, 0.25);
        let json = config.to_settings_json().unwrap();
        assert!(json.contains("\"source\""));
        assert!(json.contains("\"smoothness\""));
        assert_eq!(FollowConfig::from_settings_json(&json).unwrap(), config);
    }

    #[test]
    fn sanitized_clamps_into_range() {
        let config = FollowConfig::new("Screen", 9.0, 0.005).sanitized();
        assert_eq!(config.zoom, MAX_ZOOM);
        assert_eq!(config.smoothing, 0.005);

        let config = FollowConfig::new("Screen", 0.5, 3.0).sanitized();
        assert_eq!(config.zoom, MIN_ZOOM);
        assert_eq!(config.smoothing, MAX_SMOOTHING);
    }

    #[test]
    fn sanitized_replaces_non_positive_smoothing() {
        assert_eq!(
            FollowConfig::new("Screen", 2.0, 0.0).sanitized().smoothing,
            DEFAULT_SMOOTHING
        );
        assert_eq!(
            FollowConfig::new("Screen", 2.0, -0.3).sanitized().smoothing,
            DEFAULT_SMOOTHING
        );
    }

    #[test]
    fn sanitized_keeps_layer_name_verbatim() {
        let config = FollowConfig::new("  Screen ", 2.0, 0.5).sanitized();
        assert_eq!(config.target_layer, "  Screen ");
        assert!(config.has_target());
    }

    #[test]
    fn sanitized_replaces_non_finite_values() {
        let config = FollowConfig::new("Screen", f64::NAN, f64::INFINITY).sanitized();
        assert_eq!(config.zoom, DEFAULT_ZOOM);
        assert_eq!(config.smoothing, DEFAULT_SMOOTHING);
    }

    #[test]
    fn blank_target_is_not_configured() {
        assert!(!FollowConfig::default().has_target());
        assert!(!FollowConfig::new("   ", 1.0, 1.0).has_target());
        assert!(FollowConfig::new("Screen", 1.0, 1.0).has_target());
    }

    #[test]
    fn load_reports_missing_file() {
        let err = FollowConfig::load(Path::new("/nonexistent/zoomfollow/settings.json"))
            .expect_err("missing file should fail");
        assert!(matches!(err, ZoomFollowError::FileNotFound { .. }));
    }
}

//! Settings surface shown by the host.
//!
//! Describes the three user-facing fields so a host shim can build its
//! properties panel. Values entered there come back as a settings blob and
//! are parsed with [`FollowConfig::from_settings_json`].

use serde::Serialize;
use zoomfollow_common::config::{FollowConfig, MAX_ZOOM, MIN_ZOOM};

use crate::host::SceneHost;

pub const SOURCE_KEY: &str = "source";
pub const ZOOM_KEY: &str = "zoom";
pub const SMOOTHNESS_KEY: &str = "smoothness";

/// Smoothing slider `(min, max, step)`. Settings files may still carry
/// values up to 1.0.
pub const SMOOTHNESS_SLIDER: (f64, f64, f64) = (0.01, 0.5, 0.01);
pub const ZOOM_SLIDER_STEP: f64 = 0.1;

/// How a property is edited.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PropertyKind {
    /// Drop-down of strings that also accepts free text.
    EditableList { options: Vec<String> },
    FloatSlider { min: f64, max: f64, step: f64 },
}

/// One field in the settings panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    pub key: &'static str,
    pub label: &'static str,
    #[serde(flatten)]
    pub kind: PropertyKind,
}

/// Text shown above the settings panel.
pub fn description() -> &'static str {
    "Zoom & Follow Camera\n\n\
     Zooms into a display capture layer and keeps the mouse cursor centered.\n\n\
     Usage:\n\
     1. Add a display capture source to the scene.\n\
     2. Pick it as the display source below.\n\
     3. Adjust zoom level and smoothness."
}

/// Build the settings panel, listing the host's layers as targets.
pub fn properties<H: SceneHost>(host: &H) -> Vec<Property> {
    let options = host.enumerate_layer_names();
    tracing::debug!(layers = options.len(), "Building settings panel");

    let (smooth_min, smooth_max, smooth_step) = SMOOTHNESS_SLIDER;
    vec![
        Property {
            key: SOURCE_KEY,
            label: "Display Source",
            kind: PropertyKind::EditableList { options },
        },
        Property {
            key: ZOOM_KEY,
            label: "Zoom Level (x)",
            kind: PropertyKind::FloatSlider {
                min: MIN_ZOOM,
                max: MAX_ZOOM,
                step: ZOOM_SLIDER_STEP,
            },
        },
        Property {
            key: SMOOTHNESS_KEY,
            label: "Smoothness (low = slower)",
            kind: PropertyKind::FloatSlider {
                min: smooth_min,
                max: smooth_max,
                step: smooth_step,
            },
        },
    ]
}

/// Settings a fresh plugin instance starts with.
pub fn defaults() -> FollowConfig {
    FollowConfig::default()
}

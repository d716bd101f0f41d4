//! Zoom projection.
//!
//! Maps the smoothed camera position and a zoom factor to the scale and
//! top-left offset the host applies to the capture layer, so that the camera
//! point lands in the middle of the viewport.

use serde::{Deserialize, Serialize};

use crate::camera::CameraState;

/// Dimensions of the captured source in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewportSize {
    pub width: u32,
    pub height: u32,
}

impl ViewportSize {
    /// Size assumed until the host reports a real one.
    pub const FALLBACK: ViewportSize = ViewportSize {
        width: 1920,
        height: 1080,
    };

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Adopt a host-reported size if both dimensions are positive.
    ///
    /// Returns `false` and keeps the current size otherwise; hosts report
    /// 0x0 while a source is still initializing.
    pub fn refresh(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 {
            return false;
        }
        self.width = width;
        self.height = height;
        true
    }

    /// Center of the viewport in pixels.
    pub fn center(&self) -> (f64, f64) {
        (f64::from(self.width) / 2.0, f64::from(self.height) / 2.0)
    }
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self::FALLBACK
    }
}

/// Layer transform pushed to the host each tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Uniform scale for both axes.
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Transform {
    /// Transform that puts `camera` at the viewport center under `zoom`.
    ///
    /// `offset = center - camera * zoom` on each axis.
    pub fn project(camera: &CameraState, viewport: ViewportSize, zoom: f64) -> Self {
        let (center_x, center_y) = viewport.center();
        Self {
            scale: zoom,
            offset_x: center_x - camera.x * zoom,
            offset_y: center_y - camera.y * zoom,
        }
    }
}

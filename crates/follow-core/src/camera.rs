//! Smoothed camera position.
//!
//! The camera trails the raw cursor through an exponential moving average:
//! each tick it closes `smoothing` of the remaining distance. The blend
//! factor does not depend on frame time, so the same setting feels snappier
//! at higher frame rates. Hosts that want time-based smoothing must convert
//! the factor themselves before handing it over.

use serde::{Deserialize, Serialize};
use zoomfollow_platform_core::ScreenPoint;

/// Smoothed camera position in global screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CameraState {
    pub x: f64,
    pub y: f64,
}

impl CameraState {
    /// Session start position.
    pub const ORIGIN: CameraState = CameraState { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Move toward `target` by `smoothing` of the remaining distance.
    ///
    /// `smoothing` of 1.0 snaps onto the target.
    pub fn follow(&mut self, target: ScreenPoint, smoothing: f64) {
        self.x = lerp(self.x, target.x, smoothing);
        self.y = lerp(self.y, target.y, smoothing);
    }

    /// Euclidean distance to `point`.
    pub fn distance_to(&self, point: ScreenPoint) -> f64 {
        (point.x - self.x).hypot(point.y - self.y)
    }

    pub fn position(&self) -> ScreenPoint {
        ScreenPoint::new(self.x, self.y)
    }
}

/// Linear interpolation from `start` toward `end`.
pub fn lerp(start: f64, end: f64, alpha: f64) -> f64 {
    start + (end - start) * alpha
}

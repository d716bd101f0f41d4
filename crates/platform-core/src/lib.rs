//! ZoomFollow platform core contracts.
//!
//! This crate contains the cursor sampling contract shared by the follow
//! controller and the per-OS backends, without coupling to a concrete OS.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use zoomfollow_common::error::{ZoomFollowError, ZoomFollowResult};

/// A position in global screen coordinates (physical pixels).
///
/// The origin is the top-left corner of the primary display; other monitors
/// may sit at negative coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub const ORIGIN: ScreenPoint = ScreenPoint { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for ScreenPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Source of the current global pointer position.
///
/// `sample` must not block: it runs inside the host's render tick.
pub trait CursorSampler {
    /// Read the pointer position at call time.
    ///
    /// Fails with [`ZoomFollowError::InputUnavailable`] when the environment
    /// cannot report a position right now.
    fn sample(&mut self) -> ZoomFollowResult<ScreenPoint>;

    /// Sampler name for logging.
    fn name(&self) -> &str;
}

impl<S: CursorSampler + ?Sized> CursorSampler for Box<S> {
    fn sample(&mut self) -> ZoomFollowResult<ScreenPoint> {
        (**self).sample()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Sampler for platforms without a pointer backend.
///
/// Every call reports the cursor as unavailable, so the controller simply
/// never moves the layer.
#[derive(Debug, Clone)]
pub struct UnsupportedSampler {
    platform: &'static str,
}

impl UnsupportedSampler {
    pub fn new(platform: &'static str) -> Self {
        Self { platform }
    }

    /// Sampler labelled with the compile-time target OS.
    pub fn for_current_platform() -> Self {
        Self::new(std::env::consts::OS)
    }
}

impl CursorSampler for UnsupportedSampler {
    fn sample(&mut self) -> ZoomFollowResult<ScreenPoint> {
        Err(ZoomFollowError::input_unavailable(format!(
            "cursor sampling is not implemented on {}",
            self.platform
        )))
    }

    fn name(&self) -> &str {
        "unsupported"
    }
}

/// Scripted sampler for tests and offline simulation.
///
/// Plays back a fixed sequence of samples; `None` entries report the cursor
/// as unavailable. Once the script runs out the last entry repeats, which
/// models a mouse that stopped moving.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSampler {
    script: VecDeque<Option<ScreenPoint>>,
    last: Option<ScreenPoint>,
    calls: usize,
}

impl ScriptedSampler {
    /// Create a sampler from a list of samples.
    pub fn new(script: impl IntoIterator<Item = Option<ScreenPoint>>) -> Self {
        Self {
            script: script.into_iter().collect(),
            last: None,
            calls: 0,
        }
    }

    /// Create a sampler that always reports the same position.
    pub fn fixed(point: ScreenPoint) -> Self {
        Self {
            script: VecDeque::new(),
            last: Some(point),
            calls: 0,
        }
    }

    /// Create a sampler from plain points (no unavailable ticks).
    pub fn from_points(points: impl IntoIterator<Item = ScreenPoint>) -> Self {
        Self::new(points.into_iter().map(Some))
    }

    /// Append a sample to the end of the script.
    pub fn push(&mut self, sample: Option<ScreenPoint>) {
        self.script.push_back(sample);
    }

    /// Number of times `sample` has been called.
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl CursorSampler for ScriptedSampler {
    fn sample(&mut self) -> ZoomFollowResult<ScreenPoint> {
        self.calls += 1;
        if let Some(next) = self.script.pop_front() {
            self.last = next;
        }
        self.last
            .ok_or_else(|| ZoomFollowError::input_unavailable("scripted cursor unavailable"))
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

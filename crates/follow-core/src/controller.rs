//! The follow controller.
//!
//! One controller lives for one plugin session. Each host tick it resolves
//! the target layer, refreshes the cached source size, pulls the cursor
//! through the smoothing filter, and writes the resulting scale and offset
//! back to the layer. Every failure is absorbed inside the tick: the host
//! render loop never sees an error from here.

use zoomfollow_common::config::FollowConfig;
use zoomfollow_platform_core::CursorSampler;

use crate::camera::CameraState;
use crate::host::SceneHost;
use crate::projection::{Transform, ViewportSize};

/// Why a tick did not move the layer, or what it noticed on the way.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FollowError {
    #[error("cursor position unavailable: {reason}")]
    InputUnavailable { reason: String },

    #[error("target layer '{name}' not found in the current scene")]
    TargetNotFound { name: String },

    #[error("host reported {width}x{height} for the target layer, keeping last known size")]
    StaleDimensions { width: u32, height: u32 },
}

/// Controller lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    /// No usable target layer; ticks do nothing.
    Idle,
    /// Target layer resolved; ticks move it.
    Tracking,
}

/// Result of a single [`FollowController::advance`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// No target layer configured.
    Idle,
    /// The tick was skipped; nothing was written to the host.
    Skipped(FollowError),
    /// The transform was written to the target layer.
    Applied(Transform),
}

impl TickOutcome {
    pub fn transform(&self) -> Option<Transform> {
        match self {
            TickOutcome::Applied(transform) => Some(*transform),
            _ => None,
        }
    }
}

/// Keeps the cursor centered in a zoomed layer.
pub struct FollowController<S> {
    sampler: S,
    config: FollowConfig,
    camera: CameraState,
    viewport: ViewportSize,
    state: ControllerState,
    ticks_applied: u64,
}

impl<S: CursorSampler> FollowController<S> {
    /// Start a session with default settings and the camera at the origin.
    pub fn new(sampler: S) -> Self {
        Self::with_config(sampler, FollowConfig::default())
    }

    /// Start a session with the given settings.
    pub fn with_config(sampler: S, config: FollowConfig) -> Self {
        tracing::debug!(sampler = %sampler.name(), "Follow controller created");
        Self {
            sampler,
            config: config.sanitized(),
            camera: CameraState::ORIGIN,
            viewport: ViewportSize::FALLBACK,
            state: ControllerState::Idle,
            ticks_applied: 0,
        }
    }

    /// Apply new settings from the host. Takes effect on the next tick.
    ///
    /// The camera keeps its position, so switching targets or zoom pans
    /// smoothly instead of jumping.
    pub fn update_config(&mut self, config: FollowConfig) {
        let config = config.sanitized();
        tracing::info!(
            target_layer = %config.target_layer,
            zoom = config.zoom,
            smoothing = config.smoothing,
            "Follow settings updated"
        );
        self.config = config;
    }

    /// Run one tick.
    ///
    /// `dt` is the time since the previous tick in seconds. It is not part
    /// of the filter: smoothing is applied per tick, not per second.
    pub fn advance<H: SceneHost>(&mut self, host: &mut H, dt: f64) -> TickOutcome {
        if !self.config.has_target() {
            self.transition(ControllerState::Idle);
            return TickOutcome::Idle;
        }

        // Released when this function returns, on every path below.
        let Some(layer) = host.resolve_layer(&self.config.target_layer) else {
            let error = FollowError::TargetNotFound {
                name: self.config.target_layer.clone(),
            };
            if self.state == ControllerState::Tracking {
                tracing::info!(error = %error, "Lost target layer");
            }
            self.transition(ControllerState::Idle);
            return TickOutcome::Skipped(error);
        };
        self.transition(ControllerState::Tracking);

        let (width, height) = host.layer_dimensions(&layer);
        if !self.viewport.refresh(width, height) {
            tracing::trace!(
                error = %FollowError::StaleDimensions { width, height },
                "Keeping viewport {}x{}",
                self.viewport.width,
                self.viewport.height
            );
        }

        let raw = match self.sampler.sample() {
            Ok(point) => point,
            Err(e) => {
                tracing::debug!(error = %e, "Skipping tick");
                return TickOutcome::Skipped(FollowError::InputUnavailable {
                    reason: e.to_string(),
                });
            }
        };

        self.camera.follow(raw, self.config.smoothing);
        let transform = Transform::project(&self.camera, self.viewport, self.config.zoom);

        host.set_layer_scale(&layer, transform.scale, transform.scale);
        host.set_layer_offset(&layer, transform.offset_x, transform.offset_y);
        self.ticks_applied += 1;

        tracing::trace!(
            dt,
            raw_x = raw.x,
            raw_y = raw.y,
            camera_x = self.camera.x,
            camera_y = self.camera.y,
            offset_x = transform.offset_x,
            offset_y = transform.offset_y,
            "Applied follow transform"
        );

        TickOutcome::Applied(transform)
    }

    fn transition(&mut self, next: ControllerState) {
        if self.state != next {
            tracing::info!(from = ?self.state, to = ?next, "Follow controller state changed");
            self.state = next;
        }
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn config(&self) -> &FollowConfig {
        &self.config
    }

    /// Current smoothed camera position.
    pub fn camera(&self) -> CameraState {
        self.camera
    }

    /// Last known source size.
    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    /// Number of ticks that wrote a transform to the host.
    pub fn ticks_applied(&self) -> u64 {
        self.ticks_applied
    }

    pub fn sampler(&self) -> &S {
        &self.sampler
    }
}

#[cfg(test)]
mod tests {
    use zoomfollow_platform_core::{ScreenPoint, ScriptedSampler};

    use super::*;
    use crate::memory_host::{HostCall, MemoryHost};

    const TICK: f64 = 1.0 / 60.0;

    fn controller(
        points: &[(f64, f64)],
        zoom: f64,
        smoothing: f64,
    ) -> FollowController<ScriptedSampler> {
        let sampler =
            ScriptedSampler::from_points(points.iter().copied().map(ScreenPoint::from));
        FollowController::with_config(sampler, FollowConfig::new("Screen", zoom, smoothing))
    }

    #[test]
    fn starts_idle_at_origin() {
        let controller = FollowController::new(ScriptedSampler::default());
        assert_eq!(controller.state(), ControllerState::Idle);
        assert_eq!(controller.camera(), CameraState::ORIGIN);
        assert_eq!(controller.viewport(), ViewportSize::FALLBACK);
    }

    #[test]
    fn unconfigured_target_does_nothing() {
        let mut host = MemoryHost::new().with_layer("Screen", 1920, 1080);
        let mut controller =
            FollowController::new(ScriptedSampler::fixed(ScreenPoint::new(1.0, 1.0)));

        assert_eq!(controller.advance(&mut host, TICK), TickOutcome::Idle);
        assert!(host.calls().is_empty());
        assert_eq!(controller.sampler().calls(), 0);
    }

    #[test]
    fn tracks_once_target_resolves() {
        let mut host = MemoryHost::new().with_layer("Screen", 1920, 1080);
        let mut controller = controller(&[(960.0, 540.0)], 2.0, 1.0);

        let outcome = controller.advance(&mut host, TICK);
        assert_eq!(controller.state(), ControllerState::Tracking);
        assert_eq!(
            outcome.transform(),
            Some(Transform {
                scale: 2.0,
                offset_x: -960.0,
                offset_y: -540.0,
            })
        );
        assert_eq!(
            host.calls(),
            &[
                HostCall::SetScale {
                    layer: "Screen".to_string(),
                    x: 2.0,
                    y: 2.0,
                },
                HostCall::SetOffset {
                    layer: "Screen".to_string(),
                    x: -960.0,
                    y: -540.0,
                },
            ]
        );
    }

    #[test]
    fn unavailable_cursor_keeps_camera() {
        let mut host = MemoryHost::new().with_layer("Screen", 1920, 1080);
        let sampler = ScriptedSampler::new([Some(ScreenPoint::new(1000.0, 500.0)), None]);
        let mut controller =
            FollowController::with_config(sampler, FollowConfig::new("Screen", 1.5, 0.5));

        controller.advance(&mut host, TICK);
        let camera = controller.camera();
        host.take_calls();

        let outcome = controller.advance(&mut host, TICK);
        assert!(matches!(
            outcome,
            TickOutcome::Skipped(FollowError::InputUnavailable { .. })
        ));
        assert_eq!(controller.camera(), camera);
        assert!(host.calls().is_empty());
        assert_eq!(controller.ticks_applied(), 1);
        assert_eq!(host.outstanding_handles(), 0);
    }

    #[test]
    fn settings_change_keeps_camera() {
        let mut host = MemoryHost::new()
            .with_layer("Screen", 1920, 1080)
            .with_layer("Other", 1280, 720);
        let mut controller = controller(&[(400.0, 300.0)], 2.0, 1.0);
        controller.advance(&mut host, TICK);

        controller.update_config(FollowConfig::new("Other", 3.0, 0.5));
        assert_eq!(controller.camera(), CameraState::new(400.0, 300.0));

        let transform = controller.advance(&mut host, TICK).transform().unwrap();
        assert_eq!(transform.scale, 3.0);
        assert_eq!(controller.viewport(), ViewportSize::new(1280, 720));
    }

    #[test]
    fn out_of_range_settings_are_clamped() {
        let controller = controller(&[], 12.0, 0.0);
        assert_eq!(controller.config().zoom, 4.0);
        assert_eq!(controller.config().smoothing, 0.08);
    }
}

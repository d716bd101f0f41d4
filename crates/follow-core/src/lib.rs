//! ZoomFollow Follow Core
//!
//! Keeps the mouse cursor centered in a zoomed capture layer:
//! - **Camera:** first-order low-pass filter over raw cursor samples
//! - **Projection:** zoom + camera position to layer scale/offset
//! - **Controller:** per-tick state machine driven by the host
//! - **Host contract:** the slice of the host scene graph the controller uses
//!
//! Nothing here renders, captures, or blocks. The host calls
//! [`FollowController::advance`] once per frame on its own thread.

pub mod camera;
pub mod controller;
pub mod host;
pub mod memory_host;
pub mod projection;
pub mod sampler;
pub mod settings;

pub use camera::CameraState;
pub use controller::{ControllerState, FollowController, FollowError, TickOutcome};
pub use host::{SceneHost, Scoped};
pub use memory_host::MemoryHost;
pub use projection::{Transform, ViewportSize};

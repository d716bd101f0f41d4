//! Windows cursor sampling.
//!
//! Reads the global pointer through `GetCursorPos`. On other targets the
//! crate still compiles and [`WindowsCursorSampler::new`] reports the
//! platform as unsupported.

use zoomfollow_common::error::{ZoomFollowError, ZoomFollowResult};
use zoomfollow_platform_core::{CursorSampler, ScreenPoint};

/// Pointer sampler backed by the Win32 cursor API.
#[derive(Debug, Default)]
pub struct WindowsCursorSampler {
    _private: (),
}

impl WindowsCursorSampler {
    /// Create a sampler, failing on non-Windows targets.
    pub fn new() -> ZoomFollowResult<Self> {
        if cfg!(windows) {
            Ok(Self { _private: () })
        } else {
            Err(ZoomFollowError::platform(
                "Win32 cursor sampling is only available on Windows",
            ))
        }
    }

    /// Whether this build can sample the cursor through Win32.
    pub fn is_supported() -> bool {
        cfg!(windows)
    }
}

impl CursorSampler for WindowsCursorSampler {
    fn sample(&mut self) -> ZoomFollowResult<ScreenPoint> {
        let (x, y) = cursor_pos()?;
        tracing::trace!(x, y, "GetCursorPos");
        Ok(ScreenPoint::new(f64::from(x), f64::from(y)))
    }

    fn name(&self) -> &str {
        "win32"
    }
}

#[cfg(windows)]
fn cursor_pos() -> ZoomFollowResult<(i32, i32)> {
    use windows::Win32::Foundation::POINT;
    use windows::Win32::UI::WindowsAndMessaging::GetCursorPos;

    let mut point = POINT::default();
    // Fails on secure desktops (UAC prompt, lock screen).
    unsafe { GetCursorPos(&mut point) }
        .map_err(|e| ZoomFollowError::input_unavailable(format!("GetCursorPos failed: {e}")))?;
    Ok((point.x, point.y))
}

#[cfg(not(windows))]
fn cursor_pos() -> ZoomFollowResult<(i32, i32)> {
    Err(ZoomFollowError::input_unavailable(
        "GetCursorPos is not available on this platform",
    ))
}

#[cfg(all(test, not(windows)))]
mod tests {
    use super::*;

    #[test]
    fn construction_fails_off_windows() {
        assert!(!WindowsCursorSampler::is_supported());
        assert!(WindowsCursorSampler::new().is_err());
    }

    #[test]
    fn sampling_off_windows_is_unavailable() {
        let mut sampler = WindowsCursorSampler::default();
        assert!(sampler.sample().unwrap_err().is_input_unavailable());
    }
}

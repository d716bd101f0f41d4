//! Platform cursor sampler selection.

use zoomfollow_platform_core::{CursorSampler, UnsupportedSampler};
use zoomfollow_platform_windows::WindowsCursorSampler;

/// Pick the best cursor sampler for the current system.
///
/// Falls back to a sampler that always reports the cursor as unavailable,
/// which leaves the target layer where it is.
pub fn detect_sampler() -> Box<dyn CursorSampler> {
    if WindowsCursorSampler::is_supported() {
        match WindowsCursorSampler::new() {
            Ok(sampler) => {
                tracing::info!("Using win32 cursor sampler");
                return Box::new(sampler);
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to initialize win32 cursor sampler");
            }
        }
    }

    tracing::warn!(
        platform = std::env::consts::OS,
        "No cursor sampler for this platform; the layer will not follow the pointer"
    );
    Box::new(UnsupportedSampler::for_current_platform())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detected_sampler_matches_platform() {
        let sampler = detect_sampler();
        if cfg!(windows) {
            assert_eq!(sampler.name(), "win32");
        } else {
            assert_eq!(sampler.name(), "unsupported");
        }
    }
}

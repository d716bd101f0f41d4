//! Logging and tracing initialization.
//!
//! The plugin itself only emits `tracing` events; whoever embeds it (the
//! CLI, a test harness, a host shim) decides whether a subscriber exists.

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "zoomfollow_follow_core=trace,warn").
    pub level: String,

    /// Whether to output structured JSON logs.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl LoggingConfig {
    /// Preset used by `--verbose` flags.
    pub fn verbose() -> Self {
        Self {
            level: "debug".to_string(),
            ..Self::default()
        }
    }

    /// Build the filter, letting `RUST_LOG` take precedence over `level`.
    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level))
    }
}

/// Install a global tracing subscriber. A second call is a no-op.
pub fn init_logging(config: &LoggingConfig) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(config.env_filter())
        .with_writer(std::io::stderr);

    let installed = if config.json {
        builder.json().try_init().is_ok()
    } else {
        builder
            .with_target(true)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .try_init()
            .is_ok()
    };

    if installed {
        tracing::debug!(level = %config.level, json = config.json, "Logging initialized");
    }
}

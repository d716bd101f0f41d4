//! ZoomFollow Common Utilities
//!
//! Shared infrastructure for all ZoomFollow crates:
//! - Error types and result aliases
//! - Follow settings as stored by the host
//! - Tracing/logging initialization

pub mod config;
pub mod error;
pub mod logging;

pub use config::*;
pub use error::*;

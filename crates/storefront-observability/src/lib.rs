//! Logging setup for storefront binaries.
//!
//! This crate provides:
//! - `LogLevel` / `LogFormat` - Logging options as read from configuration
//! - `LogSettings` - Combined options
//! - `init` - Installs the process-wide `tracing` subscriber

mod logging;

pub use logging::*;

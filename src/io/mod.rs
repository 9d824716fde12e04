//! Command-line driver, file handling, configuration and errors

/// Command-line parsing and batch processors
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error type and result alias
pub mod error;
/// PNG loading and alpha-map export
pub mod image;
/// Batch progress display
pub mod progress;

//! Input/output operations, configuration and error handling

/// Command-line parsing and batch processing
pub mod cli;
/// Constants and runtime defaults
pub mod configuration;
/// Error types and path context
pub mod error;
/// Tracing subscriber setup
pub mod logging;
/// Progress display for batches of photos
pub mod progress;
/// JSON feature reports
pub mod report;

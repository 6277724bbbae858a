//! Utility modules for configuration, error handling, and unit conversion.

pub mod config;
pub mod error;
pub mod units;

// Re-export commonly used error types for convenience
pub use error::{ExportError, OutputError, ProfileError, StatsError};

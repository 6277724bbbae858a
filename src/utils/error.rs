//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading a single playerdata file
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Failed to read playerdata: {0}")]
    Io(#[from] std::io::Error),

    #[error("NBT decoding failed: {0}")]
    Decode(#[from] fastnbt::error::Error),

    #[error("Invalid playerdata: {0}")]
    InvalidFormat(String),
}

/// Errors that can occur while reading a single stats file
#[derive(Error, Debug)]
pub enum StatsError {
    #[error("Failed to read stats file: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Errors that stop an export run before any report is built
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Stats folder not found: {}", .0.display())]
    StatsDirMissing(PathBuf),
}

//! JSON report writer.
//!
//! Writes the collected player reports as one pretty-printed array.

use super::report::PlayerReport;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Write all reports to a JSON file, replacing any previous file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_reports(
    reports: &[PlayerReport],
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing {} reports to: {}", reports.len(), output_path.display());

    validate_output_path(output_path)?;

    // Create parent directories if needed
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, reports)?;
    writer.flush()?;

    debug!("Report written ({} bytes)", calculate_file_size(output_path));

    Ok(())
}

/// Render reports as the same pretty JSON that [`write_reports`] emits
#[cfg(test)]
fn reports_to_string(reports: &[PlayerReport]) -> Result<String, OutputError> {
    Ok(serde_json::to_string_pretty(reports)?)
}

/// Read a written report file back as raw JSON values
///
/// **Public** - useful for validation and testing
pub fn read_reports(input_path: impl AsRef<Path>) -> Result<Vec<serde_json::Value>, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading reports from: {}", input_path.display());

    let file = File::open(input_path)?;
    let reports: Vec<serde_json::Value> = serde_json::from_reader(BufReader::new(file))?;

    Ok(reports)
}

/// Validate that output path is writable
///
/// **Private** - internal validation
fn validate_output_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

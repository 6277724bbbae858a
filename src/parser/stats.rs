//! Stats file reader.

use super::schema::RawStats;
use crate::utils::error::StatsError;
use log::debug;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Read one `stats/<uuid>.json` file
///
/// # Errors
/// * `StatsError::Io` - file cannot be opened or read
/// * `StatsError::JsonError` - malformed JSON or a `stats` field that is not an object
pub fn read_stats(path: impl AsRef<Path>) -> Result<RawStats, StatsError> {
    let path = path.as_ref();
    debug!("Reading stats from: {}", path.display());

    let file = File::open(path)?;
    let stats = serde_json::from_reader(BufReader::new(file))?;

    Ok(stats)
}

/// Parse stats JSON already held in memory
pub fn parse_stats(json: &str) -> Result<RawStats, StatsError> {
    Ok(serde_json::from_str(json)?)
}

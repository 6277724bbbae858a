//! Export command implementation.
//!
//! The export command:
//! 1. Checks the stats folder exists
//! 2. Loads names + health from playerdata
//! 3. Builds one report per stats file
//! 4. Writes the report array to JSON

use crate::output::{build_report, write_reports, PlayerReport};
use crate::parser::{discover_player_files, load_profiles, read_stats, PlayerFile, ProfileRecord};
use crate::utils::config::{
    DEFAULT_OUTPUT_FILE, DEFAULT_PLAYERDATA_DIR, DEFAULT_STATS_DIR, HEALTH_UNAVAILABLE,
    STATS_EXTENSION,
};
use crate::utils::error::{ExportError, StatsError};
use crate::utils::units::group_thousands;
use anyhow::{Context, Result};
use log::{error, info, warn};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the export command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone, PartialEq)]
pub struct ExportArgs {
    /// Folder with `<uuid>.json` stats files
    pub stats_dir: PathBuf,

    /// Folder with `<uuid>.dat` playerdata files
    pub playerdata_dir: PathBuf,

    /// Output path for the report JSON
    pub output_json: PathBuf,
}

impl Default for ExportArgs {
    fn default() -> Self {
        Self {
            stats_dir: PathBuf::from(DEFAULT_STATS_DIR),
            playerdata_dir: PathBuf::from(DEFAULT_PLAYERDATA_DIR),
            output_json: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

/// Outcome of a completed export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Reports written to the output file
    pub exported: usize,

    /// Stats files that could not be turned into a report
    pub skipped: Vec<String>,

    pub output_json: PathBuf,
}

/// Execute the export command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * `ExportError::StatsDirMissing` - stats folder does not exist; nothing is written
/// * Output write failures
///
/// Individual stats or playerdata files that fail are logged and skipped.
pub fn execute_export(args: &ExportArgs) -> Result<ExportSummary> {
    let start_time = Instant::now();

    if !args.stats_dir.is_dir() {
        error!("Stats folder not found: {}", args.stats_dir.display());
        return Err(ExportError::StatsDirMissing(args.stats_dir.clone()).into());
    }

    info!("Step 1/3: Loading playerdata from {}...", args.playerdata_dir.display());
    let profiles = load_profiles(&args.playerdata_dir);

    info!("Step 2/3: Parsing stats from {}...", args.stats_dir.display());
    let files = discover_player_files(&args.stats_dir, STATS_EXTENSION)
        .with_context(|| format!("Failed to list stats folder {}", args.stats_dir.display()))?;

    let (reports, skipped) = build_reports(&files, &profiles);

    info!("Step 3/3: Writing output file...");
    write_reports(&reports, &args.output_json).context("Failed to write players JSON")?;

    info!(
        "Done! Exported {} players with names + health to {}",
        reports.len(),
        args.output_json.display()
    );
    if !skipped.is_empty() {
        warn!("Skipped {} stats files: {}", skipped.len(), skipped.join(", "));
    }
    info!("Export completed in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(ExportSummary {
        exported: reports.len(),
        skipped,
        output_json: args.output_json.clone(),
    })
}

/// Build a report for every stats file, collecting the UUIDs that failed
///
/// **Private** - internal helper for execute_export
fn build_reports(
    files: &[PlayerFile],
    profiles: &HashMap<String, ProfileRecord>,
) -> (Vec<PlayerReport>, Vec<String>) {
    let mut reports = Vec::with_capacity(files.len());
    let mut skipped = Vec::new();

    for file in files {
        let profile = profiles.get(&file.uuid);

        match build_player_report(file, profile) {
            Ok(report) => {
                info!(
                    "{} ({}) - {} blocks - {} hearts",
                    report.name,
                    report.uuid,
                    group_thousands(report.distance_traveled),
                    profile
                        .map(|p| p.health.to_string())
                        .unwrap_or_else(|| HEALTH_UNAVAILABLE.to_string())
                );
                reports.push(report);
            }
            Err(e) => {
                warn!("Failed to parse {}: {}", file.uuid, e);
                skipped.push(file.uuid.clone());
            }
        }
    }

    (reports, skipped)
}

/// Read one stats file and merge it with the player's profile
///
/// **Private** - internal helper for build_reports
fn build_player_report(
    file: &PlayerFile,
    profile: Option<&ProfileRecord>,
) -> Result<PlayerReport, StatsError> {
    let stats = read_stats(&file.path)?;

    Ok(build_report(
        &file.uuid,
        profile.map(|p| p.name.as_str()),
        profile.map(|p| p.health),
        &stats,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args_use_fixed_paths() {
        let args = ExportArgs::default();
        assert_eq!(args.stats_dir, PathBuf::from("stats"));
        assert_eq!(args.playerdata_dir, PathBuf::from("playerdata"));
        assert_eq!(args.output_json, PathBuf::from("players.json"));
    }

    #[test]
    fn test_missing_stats_dir_writes_nothing() {
        let temp_dir = tempfile::tempdir().unwrap();
        let args = ExportArgs {
            stats_dir: temp_dir.path().join("stats"),
            playerdata_dir: temp_dir.path().join("playerdata"),
            output_json: temp_dir.path().join("players.json"),
        };

        let err = execute_export(&args).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ExportError>(),
            Some(ExportError::StatsDirMissing(_))
        ));
        assert!(!args.output_json.exists());
    }

    #[test]
    fn test_build_reports_skips_bad_files() {
        let temp_dir = tempfile::tempdir().unwrap();
        let good = temp_dir.path().join("good.json");
        let bad = temp_dir.path().join("bad.json");
        std::fs::write(&good, r#"{"stats": {}}"#).unwrap();
        std::fs::write(&bad, "{ broken").unwrap();

        let files = vec![
            PlayerFile { uuid: "bad".to_string(), path: bad },
            PlayerFile { uuid: "good".to_string(), path: good },
        ];
        let mut profiles = HashMap::new();
        profiles.insert(
            "good".to_string(),
            ProfileRecord { uuid: "good".to_string(), name: "Alex".to_string(), health: 8.5 },
        );

        let (reports, skipped) = build_reports(&files, &profiles);

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].name, "Alex");
        assert_eq!(skipped, vec!["bad".to_string()]);
    }
}

//! Player Stats Export CLI
//!
//! Reads `stats/*.json` and `playerdata/*.dat` and writes a combined
//! `players.json` report.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use log::debug;
use std::path::PathBuf;

use player_stats_export::commands::{execute_export, ExportArgs};
use player_stats_export::utils::config::{
    DEFAULT_OUTPUT_FILE, DEFAULT_PLAYERDATA_DIR, DEFAULT_STATS_DIR,
};
use player_stats_export::utils::ExportError;

/// Player Stats Export - combined player report for Minecraft servers
#[derive(Parser, Debug)]
#[command(name = "player-stats")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute (defaults to export)
    #[command(subcommand)]
    command: Option<Commands>,

    /// Folder with per-player stats JSON files
    #[arg(long, global = true, default_value = DEFAULT_STATS_DIR)]
    stats_dir: PathBuf,

    /// Folder with per-player playerdata (.dat) files
    #[arg(long, global = true, default_value = DEFAULT_PLAYERDATA_DIR)]
    playerdata_dir: PathBuf,

    /// Output path for the players JSON
    #[arg(short, long, global = true, default_value = DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the players report (default)
    Export,

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command.unwrap_or(Commands::Export) {
        Commands::Export => {
            let args = ExportArgs {
                stats_dir: cli.stats_dir,
                playerdata_dir: cli.playerdata_dir,
                output_json: cli.output,
            };

            if let Err(e) = execute_export(&args) {
                // Missing stats folder is already logged; exit normally
                if let Some(ExportError::StatsDirMissing(dir)) = e.downcast_ref::<ExportError>() {
                    debug!("Nothing exported, {} is missing", dir.display());
                    return Ok(());
                }
                return Err(e);
            }
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Display version information
///
/// **Private** - internal command implementation
fn display_version() {
    println!("Player Stats Export v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Aggregates Minecraft player stats and playerdata into one JSON report.");
}

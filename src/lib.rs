//! Player Stats Export
//!
//! Aggregates Minecraft per-player stats files and playerdata into a
//! single JSON report with playtime, distance, combat stats and health.
//!
//! This crate provides the core implementation for the
//! `player-stats` CLI tool.
//!
//! ## Getting Started
//!
//! Run from the server's world folder (the one holding `stats/` and
//! `playerdata/`):
//!
//! ```bash
//! player-stats
//! ```
//!
//! The report is written to `players.json`.

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;

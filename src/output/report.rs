//! Per-player report records written to the output JSON.
//!
//! A report merges one stats file with the (optional) playerdata record of
//! the same UUID. Numbers appear twice: raw in the top-level fields and
//! formatted for display in `totals`.

use crate::aggregator::{calculate_metrics, MovementBreakdown, PlayerMetrics};
use crate::parser::schema::RawStats;
use crate::utils::config::{HEALTH_UNAVAILABLE, TIMESTAMP_FORMAT, UNKNOWN_NAME};
use crate::utils::units::{format_minutes, group_thousands};
use chrono::Local;
use serde::{Serialize, Serializer};

/// Health in hearts, or unavailable when the player has no playerdata
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Hearts {
    Value(f64),
    Unavailable,
}

impl From<Option<f64>> for Hearts {
    fn from(health: Option<f64>) -> Self {
        health.map_or(Hearts::Unavailable, Hearts::Value)
    }
}

impl Serialize for Hearts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Hearts::Value(hearts) => serializer.serialize_f64(*hearts),
            Hearts::Unavailable => serializer.serialize_str(HEALTH_UNAVAILABLE),
        }
    }
}

/// One entry of the output array
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerReport {
    pub uuid: String,
    pub name: String,

    /// Minutes played
    pub playtime: u64,
    pub hearts: Hearts,
    pub blocks_mined: u64,

    /// Blocks travelled, equal to the movement total
    pub distance_traveled: u64,
    pub player_kills: u64,
    pub mob_kills: u64,

    /// Same value as `player_kills`, kept for consumers that read `kills`
    pub kills: u64,
    pub deaths: u64,
    #[serde(rename = "KDR")]
    pub kdr: f64,
    pub items_used: u64,
    pub entities_killed: u64,
    pub jumps: u64,

    /// Local time at which the report was built
    pub last_seen: String,
    pub movement: MovementBreakdown,
    pub totals: ReportTotals,
}

/// Display-formatted totals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportTotals {
    #[serde(rename = "Playtime")]
    pub playtime: String,
    #[serde(rename = "Blocks Mined")]
    pub blocks_mined: String,
    #[serde(rename = "Distance Travelled (in blocks)")]
    pub distance_traveled: String,
    #[serde(rename = "Kills")]
    pub kills: u64,
    #[serde(rename = "Deaths")]
    pub deaths: u64,
    #[serde(rename = "KDR")]
    pub kdr: f64,
    #[serde(rename = "Items Used")]
    pub items_used: String,
    #[serde(rename = "Health (hearts)")]
    pub health: Hearts,
}

/// Build a report stamped with the current local time
///
/// **Public** - main entry point for report building
///
/// # Arguments
/// * `uuid` - Player UUID (stats file name)
/// * `name` - Display name from playerdata, if any
/// * `health` - Hearts from playerdata, if any
/// * `stats` - Raw stats tree for this player
pub fn build_report(
    uuid: &str,
    name: Option<&str>,
    health: Option<f64>,
    stats: &RawStats,
) -> PlayerReport {
    let generated_at = Local::now().format(TIMESTAMP_FORMAT).to_string();
    build_report_at(uuid, name, health, stats, generated_at)
}

/// Same as [`build_report`] with an explicit timestamp
pub fn build_report_at(
    uuid: &str,
    name: Option<&str>,
    health: Option<f64>,
    stats: &RawStats,
    generated_at: String,
) -> PlayerReport {
    let metrics = calculate_metrics(stats);
    let name = name
        .filter(|n| !n.is_empty())
        .unwrap_or(UNKNOWN_NAME)
        .to_string();

    assemble_report(uuid.to_string(), name, Hearts::from(health), metrics, generated_at)
}

fn assemble_report(
    uuid: String,
    name: String,
    hearts: Hearts,
    metrics: PlayerMetrics,
    last_seen: String,
) -> PlayerReport {
    let distance_traveled = metrics.distance_traveled();

    let totals = ReportTotals {
        playtime: format_minutes(metrics.playtime),
        blocks_mined: group_thousands(metrics.blocks_mined),
        distance_traveled: group_thousands(distance_traveled),
        kills: metrics.player_kills,
        deaths: metrics.deaths,
        kdr: metrics.kdr,
        items_used: group_thousands(metrics.items_used),
        health: hearts,
    };

    PlayerReport {
        uuid,
        name,
        playtime: metrics.playtime,
        hearts,
        blocks_mined: metrics.blocks_mined,
        distance_traveled,
        player_kills: metrics.player_kills,
        mob_kills: metrics.mob_kills,
        kills: metrics.player_kills,
        deaths: metrics.deaths,
        kdr: metrics.kdr,
        items_used: metrics.items_used,
        entities_killed: metrics.entities_killed,
        jumps: metrics.jumps,
        last_seen,
        movement: metrics.movement,
        totals,
    }
}

//! Configuration and constants for the exporter.

/// Default folder holding one `<uuid>.json` stats file per player
pub const DEFAULT_STATS_DIR: &str = "stats";

/// Default folder holding one `<uuid>.dat` playerdata file per player
pub const DEFAULT_PLAYERDATA_DIR: &str = "playerdata";

/// Default output file for the aggregated report
pub const DEFAULT_OUTPUT_FILE: &str = "players.json";

pub const STATS_EXTENSION: &str = "json";
pub const PLAYERDATA_EXTENSION: &str = "dat";

// 20 ticks per second, 60 seconds per minute
pub const TICKS_PER_MINUTE: u64 = 20 * 60;
// 1 block = 1 meter = 100 cm
pub const CM_PER_BLOCK: u64 = 100;
// 2 health points = 1 heart
pub const HEALTH_POINTS_PER_HEART: f64 = 2.0;

/// Name used when no profile field yields a player name
pub const UNKNOWN_NAME: &str = "Unknown";

/// Rendered in place of hearts when a player has no playerdata
pub const HEALTH_UNAVAILABLE: &str = "N/A";

/// Timestamp format for `lastSeen`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Stat sections inside the `stats` object
pub const SECTION_CUSTOM: &str = "minecraft:custom";
pub const SECTION_MINED: &str = "minecraft:mined";
pub const SECTION_USED: &str = "minecraft:used";
pub const SECTION_KILLED: &str = "minecraft:killed";

// Counters inside `minecraft:custom`
pub const STAT_PLAY_TIME: &str = "minecraft:play_time";
pub const STAT_PLAYER_KILLS: &str = "minecraft:player_kills";
pub const STAT_MOB_KILLS: &str = "minecraft:mob_kills";
pub const STAT_DEATHS: &str = "minecraft:deaths";
pub const STAT_JUMP: &str = "minecraft:jump";

// Field paths for playerdata lookups (different server software store names differently).
// Tried in order; first hit wins.
pub const NAME_FIELD_PATHS: &[&[&str]] = &[
    &["bukkit", "player", "Name"],
    &["bukkit", "lastKnownName"],
    &["Name"],
];
pub const HEALTH_FIELD_PATHS: &[&[&str]] = &[&["Health"], &["health"]];

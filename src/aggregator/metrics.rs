//! Derived per-player metrics from a raw stats tree.
//!
//! Every counter defaults to 0 when its key or section is missing, so a
//! sparse stats file (e.g. a player who only logged in once) still
//! produces a full set of metrics.

use super::movement::{calculate_movement, MovementBreakdown};
use crate::parser::schema::RawStats;
use crate::utils::config::{
    SECTION_KILLED, SECTION_MINED, SECTION_USED, STAT_DEATHS, STAT_JUMP, STAT_MOB_KILLS,
    STAT_PLAYER_KILLS, STAT_PLAY_TIME,
};
use crate::utils::units::{round_to, sum_section, ticks_to_minutes};
use log::debug;

/// Metrics derived from one player's stats file
///
/// **Public** - returned from calculate_metrics
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerMetrics {
    /// Playtime in minutes
    pub playtime: u64,

    /// Sum of every block type in `minecraft:mined`
    pub blocks_mined: u64,

    /// Sum of every item type in `minecraft:used`
    pub items_used: u64,

    pub player_kills: u64,
    pub mob_kills: u64,
    pub deaths: u64,

    /// Sum of every entity type in `minecraft:killed`
    pub entities_killed: u64,

    pub jumps: u64,

    /// Kill/death ratio, see [`calculate_kdr`]
    pub kdr: f64,

    pub movement: MovementBreakdown,
}

impl PlayerMetrics {
    /// Total distance travelled in blocks (movement total)
    pub fn distance_traveled(&self) -> u64 {
        self.movement.total()
    }
}

/// Calculate all derived metrics for one player
///
/// **Public** - main entry point for stats aggregation
pub fn calculate_metrics(stats: &RawStats) -> PlayerMetrics {
    let player_kills = stats.custom(STAT_PLAYER_KILLS);
    let deaths = stats.custom(STAT_DEATHS);

    let metrics = PlayerMetrics {
        playtime: ticks_to_minutes(stats.custom(STAT_PLAY_TIME)),
        blocks_mined: sum_section(stats.section(SECTION_MINED)),
        items_used: sum_section(stats.section(SECTION_USED)),
        player_kills,
        mob_kills: stats.custom(STAT_MOB_KILLS),
        deaths,
        entities_killed: sum_section(stats.section(SECTION_KILLED)),
        jumps: stats.custom(STAT_JUMP),
        kdr: calculate_kdr(player_kills, deaths),
        movement: calculate_movement(stats),
    };

    debug!(
        "Metrics: {} min, {} mined, {} blocks travelled, KDR {}",
        metrics.playtime,
        metrics.blocks_mined,
        metrics.distance_traveled(),
        metrics.kdr
    );

    metrics
}

/// Player kills per death, rounded to 2 decimals
///
/// With no deaths the ratio is the raw kill count.
pub fn calculate_kdr(player_kills: u64, deaths: u64) -> f64 {
    if deaths > 0 {
        round_to(player_kills as f64 / deaths as f64, 2)
    } else {
        player_kills as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_stats;

    #[test]
    fn test_calculate_kdr() {
        assert_eq!(calculate_kdr(5, 0), 5.0);
        assert_eq!(calculate_kdr(10, 4), 2.5);
        assert_eq!(calculate_kdr(1, 3), 0.33);
        assert_eq!(calculate_kdr(2, 3), 0.67);
        assert_eq!(calculate_kdr(0, 0), 0.0);
    }

    #[test]
    fn test_calculate_metrics_full() {
        let stats = parse_stats(
            r#"{"stats": {
                "minecraft:custom": {
                    "minecraft:play_time": 72000,
                    "minecraft:player_kills": 10,
                    "minecraft:mob_kills": 55,
                    "minecraft:deaths": 4,
                    "minecraft:jump": 321,
                    "minecraft:walk_one_cm": 100000
                },
                "minecraft:mined": { "minecraft:stone": 1000, "minecraft:dirt": 234 },
                "minecraft:used": { "minecraft:diamond_pickaxe": 900, "minecraft:torch": 64 },
                "minecraft:killed": { "minecraft:zombie": 40, "minecraft:skeleton": 15 }
            }}"#,
        )
        .unwrap();

        let metrics = calculate_metrics(&stats);

        assert_eq!(metrics.playtime, 60);
        assert_eq!(metrics.blocks_mined, 1234);
        assert_eq!(metrics.items_used, 964);
        assert_eq!(metrics.player_kills, 10);
        assert_eq!(metrics.mob_kills, 55);
        assert_eq!(metrics.deaths, 4);
        assert_eq!(metrics.entities_killed, 55);
        assert_eq!(metrics.jumps, 321);
        assert_eq!(metrics.kdr, 2.5);
        assert_eq!(metrics.distance_traveled(), 1000);
    }

    #[test]
    fn test_calculate_metrics_empty_stats() {
        let metrics = calculate_metrics(&RawStats::default());

        assert_eq!(metrics.playtime, 0);
        assert_eq!(metrics.blocks_mined, 0);
        assert_eq!(metrics.items_used, 0);
        assert_eq!(metrics.entities_killed, 0);
        assert_eq!(metrics.kdr, 0.0);
        assert_eq!(metrics.distance_traveled(), 0);
    }
}

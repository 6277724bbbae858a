//! Movement distance breakdown.
//!
//! Only the categories listed in [`MOVEMENT_CATEGORIES`] count towards the
//! travelled distance. Flying, minecarts, horses, pigs, striders and elytra
//! are left out on purpose, which matches the distance shown by common
//! server panels.

use crate::parser::schema::RawStats;
use crate::utils::units::cm_to_blocks;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Key under which the summed distance is emitted
pub const MOVEMENT_TOTAL_LABEL: &str = "Total (blocks)";

/// Display label -> `minecraft:custom` counter (in cm), in output order
pub const MOVEMENT_CATEGORIES: &[(&str, &str)] = &[
    ("Distance Sprinted", "minecraft:sprint_one_cm"),
    ("Distance Walked", "minecraft:walk_one_cm"),
    ("Distance by Boat", "minecraft:boat_one_cm"),
    ("Distance Fallen", "minecraft:fall_one_cm"),
    ("Distance Swum", "minecraft:swim_one_cm"),
    ("Distance Walked on Water", "minecraft:walk_on_water_one_cm"),
    ("Distance Walked under Water", "minecraft:walk_under_water_one_cm"),
    ("Distance Crouched", "minecraft:crouch_one_cm"),
    ("Distance Climbed", "minecraft:climb_one_cm"),
];

/// Distance per movement category, in blocks
///
/// **Public** - serialized as an ordered JSON object with the total last
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementBreakdown {
    entries: Vec<(&'static str, u64)>,
    total: u64,
}

impl MovementBreakdown {
    /// Build from per-category block counts; the total is always derived
    pub fn from_entries(entries: Vec<(&'static str, u64)>) -> Self {
        let total = entries
            .iter()
            .fold(0u64, |acc, (_, blocks)| acc.saturating_add(*blocks));
        Self { entries, total }
    }

    /// Categories in declaration order
    pub fn entries(&self) -> &[(&'static str, u64)] {
        &self.entries
    }

    /// Blocks for one category label (or the total label)
    pub fn get(&self, label: &str) -> Option<u64> {
        if label == MOVEMENT_TOTAL_LABEL {
            return Some(self.total);
        }
        self.entries
            .iter()
            .find(|(name, _)| *name == label)
            .map(|(_, blocks)| *blocks)
    }

    pub fn total(&self) -> u64 {
        self.total
    }
}

impl Serialize for MovementBreakdown {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len() + 1))?;
        for (label, blocks) in &self.entries {
            map.serialize_entry(label, blocks)?;
        }
        map.serialize_entry(MOVEMENT_TOTAL_LABEL, &self.total)?;
        map.end()
    }
}

/// Compute the movement breakdown for one player
///
/// Each category is converted to blocks before summing, so the total
/// matches the listed entries exactly.
pub fn calculate_movement(stats: &RawStats) -> MovementBreakdown {
    let entries = MOVEMENT_CATEGORIES
        .iter()
        .map(|(label, key)| (*label, cm_to_blocks(stats.custom(key))))
        .collect();

    MovementBreakdown::from_entries(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_stats;

    #[test]
    fn test_movement_converts_and_sums() {
        let stats = parse_stats(
            r#"{"stats": {"minecraft:custom": {
                "minecraft:sprint_one_cm": 10050,
                "minecraft:walk_one_cm": 249,
                "minecraft:climb_one_cm": 250
            }}}"#,
        )
        .unwrap();

        let movement = calculate_movement(&stats);

        assert_eq!(movement.get("Distance Sprinted"), Some(101));
        assert_eq!(movement.get("Distance Walked"), Some(2));
        assert_eq!(movement.get("Distance Climbed"), Some(3));
        assert_eq!(movement.get("Distance by Boat"), Some(0));
        assert_eq!(movement.total(), 106);
        assert_eq!(movement.get(MOVEMENT_TOTAL_LABEL), Some(106));
    }

    #[test]
    fn test_excluded_modes_do_not_count() {
        let stats = parse_stats(
            r#"{"stats": {"minecraft:custom": {
                "minecraft:fly_one_cm": 500000,
                "minecraft:minecart_one_cm": 500000,
                "minecraft:horse_one_cm": 500000,
                "minecraft:aviate_one_cm": 500000,
                "minecraft:walk_one_cm": 1000
            }}}"#,
        )
        .unwrap();

        assert_eq!(calculate_movement(&stats).total(), 10);
    }

    #[test]
    fn test_total_equals_sum_of_entries() {
        let stats = parse_stats(
            r#"{"stats": {"minecraft:custom": {
                "minecraft:sprint_one_cm": 151, "minecraft:walk_one_cm": 49,
                "minecraft:boat_one_cm": 350, "minecraft:fall_one_cm": 1,
                "minecraft:swim_one_cm": 99, "minecraft:walk_on_water_one_cm": 12345,
                "minecraft:walk_under_water_one_cm": 50, "minecraft:crouch_one_cm": 777,
                "minecraft:climb_one_cm": 100000
            }}}"#,
        )
        .unwrap();

        let movement = calculate_movement(&stats);
        let sum: u64 = movement.entries().iter().map(|(_, b)| b).sum();

        assert_eq!(movement.entries().len(), 9);
        assert_eq!(movement.total(), sum);
    }

    #[test]
    fn test_serialized_order() {
        let movement = calculate_movement(&RawStats::default());
        let json = serde_json::to_string(&movement).unwrap();

        let mut last = 0;
        for label in MOVEMENT_CATEGORIES
            .iter()
            .map(|(label, _)| *label)
            .chain(std::iter::once(MOVEMENT_TOTAL_LABEL))
        {
            let pos = json.find(&format!("\"{}\"", label)).unwrap();
            assert!(pos >= last, "{} out of order in {}", label, json);
            last = pos;
        }
    }
}

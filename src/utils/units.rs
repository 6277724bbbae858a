//! Unit conversion and display formatting for raw game counters.
//!
//! All integer conversions round half up, so an exact `.5` always goes to
//! the larger value (250 cm is 3 blocks, 600 ticks is 1 minute).

use super::config::{CM_PER_BLOCK, HEALTH_POINTS_PER_HEART, TICKS_PER_MINUTE};
use crate::parser::schema::StatSection;

/// Convert game ticks (20 per second) to whole minutes
pub fn ticks_to_minutes(ticks: u64) -> u64 {
    div_round_half_up(ticks, TICKS_PER_MINUTE)
}

/// Convert centimeters to whole blocks
pub fn cm_to_blocks(cm: u64) -> u64 {
    div_round_half_up(cm, CM_PER_BLOCK)
}

/// Sum every counter in a stat section; an absent section sums to 0
pub fn sum_section(section: Option<&StatSection>) -> u64 {
    section
        .map(|s| s.values().fold(0u64, |acc, v| acc.saturating_add(*v)))
        .unwrap_or(0)
}

/// Convert raw health points to hearts, rounded to one decimal place
pub fn health_to_hearts(points: f64) -> f64 {
    round_to(points / HEALTH_POINTS_PER_HEART, 1)
}

/// Round a ratio or measurement to `places` decimal places
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Render an integer with comma thousands separators (`1234567` -> `1,234,567`)
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    grouped
}

/// Render a playtime in minutes for display
pub fn format_minutes(minutes: u64) -> String {
    format!("{} min", minutes)
}

fn div_round_half_up(value: u64, divisor: u64) -> u64 {
    value.saturating_add(divisor / 2) / divisor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_to_minutes() {
        assert_eq!(ticks_to_minutes(72_000), 60);
        assert_eq!(ticks_to_minutes(0), 0);
        assert_eq!(ticks_to_minutes(599), 0);
        assert_eq!(ticks_to_minutes(600), 1);
        assert_eq!(ticks_to_minutes(1_799), 1);
        assert_eq!(ticks_to_minutes(1_800), 2);
    }

    #[test]
    fn test_cm_to_blocks_half_boundary() {
        assert_eq!(cm_to_blocks(250), 3);
        assert_eq!(cm_to_blocks(249), 2);
        assert_eq!(cm_to_blocks(150), 2);
        assert_eq!(cm_to_blocks(49), 0);
        assert_eq!(cm_to_blocks(u64::MAX), u64::MAX / 100);
    }

    #[test]
    fn test_sum_section() {
        assert_eq!(sum_section(None), 0);
        assert_eq!(sum_section(Some(&StatSection::new())), 0);

        let mut section = StatSection::new();
        section.insert("a".to_string(), 3);
        section.insert("b".to_string(), 5);
        assert_eq!(sum_section(Some(&section)), 8);
    }

    #[test]
    fn test_health_to_hearts() {
        assert_eq!(health_to_hearts(20.0), 10.0);
        assert_eq!(health_to_hearts(13.0), 6.5);
        assert_eq!(health_to_hearts(19.5), 9.8);
        assert_eq!(health_to_hearts(0.0), 0.0);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
        assert_eq!(group_thousands(100_000), "100,000");
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(42), "42 min");
    }
}

use player_stats_export::aggregator::{
    calculate_kdr, calculate_metrics, calculate_movement, MOVEMENT_CATEGORIES, MOVEMENT_TOTAL_LABEL,
};
use player_stats_export::parser::parse_stats;
use player_stats_export::utils::units::{cm_to_blocks, sum_section, ticks_to_minutes};

#[test]
fn test_unit_conversions() {
    assert_eq!(ticks_to_minutes(72_000), 60);
    assert_eq!(cm_to_blocks(250), 3);
    assert_eq!(cm_to_blocks(100), 1);
    assert_eq!(sum_section(None), 0);
}

#[test]
fn test_kdr_policy() {
    assert_eq!(calculate_kdr(5, 0), 5.0);
    assert_eq!(calculate_kdr(10, 4), 2.5);
    assert_eq!(calculate_kdr(1, 3), 0.33);
}

#[test]
fn test_movement_total_matches_entries_for_many_inputs() {
    for seed in [0u64, 1, 49, 50, 99, 12_345, 987_654_321] {
        let custom: Vec<String> = MOVEMENT_CATEGORIES
            .iter()
            .enumerate()
            .map(|(i, (_, key))| format!("\"{}\": {}", key, seed * (i as u64 + 1) + i as u64 * 17))
            .collect();
        let json = format!(r#"{{"stats": {{"minecraft:custom": {{{}}}}}}}"#, custom.join(","));

        let movement = calculate_movement(&parse_stats(&json).unwrap());
        let sum: u64 = MOVEMENT_CATEGORIES
            .iter()
            .map(|(label, _)| movement.get(label).unwrap())
            .sum();

        assert_eq!(movement.get(MOVEMENT_TOTAL_LABEL), Some(sum), "seed {}", seed);
    }
}

#[test]
fn test_metrics_tolerate_missing_sections() {
    let stats = parse_stats(r#"{"stats": {"minecraft:custom": {"minecraft:deaths": 2}}}"#).unwrap();
    let metrics = calculate_metrics(&stats);

    assert_eq!(metrics.deaths, 2);
    assert_eq!(metrics.player_kills, 0);
    assert_eq!(metrics.kdr, 0.0);
    assert_eq!(metrics.blocks_mined, 0);
    assert_eq!(metrics.distance_traveled(), 0);
}

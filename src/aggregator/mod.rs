//! Aggregation of raw stats into player metrics.
//!
//! This module transforms raw counters into:
//! - Totals per stat section (mined, used, killed)
//! - Movement distance breakdown
//! - Kill/death ratio

pub mod metrics;
pub mod movement;

// Re-export main types and functions
pub use metrics::{calculate_kdr, calculate_metrics, PlayerMetrics};
pub use movement::{calculate_movement, MovementBreakdown, MOVEMENT_CATEGORIES, MOVEMENT_TOTAL_LABEL};

//! Report building and output writers.
//!
//! - Merging stats and playerdata into per-player reports
//! - Writing the report collection as pretty JSON

pub mod json;
pub mod report;

// Re-export main functions
pub use json::{read_reports, write_reports};
pub use report::{build_report, build_report_at, Hearts, PlayerReport, ReportTotals};

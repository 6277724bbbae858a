//! CLI command implementations.
//!
//! Commands orchestrate the library components to perform user tasks.

pub mod export;

// Re-export main command functions
pub use export::{execute_export, ExportArgs, ExportSummary};

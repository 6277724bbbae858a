//! Input readers and data model.
//!
//! This module handles:
//! - Locating per-player files
//! - Reading stats JSON
//! - Decoding playerdata tag trees into name + health

pub mod discovery;
pub mod profile;
pub mod schema;
pub mod stats;
pub mod tag_tree;

// Re-export main types
pub use discovery::{discover_player_files, PlayerFile};
pub use profile::{load_profiles, load_profiles_with, resolve_health, resolve_name};
pub use schema::{ProfileRecord, RawStats, StatSection};
pub use stats::{parse_stats, read_stats};
pub use tag_tree::{NbtDecoder, TagNode, TagTreeDecoder};

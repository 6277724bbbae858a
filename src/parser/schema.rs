//! Input data model for stats files and playerdata records.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashMap;

use crate::utils::config::SECTION_CUSTOM;

/// One stat section, e.g. `minecraft:mined` -> { block id -> count }
pub type StatSection = HashMap<String, u64>;

/// Raw contents of a `stats/<uuid>.json` file
///
/// Only the `stats` object is read; other top-level keys such as
/// `DataVersion` are ignored. Counters that are not non-negative integers
/// (wrapped i32 overflow, floats from mods) read as 0, and sections that
/// are not objects are dropped.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawStats {
    #[serde(default, deserialize_with = "lenient_sections")]
    pub stats: HashMap<String, StatSection>,
}

fn lenient_sections<'de, D>(deserializer: D) -> Result<HashMap<String, StatSection>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = HashMap::<String, Value>::deserialize(deserializer)?;

    Ok(raw
        .into_iter()
        .filter_map(|(name, section)| match section {
            Value::Object(counters) => Some((
                name,
                counters
                    .into_iter()
                    .map(|(key, value)| (key, value.as_u64().unwrap_or(0)))
                    .collect(),
            )),
            _ => None,
        })
        .collect())
}

impl RawStats {
    /// Get a named section, if the file has one
    pub fn section(&self, name: &str) -> Option<&StatSection> {
        self.stats.get(name)
    }

    /// Get a counter from `minecraft:custom`, defaulting to 0
    pub fn custom(&self, key: &str) -> u64 {
        self.section(SECTION_CUSTOM)
            .and_then(|s| s.get(key))
            .copied()
            .unwrap_or(0)
    }
}

/// Name and last-known health read from one playerdata file
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileRecord {
    pub uuid: String,

    /// Display name, "Unknown" if no field carried one
    pub name: String,

    /// Health in hearts (raw points / 2), one decimal place
    pub health: f64,
}

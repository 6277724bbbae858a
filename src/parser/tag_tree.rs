//! Decoded playerdata tag trees.
//!
//! The rest of the crate only sees [`TagNode`]; the NBT library is confined
//! to [`NbtDecoder`].

use crate::utils::error::ProfileError;
use flate2::read::GzDecoder;
use log::debug;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// A node in a decoded tag tree
#[derive(Debug, Clone, PartialEq)]
pub enum TagNode {
    Compound(HashMap<String, TagNode>),
    List(Vec<TagNode>),
    String(String),
    /// Any numeric tag, widened to f64
    Number(f64),
    /// Packed arrays and anything else we never read
    Opaque,
}

impl TagNode {
    /// Look up a direct child of a compound
    pub fn get(&self, key: &str) -> Option<&TagNode> {
        match self {
            TagNode::Compound(map) => map.get(key),
            _ => None,
        }
    }

    /// Follow a path of compound keys, e.g. `["bukkit", "player", "Name"]`
    pub fn lookup(&self, path: &[&str]) -> Option<&TagNode> {
        path.iter().try_fold(self, |node, key| node.get(key))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            TagNode::String(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric value; numeric strings are accepted too
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            TagNode::Number(n) => Some(*n),
            TagNode::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl From<fastnbt::Value> for TagNode {
    fn from(value: fastnbt::Value) -> Self {
        use fastnbt::Value;

        match value {
            Value::Compound(map) => {
                TagNode::Compound(map.into_iter().map(|(k, v)| (k, v.into())).collect())
            }
            Value::List(items) => TagNode::List(items.into_iter().map(TagNode::from).collect()),
            Value::String(s) => TagNode::String(s),
            Value::Byte(n) => TagNode::Number(n as f64),
            Value::Short(n) => TagNode::Number(n as f64),
            Value::Int(n) => TagNode::Number(n as f64),
            Value::Long(n) => TagNode::Number(n as f64),
            Value::Float(n) => TagNode::Number(n as f64),
            Value::Double(n) => TagNode::Number(n),
            _ => TagNode::Opaque,
        }
    }
}

/// Turns a playerdata file into a tag tree
pub trait TagTreeDecoder {
    fn decode(&self, path: &Path) -> Result<TagNode, ProfileError>;
}

/// Decoder for `.dat` playerdata files (gzip-compressed or raw NBT)
#[derive(Debug, Clone, Copy, Default)]
pub struct NbtDecoder;

impl TagTreeDecoder for NbtDecoder {
    fn decode(&self, path: &Path) -> Result<TagNode, ProfileError> {
        let raw = std::fs::read(path)?;
        let bytes = if raw.starts_with(&GZIP_MAGIC) {
            let mut inflated = Vec::new();
            GzDecoder::new(raw.as_slice()).read_to_end(&mut inflated)?;
            debug!("Inflated {} ({} -> {} bytes)", path.display(), raw.len(), inflated.len());
            inflated
        } else {
            raw
        };

        let value: fastnbt::Value = fastnbt::from_bytes(&bytes)?;

        match TagNode::from(value) {
            root @ TagNode::Compound(_) => Ok(root),
            _ => Err(ProfileError::InvalidFormat(
                "root tag is not a compound".to_string(),
            )),
        }
    }
}

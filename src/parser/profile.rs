//! Playerdata loader: display name and last-known health per UUID.
//!
//! Name and health live in different places depending on the server
//! software that wrote the file, so both are resolved by trying a fixed
//! list of field paths in order (see `NAME_FIELD_PATHS` and
//! `HEALTH_FIELD_PATHS`).

use super::discovery::discover_player_files;
use super::schema::ProfileRecord;
use super::tag_tree::{NbtDecoder, TagNode, TagTreeDecoder};
use crate::utils::config::{
    HEALTH_FIELD_PATHS, NAME_FIELD_PATHS, PLAYERDATA_EXTENSION, UNKNOWN_NAME,
};
use crate::utils::error::ProfileError;
use crate::utils::units::health_to_hearts;
use log::{debug, info, warn};
use std::collections::HashMap;
use std::path::Path;

/// Load every playerdata file in `dir`
///
/// **Public** - main entry point for playerdata
///
/// A missing folder yields an empty map. Files that fail to decode are
/// logged and left out.
pub fn load_profiles(dir: impl AsRef<Path>) -> HashMap<String, ProfileRecord> {
    load_profiles_with(dir, &NbtDecoder)
}

/// Same as [`load_profiles`] with a caller-supplied decoder
pub fn load_profiles_with<D: TagTreeDecoder>(
    dir: impl AsRef<Path>,
    decoder: &D,
) -> HashMap<String, ProfileRecord> {
    let dir = dir.as_ref();
    let mut profiles = HashMap::new();

    if !dir.is_dir() {
        warn!("Playerdata folder not found: {}", dir.display());
        return profiles;
    }

    let files = match discover_player_files(dir, PLAYERDATA_EXTENSION) {
        Ok(files) => files,
        Err(e) => {
            warn!("Cannot list playerdata folder {}: {}", dir.display(), e);
            return profiles;
        }
    };

    for file in files {
        debug!("Reading playerdata: {}", file.path.display());

        match read_profile(&file.uuid, &file.path, decoder) {
            Ok(record) => {
                profiles.insert(file.uuid, record);
            }
            Err(e) => warn!("Error reading {}: {}", file.path.display(), e),
        }
    }

    info!(
        "Loaded {} players (name + health) from {}",
        profiles.len(),
        dir.display()
    );

    profiles
}

/// Decode one playerdata file into a profile record
pub fn read_profile<D: TagTreeDecoder>(
    uuid: &str,
    path: &Path,
    decoder: &D,
) -> Result<ProfileRecord, ProfileError> {
    let root = decoder.decode(path)?;
    Ok(profile_from_tree(uuid, &root))
}

/// Build a profile record from an already decoded tree
pub fn profile_from_tree(uuid: &str, root: &TagNode) -> ProfileRecord {
    ProfileRecord {
        uuid: uuid.to_string(),
        name: resolve_name(root),
        health: health_to_hearts(resolve_health(root)),
    }
}

/// First non-empty name found along `NAME_FIELD_PATHS`, else "Unknown"
pub fn resolve_name(root: &TagNode) -> String {
    NAME_FIELD_PATHS
        .iter()
        .find_map(|path| {
            root.lookup(path)
                .and_then(TagNode::as_str)
                .filter(|name| !name.is_empty())
        })
        .unwrap_or(UNKNOWN_NAME)
        .to_string()
}

/// Raw health points found along `HEALTH_FIELD_PATHS`, else 0.0
pub fn resolve_health(root: &TagNode) -> f64 {
    HEALTH_FIELD_PATHS
        .iter()
        .find_map(|path| root.lookup(path).and_then(TagNode::as_f64))
        .unwrap_or(0.0)
}

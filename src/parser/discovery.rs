//! Locate per-player files in a data folder.

use log::warn;
use std::path::{Path, PathBuf};

/// A per-player file found in a data folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerFile {
    /// File name without extension (the player's UUID)
    pub uuid: String,
    pub path: PathBuf,
}

/// List files directly inside `dir` whose extension is `extension`
///
/// Not recursive. Results are sorted by UUID so repeated runs emit
/// players in the same order. Names that are not valid UTF-8 are skipped.
pub fn discover_player_files(dir: &Path, extension: &str) -> std::io::Result<Vec<PlayerFile>> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();

        if !path.is_file() || path.extension().and_then(|e| e.to_str()) != Some(extension) {
            continue;
        }

        match path.file_stem().and_then(|s| s.to_str()) {
            Some(uuid) => files.push(PlayerFile {
                uuid: uuid.to_string(),
                path: path.clone(),
            }),
            None => warn!("Skipping file with non UTF-8 name: {}", path.display()),
        }
    }

    files.sort_by(|a, b| a.uuid.cmp(&b.uuid));
    Ok(files)
}

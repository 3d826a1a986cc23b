//! I/O helpers: PNG persistence and JSON trace output.
//!
//! - `save_png`: write encoded image bytes to `<dir>/<name>.png`.
//! - `write_json_file`: pretty-print a serializable value to disk.
use crate::error::IdenticonError;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// File extension of every persisted identicon.
pub const IMAGE_EXT: &str = "png";

/// Write PNG bytes to `<dir>/<name>.png`, creating `dir` if missing, and
/// return the full path written.
///
/// An existing file with the same name is overwritten; repeated saves of
/// the same input are therefore idempotent.
pub fn save_png(bytes: &[u8], dir: &Path, name: &str) -> Result<PathBuf, IdenticonError> {
    let path = dir.join(format!("{name}.{IMAGE_EXT}"));
    ensure_parent_dir(&path)?;
    fs::write(&path, bytes).map_err(|e| IdenticonError::Io {
        path: path.clone(),
        source: e,
    })?;
    Ok(path)
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), IdenticonError> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|e| IdenticonError::Json {
        path: path.to_path_buf(),
        source: e,
    })?;
    fs::write(path, json).map_err(|e| IdenticonError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

fn ensure_parent_dir(path: &Path) -> Result<(), IdenticonError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| IdenticonError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
    }
    Ok(())
}

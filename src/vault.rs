//! Loading notes from an on-disk vault directory

use std::path::{Path, PathBuf};

use thiserror::Error;
use walkdir::WalkDir;

use crate::parse::Note;

/// Failure loading notes from disk
#[derive(Debug, Error)]
pub enum VaultError {
    #[error("'{0}' is not a directory")]
    NotADirectory(PathBuf),

    #[error("cannot read '{path}': {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Load every `*.md` file under `dir`, recursively, as notes named by their
/// file name
///
/// Traversal is sorted by file name so repeated loads of the same vault
/// build graphs in the same order. Duplicate file names in different
/// subdirectories collapse to duplicate ids, which the parser flags.
pub fn load_notes(dir: &Path) -> Result<Vec<Note>, VaultError> {
    if !dir.is_dir() {
        return Err(VaultError::NotADirectory(dir.to_path_buf()));
    }

    let mut notes = Vec::new();
    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|e| VaultError::Unreadable {
            path: e.path().map(Path::to_path_buf).unwrap_or_else(|| dir.to_path_buf()),
            source: e.into(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("md") {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| VaultError::Unreadable {
            path: path.to_path_buf(),
            source: e,
        })?;
        notes.push(Note::new(name, content));
    }

    tracing::debug!(count = notes.len(), dir = %dir.display(), "vault loaded");
    Ok(notes)
}

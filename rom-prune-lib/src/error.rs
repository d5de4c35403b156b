use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while scanning or repackaging a collection.
#[derive(Debug, Error)]
pub enum PruneError {
    /// I/O error outside of any archive
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A container could not be opened or decoded
    #[error("cannot read archive {path}: {source}")]
    ArchiveRead {
        path: PathBuf,
        source: sevenz_rust::Error,
    },

    /// A destination container could not be written
    #[error("cannot write archive {path}: {source}")]
    ArchiveWrite {
        path: PathBuf,
        source: sevenz_rust::Error,
    },

    /// A container was opened but the expected entry was not inside it
    #[error("entry {entry:?} not found in {path}")]
    MissingEntry { path: PathBuf, entry: String },
}

impl PruneError {
    pub fn archive_read(path: impl AsRef<Path>, source: sevenz_rust::Error) -> Self {
        Self::ArchiveRead {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn archive_write(path: impl AsRef<Path>, source: sevenz_rust::Error) -> Self {
        Self::ArchiveWrite {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    pub fn missing_entry(path: impl AsRef<Path>, entry: impl Into<String>) -> Self {
        Self::MissingEntry {
            path: path.as_ref().to_path_buf(),
            entry: entry.into(),
        }
    }
}

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Every failure the cleanup tool reports. None of them is fatal: callers
/// log the error against the item it belongs to and carry on.
#[derive(Debug, Error)]
pub enum CleanupError {
    #[error("couldn't open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no installdir key found in {manifest}")]
    KeyNotFound { manifest: String },

    #[error("couldn't parse installdir key on line {line} of {manifest}")]
    ParseFailure { manifest: String, line: usize },

    #[error("{manifest} is not a .acf file")]
    NotManifest { manifest: String },

    #[error("couldn't delete {}: {source}", path.display())]
    Delete {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("nothing to delete, run detection first")]
    NothingToDelete,
}

impl CleanupError {
    pub(crate) fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }
}

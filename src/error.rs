//! Errors raised while loading static game data

use crate::hints::TreeError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure to load word lists or decision trees
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("malformed decision tree JSON")]
    Json(#[from] serde_json::Error),
    #[error("invalid decision tree")]
    Tree(#[from] TreeError),
    #[error("solution list is empty")]
    NoSolutions,
}

impl DataError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

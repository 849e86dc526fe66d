/// Error types surfaced to the user by the localize action
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::persist::PersistError;

#[derive(Debug, Error)]
pub enum LocalizeError {
    #[error("The active view is not backed by a file")]
    NoActiveFile,

    #[error("No text was highlighted")]
    EmptySelection,

    #[error("The selection spans several lines; select a single-line string")]
    MultilineSelection,

    #[error("Could not find the root folder above {}", start.display())]
    RootNotFound { start: PathBuf },

    /// The upward walk gave up after `depth` steps; reported like a missing root.
    #[error("Could not find the root folder above {} (gave up after {depth} levels)", start.display())]
    WalkTooDeep { start: PathBuf, depth: usize },

    #[error("The localization key must not be empty")]
    EmptyKey,

    #[error("Invalid localization key '{key}': keys cannot contain '=' or whitespace")]
    InvalidKey { key: String },

    #[error("'{value}' cannot be stored in {}: the file is Latin-1 encoded", path.display())]
    UnencodableValue { value: String, path: PathBuf },

    #[error("Key '{key}' already exists with value '{existing}'")]
    DuplicateKey { key: String, existing: String },

    #[error("Could not access strings file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Persist(#[from] PersistError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl LocalizeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Both walk failures mean the same thing to the user.
    pub fn is_root_not_found(&self) -> bool {
        matches!(self, Self::RootNotFound { .. } | Self::WalkTooDeep { .. })
    }
}

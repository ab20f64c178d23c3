//! Unified error types for sk-restore.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur while loading a manifest or restoring samples.
#[derive(Error, Debug)]
pub enum RestoreError {
    // --- Manifest ---

    /// The manifest file could not be read.
    #[error("manifest not found at {path}")]
    ManifestNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest file exists but is not valid JSON.
    #[error("failed to parse manifest at {path}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The manifest is valid JSON but not an object of strings.
    #[error("invalid manifest at {path}: {reason}")]
    InvalidManifest { path: PathBuf, reason: String },

    /// The manifest has no entries.
    #[error("manifest contains no projects")]
    EmptyManifest,

    /// Two entries share the same project name.
    #[error("duplicate project name: {0}")]
    DuplicateProject(String),

    /// The project name is not a single plain path component.
    #[error("invalid project name: {0:?} (must be a single directory name)")]
    InvalidProjectName(String),

    // --- General ---

    /// A filesystem I/O error. Shown unchanged so the OS message reaches the user.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Alias for `Result<T, RestoreError>`.
pub type Result<T> = std::result::Result<T, RestoreError>;

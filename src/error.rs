//! Error types for esp-bmgr
//!
//! Domain-specific error types using thiserror. Absence of a manifest, a
//! dependency entry or a component is never an error; these types only
//! describe failures that callers may want to report.

use std::path::PathBuf;
use thiserror::Error;

/// Manifest loading errors
///
/// The resolver discards these and treats the manifest as empty.
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Failed to read the manifest file
    #[error("Failed to read manifest '{path}': {error}")]
    Read { path: PathBuf, error: String },

    /// Manifest is not valid YAML or has an unexpected shape
    #[error("Failed to parse manifest '{path}': {error}")]
    Parse { path: PathBuf, error: String },
}

/// Download errors
#[derive(Error, Debug)]
pub enum DownloadError {
    /// Failed to start the component manager
    #[error("Failed to run '{program}': {error}")]
    Spawn { program: PathBuf, error: String },

    /// Component manager reported a failure
    #[error("Component manager failed ({status}): {stderr}")]
    ManagerFailed { status: String, stderr: String },

    /// Failed to write the synthetic manifest
    #[error("Failed to serialize dependency manifest: {0}")]
    Serialize(String),

    /// Filesystem error while preparing the download
    #[error(transparent)]
    Filesystem(#[from] FilesystemError),
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to remove directory
    #[error("Failed to remove directory '{path}': {error}")]
    RemoveDir { path: PathBuf, error: String },

    /// Failed to write file
    #[error("Failed to write file '{path}': {error}")]
    WriteFile { path: PathBuf, error: String },

    /// Failed to read file
    #[error("Failed to read file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },
}

/// Errors surfaced by the `idf.py` hook
///
/// Only a failed download reaches the host tool.
#[derive(Error, Debug)]
pub enum HookError {
    /// Board manager download failed
    #[error("Error downloading esp_board_manager component: {0}")]
    Download(#[from] DownloadError),
}

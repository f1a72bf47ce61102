//! Error types for ctx-core

use std::path::PathBuf;

/// Result type for ctx-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in ctx-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Config file exists but could not be parsed
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from ctx-fs
    #[error(transparent)]
    Fs(#[from] ctx_fs::Error),

    /// Target resolution error from ctx-targets
    #[error(transparent)]
    Targets(#[from] ctx_targets::Error),

    /// Standard I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// TOML deserialization error
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),
}

//! Shared CLI error and exit-code handling.

use std::fmt;
use std::path::Path;

use crate::config::Config;
use crate::services::Store;

/// Result type for CLI command execution.
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced by CLI commands, mapped to process exit codes.
#[derive(Debug)]
pub enum CliError {
    /// File system or serialization failure
    Io(String),
    /// Invalid arguments or failed validation
    Validation(String),
    /// A named keymap or layout does not exist in the store
    NotFound(String),
}

impl CliError {
    /// Creates an I/O error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io(message.into())
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a not-found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    /// Process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => 1,
            Self::Io(_) => 2,
            Self::NotFound(_) => 3,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(msg) | Self::Validation(msg) | Self::NotFound(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Opens the store at the given directory, or at the configured data
/// directory when none is given.
pub fn open_store(data_dir: Option<&Path>) -> CliResult<Store> {
    let root = match data_dir {
        Some(dir) => dir.to_path_buf(),
        None => Config::load()
            .and_then(|config| config.data_dir())
            .map_err(|e| CliError::io(format!("Failed to resolve data directory: {e}")))?,
    };

    Store::open(&root).map_err(|e| CliError::io(format!("Failed to open store: {e}")))
}

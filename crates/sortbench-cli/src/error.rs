//! Error types for the command-line runner.

use std::io;
use std::path::PathBuf;

use sortbench_config::ConfigError;
use thiserror::Error;

/// The main error type for CLI operations.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or failed validation.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Writing a report failed.
    #[error("I/O error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CliError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

//! Errors of the batch surfaces.
//!
//! Engine operations never fail; only loading, exporting, and configuration
//! touch the filesystem and can.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to read a source document.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be read.
    #[error("failed to read {}", path.display())]
    Io {
        /// Offending path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
    /// The document is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The document parsed, but its top level is not an array.
    #[error("expected a JSON array of records, found {found}")]
    NotAnArray {
        /// JSON kind of the top-level value.
        found: &'static str,
    },
}

/// Failure to write the ranked CSV.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The output file could not be written or moved into place.
    #[error("failed to write {}", path.display())]
    Io {
        /// Offending path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
    /// CSV encoding failed.
    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),
}

/// Failure to load engine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file {}", path.display())]
    Io {
        /// Offending path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: io::Error,
    },
    /// The file is not valid TOML or has mistyped values.
    #[error("failed to parse config file {}", path.display())]
    Parse {
        /// Offending path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: toml::de::Error,
    },
}

//! Errors raised while reading seed data.

use thiserror::Error;

/// Failures encountered while reading or parsing a seed file.
#[derive(Debug, Error)]
pub enum SeedDataError {
    /// The source file could not be opened or read.
    #[error("failed to read seed file {path}: {source}")]
    Io {
        /// Path of the file that failed to open.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// A row failed to deserialize, e.g. a non-numeric value in a numeric
    /// column or a missing header field.
    #[error("malformed seed row: {0}")]
    Malformed(#[from] csv::Error),
}

impl SeedDataError {
    /// Helper for I/O failures with path context.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, ToolError>;

/// Error type covering the different failure cases that can occur when the
/// tool loads the string catalog or emits the translation template.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Raised when the catalog path does not exist.
    #[error("input file not found: {0}")]
    InputNotFound(PathBuf),

    /// Wrapper for IO failures while reading the catalog or encoding into a
    /// caller-supplied sink.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Raised when the catalog is not valid JSON or lacks the `strings` /
    /// `links` shape.
    #[error("malformed catalog {}: {source}", path.display())]
    InputMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Raised when the template cannot be created, written, flushed or moved
    /// into place.
    #[error("failed to write {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Errors bubbled up from the CSV encoder when writing to a
    /// caller-supplied sink.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Raised when the tracing subscriber fails to initialise.
    #[error("failed to initialise logging: {0}")]
    Logging(String),
}

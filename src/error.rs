use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the castnet pipeline.
#[derive(Debug, Error)]
pub enum CastnetError {
    /// A transcript row is missing a required field or cannot be decoded.
    ///
    /// Malformed rows are fatal rather than skipped: silently dropping a row
    /// would shift which speakers are adjacent and corrupt the network.
    #[error("malformed transcript row at line {line}: {message}")]
    MalformedRow { line: usize, message: String },

    /// An input file cannot be read or an output path cannot be written.
    #[error("cannot access {path:?}: {source}")]
    FileAccess {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A network or report file does not contain the expected JSON shape.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

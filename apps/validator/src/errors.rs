use std::path::PathBuf;

use thiserror::Error;

/// Application-level error type. Decode covers both JSON structure errors
/// and malformed date fields, which abort the decode through serde.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid resume document: {0}")]
    Decode(#[from] serde_json::Error),
}

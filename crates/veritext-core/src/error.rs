use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// Input could not be decoded as the expected nested-value shape. Fatal
    /// to the run; no partial result is produced.
    #[error("malformed input: {0}")]
    MalformedInput(#[from] serde_json::Error),

    /// The specification source could not be read. Non-fatal: callers may
    /// proceed with zero specification records.
    #[error("specification source unavailable: {path}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

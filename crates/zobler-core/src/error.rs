use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ZoblerError>;

/// Every failure the pipeline can hit. All of them abort the run.
#[derive(Debug, Error)]
pub enum ZoblerError {
    /// Wrong token count, non-integer token, or a record count that does not
    /// match the configured grid.
    #[error(
        "malformed input{}: {reason}",
        .line.map(|l| format!(" at line {l}")).unwrap_or_default()
    )]
    MalformedInput { line: Option<usize>, reason: String },

    /// Input path is missing or cannot be read.
    #[error("cannot read input {}: {source}", .path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Output path cannot be written.
    #[error("cannot write output {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid grid parameters: {0}")]
    InvalidGrid(String),
}

impl ZoblerError {
    pub(crate) fn malformed_at(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedInput { line: Some(line), reason: reason.into() }
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedInput { line: None, reason: reason.into() }
    }
}

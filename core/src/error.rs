use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TextStatError>;

#[derive(Error, Debug)]
pub enum TextStatError {
    /// Rejected before any computation starts.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line of an injected resource (lexicon, stopword list) could not be parsed.
    #[error("parse error at {path}:{line}: {message}")]
    Parse { path: PathBuf, line: usize, message: String },

    #[error("sentence scorer returned {got} scores for {expected} sentences")]
    ScoreCountMismatch { expected: usize, got: usize },
}

impl TextStatError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

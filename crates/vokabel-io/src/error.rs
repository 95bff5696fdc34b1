use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not valid {encoding} text", path.display())]
    Decode { path: PathBuf, encoding: String },

    #[error("file selection failed: {0}")]
    Prompt(#[source] std::io::Error),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid lexicon profile {}: {reason}", path.display())]
    Lexicon { path: PathBuf, reason: String },
}

//! Error types for loading text corpora.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while validating or reading a corpus file.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The corpus path does not exist.
    #[error("Corpus file does not exist: {}", .0.display())]
    NotFound(PathBuf),

    /// The corpus path exists but is not a regular file.
    #[error("Corpus path is not a file: {}", .0.display())]
    NotAFile(PathBuf),

    /// The corpus file does not have a `.txt` extension.
    #[error("The corpus must be a .txt file: {}", .0.display())]
    NotText(PathBuf),

    /// Reading the corpus failed.
    #[error("Failed to read corpus {}: {source}", .path.display())]
    Io {
        /// File being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },
}

/// A specialized `Result` type for corpus operations.
pub type Result<T> = std::result::Result<T, CorpusError>;

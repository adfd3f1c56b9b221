//! Error types for the writer module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while saving a poster.
#[derive(Debug, Error)]
pub enum WriterError {
    /// Failed to create the output directory.
    #[error("Failed to create directory: {path}")]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the image file.
    #[error("Failed to write file: {path}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

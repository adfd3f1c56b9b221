//! File system poster writer.

use std::path::PathBuf;

use tokio::fs;
use tracing::debug;

use super::error::WriterError;
use super::sanitize::sanitize_filename;

/// Extension given to every saved poster.
pub const POSTER_EXTENSION: &str = "jpg";

/// Writes poster images into an output directory.
#[derive(Debug, Clone)]
pub struct PosterWriter {
    output_dir: PathBuf,
}

impl PosterWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Where the poster for `title` is written.
    pub fn destination(&self, title: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}.{}", sanitize_filename(title), POSTER_EXTENSION))
    }

    /// Create the output directory if needed. Safe to call repeatedly.
    pub async fn ensure_output_dir(&self) -> Result<(), WriterError> {
        fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|source| WriterError::DirectoryCreationFailed {
                path: self.output_dir.clone(),
                source,
            })
    }

    /// Write `bytes` as the poster for `title`, replacing any existing file.
    pub async fn write(&self, title: &str, bytes: &[u8]) -> Result<PathBuf, WriterError> {
        self.ensure_output_dir().await?;

        let path = self.destination(title);
        fs::write(&path, bytes)
            .await
            .map_err(|source| WriterError::WriteFailed {
                path: path.clone(),
                source,
            })?;

        debug!("Wrote {} bytes to {:?}", bytes.len(), path);
        Ok(path)
    }
}

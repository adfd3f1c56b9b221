//! External metadata catalog integration.
//!
//! The [`ExternalCatalog`] trait covers the three calls the poster pipeline
//! needs: searching by title, listing poster images for a title and fetching
//! the image bytes. [`TmdbClient`] implements it against the TMDB v3 API.

mod tmdb;
mod types;

pub use tmdb::{TmdbClient, TmdbConfig};
pub use types::*;

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur when interacting with the catalog.
///
/// None of these are retried; they propagate to the caller and end the run.
#[derive(Debug, Error)]
pub enum ExternalCatalogError {
    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The API rejected the credential (401).
    #[error("Invalid or unauthorized API key")]
    Unauthorized,

    /// Rate limit exceeded (429).
    #[error("Rate limit exceeded, please wait before retrying")]
    RateLimitExceeded,

    /// API returned a non-success status.
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Failed to parse response.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Client not configured (missing API key, etc.).
    #[error("Client not configured: {0}")]
    NotConfigured(String),
}

/// A metadata catalog able to resolve titles to posters.
#[async_trait]
pub trait ExternalCatalog: Send + Sync {
    /// Search titles of one kind. Results keep the order the service returned.
    async fn search(
        &self,
        kind: MediaKind,
        query: &str,
    ) -> Result<Vec<SearchCandidate>, ExternalCatalogError>;

    /// List poster images for a title, restricted to the given languages.
    async fn posters(
        &self,
        kind: MediaKind,
        id: u64,
        languages: &[PosterLanguage],
    ) -> Result<Vec<PosterCandidate>, ExternalCatalogError>;

    /// Full URL of a poster given its relative file path.
    fn image_url(&self, file_path: &str) -> String;

    /// Download an image in full.
    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, ExternalCatalogError>;
}

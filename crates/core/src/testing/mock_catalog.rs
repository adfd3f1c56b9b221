//! Mock external catalog for testing.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::external_catalog::{
    ExternalCatalog, ExternalCatalogError, MediaKind, PosterCandidate, PosterLanguage,
    SearchCandidate,
};

/// Bytes served for any image URL without an explicit entry.
pub const DEFAULT_IMAGE_BYTES: &[u8] = b"\xFF\xD8\xFFmock-jpeg";

/// A recorded catalog query for test assertions.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCatalogQuery {
    Search { kind: MediaKind, query: String },
    Posters { kind: MediaKind, id: u64, languages: Vec<PosterLanguage> },
    FetchImage { url: String },
}

/// Mock implementation of the ExternalCatalog trait.
///
/// Provides controllable behavior for testing:
/// - Return configured search results per (kind, query)
/// - Return configured posters per (kind, id)
/// - Track queries for assertions
/// - Simulate failures
///
/// # Example
///
/// ```rust,ignore
/// use posterfetch_core::testing::{fixtures, MockCatalog};
///
/// let catalog = MockCatalog::new();
/// catalog
///     .add_search_results(MediaKind::Movie, "Inception", vec![fixtures::movie(27205, "Inception", 90.0)])
///     .await;
///
/// let results = catalog.search(MediaKind::Movie, "Inception").await?;
/// assert_eq!(results.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockCatalog {
    /// Search results by (kind, exact query).
    searches: Arc<RwLock<HashMap<(MediaKind, String), Vec<SearchCandidate>>>>,
    /// Posters by (kind, id).
    posters: Arc<RwLock<HashMap<(MediaKind, u64), Vec<PosterCandidate>>>>,
    /// Image bytes by URL.
    images: Arc<RwLock<HashMap<String, Vec<u8>>>>,
    /// Recorded queries.
    queries: Arc<RwLock<Vec<RecordedCatalogQuery>>>,
    /// If set, the next operation will fail with this error.
    next_error: Arc<RwLock<Option<ExternalCatalogError>>>,
}

impl MockCatalog {
    /// Create a new empty mock catalog.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Set the results returned for a search.
    pub async fn add_search_results(
        &self,
        kind: MediaKind,
        query: &str,
        results: Vec<SearchCandidate>,
    ) {
        self.searches
            .write()
            .await
            .insert((kind, query.to_string()), results);
    }

    /// Set the posters listed for a title.
    pub async fn add_posters(&self, kind: MediaKind, id: u64, posters: Vec<PosterCandidate>) {
        self.posters.write().await.insert((kind, id), posters);
    }

    /// Set the bytes served for an image URL.
    pub async fn add_image(&self, url: &str, bytes: Vec<u8>) {
        self.images.write().await.insert(url.to_string(), bytes);
    }

    // =========================================================================
    // Query Recording
    // =========================================================================

    /// Get all recorded queries.
    pub async fn recorded_queries(&self) -> Vec<RecordedCatalogQuery> {
        self.queries.read().await.clone()
    }

    /// Get the number of queries performed.
    pub async fn query_count(&self) -> usize {
        self.queries.read().await.len()
    }

    // =========================================================================
    // Error Injection
    // =========================================================================

    /// Configure the next operation to fail with the given error.
    pub async fn set_next_error(&self, error: ExternalCatalogError) {
        *self.next_error.write().await = Some(error);
    }

    /// Take the next error if set.
    async fn take_error(&self) -> Option<ExternalCatalogError> {
        self.next_error.write().await.take()
    }

    /// Record a query.
    async fn record(&self, query: RecordedCatalogQuery) {
        self.queries.write().await.push(query);
    }
}

#[async_trait]
impl ExternalCatalog for MockCatalog {
    async fn search(
        &self,
        kind: MediaKind,
        query: &str,
    ) -> Result<Vec<SearchCandidate>, ExternalCatalogError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        self.record(RecordedCatalogQuery::Search {
            kind,
            query: query.to_string(),
        })
        .await;

        Ok(self
            .searches
            .read()
            .await
            .get(&(kind, query.to_string()))
            .cloned()
            .unwrap_or_default())
    }

    async fn posters(
        &self,
        kind: MediaKind,
        id: u64,
        languages: &[PosterLanguage],
    ) -> Result<Vec<PosterCandidate>, ExternalCatalogError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        self.record(RecordedCatalogQuery::Posters {
            kind,
            id,
            languages: languages.to_vec(),
        })
        .await;

        Ok(self
            .posters
            .read()
            .await
            .get(&(kind, id))
            .cloned()
            .unwrap_or_default())
    }

    fn image_url(&self, file_path: &str) -> String {
        format!("mock://images/original{}", file_path)
    }

    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, ExternalCatalogError> {
        if let Some(err) = self.take_error().await {
            return Err(err);
        }

        self.record(RecordedCatalogQuery::FetchImage {
            url: url.to_string(),
        })
        .await;

        Ok(self
            .images
            .read()
            .await
            .get(url)
            .cloned()
            .unwrap_or_else(|| DEFAULT_IMAGE_BYTES.to_vec()))
    }
}

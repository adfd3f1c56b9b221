//! TMDB (The Movie Database) API client.
//!
//! TMDB requires an API key for access. Requests are issued one at a time and
//! never retried.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::types::{
    language_filter, year_from_date, MediaKind, PosterCandidate, PosterLanguage, SearchCandidate,
};
use super::{ExternalCatalog, ExternalCatalogError};

/// TMDB API client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TmdbConfig {
    /// TMDB API key (required).
    #[serde(default)]
    pub api_key: String,
    /// Base URL of the REST API.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Base URL of the image host.
    #[serde(default = "default_image_base_url")]
    pub image_base_url: String,
    /// Rendition requested from the image host.
    #[serde(default = "default_image_size")]
    pub image_size: String,
    /// Locale passed as `language` on searches.
    #[serde(default = "default_search_language")]
    pub search_language: String,
    /// Results kept per kind when searching movies and shows together.
    #[serde(default = "default_results_per_kind")]
    pub results_per_kind: usize,
}

impl Default for TmdbConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            image_base_url: default_image_base_url(),
            image_size: default_image_size(),
            search_language: default_search_language(),
            results_per_kind: default_results_per_kind(),
        }
    }
}

impl TmdbConfig {
    /// Creates a config with the given API key and default endpoints.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Points both the API and the image host at another server.
    pub fn with_base_urls(mut self, base_url: &str, image_base_url: &str) -> Self {
        self.base_url = base_url.to_string();
        self.image_base_url = image_base_url.to_string();
        self
    }
}

fn default_base_url() -> String {
    "https://api.themoviedb.org/3".to_string()
}

fn default_image_base_url() -> String {
    "https://image.tmdb.org/t/p".to_string()
}

fn default_image_size() -> String {
    "original".to_string()
}

fn default_search_language() -> String {
    "es-ES".to_string()
}

fn default_results_per_kind() -> usize {
    5
}

/// TMDB API client.
pub struct TmdbClient {
    client: Client,
    base_url: String,
    api_key: String,
    image_base_url: String,
    image_size: String,
    search_language: String,
}

impl TmdbClient {
    /// Create a new TMDB client.
    pub fn new(config: TmdbConfig) -> Result<Self, ExternalCatalogError> {
        if config.api_key.trim().is_empty() {
            return Err(ExternalCatalogError::NotConfigured(
                "TMDB API key is required".to_string(),
            ));
        }

        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            image_base_url: config.image_base_url.trim_end_matches('/').to_string(),
            image_size: config.image_size,
            search_language: config.search_language,
        })
    }

    /// GET a JSON document from the API, mapping error statuses.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, &str)],
        what: &str,
    ) -> Result<T, ExternalCatalogError> {
        let response = self
            .client
            .get(url)
            .query(&[("api_key", self.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        let response = check_status(response).await?;

        response.json().await.map_err(|e| {
            ExternalCatalogError::ParseError(format!("Failed to parse {} response: {}", what, e))
        })
    }
}

/// Turn non-success statuses into errors.
async fn check_status(response: Response) -> Result<Response, ExternalCatalogError> {
    let status = response.status();
    if status == 401 {
        return Err(ExternalCatalogError::Unauthorized);
    }
    if status == 429 {
        return Err(ExternalCatalogError::RateLimitExceeded);
    }
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ExternalCatalogError::ApiError {
            status: status.as_u16(),
            message: body,
        });
    }
    Ok(response)
}

#[async_trait]
impl ExternalCatalog for TmdbClient {
    async fn search(
        &self,
        kind: MediaKind,
        query: &str,
    ) -> Result<Vec<SearchCandidate>, ExternalCatalogError> {
        let url = format!("{}/search/{}", self.base_url, kind.endpoint());

        debug!("TMDB {} search: query='{}'", kind.endpoint(), query);

        let params = [("query", query), ("language", self.search_language.as_str())];

        let candidates = match kind {
            MediaKind::Movie => {
                let response: TmdbSearchResponse<TmdbMovieResult> =
                    self.get_json(&url, &params, "movie search").await?;
                response.results.into_iter().map(Into::into).collect()
            }
            MediaKind::Show => {
                let response: TmdbSearchResponse<TmdbTvResult> =
                    self.get_json(&url, &params, "TV search").await?;
                response.results.into_iter().map(Into::into).collect()
            }
        };

        Ok(candidates)
    }

    async fn posters(
        &self,
        kind: MediaKind,
        id: u64,
        languages: &[PosterLanguage],
    ) -> Result<Vec<PosterCandidate>, ExternalCatalogError> {
        let url = format!("{}/{}/{}/images", self.base_url, kind.endpoint(), id);
        let filter = language_filter(languages);

        debug!(
            "TMDB images: kind={}, id={}, languages='{}'",
            kind.endpoint(),
            id,
            filter
        );

        let images: TmdbImagesResponse = self
            .get_json(&url, &[("include_image_language", filter.as_str())], "images")
            .await?;

        Ok(images.posters.into_iter().map(Into::into).collect())
    }

    fn image_url(&self, file_path: &str) -> String {
        format!("{}/{}{}", self.image_base_url, self.image_size, file_path)
    }

    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, ExternalCatalogError> {
        debug!("Downloading image: {}", url);

        let response = self.client.get(url).send().await?;
        let response = check_status(response).await?;
        let bytes = response.bytes().await?;

        Ok(bytes.to_vec())
    }
}

// ============================================================================
// TMDB API Response Types (private)
// ============================================================================

#[derive(Debug, Deserialize)]
struct TmdbSearchResponse<T> {
    #[serde(default = "Vec::new")]
    results: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct TmdbMovieResult {
    id: u64,
    title: String,
    release_date: Option<String>,
    popularity: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct TmdbTvResult {
    id: u64,
    name: String,
    first_air_date: Option<String>,
    popularity: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct TmdbImagesResponse {
    #[serde(default)]
    posters: Vec<TmdbImage>,
}

#[derive(Debug, Deserialize)]
struct TmdbImage {
    file_path: String,
    iso_639_1: Option<String>,
    #[serde(default)]
    width: u32,
}

// ============================================================================
// Conversions
// ============================================================================

impl From<TmdbMovieResult> for SearchCandidate {
    fn from(r: TmdbMovieResult) -> Self {
        Self {
            id: r.id,
            title: r.title,
            kind: MediaKind::Movie,
            popularity: r.popularity.unwrap_or(0.0),
            release_year: year_from_date(r.release_date.as_deref()),
        }
    }
}

impl From<TmdbTvResult> for SearchCandidate {
    fn from(r: TmdbTvResult) -> Self {
        Self {
            id: r.id,
            title: r.name,
            kind: MediaKind::Show,
            popularity: r.popularity.unwrap_or(0.0),
            release_year: year_from_date(r.first_air_date.as_deref()),
        }
    }
}

impl From<TmdbImage> for PosterCandidate {
    fn from(i: TmdbImage) -> Self {
        Self {
            file_path: i.file_path,
            language: i.iso_639_1,
            width: i.width,
        }
    }
}

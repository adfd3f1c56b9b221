use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::external_catalog::{PosterLanguage, TmdbConfig};

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub tmdb: TmdbConfig,
    #[serde(default)]
    pub posters: PosterConfig,
}

/// Poster output and selection configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PosterConfig {
    /// Directory posters are written to (created on demand).
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    /// Poster languages in order of preference. `"null"` stands for
    /// posters without a language tag.
    #[serde(default = "default_language_priority")]
    pub language_priority: Vec<PosterLanguage>,
}

impl Default for PosterConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            language_priority: default_language_priority(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("posters")
}

fn default_language_priority() -> Vec<PosterLanguage> {
    vec![PosterLanguage::Tag("en".to_string())]
}

/// Sanitized config for logging (secrets redacted)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedConfig {
    pub tmdb: SanitizedTmdbConfig,
    pub posters: PosterConfig,
}

/// Sanitized TMDB config (API key hidden)
#[derive(Debug, Clone, Serialize)]
pub struct SanitizedTmdbConfig {
    pub api_key_configured: bool,
    pub base_url: String,
    pub image_base_url: String,
    pub image_size: String,
    pub search_language: String,
    pub results_per_kind: usize,
}

impl From<&Config> for SanitizedConfig {
    fn from(config: &Config) -> Self {
        Self {
            tmdb: SanitizedTmdbConfig {
                api_key_configured: !config.tmdb.api_key.trim().is_empty(),
                base_url: config.tmdb.base_url.clone(),
                image_base_url: config.tmdb.image_base_url.clone(),
                image_size: config.tmdb.image_size.clone(),
                search_language: config.tmdb.search_language.clone(),
                results_per_kind: config.tmdb.results_per_kind,
            },
            posters: config.posters.clone(),
        }
    }
}

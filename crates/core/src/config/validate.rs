use super::{types::Config, ConfigError};

/// Validate configuration
/// Currently validates:
/// - An API key is present
/// - Endpoint URLs are not blank
/// - At least one result per kind is kept
/// - At least one poster language is listed
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.tmdb.api_key.trim().is_empty() {
        return Err(ConfigError::MissingApiKey);
    }

    if config.tmdb.base_url.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "tmdb.base_url cannot be empty".to_string(),
        ));
    }

    if config.tmdb.image_base_url.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "tmdb.image_base_url cannot be empty".to_string(),
        ));
    }

    if config.tmdb.results_per_kind == 0 {
        return Err(ConfigError::ValidationError(
            "tmdb.results_per_kind cannot be 0".to_string(),
        ));
    }

    if config.posters.language_priority.is_empty() {
        return Err(ConfigError::ValidationError(
            "posters.language_priority needs at least one language".to_string(),
        ));
    }

    Ok(())
}

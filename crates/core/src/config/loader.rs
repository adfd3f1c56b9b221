use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use std::path::{Path, PathBuf};

use super::{types::Config, ConfigError};

/// Settings file read from the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "posterfetch.toml";

/// Prefix of environment overrides, nested with `__`
/// (e.g. `POSTERFETCH_POSTERS__OUTPUT_DIR`).
const ENV_PREFIX: &str = "POSTERFETCH_";

/// Conventional environment variable holding the TMDB API key.
pub const API_KEY_ENV: &str = "TMDB_API_KEY";

/// Load configuration from defaults, settings file and environment.
///
/// An explicit `path` must exist. Without one, `posterfetch.toml` in the
/// working directory is used if present. `TMDB_API_KEY` takes precedence over
/// every other source of the API key.
pub fn load_config(path: Option<&Path>) -> Result<Config, ConfigError> {
    let file = match path {
        Some(path) => {
            if !path.exists() {
                return Err(ConfigError::FileNotFound(path.display().to_string()));
            }
            path.to_path_buf()
        }
        None => PathBuf::from(DEFAULT_CONFIG_FILE),
    };

    let mut figment = Figment::new().merge(Toml::file(&file)).merge(
        Env::prefixed(ENV_PREFIX)
            .split("__")
            .filter(|key| !is_string_key(key.as_str())),
    );

    // String settings are taken verbatim so values like `2024` stay strings.
    for key in STRING_KEYS {
        if let Ok(value) = std::env::var(env_var_name(key)) {
            figment = figment.merge(Serialized::default(key, value));
        }
    }

    if let Ok(api_key) = std::env::var(API_KEY_ENV) {
        figment = figment.merge(Serialized::default("tmdb.api_key", api_key));
    }

    let config: Config = figment
        .extract()
        .map_err(|e| ConfigError::ParseError(e.to_string()))?;

    Ok(config)
}

/// Settings whose environment overrides must never be parsed as numbers.
const STRING_KEYS: &[&str] = &[
    "tmdb.api_key",
    "tmdb.base_url",
    "tmdb.image_base_url",
    "tmdb.image_size",
    "tmdb.search_language",
    "posters.output_dir",
];

fn is_string_key(key: &str) -> bool {
    STRING_KEYS.iter().any(|k| k.eq_ignore_ascii_case(key))
}

/// `tmdb.api_key` -> `POSTERFETCH_TMDB__API_KEY`
fn env_var_name(key: &str) -> String {
    format!("{}{}", ENV_PREFIX, key.replace('.', "__").to_ascii_uppercase())
}

/// Load configuration from TOML string (useful for testing)
pub fn load_config_from_str(toml_str: &str) -> Result<Config, ConfigError> {
    toml::from_str(toml_str).map_err(|e| ConfigError::ParseError(e.to_string()))
}

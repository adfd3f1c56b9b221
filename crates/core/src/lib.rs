pub mod config;
pub mod external_catalog;
pub mod pipeline;
pub mod resolver;
pub mod selector;
pub mod testing;
pub mod writer;

pub use config::{
    load_config, load_config_from_str, validate_config, Config, ConfigError, PosterConfig,
    SanitizedConfig, API_KEY_ENV, DEFAULT_CONFIG_FILE,
};
pub use external_catalog::{
    ExternalCatalog, ExternalCatalogError, MediaKind, PosterCandidate, PosterLanguage,
    SearchCandidate, TmdbClient, TmdbConfig,
};
pub use pipeline::{
    is_title_list, parse_title_list, read_title_list, BatchResult, FetchOutcome, PosterError,
    PosterFetcher,
};
pub use resolver::{Chooser, ConsoleChooser, PopularityChooser, Resolver, TypeHint};
pub use selector::select_poster;
pub use writer::{sanitize_filename, PosterWriter, WriterError};

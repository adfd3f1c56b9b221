//! Poster fetch pipeline implementation.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::Config;
use crate::external_catalog::{ExternalCatalog, ExternalCatalogError, MediaKind, PosterLanguage};
use crate::resolver::{Chooser, PopularityChooser, Resolver, TypeHint};
use crate::selector::select_poster;
use crate::writer::{PosterWriter, WriterError};

use super::types::{BatchResult, FetchOutcome};

/// Error type for pipeline operations.
///
/// Any of these ends a batch; per-title misses are [`FetchOutcome`]s instead.
#[derive(Debug, thiserror::Error)]
pub enum PosterError {
    /// Catalog request failed.
    #[error(transparent)]
    Catalog(#[from] ExternalCatalogError),

    /// Saving the poster failed.
    #[error(transparent)]
    Writer(#[from] WriterError),
}

/// Resolves titles, picks posters and writes them to disk.
pub struct PosterFetcher<C: ExternalCatalog> {
    catalog: C,
    writer: PosterWriter,
    language_priority: Vec<PosterLanguage>,
    results_per_kind: usize,
}

impl<C: ExternalCatalog> PosterFetcher<C> {
    /// Creates a fetcher using the poster and search settings of `config`.
    pub fn new(catalog: C, config: &Config) -> Self {
        Self {
            catalog,
            writer: PosterWriter::new(config.posters.output_dir.clone()),
            language_priority: config.posters.language_priority.clone(),
            results_per_kind: config.tmdb.results_per_kind,
        }
    }

    /// Overrides the output directory.
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.writer = PosterWriter::new(output_dir);
        self
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Full URL of the best poster for a resolved title, if it has any.
    pub async fn best_poster_url(
        &self,
        kind: MediaKind,
        id: u64,
    ) -> Result<Option<String>, ExternalCatalogError> {
        let posters = self
            .catalog
            .posters(kind, id, &self.language_priority)
            .await?;

        debug!("{} posters listed for {} {}", posters.len(), kind.endpoint(), id);

        Ok(select_poster(&posters, &self.language_priority)
            .map(|poster| self.catalog.image_url(&poster.file_path)))
    }

    /// Run the whole pipeline for one title.
    pub async fn fetch<H: Chooser + ?Sized>(
        &self,
        title: &str,
        hint: TypeHint,
        chooser: &mut H,
    ) -> Result<FetchOutcome, PosterError> {
        self.writer.ensure_output_dir().await?;

        let resolver = Resolver::new(&self.catalog, self.results_per_kind);
        let Some(candidate) = resolver.resolve(title, hint, chooser).await? else {
            info!("No match for '{}'", title);
            return Ok(FetchOutcome::NotFound);
        };

        let Some(url) = self.best_poster_url(candidate.kind, candidate.id).await? else {
            info!("No poster for '{}' ({} {})", title, candidate.kind.endpoint(), candidate.id);
            return Ok(FetchOutcome::NoPoster { candidate });
        };

        let bytes = self.catalog.fetch_image(&url).await?;
        let path = self.writer.write(&candidate.title, &bytes).await?;

        info!("Saved poster for '{}' to {:?}", candidate.title, path);
        Ok(FetchOutcome::Saved { candidate, path })
    }

    /// Process titles one after another without prompting.
    ///
    /// `on_outcome` is called after each title. Misses are tallied as
    /// failures; catalog and write errors abort the batch.
    pub async fn run_batch<F>(
        &self,
        titles: &[String],
        hint: TypeHint,
        mut on_outcome: F,
    ) -> Result<BatchResult, PosterError>
    where
        F: FnMut(&str, &FetchOutcome),
    {
        let mut result = BatchResult::new();
        let mut chooser = PopularityChooser;

        for (idx, title) in titles.iter().enumerate() {
            debug!("Batch item {}/{}: '{}'", idx + 1, titles.len(), title);
            let outcome = self.fetch(title, hint, &mut chooser).await?;
            on_outcome(title, &outcome);
            result.record(title, &outcome);
        }

        info!(
            "Batch finished: {} succeeded, {} failed",
            result.succeeded.len(),
            result.failed.len()
        );
        Ok(result)
    }
}

//! Title resolution.
//!
//! Turns a free-text title into a single [`SearchCandidate`]. With an explicit
//! kind the first search result wins. With [`TypeHint::Auto`] both kinds are
//! searched and, when more than one candidate comes back, a [`Chooser`]
//! decides.

mod chooser;

pub use chooser::{most_popular, Chooser, ConsoleChooser, PopularityChooser};

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::external_catalog::{ExternalCatalog, ExternalCatalogError, MediaKind, SearchCandidate};

/// Which kind of title the user is looking for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TypeHint {
    /// Search movies and shows together.
    #[default]
    Auto,
    Movie,
    Show,
}

impl TypeHint {
    /// The single kind to search, if the hint names one.
    pub fn kind(self) -> Option<MediaKind> {
        match self {
            TypeHint::Auto => None,
            TypeHint::Movie => Some(MediaKind::Movie),
            TypeHint::Show => Some(MediaKind::Show),
        }
    }
}

impl fmt::Display for TypeHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TypeHint::Auto => "auto",
            TypeHint::Movie => "movie",
            TypeHint::Show => "show",
        })
    }
}

impl FromStr for TypeHint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(TypeHint::Auto),
            "movie" => Ok(TypeHint::Movie),
            "show" | "tv" => Ok(TypeHint::Show),
            other => Err(format!("unknown media type '{}'", other)),
        }
    }
}

/// Resolves titles against a catalog.
pub struct Resolver<'a, C: ExternalCatalog + ?Sized> {
    catalog: &'a C,
    results_per_kind: usize,
}

impl<'a, C: ExternalCatalog + ?Sized> Resolver<'a, C> {
    pub fn new(catalog: &'a C, results_per_kind: usize) -> Self {
        Self {
            catalog,
            results_per_kind,
        }
    }

    /// Resolve `title` to one candidate, or `None` when nothing matched.
    ///
    /// The chooser is consulted only for `Auto` searches that produce two or
    /// more candidates.
    pub async fn resolve<H: Chooser + ?Sized>(
        &self,
        title: &str,
        hint: TypeHint,
        chooser: &mut H,
    ) -> Result<Option<SearchCandidate>, ExternalCatalogError> {
        if let Some(kind) = hint.kind() {
            let results = self.catalog.search(kind, title).await?;
            return Ok(results.into_iter().next());
        }

        let mut candidates = Vec::new();
        for kind in MediaKind::ALL {
            let results = self.catalog.search(kind, title).await?;
            candidates.extend(results.into_iter().take(self.results_per_kind));
        }

        debug!("{} candidates for '{}'", candidates.len(), title);

        match candidates.len() {
            0 => Ok(None),
            1 => Ok(candidates.pop()),
            _ => {
                let idx = chooser.choose(title, &candidates);
                let idx = if idx < candidates.len() { idx } else { 0 };
                Ok(Some(candidates.swap_remove(idx)))
            }
        }
    }
}

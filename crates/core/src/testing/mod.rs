//! Testing utilities and mock implementations.
//!
//! This module provides a mock catalog and fixtures so the resolver, the
//! poster selector and the fetch pipeline can be exercised without network
//! access.
//!
//! # Example
//!
//! ```rust,ignore
//! use posterfetch_core::testing::{fixtures, MockCatalog};
//!
//! let catalog = MockCatalog::new();
//! catalog
//!     .add_posters(MediaKind::Movie, 27205, vec![fixtures::poster("/en.jpg", Some("en"), 2000)])
//!     .await;
//! ```

mod mock_catalog;

pub use mock_catalog::{MockCatalog, RecordedCatalogQuery, DEFAULT_IMAGE_BYTES};

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::external_catalog::{MediaKind, PosterCandidate, SearchCandidate};

    /// Create a movie search candidate.
    pub fn movie(id: u64, title: &str, popularity: f64) -> SearchCandidate {
        SearchCandidate {
            id,
            title: title.to_string(),
            kind: MediaKind::Movie,
            popularity,
            release_year: Some(2010),
        }
    }

    /// Create a TV show search candidate.
    pub fn show(id: u64, name: &str, popularity: f64) -> SearchCandidate {
        SearchCandidate {
            id,
            title: name.to_string(),
            kind: MediaKind::Show,
            popularity,
            release_year: Some(2008),
        }
    }

    /// Create a poster candidate.
    pub fn poster(file_path: &str, language: Option<&str>, width: u32) -> PosterCandidate {
        PosterCandidate {
            file_path: file_path.to_string(),
            language: language.map(str::to_string),
            width,
        }
    }
}

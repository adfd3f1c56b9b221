//! Poster fetch pipeline.
//!
//! This module provides the `PosterFetcher` which runs, per title:
//! - Resolution: search the catalog and pick one candidate
//! - Selection: pick the best poster under the language preferences
//! - Writing: download the image and save it under the output directory
//!
//! Titles in a batch are processed strictly one after another.
//!
//! # Example
//!
//! ```ignore
//! use posterfetch_core::{PosterFetcher, TmdbClient, TypeHint, PopularityChooser};
//!
//! let client = TmdbClient::new(config.tmdb.clone())?;
//! let fetcher = PosterFetcher::new(client, &config);
//!
//! let outcome = fetcher.fetch("Inception", TypeHint::Auto, &mut PopularityChooser).await?;
//! println!("{}", outcome.report_line("Inception"));
//! ```

mod runner;
mod titles;
mod types;

pub use runner::{PosterError, PosterFetcher};
pub use titles::{is_title_list, parse_title_list, read_title_list};
pub use types::{BatchResult, FetchOutcome};

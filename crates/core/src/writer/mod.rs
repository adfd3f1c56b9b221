//! Writer module for saving downloaded posters.
//!
//! Titles are reduced to a filesystem-safe name with [`sanitize_filename`] and
//! written as `<output_dir>/<name>.jpg`, overwriting any earlier download.

mod error;
mod fs_writer;
mod sanitize;

pub use error::WriterError;
pub use fs_writer::{PosterWriter, POSTER_EXTENSION};
pub use sanitize::sanitize_filename;

use clap::Parser;
use std::path::PathBuf;

use posterfetch_core::TypeHint;

#[derive(Parser)]
#[command(name = "posterfetch")]
#[command(author, version, about = "Download movie and TV show posters from TMDB")]
pub struct Cli {
    /// Title to look up, or a .txt file with one title per line
    pub input: Option<String>,

    /// Restrict the search to one kind of title (auto, movie, show)
    #[arg(short, long, value_name = "KIND", default_value_t = TypeHint::Auto)]
    pub kind: TypeHint,

    /// Directory posters are written to
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Wait for Enter before exiting
    #[arg(long)]
    pub pause: bool,
}

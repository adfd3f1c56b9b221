mod cli;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use posterfetch_core::{
    is_title_list, load_config, read_title_list, validate_config, Config, ConfigError,
    ConsoleChooser, PosterFetcher, SanitizedConfig, TmdbClient, TypeHint, API_KEY_ENV,
};

use cli::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            error!("Fatal error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    // .env next to the executable wins over one in the working directory,
    // and neither overrides the real environment.
    let exe_dir = executable_dir();
    if let Some(dir) = &exe_dir {
        dotenvy::from_path(dir.join(".env")).ok();
    }
    dotenvy::from_path(".env").ok();

    init_logging(cli.verbose);

    let mut config = load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(dir) = &cli.output_dir {
        config.posters.output_dir = dir.clone();
    }

    match validate_config(&config) {
        Ok(()) => {}
        Err(ConfigError::MissingApiKey) => {
            print_missing_key_help(exe_dir.as_deref());
            pause_if(cli.pause);
            return Ok(ExitCode::FAILURE);
        }
        Err(e) => return Err(e).context("Configuration validation failed"),
    }

    debug!("Configuration: {:?}", SanitizedConfig::from(&config));

    let prompted = cli.input.is_none();
    let input = match cli.input {
        Some(input) => input.trim().to_string(),
        None => prompt_for_input()?,
    };
    let pause = cli.pause || prompted;

    if input.is_empty() {
        println!("❌ Nothing entered.");
        pause_if(pause);
        return Ok(ExitCode::FAILURE);
    }

    let code = match fetch(&config, &input, cli.kind).await {
        Ok(code) => code,
        Err(e) => {
            error!("Fatal error: {:#}", e);
            ExitCode::FAILURE
        }
    };
    pause_if(pause);
    Ok(code)
}

/// Run a single title or a title list.
async fn fetch(config: &Config, input: &str, hint: TypeHint) -> Result<ExitCode> {
    let client = TmdbClient::new(config.tmdb.clone()).context("Failed to create TMDB client")?;
    let fetcher = PosterFetcher::new(client, config);

    if is_title_list(input) {
        let path = Path::new(input);
        let titles = match read_title_list(path).await {
            Ok(titles) => titles,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                println!("❌ File not found: {}", input);
                return Ok(ExitCode::SUCCESS);
            }
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", path.display()))
            }
        };

        info!("Read {} titles from {}", titles.len(), path.display());
        println!("📥 Downloading {} titles...\n", titles.len());

        let result = fetcher
            .run_batch(&titles, hint, |title, outcome| {
                println!("{}", outcome.report_line(title))
            })
            .await?;

        println!("\n{}", result.summary());
    } else {
        let mut chooser = ConsoleChooser::stdio();
        let outcome = fetcher.fetch(input, hint, &mut chooser).await?;
        println!("{}", outcome.report_line(input));
    }

    Ok(ExitCode::SUCCESS)
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into())
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn executable_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}

fn print_missing_key_help(exe_dir: Option<&Path>) {
    let location = exe_dir
        .map(|dir| dir.display().to_string())
        .unwrap_or_else(|| ".".to_string());

    println!("❌ No API key found.");
    println!("   Make sure a .env file exists in: {}", location);
    println!("   With the content: {}=your_api_key", API_KEY_ENV);
}

fn prompt_for_input() -> Result<String> {
    println!("{}", "=".repeat(50));
    println!("🎬 POSTER DOWNLOADER");
    println!("{}", "=".repeat(50));
    println!("\nOptions:");
    println!("  1. Type the title of a movie or TV show");
    println!("  2. Type the path to a .txt file with titles");
    println!();
    print!("👉 Title or file: ");
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("Failed to read input")?;
    Ok(line.trim().to_string())
}

fn pause_if(pause: bool) {
    if !pause {
        return;
    }
    print!("\nPress Enter to exit...");
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);
}

//! Filmreg main entry point
//!
//! Command-line interface for the film registration directory scraper.

use clap::Parser;
use filmreg::config::{load_config_with_hash, Config};
use filmreg::output::write_workbook;
use filmreg::scrape::run_scrape;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Filmreg: scrapes the public film registration directory into a spreadsheet
///
/// Crawls every paginated index page, extracts one record per listing row,
/// resolves each record's synopsis from its detail page (cached across
/// runs), and writes the aggregate to an xlsx workbook.
#[derive(Parser, Debug)]
#[command(name = "filmreg")]
#[command(version)]
#[command(about = "Film registration directory scraper", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults are used when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load configuration, or fall back to the built-in site defaults
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = match load_config_with_hash(path) {
                Ok((cfg, hash)) => (cfg, hash),
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return Err(e.into());
                }
            };
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    // Ctrl-C stops the page loop after the current page; whatever has been
    // scraped so far is still exported.
    let cancel = Arc::new(AtomicBool::new(false));
    let cancel_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("received Ctrl-C, finishing the current page before exporting");
            cancel_signal.store(true, Ordering::Relaxed);
        }
    });

    let films = run_scrape(&config, cancel).await?;
    tracing::info!("scraped {} film records", films.len());

    write_workbook(&films, Path::new(&config.output.workbook_path))?;

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("filmreg=info,warn"),
            1 => EnvFilter::new("filmreg=debug,info"),
            2 => EnvFilter::new("filmreg=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

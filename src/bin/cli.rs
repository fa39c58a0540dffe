//! wdcrawl CLI
//!
//! Local execution entry point.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use wdcrawl::{
    browser::ChromeSession,
    error::Result,
    models::{Config, SeedList},
    pipeline,
    store::{JobStore, LocalStore},
};

/// wdcrawl - Workday career-site job crawler
#[derive(Parser, Debug)]
#[command(name = "wdcrawl", version, about = "Workday career-site job crawler")]
struct Cli {
    /// Path to storage directory containing config and job documents
    #[arg(short, long, default_value = "storage")]
    storage_dir: PathBuf,

    /// Path to a config file (defaults to <storage-dir>/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Crawl all seed links from a CSV file
    Crawl {
        /// CSV file with a 'Link' column of seed URLs
        #[arg(long)]
        seeds: PathBuf,

        /// Run the browser with a visible window
        #[arg(long)]
        headful: bool,
    },

    /// Validate configuration and optionally a seed file
    Validate {
        /// CSV seed file to validate
        #[arg(long)]
        seeds: Option<PathBuf>,
    },

    /// Show stored job count and storage paths
    Info,
}

impl Cli {
    /// Config file location: an explicit `--config` path, otherwise the
    /// `config.toml` inside the storage directory.
    fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| self.storage_dir.join("config.toml"))
    }
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
///
/// Exit code 0 means all seeds ran to exhaustion; a non-zero exit means an
/// unrecoverable startup failure (unreadable seed file, invalid config,
/// browser launch failure). Store trouble at init is not fatal: the seen
/// set degrades to empty and jobs are re-persisted via upsert.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.config_path();
    let mut config = Config::load_or_default(&config_path);
    config.validate()?;

    match cli.command {
        Command::Crawl { seeds, headful } => {
            if headful {
                config.browser.headless = false;
            }

            let seed_list = SeedList::from_csv(&seeds)?;
            seed_list.validate()?;
            log::info!("Loaded {} seed link(s) from {}", seed_list.len(), seeds.display());

            let store = LocalStore::new(&cli.storage_dir);

            let session = ChromeSession::launch(&config).await?;
            let result = pipeline::run_crawler(&config, &session, &store, &seed_list).await;
            session.close().await;

            let outcome = result?;
            log::info!(
                "Done: {} job(s) saved, {} skipped",
                outcome.jobs_saved,
                outcome.links_skipped
            );
        }

        Command::Validate { seeds } => {
            log::info!("Validating configuration...");
            config.validate()?;
            log::info!("✓ Config OK");

            if let Some(path) = seeds {
                let seed_list = SeedList::from_csv(&path)?;
                seed_list.validate()?;
                log::info!("✓ Seed file OK ({} link(s))", seed_list.len());
            }

            log::info!("All validations passed!");
        }

        Command::Info => {
            log::info!("Storage directory: {}", cli.storage_dir.display());
            let store = LocalStore::new(&cli.storage_dir);
            match store.list_urls().await {
                Ok(urls) => log::info!("Stored jobs: {}", urls.len()),
                Err(e) => log::warn!("Could not read job documents: {}", e),
            }
        }
    }

    Ok(())
}

//! Asset-Atlas main entry point
//!
//! This is the command-line interface for the Asset-Atlas same-origin
//! static asset mapper.

use anyhow::Context;
use asset_atlas::config::{load_preferences, validate, CrawlConfig, Preferences};
use asset_atlas::crawler::crawl;
use asset_atlas::report::to_pretty_json;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Asset-Atlas: a same-origin static asset mapper
///
/// Asset-Atlas crawls every page reachable from a base URL (optionally
/// seeded from sitemap.xml) and reports, per page, the static assets it
/// references.
#[derive(Parser, Debug)]
#[command(name = "asset-atlas")]
#[command(version)]
#[command(about = "A same-origin static asset mapper", long_about = None)]
struct Cli {
    /// Base URL of the site to be crawled
    #[arg(short, long, default_value = "https://bbc.com")]
    url: String,

    /// link 'rel' attributes to omit from classification
    #[arg(long, value_name = "REL", num_args = 1..)]
    unwanted_links: Option<Vec<String>>,

    /// URL extensions to treat as known circular redirects
    #[arg(long, value_name = "EXT", num_args = 1..)]
    unwanted_extensions: Option<Vec<String>>,

    /// TOML preferences file (the explicit flags above take precedence)
    #[arg(long, value_name = "FILE")]
    preferences: Option<PathBuf>,

    /// Write the JSON report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    // Assemble preferences: built-in defaults, overlaid by the optional
    // preferences file, overlaid by explicit flags.
    let mut preferences = match &cli.preferences {
        Some(path) => load_preferences(path)
            .with_context(|| format!("failed to load preferences from {}", path.display()))?,
        None => Preferences::default(),
    };
    if let Some(links) = cli.unwanted_links {
        preferences.unwanted_links = links;
    }
    if let Some(extensions) = cli.unwanted_extensions {
        preferences.unwanted_extensions = extensions;
    }

    let config = CrawlConfig {
        base_url: cli.url,
        preferences,
    };

    // The base URL must validate before any crawl work starts.
    validate(&config).context("usage: asset-atlas --url <absolute http(s) URL>")?;

    tracing::info!("starting crawl of {}", config.base_url);
    let report = crawl(config).await?;

    for error in &report.errors {
        tracing::warn!("{}: {}", error.url, error.message);
    }
    tracing::info!(
        "{} pages visited, {} errors",
        report.pages.len(),
        report.errors.len()
    );

    let json = to_pretty_json(&report.pages)?;
    match cli.output {
        Some(path) => std::fs::write(&path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?,
        None => println!("{}", json),
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("asset_atlas=info,warn"),
            1 => EnvFilter::new("asset_atlas=debug,info"),
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

//! Pulse Modules main entry point
//!
//! This is the command-line interface for the documentation module extractor.

use anyhow::Context;
use clap::Parser;
use pulse_modules::config::{load_config_with_hash, Config};
use pulse_modules::output::{log_statistics, render, write_output, OutputFormat};
use pulse_modules::{parse_seed_list, Pipeline, RemoteCapability};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Pulse Modules: extract product modules from documentation sites
///
/// Crawls documentation pages reachable from each URL, extracts their text and
/// groups it into modules and submodules. Set OPENAI_API_KEY to classify with a
/// remote model; rule-based classification is used otherwise.
#[derive(Parser, Debug)]
#[command(name = "pulse-modules")]
#[command(version)]
#[command(about = "Extract product modules from documentation URLs", long_about = None)]
struct Cli {
    /// Documentation URLs (comma-separated lists are accepted)
    #[arg(value_name = "URLS", required = true)]
    urls: Vec<String>,

    /// Path to TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Maximum number of pages to visit per URL
    #[arg(long, value_name = "N")]
    max_pages: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
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

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    if let Some(max_pages) = cli.max_pages {
        anyhow::ensure!(max_pages > 0, "--max-pages must be at least 1");
        config.crawler.max_pages = max_pages;
    }

    let seeds: Vec<String> = cli
        .urls
        .iter()
        .flat_map(|arg| parse_seed_list(arg))
        .collect();
    anyhow::ensure!(!seeds.is_empty(), "please enter at least one URL");

    let capability = RemoteCapability::resolve(&config.classifier);
    tracing::debug!("Remote classifier capability: {:?}", capability);

    let pipeline = Pipeline::new(&config, capability).context("failed to build pipeline")?;

    tracing::info!("Analyzing documentation from {} URLs", seeds.len());
    let (result, stats) = pipeline.run_with_report(&seeds).await;
    log_statistics(&stats);

    if result.is_empty() {
        tracing::warn!("No modules could be extracted from the provided URLs");
    }

    let rendered = render(cli.format, &result, &stats)?;
    match &cli.output {
        Some(path) => {
            write_output(path, &rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("Output written to: {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr so stdout carries only the rendered result.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("pulse_modules=info,warn"),
            1 => EnvFilter::new("pulse_modules=debug,info"),
            2 => EnvFilter::new("pulse_modules=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

//! CLI entry point for ecosystem_digest.
//!
//! Provides subcommands for aggregating growthepie transaction-cost metrics
//! and for curating RSS items into a single display list.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use ecosystem_digest::{
    config::Settings,
    feed::{curate, types::FeedEntry},
    fetch::BasicClient,
    metrics::fetch_aggregate_metrics,
    output::{MetricsSnapshot, append_record, print_json, write_json},
};
use std::ffi::OsStr;
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "ecosystem_digest")]
#[command(about = "Network cost metrics and curated RSS for the site", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch fundamentals and compute the txcount-weighted median cost
    Metrics {
        /// Fundamentals dataset URL (defaults to $FUNDAMENTALS_URL or growthepie)
        #[arg(long)]
        url: Option<String>,

        /// Request timeout in seconds (defaults to $HTTP_TIMEOUT_SECS or 30)
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        timeout: Option<u64>,

        /// CSV file to append a snapshot row to
        #[arg(long)]
        history: Option<String>,

        /// Write the result JSON to this file
        #[arg(short, long)]
        out: Option<String>,
    },
    /// Merge, annotate and sort feed items from JSON files
    Curate {
        /// JSON files, each holding an array of feed items
        #[arg(value_name = "FILES", required = true)]
        files: Vec<String>,

        /// Maximum number of items to keep (defaults to $RSS_DISPLAY_COUNT or 6)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Write the curated list to this file
        #[arg(short, long)]
        out: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path = std::env::var("LOG_FILE_PATH")
        .unwrap_or_else(|_| "logs/ecosystem_digest.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("ecosystem_digest.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();
    let settings = Settings::from_env()?;

    match cli.command {
        Commands::Metrics {
            url,
            timeout,
            history,
            out,
        } => {
            let url = url.unwrap_or(settings.fundamentals_url);
            let timeout = timeout
                .map(Duration::from_secs)
                .unwrap_or(settings.http_timeout);

            let client = BasicClient::new(timeout).context("building http client")?;
            let metrics = fetch_aggregate_metrics(&client, &url).await;

            print_json(&metrics)?;
            if let Some(path) = history {
                append_record(&path, &MetricsSnapshot::from_metrics(&metrics))?;
                info!(path = %path, "Snapshot appended");
            }
            if let Some(path) = out {
                write_json(&path, &metrics)?;
            }
        }
        Commands::Curate { files, count, out } => {
            let lists = files
                .iter()
                .map(|path| read_entries(path))
                .collect::<Result<Vec<_>>>()?;

            let display_count = count.unwrap_or(settings.display_count);
            let items = curate(lists, display_count);
            if items.is_empty() {
                warn!("No feed items to display");
            }

            print_json(&items)?;
            if let Some(path) = out {
                write_json(&path, &items)?;
            }
        }
    }

    Ok(())
}

/// Loads one feed's items from a JSON array on disk.
#[tracing::instrument]
fn read_entries(path: &str) -> Result<Vec<FeedEntry>> {
    let content = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    let entries: Vec<FeedEntry> =
        serde_json::from_str(&content).with_context(|| format!("parsing feed items in {path}"))?;
    info!(count = entries.len(), "Feed items loaded");
    Ok(entries)
}

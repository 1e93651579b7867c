//! TickerLab CLI — catalog search and financial summaries from the shell.
//!
//! Commands:
//! - `search` — filter the ticker catalog by symbol or company name
//! - `summary` — fetch one financial summary from the analysis backend
//! - `speak` — synthesize the product blurb (or given text) to an audio URL
//! - `ping` — probe the analysis backend's health endpoint

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use tickerlab_core::analysis::AnalysisClient;
use tickerlab_core::catalog::Catalog;
use tickerlab_core::config::{ClientConfig, TimeoutPolicy};
use tickerlab_core::filter::filter;
use tickerlab_core::speech::{SpeechClient, SpeechRequest, PRODUCT_BLURB};

#[derive(Parser)]
#[command(
    name = "tickerlab",
    about = "TickerLab CLI — ticker catalog search and AI-backed financial summaries"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter the ticker catalog by a case-insensitive substring.
    Search {
        /// Query matched against symbols and company names.
        query: String,

        /// Path to a catalog JSON file. Defaults to the bundled US list.
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Fetch a financial summary for one ticker from the analysis backend.
    Summary {
        /// Ticker symbol (case-insensitive, e.g. aapl).
        ticker: String,

        /// Base URL of the analysis backend. Defaults to http://localhost:8000.
        #[arg(long)]
        endpoint: Option<String>,

        /// Request timeout in seconds; 0 waits indefinitely.
        #[arg(long)]
        timeout: Option<u64>,
    },
    /// Synthesize speech and print the generated audio URL.
    Speak {
        /// Voice identifier. Defaults to the configured voice.
        #[arg(long)]
        voice: Option<String>,

        /// Text to synthesize. Defaults to the product blurb.
        #[arg(long)]
        text: Option<String>,
    },
    /// Probe the analysis backend's health endpoint.
    Ping {
        /// Base URL of the analysis backend. Defaults to http://localhost:8000.
        #[arg(long)]
        endpoint: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = ClientConfig::default();

    match cli.command {
        Commands::Search { query, catalog } => cmd_search(&query, catalog.as_deref()),
        Commands::Summary {
            ticker,
            endpoint,
            timeout,
        } => cmd_summary(&config, &ticker, endpoint, timeout),
        Commands::Speak { voice, text } => cmd_speak(&config, voice, text),
        Commands::Ping { endpoint } => cmd_ping(&config, endpoint),
    }
}

fn cmd_search(query: &str, catalog_path: Option<&std::path::Path>) -> Result<()> {
    let catalog = match catalog_path {
        Some(path) => Catalog::from_file(path)?,
        None => Catalog::default_us(),
    };

    let matches = filter(&catalog, query);
    if matches.is_empty() {
        println!("No tickers found matching \"{}\"", query.trim());
        return Ok(());
    }

    for record in &matches {
        println!("{:<6} {}", record.display_symbol(), record.display_name());
    }
    println!("\n{} of {} tickers", matches.len(), catalog.len());
    Ok(())
}

fn cmd_summary(
    config: &ClientConfig,
    ticker: &str,
    endpoint: Option<String>,
    timeout: Option<u64>,
) -> Result<()> {
    if ticker.trim().is_empty() {
        bail!("ticker must not be empty");
    }

    let base_url = endpoint.unwrap_or_else(|| config.analysis_base_url.clone());
    let timeout = timeout
        .map(TimeoutPolicy::from_secs)
        .unwrap_or_else(|| config.timeout());

    let client = AnalysisClient::new(base_url, timeout);
    let summary = match client.fetch_summary(ticker) {
        Ok(summary) => summary,
        Err(err) => bail!("{}", err.user_message()),
    };

    println!("Ticker:           {}", summary.ticker);
    println!("Market Return:    {:.2}%", summary.market_return * 100.0);
    println!("Portfolio Return: {:.2}%", summary.portfolio_return * 100.0);
    println!("Initial Balance:  {:.2}", summary.initial_balance);
    println!("Final Balance:    {:.2}", summary.final_balance);
    println!("Episodes:         {}", summary.total_episodes);
    println!("Data Points:      {}", summary.data_points);
    println!("Date Range:       {} to {}", summary.start_date, summary.end_date);
    println!("Performance Metrics:");
    if summary.performance_metrics.is_empty() {
        println!("  (none reported)");
    } else {
        for (name, value) in &summary.performance_metrics {
            println!("  {name}: {value:.4}");
        }
    }
    Ok(())
}

fn cmd_speak(config: &ClientConfig, voice: Option<String>, text: Option<String>) -> Result<()> {
    let client = match SpeechClient::from_config(config) {
        Ok(client) => client,
        Err(err) => bail!("{}", err.user_message()),
    };

    let voice = voice.unwrap_or_else(|| config.speech_voice.clone());
    let text = text.unwrap_or_else(|| PRODUCT_BLURB.to_string());
    let request = SpeechRequest::new(voice, text);

    match client.synthesize(&request) {
        Ok(audio_url) => {
            println!("{audio_url}");
            Ok(())
        }
        Err(err) => bail!("{}", err.user_message()),
    }
}

fn cmd_ping(config: &ClientConfig, endpoint: Option<String>) -> Result<()> {
    let base_url = endpoint.unwrap_or_else(|| config.analysis_base_url.clone());
    let client = AnalysisClient::new(base_url, config.timeout());

    match client.health_check() {
        Ok(status) => {
            println!("analysis backend: {status}");
            Ok(())
        }
        Err(err) => bail!("{}", err.user_message()),
    }
}

use crate::config::Config;
use crate::scraper::{FlightScraper, HttpTransport, ScraperError};
use chrono::Local;
use std::fs::OpenOptions;
use tracing::{error, info};
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{fmt, EnvFilter};

mod config;
mod domain;
mod scraper;
mod spreadsheets;

#[cfg(test)]
mod tests;

fn main() {
    if let Err(e) = init_logging() {
        eprintln!("⚠️ Could not install log subscriber: {e}");
    }

    if let Err(e) = run() {
        error!(error = %e, "scrape aborted");
        std::process::exit(1);
    }
}

/// Installs the global `fmt` subscriber; `RUST_LOG` overrides the default filter.
fn init_logging() -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("flight_prices_scraper=info"));
    fmt().with_env_filter(filter).finish().try_init()
}

fn run() -> Result<(), ScraperError> {
    let config = Config::from_env()?;
    info!(
        origin = %config.origin,
        destination = %config.destination,
        start = %config.start_date,
        end = %config.end_date,
        output = %config.output.display(),
        "starting scrape"
    );

    let scraper = FlightScraper::new(HttpTransport::new()?, config.base_url.clone());

    // One handle for the whole range, closed when `run` returns.
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.output)?;

    let summary = scraper.scrape_range(&config, &mut file, || Local::now().date_naive())?;

    info!(
        dates = summary.dates,
        with_data = summary.with_data,
        no_data = summary.no_data,
        failed = summary.failed,
        rows = summary.rows_written,
        "scrape complete"
    );
    Ok(())
}

// scraper.rs
use crate::config::Config;
use crate::domain::{FlightListing, FlightQuery};
use crate::scraper::models::RoundTripEnvelope;
use crate::scraper::transport::Transport;
use crate::scraper::ScraperError;
use crate::spreadsheets::write_listing_csv;
use chrono::NaiveDate;
use serde_json::Value;
use std::io::Write;
use tracing::{debug, error, info, warn};

/// Substring identifying the script line that carries the listing.
const MARKER: &str = "flightsData";
const ASSIGNMENT_PREFIX: &str = "var flightsData = ";

pub struct FlightScraper<T: Transport> {
    transport: T,
    base_url: String,
}

/// Totals for one pass over a date range.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub dates: usize,
    pub with_data: usize,
    pub no_data: usize,
    pub failed: usize,
    pub rows_written: usize,
}

impl<T: Transport> FlightScraper<T> {
    pub fn new(transport: T, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    /// Fetches `url` and extracts its listing. Never fails: any error is
    /// logged with its kind and becomes `NoData`.
    pub fn browse(&self, url: &str, round_trip: bool) -> FlightListing {
        info!(url = %url, round_trip, "fetching");

        match self.transport.fetch(url) {
            Ok(body) => extract(&body, round_trip),
            Err(e) => {
                warn!(kind = e.kind(), error = %e, url = %url, "fetch failed, no data");
                FlightListing::NoData
            }
        }
    }

    pub fn journey_oneway(&self, query: &FlightQuery) -> FlightListing {
        self.browse(&query.one_way_url(&self.base_url), false)
    }

    pub fn journey_roundtrip(&self, query: &FlightQuery) -> FlightListing {
        match query.round_trip_url(&self.base_url) {
            Ok(url) => self.browse(url.as_str(), true),
            Err(e) => {
                warn!(kind = e.kind(), error = %e, "cannot build round-trip URL, no data");
                FlightListing::NoData
            }
        }
    }

    pub fn journey(&self, query: &FlightQuery) -> FlightListing {
        if query.is_round_trip() {
            self.journey_roundtrip(query)
        } else {
            self.journey_oneway(query)
        }
    }

    /// Queries every day from `config.start_date` to `config.end_date`
    /// inclusive, appending one CSV block per day to `out`.
    ///
    /// `today` is read once per day, when that day's rows are written.
    /// A record that fails to decode skips that day only; write errors abort.
    pub fn scrape_range<W, C>(
        &self,
        config: &Config,
        out: &mut W,
        today: C,
    ) -> Result<RunSummary, ScraperError>
    where
        W: Write,
        C: Fn() -> NaiveDate,
    {
        let mut summary = RunSummary::default();

        if config.start_date > config.end_date {
            warn!(start = %config.start_date, end = %config.end_date, "empty date range");
            return Ok(summary);
        }

        let days = config
            .start_date
            .iter_days()
            .take_while(|d| *d <= config.end_date);

        for depart_date in days {
            let query = config.query_for(depart_date)?;
            info!(date = %query.depart_date_param(), "processing");
            summary.dates += 1;

            let listing = self.journey(&query);
            match write_listing_csv(&listing, &query, today(), out) {
                Ok(rows) => {
                    if listing.is_no_data() {
                        summary.no_data += 1;
                    } else {
                        summary.with_data += 1;
                    }
                    summary.rows_written += rows;
                    debug!(flights = listing.len(), rows, "block written");
                }
                Err(ScraperError::Io(e)) => return Err(ScraperError::Io(e)),
                Err(e) => {
                    error!(
                        kind = e.kind(),
                        error = %e,
                        date = %query.depart_date_param(),
                        "could not normalize listing, skipping date"
                    );
                    summary.failed += 1;
                }
            }
        }

        out.flush()?;
        Ok(summary)
    }
}

/// Decodes a response body into a listing, collapsing every failure to `NoData`.
pub fn extract(raw: &str, round_trip: bool) -> FlightListing {
    let result = if round_trip {
        extract_round_trip(raw)
    } else {
        extract_embedded(raw)
    };

    match result {
        Ok(flights) => {
            debug!(flights = flights.len(), "listing extracted");
            FlightListing::Flights(flights)
        }
        Err(e) => {
            warn!(kind = e.kind(), error = %e, "extraction failed, no data");
            FlightListing::NoData
        }
    }
}

/// First line mentioning the marker wins, even if it does not decode.
fn extract_embedded(raw: &str) -> Result<Vec<Value>, ScraperError> {
    let line = raw
        .lines()
        .find(|line| line.contains(MARKER))
        .ok_or(ScraperError::MissingMarker)?;

    let json_text = line.replace(ASSIGNMENT_PREFIX, "");
    let json_text = json_text.trim().trim_end_matches(';');

    let data: Value =
        serde_json::from_str(json_text).map_err(|e| ScraperError::JsonParse(e.to_string()))?;
    into_flights(data)
}

/// Round-trip bodies are a JSON object whose `fd` field is JSON text.
fn extract_round_trip(raw: &str) -> Result<Vec<Value>, ScraperError> {
    let envelope: RoundTripEnvelope =
        serde_json::from_str(raw).map_err(|e| ScraperError::JsonParse(e.to_string()))?;

    let inner = match envelope.fd {
        Some(Value::String(s)) => s,
        Some(other) => {
            return Err(ScraperError::UnexpectedShape(format!(
                "fd is not a string: {other}"
            )))
        }
        None => return Err(ScraperError::MissingField("fd".into())),
    };

    let data: Value =
        serde_json::from_str(&inner).map_err(|e| ScraperError::JsonParse(e.to_string()))?;
    into_flights(data)
}

fn into_flights(data: Value) -> Result<Vec<Value>, ScraperError> {
    match data {
        Value::Array(flights) => Ok(flights),
        other => Err(ScraperError::UnexpectedShape(format!(
            "listing is not an array: {}",
            type_name(&other)
        ))),
    }
}

fn type_name(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}


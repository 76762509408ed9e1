// config.rs
use crate::domain::{FlightQuery, Passengers};
use crate::scraper::ScraperError;
use chrono::{Days, NaiveDate};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use url::Url;

pub const BASE_URL: &str = "http://flights.makemytrip.com/makemytrip/";
pub const DEFAULT_OUTPUT: &str = "buff.csv";

/// Settings for one run. `Default` is the classic DEL -> GAU scrape.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub base_url: String,
    pub origin: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub passengers: Passengers,
    pub output: PathBuf,
    /// When set, each day is queried as a round trip returning this many days later.
    pub stay_days: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            origin: "DEL".to_string(),
            destination: "GAU".to_string(),
            start_date: NaiveDate::from_ymd_opt(2016, 10, 21).unwrap_or(NaiveDate::MIN),
            end_date: NaiveDate::from_ymd_opt(2016, 11, 2).unwrap_or(NaiveDate::MIN),
            passengers: Passengers::default(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            stay_days: None,
        }
    }
}

impl Config {
    /// Reads `FLIGHTS_*` overrides from the process environment.
    pub fn from_env() -> Result<Self, ScraperError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ScraperError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(v) = lookup("FLIGHTS_BASE_URL") {
            config.base_url = v;
        }
        if let Some(v) = lookup("FLIGHTS_ORIGIN") {
            config.origin = airport_code("FLIGHTS_ORIGIN", &v)?;
        }
        if let Some(v) = lookup("FLIGHTS_DESTINATION") {
            config.destination = airport_code("FLIGHTS_DESTINATION", &v)?;
        }
        if let Some(v) = lookup("FLIGHTS_START_DATE") {
            config.start_date = date("FLIGHTS_START_DATE", &v)?;
        }
        if let Some(v) = lookup("FLIGHTS_END_DATE") {
            config.end_date = date("FLIGHTS_END_DATE", &v)?;
        }
        if let Some(v) = lookup("FLIGHTS_OUTPUT") {
            config.output = PathBuf::from(v);
        }
        if let Some(v) = lookup("FLIGHTS_ADULTS") {
            config.passengers.adults = number("FLIGHTS_ADULTS", &v)?;
        }
        if let Some(v) = lookup("FLIGHTS_CHILDREN") {
            config.passengers.children = number("FLIGHTS_CHILDREN", &v)?;
        }
        if let Some(v) = lookup("FLIGHTS_INFANTS") {
            config.passengers.infants = number("FLIGHTS_INFANTS", &v)?;
        }
        if let Some(v) = lookup("FLIGHTS_STAY_DAYS") {
            config.stay_days = Some(number("FLIGHTS_STAY_DAYS", &v)?);
        }

        // Both URL builders append paths to the base.
        if !config.base_url.ends_with('/') {
            config.base_url.push('/');
        }
        Url::parse(&config.base_url).map_err(|e| {
            ScraperError::Config(format!("FLIGHTS_BASE_URL {:?}: {e}", config.base_url))
        })?;

        // The latest departure must still have a representable return date.
        let latest = config.start_date.max(config.end_date);
        config.return_date_for(latest)?;

        Ok(config)
    }

    /// The query issued for one departure day.
    pub fn query_for(&self, depart_date: NaiveDate) -> Result<FlightQuery, ScraperError> {
        let query = match self.return_date_for(depart_date)? {
            Some(return_date) => FlightQuery::round_trip(
                &self.origin,
                &self.destination,
                depart_date,
                return_date,
                self.passengers,
            ),
            None => FlightQuery::one_way(
                &self.origin,
                &self.destination,
                depart_date,
                self.passengers,
            ),
        };
        Ok(query)
    }

    fn return_date_for(&self, depart_date: NaiveDate) -> Result<Option<NaiveDate>, ScraperError> {
        let Some(days) = self.stay_days else {
            return Ok(None);
        };
        depart_date
            .checked_add_days(Days::new(u64::from(days)))
            .map(Some)
            .ok_or_else(|| {
                ScraperError::Config(format!(
                    "FLIGHTS_STAY_DAYS {days} puts the return past the last supported date"
                ))
            })
    }
}

fn airport_code(key: &str, value: &str) -> Result<String, ScraperError> {
    let code = value.trim().to_ascii_uppercase();
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(ScraperError::Config(format!(
            "{key} must be a 3-letter airport code, got {value:?}"
        )));
    }
    Ok(code)
}

fn date(key: &str, value: &str) -> Result<NaiveDate, ScraperError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|e| ScraperError::Config(format!("{key} must be YYYY-MM-DD, got {value:?}: {e}")))
}

fn number<N: FromStr>(key: &str, value: &str) -> Result<N, ScraperError>
where
    N::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| ScraperError::Config(format!("{key} must be a number, got {value:?}: {e}")))
}

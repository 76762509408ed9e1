// src/domain/listing.rs

use crate::domain::query::FlightQuery;
use crate::scraper::models::FlightRecord;
use crate::scraper::ScraperError;
use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

/// Number of columns in every CSV row, header included.
pub const ROW_WIDTH: usize = 17;

pub const NA: &str = "NA";

/// Outcome of one query: the raw flight objects in upstream order, or nothing.
///
/// Extraction is all-or-nothing; every fetch or parse failure becomes `NoData`.
#[derive(Debug, Clone, PartialEq)]
pub enum FlightListing {
    Flights(Vec<Value>),
    NoData,
}

impl FlightListing {
    pub fn len(&self) -> usize {
        match self {
            FlightListing::Flights(flights) => flights.len(),
            FlightListing::NoData => 0,
        }
    }

    pub fn is_no_data(&self) -> bool {
        matches!(self, FlightListing::NoData)
    }
}

/// A flattened CSV row, always `ROW_WIDTH` fields ending with the capture date.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputRow([String; ROW_WIDTH]);

impl OutputRow {
    /// Flattens a record using its first leg only; later legs are dropped.
    pub fn from_record(record: &FlightRecord, captured: NaiveDate) -> Result<Self, ScraperError> {
        let leg = record
            .legs
            .first()
            .ok_or_else(|| ScraperError::MissingField("le[0]".into()))?;
        let fare = &leg.fare;

        Ok(Self([
            leg.origin.to_string(),
            leg.destination.to_string(),
            leg.departure_date.to_string(),
            leg.departure_time
                .as_ref()
                .map_or_else(|| NA.to_string(), |t| t.to_string()),
            leg.arrival_time.to_string(),
            record.total_fare.to_string(),
            fare.base_fare.to_string(),
            fare.fuel_surcharge.to_string(),
            leg.airline.to_string(),
            fare.booking_class.availability.to_string(),
            record.total_duration.to_string(),
            leg.cabin_class.to_string(),
            leg.flight_number.to_string(),
            leg.carrier_code.to_string(),
            record.flight_id.to_string(),
            record.hopping.to_string(),
            captured.to_string(),
        ]))
    }

    /// The fallback row written when a query produced no listing.
    pub fn unavailable(query: &FlightQuery, captured: NaiveDate) -> Self {
        let mut fields: [String; ROW_WIDTH] = std::array::from_fn(|_| NA.to_string());
        fields[0] = query.origin.clone();
        fields[1] = query.destination.clone();
        fields[2] = query.depart_date_param();
        fields[ROW_WIDTH - 1] = captured.to_string();
        Self(fields)
    }

    pub fn fields(&self) -> &[String] {
        &self.0
    }

    pub fn to_line(&self) -> String {
        self.fields().join(",")
    }
}

/// Decodes and flattens every flight in the listing.
///
/// A record missing a required key fails the whole listing; nothing is
/// defaulted. `NoData` yields no rows.
pub fn normalize(listing: &FlightListing, captured: NaiveDate) -> Result<Vec<OutputRow>, ScraperError> {
    let flights = match listing {
        FlightListing::Flights(flights) => flights,
        FlightListing::NoData => return Ok(Vec::new()),
    };

    flights
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let record = FlightRecord::deserialize(v)
                .map_err(|e| ScraperError::Deserialize(format!("flight #{i}: {e}")))?;
            OutputRow::from_record(&record, captured)
        })
        .collect()
}

// src/domain/query.rs

use crate::scraper::ScraperError;
use chrono::NaiveDate;
use url::Url;

/// Date format used in URLs and in the NA row.
pub const QUERY_DATE_FORMAT: &str = "%d-%m-%Y";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Passengers {
    pub adults: u32,
    pub children: u32,
    pub infants: u32,
}

impl Default for Passengers {
    fn default() -> Self {
        Self {
            adults: 1,
            children: 0,
            infants: 0,
        }
    }
}

/// One search against the site. Built per date, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightQuery {
    pub origin: String,
    pub destination: String,
    pub depart_date: NaiveDate,
    pub return_date: Option<NaiveDate>,
    pub passengers: Passengers,
}

impl FlightQuery {
    pub fn one_way(
        origin: &str,
        destination: &str,
        depart_date: NaiveDate,
        passengers: Passengers,
    ) -> Self {
        Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
            depart_date,
            return_date: None,
            passengers,
        }
    }

    pub fn round_trip(
        origin: &str,
        destination: &str,
        depart_date: NaiveDate,
        return_date: NaiveDate,
        passengers: Passengers,
    ) -> Self {
        Self {
            return_date: Some(return_date),
            ..Self::one_way(origin, destination, depart_date, passengers)
        }
    }

    pub fn is_round_trip(&self) -> bool {
        self.return_date.is_some()
    }

    pub fn depart_date_param(&self) -> String {
        self.depart_date.format(QUERY_DATE_FORMAT).to_string()
    }

    /// Path-templated search page; economy cabin is fixed.
    pub fn one_way_url(&self, base_url: &str) -> String {
        let p = &self.passengers;
        format!(
            "{base_url}search/O/O/E/{}/{}/{}/S/V0/{}_{}_{}",
            p.adults,
            p.children,
            p.infants,
            self.origin,
            self.destination,
            self.depart_date_param()
        )
    }

    pub fn round_trip_url(&self, base_url: &str) -> Result<Url, ScraperError> {
        let return_date = self
            .return_date
            .ok_or_else(|| ScraperError::Config("round-trip query without return date".into()))?;

        let p = &self.passengers;
        let params = [
            ("classType", "E".to_string()),
            ("deptDate", self.depart_date_param()),
            ("fromCity", self.origin.clone()),
            ("toCity", self.destination.clone()),
            ("noOfAdlts", p.adults.to_string()),
            ("noOfChd", p.children.to_string()),
            ("noOfInfnt", p.infants.to_string()),
            ("returnDate", return_date.format(QUERY_DATE_FORMAT).to_string()),
            ("tripType", "R".to_string()),
            ("tripTypeDup", "R".to_string()),
        ];

        Url::parse_with_params(&format!("{base_url}splitRTDataService.json"), &params)
            .map_err(|e| ScraperError::Config(format!("Invalid base URL {base_url}: {e}")))
    }
}

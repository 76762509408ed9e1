use crate::config::Config;
use crate::scraper::{ScraperError, Transport};
use chrono::NaiveDate;
use std::cell::RefCell;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

/// The reference one-way page body: a script line assigning one flight.
pub const ONE_FLIGHT_PAGE: &str = concat!(
    "<html>\n<script>\n",
    r#"var flightsData = [{"le":[{"o":"DEL","d":"GAU","dep":"0600","fat":"0800","flightFare":{"baseFare":3000,"fuelSurcharge":500,"bookingClass":{"availability":"9"}},"an":"IndiGo","cls":"Economy","fn":"6E123","oc":"6E"}],"af":4200,"td":"2h","fi":"XYZ1","hff":false}];"#,
    "\n</script>\n</html>\n"
);

pub const NO_MARKER_PAGE: &str = "<html>\n<body>No flights today</body>\n</html>\n";

/// Replays canned responses in order, repeating the last one.
pub struct StubTransport {
    responses: Vec<Result<String, u16>>,
    pub requested: RefCell<Vec<String>>,
}

impl StubTransport {
    pub fn body(body: &str) -> Self {
        Self::sequence(vec![Ok(body.to_string())])
    }

    pub fn status(status: u16) -> Self {
        Self::sequence(vec![Err(status)])
    }

    /// `Err(status)` entries become HTTP status errors.
    pub fn sequence(responses: Vec<Result<String, u16>>) -> Self {
        assert!(!responses.is_empty(), "stub needs at least one response");
        Self {
            responses,
            requested: RefCell::new(Vec::new()),
        }
    }
}

impl Transport for StubTransport {
    fn fetch(&self, url: &str) -> Result<String, ScraperError> {
        let mut requested = self.requested.borrow_mut();
        let idx = requested.len().min(self.responses.len() - 1);
        requested.push(url.to_string());

        match &self.responses[idx] {
            Ok(body) => Ok(body.clone()),
            Err(status) => Err(ScraperError::HttpStatus {
                status: *status,
                url: url.to_string(),
            }),
        }
    }
}

impl<T: Transport> Transport for &T {
    fn fetch(&self, url: &str) -> Result<String, ScraperError> {
        (**self).fetch(url)
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Config covering `start..=end`, everything else default.
pub fn config_for(start: NaiveDate, end: NaiveDate) -> Config {
    Config {
        start_date: start,
        end_date: end,
        ..Config::default()
    }
}

pub fn unique_temp_csv_path(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut p = std::env::temp_dir();
    p.push(format!("flights_{tag}_{nanos}.csv"));
    p
}

use crate::domain::listing::{normalize, FlightListing, OutputRow, ROW_WIDTH};
use crate::domain::query::FlightQuery;
use crate::scraper::ScraperError;
use chrono::NaiveDate;
use std::io::Write;

pub const HEADERS: [&str; ROW_WIDTH] = [
    "Origin",
    "Destination",
    "Dept_Date",
    "Dept_Time",
    "Arr_Time",
    "Total_Fare",
    "Base_Fare",
    "Fuel_Fare",
    "Airways",
    "Available",
    "Duration",
    "Class_Type",
    "Flight_Number",
    "Flight_Code",
    "FlightID",
    "Hopping",
    "Taken",
];

/// Appends one header + body block for a single query and returns the number
/// of data rows written.
///
/// The header is written on every call, so a stream shared across dates gets
/// one header per date. Values are written unquoted.
pub fn write_listing_csv<W: Write>(
    listing: &FlightListing,
    query: &FlightQuery,
    captured: NaiveDate,
    out: &mut W,
) -> Result<usize, ScraperError> {
    // Normalize before touching the stream so a bad record leaves no partial block.
    let rows = match listing {
        FlightListing::NoData => vec![OutputRow::unavailable(query, captured)],
        FlightListing::Flights(_) => normalize(listing, captured)?,
    };

    writeln!(out, "{}", HEADERS.join(","))?;
    for row in &rows {
        writeln!(out, "{}", row.to_line())?;
    }

    Ok(rows.len())
}

use super::utils::*;
use crate::domain::{FlightListing, FlightQuery, Passengers};
use crate::scraper::{extract, ScraperError};
use crate::spreadsheets::{write_listing_csv, HEADERS};
use serde_json::json;

const HEADER_LINE: &str = "Origin,Destination,Dept_Date,Dept_Time,Arr_Time,Total_Fare,Base_Fare,Fuel_Fare,Airways,Available,Duration,Class_Type,Flight_Number,Flight_Code,FlightID,Hopping,Taken";

fn query() -> FlightQuery {
    FlightQuery::one_way("DEL", "GAU", date(2016, 10, 21), Passengers::default())
}

fn write(listing: &FlightListing) -> Result<String, ScraperError> {
    let mut buf = Vec::new();
    write_listing_csv(listing, &query(), date(2016, 10, 20), &mut buf)?;
    Ok(String::from_utf8(buf).unwrap())
}

#[test]
fn header_matches_published_layout() {
    assert_eq!(HEADERS.join(","), HEADER_LINE);
}

#[test]
fn no_data_writes_header_and_na_row() {
    let out = write(&FlightListing::NoData).unwrap();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], HEADER_LINE);
    assert_eq!(lines[1].split(',').count(), 17);
    assert_eq!(
        lines[1],
        "DEL,GAU,21-10-2016,NA,NA,NA,NA,NA,NA,NA,NA,NA,NA,NA,NA,NA,2016-10-20"
    );
    assert!(out.ends_with('\n'));
}

#[test]
fn one_row_per_flight_in_upstream_order() {
    let flight = |fare: u32| {
        json!({
            "le": [{"o": "DEL", "d": "GAU", "dep": "0600", "fdt": "06:00", "fat": "0800",
                    "flightFare": {"baseFare": 3000, "fuelSurcharge": 500,
                                   "bookingClass": {"availability": "9"}},
                    "an": "IndiGo", "cls": "Economy", "fn": "6E123", "oc": "6E"}],
            "af": fare, "td": "2h", "fi": "XYZ1", "hff": false
        })
    };
    let listing = FlightListing::Flights(vec![flight(5000), flight(4200), flight(4800)]);

    let out = write(&listing).unwrap();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 4);
    let fares: Vec<&str> = lines[1..]
        .iter()
        .map(|l| {
            assert_eq!(l.split(',').count(), 17);
            l.split(',').nth(5).unwrap()
        })
        .collect();
    assert_eq!(fares, vec!["5000", "4200", "4800"]);
}

#[test]
fn reference_record_row() {
    let out = write(&extract(ONE_FLIGHT_PAGE, false)).unwrap();

    assert_eq!(
        out,
        format!(
            "{HEADER_LINE}\nDEL,GAU,0600,NA,0800,4200,3000,500,IndiGo,9,2h,Economy,6E123,6E,XYZ1,False,2016-10-20\n"
        )
    );
}

#[test]
fn repeated_calls_repeat_the_whole_block() {
    let mut buf = Vec::new();
    for _ in 0..2 {
        write_listing_csv(&FlightListing::NoData, &query(), date(2016, 10, 20), &mut buf).unwrap();
    }
    let out = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0], lines[2]);
    assert_eq!(lines[1], lines[3]);
}

#[test]
fn empty_listing_writes_only_header() {
    let out = write(&FlightListing::Flights(Vec::new())).unwrap();
    assert_eq!(out, format!("{HEADER_LINE}\n"));
}

#[test]
fn bad_record_writes_nothing() {
    let listing = FlightListing::Flights(vec![json!({"le": [], "af": 1, "td": "1h", "fi": "X", "hff": false})]);

    let mut buf = Vec::new();
    let err = write_listing_csv(&listing, &query(), date(2016, 10, 20), &mut buf).unwrap_err();

    assert!(matches!(err, ScraperError::MissingField(_)));
    assert!(buf.is_empty());
}

use serde::Deserialize;
use std::fmt;

// flight
//  ├── le (legs, only [0] is read)
//  │    ├── o / d
//  │    ├── dep / fdt / fat
//  │    ├── an / cls / fn / oc
//  │    └── flightFare
//  │         ├── baseFare
//  │         ├── fuelSurcharge
//  │         └── bookingClass
//  │              └── availability
//  ├── af
//  ├── td
//  ├── fi
//  └── hff

#[derive(Debug, Deserialize)]
pub struct FlightRecord {
    #[serde(rename = "le")]
    pub legs: Vec<Leg>,
    #[serde(rename = "af")]
    pub total_fare: FieldValue,
    #[serde(rename = "td")]
    pub total_duration: FieldValue,
    #[serde(rename = "fi")]
    pub flight_id: FieldValue,
    #[serde(rename = "hff")]
    pub hopping: FieldValue,
}

#[derive(Debug, Deserialize)]
pub struct Leg {
    #[serde(rename = "o")]
    pub origin: FieldValue,
    #[serde(rename = "d")]
    pub destination: FieldValue,
    #[serde(rename = "dep")]
    pub departure_date: FieldValue,
    #[serde(rename = "fdt")]
    pub departure_time: Option<FieldValue>,
    #[serde(rename = "fat")]
    pub arrival_time: FieldValue,
    #[serde(rename = "flightFare")]
    pub fare: FlightFare,
    #[serde(rename = "an")]
    pub airline: FieldValue,
    #[serde(rename = "cls")]
    pub cabin_class: FieldValue,
    #[serde(rename = "fn")]
    pub flight_number: FieldValue,
    #[serde(rename = "oc")]
    pub carrier_code: FieldValue,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightFare {
    pub base_fare: FieldValue,
    pub fuel_surcharge: FieldValue,
    pub booking_class: BookingClass,
}

#[derive(Debug, Deserialize)]
pub struct BookingClass {
    pub availability: FieldValue,
}

/// Round-trip responses wrap the listing as JSON text under `fd`.
#[derive(Debug, Deserialize)]
pub struct RoundTripEnvelope {
    pub fd: Option<serde_json::Value>,
}

/// A scalar copied into the CSV.
///
/// Upstream mixes strings and numbers for the same keys, so the value is kept
/// as written instead of being coerced. Booleans and null use the spelling the
/// existing CSV files already carry (`True`, `False`, `None`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Number(serde_json::Number),
    Flag(bool),
    Null,
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => write!(f, "{s}"),
            FieldValue::Number(n) => write!(f, "{n}"),
            FieldValue::Flag(true) => write!(f, "True"),
            FieldValue::Flag(false) => write!(f, "False"),
            FieldValue::Null => write!(f, "None"),
        }
    }
}

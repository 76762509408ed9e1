pub mod listing;
pub mod query;

pub use listing::{normalize, FlightListing, OutputRow};
pub use query::{FlightQuery, Passengers};

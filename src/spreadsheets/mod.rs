pub mod export_csv;

pub use export_csv::{write_listing_csv, HEADERS};

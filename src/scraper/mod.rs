pub mod models;
mod scraper;
mod scraper_error;
mod transport;

pub use scraper::{extract, FlightScraper, RunSummary};
pub use scraper_error::ScraperError;
pub use transport::{HttpTransport, Transport};

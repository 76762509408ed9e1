use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("flightsData marker not found")]
    MissingMarker,

    #[error("JSON parse error: {0}")]
    JsonParse(String),

    #[error("Unexpected data shape: {0}")]
    UnexpectedShape(String),

    #[error("Missing field: {0}")]
    MissingField(String),

    #[error("Deserialize error: {0}")]
    Deserialize(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl ScraperError {
    /// Short tag used when a failure is collapsed into `NoData`.
    pub fn kind(&self) -> &'static str {
        match self {
            ScraperError::Network(_) => "network",
            ScraperError::HttpStatus { .. } => "http_status",
            ScraperError::MissingMarker => "missing_marker",
            ScraperError::JsonParse(_) => "json_parse",
            ScraperError::UnexpectedShape(_) => "unexpected_shape",
            ScraperError::MissingField(_) => "missing_field",
            ScraperError::Deserialize(_) => "deserialize",
            ScraperError::Io(_) => "io",
            ScraperError::Config(_) => "config",
        }
    }
}

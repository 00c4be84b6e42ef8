use thiserror::Error;

/// Message attached to every failed forecast request.
pub const FETCH_FAILED_MESSAGE: &str = "Not a Valid URL!";

/// Message attached to a response body that is not JSON.
pub const PARSE_FAILED_MESSAGE: &str = "Could not extract JSON data from page";

/// Errors produced by the forecast pipeline.
///
/// Every variant is fatal for a run: nothing is retried and no stage returns
/// partial results.
#[derive(Debug, Error)]
pub enum UmbrellaError {
    /// City, country or key rejected before any request was made.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The request failed in transport or the server answered non-2xx.
    #[error("{message}{}", status_suffix(.status))]
    Fetch { status: Option<u16>, message: String },

    #[error("{0}")]
    Parse(String),

    /// The JSON tree lacks a field the pipeline depends on.
    #[error("missing key: {0}")]
    MissingKey(String),

    #[error("malformed timestamp: {0}")]
    MalformedTimestamp(String),
}

impl UmbrellaError {
    pub(crate) fn fetch(status: Option<u16>) -> Self {
        UmbrellaError::Fetch { status, message: FETCH_FAILED_MESSAGE.to_string() }
    }

    pub(crate) fn parse() -> Self {
        UmbrellaError::Parse(PARSE_FAILED_MESSAGE.to_string())
    }

    /// HTTP status of a failed fetch, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            UmbrellaError::Fetch { status, .. } => *status,
            _ => None,
        }
    }
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|s| format!(" (HTTP status {s})")).unwrap_or_default()
}

pub type Result<T> = std::result::Result<T, UmbrellaError>;

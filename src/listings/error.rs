use thiserror::Error;

pub const NETWORK_ERROR_MESSAGE: &str = "Failed to load properties. Please try again later.";
pub const FORMAT_ERROR_MESSAGE: &str = "Unexpected response format from server.";

/// Why a listing fetch did not produce a page
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport failure, non-success status or unreadable body
    #[error("network error: {0}")]
    Network(String),

    /// Body decoded as JSON but did not match the listing schema
    #[error("unexpected response format: {0}")]
    Format(String),
}

impl FetchError {
    /// Message shown to the user; the detail only goes to the logs
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::Network(_) => NETWORK_ERROR_MESSAGE,
            FetchError::Format(_) => FORMAT_ERROR_MESSAGE,
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network(err.to_string())
    }
}

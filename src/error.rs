use thiserror::Error;

/// Failure of a remote team API call.
///
/// Every remote operation reports through this type; local store mutations
/// never fail.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("team was not found")]
    NotFound,

    #[error("server responded with status {status}")]
    Server { status: u16 },

    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    #[error("unexpected response: {0}")]
    Unknown(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Unknown(err.to_string())
        } else {
            ApiError::Network(err)
        }
    }
}

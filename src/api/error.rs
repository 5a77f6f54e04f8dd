use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Connection failures, timeouts and unreadable bodies.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Malformed envelope or a numeric field that does not parse.
    #[error("failed to decode API response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The server answered with a status >= 400. `body` is the raw response text.
    #[error("API request failed with status {status}: {body}")]
    Api { status: u16, body: String },

    #[error("unable to find DNS record with ID {0}")]
    NotFound(u64),

    #[error("unable to find DNS record with name {0}")]
    NameNotFound(String),

    #[error("invalid DNS record: {0}")]
    InvalidRecord(#[from] validator::ValidationErrors),
}

impl ApiError {
    pub(crate) fn decode(msg: impl std::fmt::Display) -> Self {
        Self::Decode(<serde_json::Error as serde::de::Error>::custom(msg))
    }
}

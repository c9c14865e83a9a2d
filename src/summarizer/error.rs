use std::time::Duration;

use thiserror::Error;

/// Failure to recover a summary payload from a model reply
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("no JSON object found in model reply")]
    MissingObject,
    #[error("malformed summary payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failure of a single summarization call
#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("http {status}: {body}")]
    Http { status: u16, body: String },
    #[error("invalid response envelope: {0}")]
    Decode(String),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl SummarizeError {
    /// Classify a reqwest failure, keeping deadline expiry distinct
    pub(crate) fn from_transport(err: reqwest::Error, budget: Duration) -> Self {
        if err.is_timeout() { SummarizeError::Timeout(budget) } else { SummarizeError::Transport(err) }
    }
}

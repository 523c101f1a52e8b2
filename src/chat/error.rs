use reqwest::StatusCode;
use thiserror::Error;

/// Failures that end a chat reply attempt. Rate limiting and payment
/// refusals are not errors; they are reported as a `StreamOutcome`.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("chat response has no body")]
    MissingBody,
    #[error("chat service responded with HTTP {0}")]
    Status(StatusCode),
    #[error("chat request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("chat stream read failed: {0}")]
    Read(String),
}

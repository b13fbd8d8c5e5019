use shared::error::ApiError;
use thiserror::Error;

/// Failure taxonomy for gateway calls. Controllers collapse every variant
/// into a fixed per-action notification; the variant detail only reaches
/// the diagnostic log.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Network, timeout, or an error status with no readable API error body.
    #[error("transport failure: {0}")]
    Transport(String),
    /// The backend understood the request and rejected its content.
    #[error("backend rejected the request: {0}")]
    Rejected(ApiError),
    /// A success response whose body does not match the expected schema.
    #[error("unexpected response shape: {0}")]
    Schema(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        GatewayError::Transport(err.to_string())
    }
}

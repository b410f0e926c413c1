use http::StatusCode;
use thiserror::Error;

/// Failures surfaced by the REST client.
///
/// The grid treats [`ApiError::MalformedResponse`] the same way as transport
/// failures: empty the rows, notify once, stay usable.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network failure, timeout, or any other transport-level problem.
    #[error("transport error: {0}")]
    Transport(String),

    /// Backend answered with a non-2xx status.
    #[error("backend returned status {0}")]
    Status(u16),

    /// Detail endpoint answered 404.
    #[error("entity not found")]
    NotFound,

    /// Envelope missing expected members, or an undecodable body.
    #[error("malformed backend response: {0}")]
    MalformedResponse(String),

    /// Backend accepted the call but rejected the request (`success: false`).
    #[error("backend rejected the request: {0}")]
    Backend(String),

    /// Request payload could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub(crate) fn decode(err: serde_json::Error) -> Self {
        ApiError::MalformedResponse(err.to_string())
    }

    pub(crate) fn encode(err: serde_json::Error) -> Self {
        ApiError::Serialization(err.to_string())
    }
}

impl From<ureq::Error> for ApiError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::StatusCode(code) if code == StatusCode::NOT_FOUND.as_u16() => {
                ApiError::NotFound
            }
            ureq::Error::StatusCode(code) => ApiError::Status(code),
            ureq::Error::Io(e) => ApiError::Transport(e.to_string()),
            other => ApiError::Transport(other.to_string()),
        }
    }
}

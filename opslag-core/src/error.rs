//! Error taxonomy shared across the dataset registry, the generation
//! gateway, and the HTTP surface.
//!
//! The parser, column selector, and prompt builder never fail; they produce
//! degenerate (empty) results instead. Everything that touches the
//! filesystem, the request parameters, or the upstream service reports
//! through this enum so the HTTP layer can map each class to a status code.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Missing or malformed request parameter.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Dataset identifier does not resolve to a stored dataset.
    #[error("not found: {0}")]
    NotFound(String),

    /// Underlying storage was unreadable.
    #[error("storage error: {0}")]
    Storage(String),

    /// Required credential for the generation service is absent.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The generation service failed at transport or response level.
    #[error("upstream error: {0}")]
    Upstream(String),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Storage(_) | Error::Configuration(_) | Error::Upstream(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_error_class() {
        assert_eq!(
            Error::InvalidInput("no person specified".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            Error::NotFound("alice".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            Error::Storage("unreadable".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            Error::Configuration("no key".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            Error::Upstream("timeout".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn messages_keep_the_underlying_cause() {
        let err = Error::Upstream("connection reset".into());
        assert!(err.to_string().contains("connection reset"));
    }
}

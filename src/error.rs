//! Error types shared by the recommendation pipeline, the stores and the
//! HTTP layer.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// Result type for songshelf operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The requested record does not exist in its store.
    #[error("{0} not found")]
    NotFound(String),

    /// A collaborator (song store, book catalog) could not be reached or
    /// returned unusable data.
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Configuration loading or validation error
    #[error("configuration error: {0}")]
    Config(String),

    /// Invalid user input or request parameter
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::UpstreamUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Error::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Error::Config(_) | Error::Io(_) | Error::Json(_) | Error::Http(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Message placed in the `detail` field of an error response.
    ///
    /// Internal failures are reported generically so file paths and parser
    /// output stay in the server log.
    pub fn detail(&self) -> String {
        match self {
            Error::NotFound(what) => format!("{what} not found"),
            Error::UpstreamUnavailable(_) => {
                "Recommendation backend is temporarily unavailable, try again".to_string()
            }
            Error::InvalidInput(msg) => msg.clone(),
            _ => "Unexpected error occurred".to_string(),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::warn!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, "request rejected");
        }

        (status, Json(json!({ "detail": self.detail() }))).into_response()
    }
}

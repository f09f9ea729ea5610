use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::{error, warn};

use aeval_advisor::AdvisorError;

/// Errors that can occur when running the AEval server.
#[derive(Debug, Error)]
pub enum ServerError {
    /// A configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// An I/O error (e.g. binding the listener).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// The request body was well-formed but its values were rejected.
    #[error("{0}")]
    Validation(String),

    /// The request body could not be decoded.
    #[error(transparent)]
    InvalidBody(#[from] JsonRejection),

    /// The chat pipeline failed.
    #[error(transparent)]
    Advisor(#[from] AdvisorError),
}

impl ServerError {
    /// HTTP status used when this error is returned from a handler.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Config(_) | Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InvalidBody(rejection) => rejection.status(),
            Self::Advisor(AdvisorError::Catalog(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Advisor(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::InvalidBody(rejection) => rejection.body_text(),
            other => other.to_string(),
        };

        if status.is_server_error() {
            error!(status = status.as_u16(), error = %message, "request failed");
        } else {
            warn!(status = status.as_u16(), error = %message, "request rejected");
        }

        let body = serde_json::json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

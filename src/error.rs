use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Error taxonomy surfaced to API clients. Closing an already-closed label is
/// not an error; it is skipped and only reflected in the closure outcome.
#[derive(Debug, Error)]
pub enum PortalError {
    #[error("{0}")]
    InvalidArgument(String),
    #[error("no record with id {0}")]
    NotFound(Uuid),
    #[error("storage failure: {0}")]
    Storage(String),
}

impl PortalError {
    pub fn kind(&self) -> &'static str {
        match self {
            PortalError::InvalidArgument(_) => "invalid_argument",
            PortalError::NotFound(_) => "not_found",
            PortalError::Storage(_) => "storage_failure",
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            PortalError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            PortalError::NotFound(_) => StatusCode::NOT_FOUND,
            PortalError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl IntoResponse for PortalError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.kind(),
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

//! HTTP error mapping
//!
//! Every failure leaves the handler as `{ "error": "<message>" }`.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use buildquote::DomainError;

use crate::models::ErrorResponse;

/// Handler-level error type
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Body could not be read as a quote request
    #[error("Bad request: {0}")]
    BadRequest(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Domain(DomainError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, "Not found".to_string())
            }
            ApiError::Domain(DomainError::Validation(msg)) => {
                tracing::warn!("Rejected quote: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }
            ApiError::Domain(DomainError::Repository(msg)) => {
                tracing::error!("Quote store failure: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!("Malformed request body: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

//! Error types for mimg-dx
//!
//! Every error reaches the client as `{ "success": false, "message": ... }`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::invoker::{truncate_tail, InvokeError};

/// Longest stderr excerpt included in an error message
const STDERR_EXCERPT_CHARS: usize = 500;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("{0}")]
    NotFound(String),

    /// Invalid request (400)
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error (500)
    #[error("{0}")]
    Internal(String),

    /// External inference failed
    #[error("{0}")]
    Invocation(#[from] InvokeError),

    /// mimg-common error
    #[error("{0}")]
    Common(#[from] mimg_common::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Invocation(err) if err.is_missing_image() => StatusCode::BAD_REQUEST,
            ApiError::Invocation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Common(mimg_common::Error::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Common(err) if err.is_client_error() => StatusCode::BAD_REQUEST,
            ApiError::Common(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message
    pub fn message(&self) -> String {
        match self {
            ApiError::Invocation(InvokeError::NonZeroExit { code, stderr }) => {
                let code = code.map_or_else(|| "none".to_string(), |c| c.to_string());
                format!(
                    "Inference process failed (exit code {}): {}",
                    code,
                    truncate_tail(stderr, STDERR_EXCERPT_CHARS)
                )
            }
            ApiError::Common(err) => err
                .client_message()
                .map_or_else(|| err.to_string(), str::to_string),
            other => other.to_string(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!(status = %status, error = %message, "Request failed");
        } else {
            tracing::debug!(status = %status, error = %message, "Request rejected");
        }

        let body = Json(json!({
            "success": false,
            "message": message,
        }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

//! Error-to-HTTP response conversion.
//!
//! Implements `IntoResponse` for [`hw_core::Error`] so that route handlers
//! can return `Result<T, AppError>` and use `?` on storage calls.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Wrapper so we can implement `IntoResponse` for an external type.
#[derive(Debug)]
pub struct AppError {
    inner: hw_core::Error,
}

impl AppError {
    pub fn new(inner: hw_core::Error) -> Self {
        Self { inner }
    }
}

impl From<hw_core::Error> for AppError {
    fn from(e: hw_core::Error) -> Self {
        Self::new(e)
    }
}

impl IntoResponse for AppError {
    /// Plain-text body carrying the error message unmodified.
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.inner.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(
                status = %status,
                error = %self.inner,
                "Server error in route handler"
            );
        } else {
            tracing::debug!(status = %status, error = %self.inner, "Request rejected");
        }

        (status, self.inner.to_string()).into_response()
    }
}

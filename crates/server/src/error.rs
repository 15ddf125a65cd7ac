//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server-side failures to
//! Sentry before responding to the client. All route handlers return
//! `Result<T, AppError>`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::store::StoreError;

/// Body returned for an unknown receipt ID.
pub const RECEIPT_NOT_FOUND: &str = "Receipt not found";

/// Application-level error type for the receipt points server.
#[derive(Debug, Error)]
pub enum AppError {
    /// Request body is not a decodable receipt.
    #[error("{0}")]
    Decode(String),

    /// No receipt is stored under the requested ID.
    #[error("Receipt not found")]
    ReceiptNotFound,

    /// Storage backend failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Store(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Decode(_) => StatusCode::BAD_REQUEST,
            Self::ReceiptNotFound => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Store(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::Decode("EOF while parsing a value".to_string());
        assert_eq!(err.to_string(), "EOF while parsing a value");

        assert_eq!(AppError::ReceiptNotFound.to_string(), RECEIPT_NOT_FOUND);
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            err.into_response().status()
        }

        assert_eq!(
            get_status(AppError::Decode("bad".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::ReceiptNotFound),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::Store(StoreError::Unavailable(
                "connection refused".to_string()
            ))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_store_error_details_are_hidden() {
        let response =
            AppError::Store(StoreError::Unavailable("db at 10.0.0.5 refused".to_string()))
                .into_response();
        let body = body_text(response).await;
        assert_eq!(body, "Internal server error");
    }

    #[tokio::test]
    async fn test_not_found_body() {
        let body = body_text(AppError::ReceiptNotFound.into_response()).await;
        assert_eq!(body, RECEIPT_NOT_FOUND);
    }
}

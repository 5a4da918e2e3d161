//! Error types for submission validation and sink delivery.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Rejection of an incoming paste submission.
///
/// Surfaced synchronously to the caller; a rejected submission is never
/// enqueued.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// The request carried no message, or an empty one.
    #[error("No message provided")]
    EmptyMessage,

    /// The chunk delay was present but not a positive finite number.
    #[error("Delay must be a positive number")]
    InvalidDelay,

    /// The queue has a configured capacity bound and is full.
    #[error("Queue is full")]
    QueueFull,
}

impl SubmitError {
    fn status(&self) -> StatusCode {
        match self {
            SubmitError::EmptyMessage | SubmitError::InvalidDelay => StatusCode::BAD_REQUEST,
            SubmitError::QueueFull => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for SubmitError {
    fn into_response(self) -> Response {
        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}

/// Failure to deliver one chunk to the input sink.
///
/// Recovered locally by the worker loop (logged, next chunk proceeds);
/// never propagated to the submitting caller.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The injector endpoint could not be reached.
    #[error("injector request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The injector answered with a non-success status.
    #[error("injector returned {status}: {body}")]
    Rejected { status: u16, body: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_error_messages() {
        assert_eq!(SubmitError::EmptyMessage.to_string(), "No message provided");
        assert_eq!(SubmitError::QueueFull.to_string(), "Queue is full");
    }

    #[test]
    fn test_submit_error_status_mapping() {
        assert_eq!(SubmitError::EmptyMessage.status(), StatusCode::BAD_REQUEST);
        assert_eq!(SubmitError::InvalidDelay.status(), StatusCode::BAD_REQUEST);
        assert_eq!(SubmitError::QueueFull.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}

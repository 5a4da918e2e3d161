//! HTTP request handlers for the paste relay.

use std::sync::Arc;
use std::time::Duration;

use axum::extract::State;
use axum::Json;
use tracing::info;

use crate::error::SubmitError;
use crate::queue::DispatchQueue;
use crate::types::{PasteRequest, PasteResponse, ServerConfig, StatusResponse, Submission};

/// Application state shared across handlers.
pub struct AppState {
    pub queue: Arc<DispatchQueue>,
    pub config: ServerConfig,
}

/// `GET /`: health and queue depth; no mutation.
pub async fn status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse {
        message: "ok".to_string(),
        queue_size: state.queue.len(),
    })
}

/// `POST /paste`: validate and enqueue a submission.
///
/// Returns as soon as the submission is queued; dispatch happens later in
/// the worker loop and its outcome is not reported back (fire-and-forget
/// with position feedback).
pub async fn paste(
    State(state): State<Arc<AppState>>,
    Json(request): Json<PasteRequest>,
) -> Result<Json<PasteResponse>, SubmitError> {
    let message = match request.message {
        Some(m) if !m.trim().is_empty() => m,
        _ => return Err(SubmitError::EmptyMessage),
    };

    // try_from rejects NaN, infinities, negatives, and values too large
    // for a Duration; zero is excluded separately.
    let chunk_delay = match request.delay {
        Some(d) => Duration::try_from_secs_f64(d)
            .ok()
            .filter(|d| !d.is_zero())
            .ok_or(SubmitError::InvalidDelay)?,
        None => state.config.default_delay(),
    };

    let submission = Submission::new(message, chunk_delay);
    info!(
        submission = %submission.id,
        chars = submission.message.chars().count(),
        delay_secs = submission.chunk_delay.as_secs_f64(),
        "received paste request"
    );

    let queue_position = state.queue.enqueue(submission)?;

    Ok(Json(PasteResponse {
        success: true,
        queued: true,
        queue_position,
        message: format!("Message queued successfully at position {}", queue_position),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn test_state(capacity: Option<usize>) -> Arc<AppState> {
        Arc::new(AppState {
            queue: Arc::new(DispatchQueue::new(capacity)),
            config: ServerConfig::default(),
        })
    }

    fn request(message: Option<&str>, delay: Option<f64>) -> PasteRequest {
        PasteRequest {
            message: message.map(String::from),
            delay,
        }
    }

    #[tokio::test]
    async fn test_status_reports_queue_depth() {
        let state = test_state(None);
        state
            .queue
            .enqueue(Submission::new("queued".to_string(), Duration::from_secs(1)))
            .unwrap();

        let Json(response) = status(State(state)).await;
        assert_eq!(response.message, "ok");
        assert_eq!(response.queue_size, 1);
    }

    #[tokio::test]
    async fn test_paste_rejects_missing_message_without_enqueue() {
        let state = test_state(None);

        let err = paste(State(state.clone()), Json(request(None, None)))
            .await
            .unwrap_err();
        assert_eq!(err, SubmitError::EmptyMessage);
        assert_eq!(state.queue.len(), 0);
    }

    #[tokio::test]
    async fn test_paste_rejects_empty_message() {
        let state = test_state(None);

        let err = paste(State(state.clone()), Json(request(Some("   "), None)))
            .await
            .unwrap_err();
        assert_eq!(err, SubmitError::EmptyMessage);
        assert_eq!(state.queue.len(), 0);
    }

    #[tokio::test]
    async fn test_paste_rejects_non_positive_delay() {
        let state = test_state(None);

        for bad in [0.0, -1.5, f64::NAN, f64::INFINITY] {
            let err = paste(State(state.clone()), Json(request(Some("hi"), Some(bad))))
                .await
                .unwrap_err();
            assert_eq!(err, SubmitError::InvalidDelay);
        }
        assert_eq!(state.queue.len(), 0);
    }

    #[tokio::test]
    async fn test_paste_rejects_delay_beyond_duration_range() {
        let state = test_state(None);

        for huge in [1e30, f64::MAX] {
            let err = paste(State(state.clone()), Json(request(Some("hi"), Some(huge))))
                .await
                .unwrap_err();
            assert_eq!(err, SubmitError::InvalidDelay);
        }
        assert_eq!(state.queue.len(), 0);
    }

    #[tokio::test]
    async fn test_paste_returns_position_after_insertion() {
        let state = test_state(None);
        let before = state.queue.len();

        let Json(response) = paste(State(state.clone()), Json(request(Some("hi"), None)))
            .await
            .unwrap();
        assert!(response.success);
        assert!(response.queued);
        assert_eq!(response.queue_position, before + 1);
        assert_eq!(
            response.message,
            "Message queued successfully at position 1"
        );

        let Json(second) = paste(State(state), Json(request(Some("again"), None)))
            .await
            .unwrap();
        assert_eq!(second.queue_position, 2);
    }

    #[tokio::test]
    async fn test_paste_uses_default_delay_when_absent() {
        let state = test_state(None);
        paste(State(state.clone()), Json(request(Some("hi"), None)))
            .await
            .unwrap();

        let queued = state
            .queue
            .dequeue(Duration::from_millis(20))
            .await
            .unwrap();
        assert_eq!(queued.chunk_delay, Duration::from_secs_f64(1.5));
    }

    #[tokio::test]
    async fn test_paste_reports_queue_full_on_bounded_queue() {
        let state = test_state(Some(1));
        paste(State(state.clone()), Json(request(Some("first"), None)))
            .await
            .unwrap();

        let err = paste(State(state.clone()), Json(request(Some("second"), None)))
            .await
            .unwrap_err();
        assert_eq!(err, SubmitError::QueueFull);
        assert_eq!(state.queue.len(), 1);
    }
}

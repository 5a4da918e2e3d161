//! Wire types for the HTTP surface.

use serde::{Deserialize, Serialize};

/// Body of `POST /paste`.
#[derive(Debug, Deserialize)]
pub struct PasteRequest {
    /// Text to paste; required and non-empty
    pub message: Option<String>,

    /// Seconds between chunk dispatches; positive, defaults to the
    /// configured pacing delay when absent
    pub delay: Option<f64>,
}

/// Successful response to `POST /paste`.
#[derive(Debug, Serialize, Deserialize)]
pub struct PasteResponse {
    pub success: bool,
    pub queued: bool,
    /// Queue depth right after this submission was inserted
    pub queue_position: usize,
    pub message: String,
}

/// Response to `GET /`.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub message: String,
    pub queue_size: usize,
}

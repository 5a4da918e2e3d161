//! Submission type definitions.

use std::time::Duration;

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// One queued unit of work: a message plus its pacing delay.
///
/// Immutable after creation. Ownership moves from the API handler into the
/// dispatch queue, then to the worker loop, which consumes it once dispatch
/// finishes. A submission is never retried or re-enqueued.
#[derive(Debug, Clone)]
pub struct Submission {
    /// Unique identifier, used for log correlation
    pub id: Uuid,

    /// Non-empty text payload, arbitrary length
    pub message: String,

    /// Pacing delay applied after each chunk dispatch
    pub chunk_delay: Duration,

    /// When this submission was accepted
    pub created_at: DateTime<Utc>,
}

impl Submission {
    /// Create a new submission with the given message and pacing delay.
    pub fn new(message: String, chunk_delay: Duration) -> Self {
        Self {
            id: Uuid::new_v4(),
            message,
            chunk_delay,
            created_at: Utc::now(),
        }
    }
}

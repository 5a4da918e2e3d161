//! The dispatch queue shared between API handlers and the worker loop.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use tokio::sync::Notify;
use tokio::time::Instant;

use crate::error::SubmitError;
use crate::types::Submission;

/// Thread-safe FIFO of pending submissions.
///
/// Many handler tasks enqueue concurrently; exactly one worker task
/// dequeues. Entries are handed off whole and never mutated in place.
/// Unbounded by default, matching the reference behavior; an optional
/// capacity turns enqueue into a rejecting operation when full.
pub struct DispatchQueue {
    pending: Mutex<VecDeque<Submission>>,
    notify: Notify,
    capacity: Option<usize>,
}

impl DispatchQueue {
    /// Create a queue, optionally bounded to `capacity` entries.
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            pending: Mutex::new(VecDeque::new()),
            notify: Notify::new(),
            capacity,
        }
    }

    /// Append a submission at the tail.
    ///
    /// Returns the queue depth after insertion, which doubles as the
    /// caller's queue position. Fails only when a configured capacity
    /// bound is reached.
    pub fn enqueue(&self, submission: Submission) -> Result<usize, SubmitError> {
        let depth = {
            let mut pending = self.lock();
            if let Some(cap) = self.capacity {
                if pending.len() >= cap {
                    return Err(SubmitError::QueueFull);
                }
            }
            pending.push_back(submission);
            pending.len()
        };
        self.notify.notify_one();
        Ok(depth)
    }

    /// Take the head submission, waiting up to `timeout` for one to arrive.
    ///
    /// Returns `None` on timeout so the caller can observe a shutdown
    /// signal between polls; never blocks indefinitely.
    pub async fn dequeue(&self, timeout: Duration) -> Option<Submission> {
        let deadline = Instant::now() + timeout;
        loop {
            // Register for notification before checking, so an enqueue
            // between the check and the await cannot be missed.
            let notified = self.notify.notified();
            if let Some(submission) = self.lock().pop_front() {
                return Some(submission);
            }
            if tokio::time::timeout_at(deadline, notified).await.is_err() {
                return self.lock().pop_front();
            }
        }
    }

    /// Current queue depth.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Whether the queue is currently empty.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, VecDeque<Submission>> {
        // A poisoned lock only means a panic elsewhere; the queue data
        // itself is still consistent.
        self.pending.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Default for DispatchQueue {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(message: &str) -> Submission {
        Submission::new(message.to_string(), Duration::from_millis(1))
    }

    #[tokio::test]
    async fn test_enqueue_reports_depth_after_insertion() {
        let queue = DispatchQueue::new(None);
        assert_eq!(queue.enqueue(submission("a")).unwrap(), 1);
        assert_eq!(queue.enqueue(submission("b")).unwrap(), 2);
        assert_eq!(queue.len(), 2);
    }

    #[tokio::test]
    async fn test_dequeue_is_fifo() {
        let queue = DispatchQueue::new(None);
        queue.enqueue(submission("first")).unwrap();
        queue.enqueue(submission("second")).unwrap();

        let head = queue.dequeue(Duration::from_millis(50)).await.unwrap();
        assert_eq!(head.message, "first");
        let next = queue.dequeue(Duration::from_millis(50)).await.unwrap();
        assert_eq!(next.message, "second");
    }

    #[tokio::test]
    async fn test_dequeue_times_out_on_empty_queue() {
        let queue = DispatchQueue::new(None);
        let result = queue.dequeue(Duration::from_millis(20)).await;
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_dequeue_wakes_on_enqueue() {
        let queue = std::sync::Arc::new(DispatchQueue::new(None));

        let waiter = {
            let queue = queue.clone();
            tokio::spawn(async move { queue.dequeue(Duration::from_secs(5)).await })
        };

        tokio::time::sleep(Duration::from_millis(20)).await;
        queue.enqueue(submission("wake")).unwrap();

        let got = waiter.await.unwrap();
        assert_eq!(got.unwrap().message, "wake");
    }

    #[tokio::test]
    async fn test_bounded_queue_rejects_when_full() {
        let queue = DispatchQueue::new(Some(2));
        queue.enqueue(submission("a")).unwrap();
        queue.enqueue(submission("b")).unwrap();

        let err = queue.enqueue(submission("c")).unwrap_err();
        assert_eq!(err, SubmitError::QueueFull);
        assert_eq!(queue.len(), 2);
    }
}

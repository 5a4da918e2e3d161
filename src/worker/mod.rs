//! The paste worker: sole consumer of the dispatch queue.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::chunker::chunk_message;
use crate::queue::DispatchQueue;
use crate::sink::Sink;
use crate::types::{ServerConfig, Submission};

/// Long-lived task that drains the queue one submission at a time.
///
/// Exactly one worker exists per process; that is what guarantees at most
/// one dispatch is ever in flight, since the sink is a single stateful
/// input target that cannot accept interleaved writes.
pub struct PasteWorker {
    queue: Arc<DispatchQueue>,
    sink: Arc<dyn Sink>,
    max_chars: usize,
    reserved_mention: String,
    poll_timeout: Duration,
}

impl PasteWorker {
    /// Create a new worker over the given queue and sink.
    pub fn new(queue: Arc<DispatchQueue>, sink: Arc<dyn Sink>, config: &ServerConfig) -> Self {
        Self {
            queue,
            sink,
            max_chars: config.max_chars,
            reserved_mention: config.reserved_mention.clone(),
            poll_timeout: config.worker_poll_timeout(),
        }
    }

    /// Run until `shutdown` is cancelled.
    ///
    /// The queue poll is bounded, so cancellation is observed between
    /// polls. A submission already dequeued is dispatched to completion
    /// before the loop exits; there is no mid-submission abort.
    pub async fn run(self, shutdown: CancellationToken) {
        info!(sink = self.sink.name(), "paste worker started");

        while !shutdown.is_cancelled() {
            if let Some(submission) = self.queue.dequeue(self.poll_timeout).await {
                self.dispatch(submission).await;
            }
        }

        info!("paste worker stopped");
    }

    /// Dispatch one submission: chunk it, then send each chunk followed by
    /// the submission's pacing delay.
    ///
    /// Delivery is best-effort: a failed chunk is logged and the remaining
    /// chunks still go out. The caller was answered at enqueue time, so
    /// there is nobody to propagate the error to.
    async fn dispatch(&self, submission: Submission) {
        let chunks = chunk_message(&submission.message, self.max_chars, &self.reserved_mention);

        info!(
            submission = %submission.id,
            chunks = chunks.len(),
            chars = submission.message.chars().count(),
            "dispatching submission"
        );

        let mut sent = 0usize;
        let mut failed = 0usize;

        for chunk in &chunks {
            match self.sink.send(&chunk.text).await {
                Ok(()) => sent += 1,
                Err(e) => {
                    failed += 1;
                    warn!(
                        submission = %submission.id,
                        chunk = chunk.index,
                        total = chunk.total,
                        error = %e,
                        "chunk delivery failed, continuing with remaining chunks"
                    );
                }
            }
            tokio::time::sleep(submission.chunk_delay).await;
        }

        info!(
            submission = %submission.id,
            sent,
            failed,
            "submission dispatch complete"
        );
    }
}

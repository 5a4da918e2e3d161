//! Paste Relay Service Library
//!
//! Accepts text submissions over HTTP, splits them into bounded, word-aligned
//! chunks, and dispatches the chunks one at a time to an input sink with a
//! per-submission pacing delay. Submissions are served strictly in arrival
//! order by a single worker task.

pub mod api;
pub mod chunker;
pub mod error;
pub mod queue;
pub mod sink;
pub mod types;
pub mod worker;

pub use chunker::{chunk_message, Chunk};
pub use error::{SinkError, SubmitError};
pub use queue::DispatchQueue;
pub use sink::{HttpInjectorSink, LogSink, Sink};
pub use types::{ServerConfig, Submission};
pub use worker::PasteWorker;

/// Default maximum characters per dispatched chunk, suffix included
pub const DEFAULT_MAX_CHARS: usize = 100;

/// Default pacing delay between chunk dispatches, in seconds
pub const DEFAULT_CHUNK_DELAY_SECS: f64 = 1.5;

/// Default queue poll timeout for the worker loop, in seconds
pub const DEFAULT_POLL_TIMEOUT_SECS: f64 = 1.0;

/// Default grace period for the worker to drain on shutdown, in seconds
pub const DEFAULT_SHUTDOWN_GRACE_SECS: u64 = 5;

/// Mention handle stripped from the start of a chunk before dispatch
pub const DEFAULT_RESERVED_MENTION: &str = "@GentilRobot";

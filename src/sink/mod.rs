//! The input sink boundary.
//!
//! A sink performs the "type and submit" side effect for one chunk of text.
//! It represents a single shared external resource (one input focus target),
//! so it is only ever driven by the worker loop, one chunk at a time.

mod http_injector;
mod log_sink;

pub use http_injector::HttpInjectorSink;
pub use log_sink::LogSink;

use async_trait::async_trait;

use crate::error::SinkError;

/// The side-effecting target a chunk is delivered to.
#[async_trait]
pub trait Sink: Send + Sync {
    /// Get the name of this sink.
    fn name(&self) -> &'static str;

    /// Deliver one chunk's text to the input target.
    async fn send(&self, text: &str) -> Result<(), SinkError>;
}

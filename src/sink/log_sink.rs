//! Logging sink for dry runs.

use async_trait::async_trait;
use tracing::info;

use super::Sink;
use crate::error::SinkError;

/// Sink that only logs what would be typed.
///
/// Selected when no injector endpoint is configured, so the service can be
/// exercised end to end without touching a real input target.
#[derive(Debug, Default)]
pub struct LogSink;

#[async_trait]
impl Sink for LogSink {
    fn name(&self) -> &'static str {
        "log"
    }

    async fn send(&self, text: &str) -> Result<(), SinkError> {
        info!(chars = text.chars().count(), text, "dry-run dispatch");
        Ok(())
    }
}

//! HTTP client for a remote input injector.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use tracing::debug;

use super::Sink;
use crate::error::SinkError;

/// Sink that forwards chunks to an input-injector endpoint.
///
/// The injector owns the actual clipboard-copy and keystroke side effects;
/// this client tells it what to type and which modifier key activates its
/// paste shortcut on the target platform.
pub struct HttpInjectorSink {
    client: Client,
    base_url: String,
    paste_modifier: String,
}

/// Request payload for one typed chunk.
#[derive(Debug, Serialize)]
struct TypeTextRequest<'a> {
    text: &'a str,
    paste_modifier: &'a str,
}

impl HttpInjectorSink {
    /// Create a new injector client.
    ///
    /// `paste_modifier` is the platform-dependent modifier key for the
    /// paste keystroke ("ctrl" or "command"), resolved from configuration
    /// rather than branched on here.
    pub fn new(base_url: &str, paste_modifier: &str) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
            paste_modifier: paste_modifier.to_string(),
        }
    }

    /// Check if the injector is healthy.
    pub async fn health_check(&self) -> bool {
        let url = format!("{}/health", self.base_url);
        match self.client.get(&url).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}

#[async_trait]
impl Sink for HttpInjectorSink {
    fn name(&self) -> &'static str {
        "http-injector"
    }

    async fn send(&self, text: &str) -> Result<(), SinkError> {
        let url = format!("{}/type", self.base_url);
        let request = TypeTextRequest {
            text,
            paste_modifier: &self.paste_modifier,
        };

        let response = self.client.post(&url).json(&request).send().await?;

        if response.status().is_success() {
            debug!(chars = text.chars().count(), "chunk delivered to injector");
            Ok(())
        } else {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            Err(SinkError::Rejected { status, body })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_creation() {
        let sink = HttpInjectorSink::new("http://localhost:5006", "ctrl");
        assert_eq!(sink.name(), "http-injector");
        assert_eq!(sink.paste_modifier, "ctrl");
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let sink = HttpInjectorSink::new("http://localhost:5006/", "command");
        assert_eq!(sink.base_url, "http://localhost:5006");
    }
}

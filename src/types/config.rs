//! Service configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{
    DEFAULT_CHUNK_DELAY_SECS, DEFAULT_MAX_CHARS, DEFAULT_POLL_TIMEOUT_SECS,
    DEFAULT_RESERVED_MENTION, DEFAULT_SHUTDOWN_GRACE_SECS,
};

/// Global service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port the HTTP listener binds to
    pub port: u16,

    /// Maximum characters per dispatched chunk, suffix included
    pub max_chars: usize,

    /// Default pacing delay between chunks when a request omits one
    pub default_chunk_delay: f64,

    /// How long the worker waits on an empty queue before re-checking shutdown
    pub poll_timeout: f64,

    /// Optional queue capacity; `None` preserves the unbounded reference behavior
    pub queue_capacity: Option<usize>,

    /// Mention handle stripped from the start of chunks before dispatch
    pub reserved_mention: String,

    /// Base URL of the input injector; absent selects the logging sink
    pub injector_url: Option<String>,

    /// Modifier key the sink uses for its paste keystroke
    pub paste_modifier: String,

    /// Seconds to wait before serving, so an operator can focus the target window
    pub warmup_secs: u64,

    /// Seconds to wait for the worker to finish its in-flight submission on shutdown
    pub shutdown_grace_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 5005,
            max_chars: DEFAULT_MAX_CHARS,
            default_chunk_delay: DEFAULT_CHUNK_DELAY_SECS,
            poll_timeout: DEFAULT_POLL_TIMEOUT_SECS,
            queue_capacity: None,
            reserved_mention: DEFAULT_RESERVED_MENTION.to_string(),
            injector_url: None,
            paste_modifier: default_paste_modifier().to_string(),
            warmup_secs: 0,
            shutdown_grace_secs: DEFAULT_SHUTDOWN_GRACE_SECS,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            port: std::env::var("PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5005),
            max_chars: std::env::var("MAX_CHARS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_CHARS),
            default_chunk_delay: std::env::var("DEFAULT_CHUNK_DELAY")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|d: &f64| *d > 0.0)
                .unwrap_or(DEFAULT_CHUNK_DELAY_SECS),
            poll_timeout: std::env::var("QUEUE_POLL_TIMEOUT")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|d: &f64| *d > 0.0)
                .unwrap_or(DEFAULT_POLL_TIMEOUT_SECS),
            queue_capacity: std::env::var("QUEUE_CAPACITY")
                .ok()
                .and_then(|s| s.parse().ok()),
            reserved_mention: std::env::var("RESERVED_MENTION")
                .unwrap_or_else(|_| DEFAULT_RESERVED_MENTION.to_string()),
            injector_url: std::env::var("INJECTOR_URL").ok(),
            paste_modifier: std::env::var("PASTE_MODIFIER")
                .unwrap_or_else(|_| default_paste_modifier().to_string()),
            warmup_secs: std::env::var("WARMUP_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(0),
            shutdown_grace_secs: std::env::var("SHUTDOWN_GRACE_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_SHUTDOWN_GRACE_SECS),
        }
    }

    /// Default pacing delay as a [`Duration`].
    ///
    /// A configured value outside `Duration`'s range falls back to the
    /// built-in default rather than panicking at dispatch time.
    pub fn default_delay(&self) -> Duration {
        Duration::try_from_secs_f64(self.default_chunk_delay)
            .unwrap_or_else(|_| Duration::from_secs_f64(DEFAULT_CHUNK_DELAY_SECS))
    }

    /// Worker poll timeout as a [`Duration`], with the same out-of-range
    /// fallback as [`Self::default_delay`].
    pub fn worker_poll_timeout(&self) -> Duration {
        Duration::try_from_secs_f64(self.poll_timeout)
            .unwrap_or_else(|_| Duration::from_secs_f64(DEFAULT_POLL_TIMEOUT_SECS))
    }
}

/// Paste modifier key for a platform identifier, as used by the input sink.
pub fn paste_modifier_for(platform: &str) -> &'static str {
    match platform {
        "macos" | "ios" => "command",
        _ => "ctrl",
    }
}

/// Paste modifier key for the platform this process runs on.
pub fn default_paste_modifier() -> &'static str {
    paste_modifier_for(std::env::consts::OS)
}

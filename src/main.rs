//! Paste Relay - Main Entry Point
//!
//! HTTP server that queues text submissions and pastes them chunk by chunk
//! into a single input target.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use axum::routing::{get, post};
use axum::Router;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use paste_relay::api::handlers::{self, AppState};
use paste_relay::queue::DispatchQueue;
use paste_relay::sink::{HttpInjectorSink, LogSink, Sink};
use paste_relay::types::ServerConfig;
use paste_relay::worker::PasteWorker;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "paste_relay=info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = ServerConfig::from_env();

    info!("Starting Paste Relay v{}", env!("CARGO_PKG_VERSION"));
    info!("Max chunk length: {} chars", config.max_chars);

    let queue = Arc::new(DispatchQueue::new(config.queue_capacity));

    let sink: Arc<dyn Sink> = match config.injector_url.as_deref() {
        Some(url) => {
            info!(
                injector = url,
                paste_modifier = %config.paste_modifier,
                "using HTTP injector sink"
            );
            Arc::new(HttpInjectorSink::new(url, &config.paste_modifier))
        }
        None => {
            info!("no injector configured, using dry-run logging sink");
            Arc::new(LogSink)
        }
    };

    // The one worker task; its uniqueness is what serializes dispatch.
    let shutdown = CancellationToken::new();
    let worker = PasteWorker::new(queue.clone(), sink, &config);
    let worker_handle = tokio::spawn(worker.run(shutdown.clone()));

    if config.warmup_secs > 0 {
        info!(
            "waiting {}s for the operator to focus the target window",
            config.warmup_secs
        );
        tokio::time::sleep(Duration::from_secs(config.warmup_secs)).await;
    }

    let state = Arc::new(AppState {
        queue,
        config: config.clone(),
    });

    // Build HTTP routes
    let app = Router::new()
        .route("/", get(handlers::status))
        .route("/paste", post(handlers::paste))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    // Start server; failure to bind is fatal
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Let the worker finish its in-flight submission, then move on.
    shutdown.cancel();
    match tokio::time::timeout(
        Duration::from_secs(config.shutdown_grace_secs),
        worker_handle,
    )
    .await
    {
        Ok(joined) => joined?,
        Err(_) => warn!("worker did not drain within the grace period, shutting down anyway"),
    }

    Ok(())
}

/// Resolve when the process receives ctrl-c or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("received ctrl-c, shutting down"),
        _ = terminate => info!("received SIGTERM, shutting down"),
    }
}

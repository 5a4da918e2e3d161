//! HTTP API for the paste relay.

pub mod handlers;

pub use handlers::AppState;

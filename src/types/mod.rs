//! Core type definitions for the paste relay service.

mod api;
mod config;
mod submission;

pub use api::{PasteRequest, PasteResponse, StatusResponse};
pub use config::{default_paste_modifier, paste_modifier_for, ServerConfig};
pub use submission::Submission;

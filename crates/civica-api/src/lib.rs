//! HTTP surface hosting the Civica assistant.
//!
//! Exposes chat, voice, and transcript endpoints over axum so a UI host
//! can drive the conversation loop.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::{create_router, start_server};
pub use state::AppState;

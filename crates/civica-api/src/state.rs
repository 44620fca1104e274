//! Application state shared across all route handlers.

use std::sync::Arc;
use std::time::Instant;

use civica_chat::Assistant;
use civica_speech::SpeechService;

/// Shared application state.
///
/// All fields use `Arc` for cheap cloning across handler tasks; the
/// assistant serializes its own log mutations internally.
#[derive(Clone)]
pub struct AppState {
    /// The session assistant.
    pub assistant: Arc<Assistant>,
    /// Speech input collaborator for the voice endpoint.
    pub speech: Arc<dyn SpeechService>,
    /// Server start time for uptime reporting.
    pub start_time: Instant,
}

impl AppState {
    /// Create a new state around an assistant and speech service.
    pub fn new(assistant: Assistant, speech: Arc<dyn SpeechService>) -> Self {
        Self {
            assistant: Arc::new(assistant),
            speech,
            start_time: Instant::now(),
        }
    }
}

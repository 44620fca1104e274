//! Error types for the conversational engine.

use civica_core::error::CivicaError;

/// Errors from the chat engine.
///
/// Collaborator failures never appear here; they travel as
/// `LookupResult` data and become display text. Only host-level misuse
/// of the orchestrator surfaces as an error.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("message cannot be empty")]
    EmptyMessage,
    #[error("message exceeds maximum length of {0} characters")]
    MessageTooLong(usize),
    #[error("conversation log lock poisoned")]
    LogPoisoned,
}

impl From<ChatError> for CivicaError {
    fn from(err: ChatError) -> Self {
        CivicaError::Chat(err.to_string())
    }
}

//! Session-scoped conversation log.
//!
//! An ordered, append-only sequence of turns; insertion order is display
//! order. The log is owned by the current session and discarded with it.

use civica_core::types::{Role, Turn};

/// Ordered collection of conversation turns.
///
/// Mutable only by [`append`](Self::append) or [`clear`](Self::clear);
/// turns are never edited or removed individually.
#[derive(Debug, Default)]
pub struct ConversationLog {
    turns: Vec<Turn>,
}

impl ConversationLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one turn; O(1), preserves insertion order.
    pub fn append(&mut self, role: Role, text: impl Into<String>) {
        self.turns.push(Turn::new(role, text));
    }

    /// Remove all turns; a subsequent append starts a fresh sequence.
    pub fn clear(&mut self) {
        self.turns.clear();
    }

    /// Read-only view of all turns in insertion order.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Number of turns in the log.
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Whether the log holds no turns.
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================

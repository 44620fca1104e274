//! Renderer-facing transcript view.
//!
//! A host UI needs a stable identity per turn to avoid re-render
//! collisions. Keys are derived deterministically from role, position,
//! and a content hash, so re-rendering the same log always produces the
//! same keys.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use civica_core::types::{Role, Turn};

/// One turn as handed to a transcript renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedTurn {
    /// Deterministic identity: `{role}_{position}_{sha256(text)}`.
    pub key: String,
    /// Display text of the turn.
    pub text: String,
    /// Whether to render as a user message.
    pub is_user: bool,
}

/// Derive the render view for a sequence of turns.
pub fn render(turns: &[Turn]) -> Vec<RenderedTurn> {
    turns
        .iter()
        .enumerate()
        .map(|(index, turn)| RenderedTurn {
            key: turn_key(turn.role, index, &turn.text),
            text: turn.text.clone(),
            is_user: turn.is_user(),
        })
        .collect()
}

fn turn_key(role: Role, index: usize, text: &str) -> String {
    let digest = Sha256::digest(text.as_bytes());
    format!("{}_{}_{}", role.as_str(), index, hex::encode(digest))
}

// =============================================================================
// Tests
// =============================================================================

//! Core domain types shared across Civica crates.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Speaker role for a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

impl Role {
    /// Stable lowercase string form, used in transcript keys and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Bot => "bot",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One message unit in the conversation log.
///
/// Created once and appended; never mutated or deleted individually.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Who spoke.
    pub role: Role,
    /// Display text of the turn.
    pub text: String,
    /// Creation time as epoch seconds.
    pub created_at: i64,
}

impl Turn {
    /// Create a turn stamped with the current local time.
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            created_at: Local::now().timestamp(),
        }
    }

    /// Whether this turn was spoken by the user.
    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

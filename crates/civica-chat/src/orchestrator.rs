//! Assistant orchestrator: central coordinator for one chat session.
//!
//! Validates input, routes it, runs the extract → lookup → format cycle
//! for encyclopedic questions, and appends the resulting turn pair to the
//! session log. One interaction runs to completion before the next; the
//! log mutex additionally serializes appends if a host ever drives
//! interactions concurrently.

use std::sync::{Arc, Mutex};

use civica_core::config::{ChatConfig, CivicaConfig};
use civica_core::types::{Role, Turn};
use civica_lookup::{LookupResult, LookupService};

use crate::error::ChatError;
use crate::extractor;
use crate::formatter::SummaryFormatter;
use crate::router::{QueryKind, ResponseRouter};
use crate::transcript::{self, RenderedTurn};
use crate::ConversationLog;

/// Coordinates routing, lookup, formatting, and the session log.
pub struct Assistant {
    router: ResponseRouter,
    formatter: SummaryFormatter,
    lookup: Arc<dyn LookupService>,
    config: ChatConfig,
    log: Mutex<ConversationLog>,
}

impl Assistant {
    /// Create an assistant for a fresh session.
    pub fn new(config: &CivicaConfig, lookup: Arc<dyn LookupService>) -> Self {
        Self {
            router: ResponseRouter::new(&config.realtime),
            formatter: SummaryFormatter::new(config.chat.max_candidates),
            lookup,
            config: config.chat.clone(),
            log: Mutex::new(ConversationLog::new()),
        }
    }

    /// Handle one typed question and return the bot's answer.
    ///
    /// Runs the full cycle: validate → route → (extract → lookup →
    /// format | dashboard message) → append the user/bot turn pair.
    pub async fn handle_message(&self, input: &str) -> Result<String, ChatError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if input.chars().count() > self.config.max_message_chars {
            return Err(ChatError::MessageTooLong(self.config.max_message_chars));
        }

        let answer = match self.router.classify(input) {
            QueryKind::Realtime => {
                tracing::debug!("Question routed to real-time dashboards");
                self.router.dashboard_message().to_string()
            }
            QueryKind::Encyclopedic => {
                let topic = extractor::extract_topic_or(input, &self.config.default_topic);
                tracing::debug!(topic = %topic, "Topic extracted");

                let result = self
                    .lookup
                    .lookup(&topic, self.config.summary_sentences)
                    .await;
                let link = match &result {
                    LookupResult::Summary(_) => self.lookup.link_for(&topic).await,
                    _ => None,
                };
                self.formatter.format(&topic, &result, link.as_deref())
            }
        };

        // Both appends under one guard so the pair stays adjacent even if
        // the host drives interactions concurrently.
        let mut log = self.log.lock().map_err(|_| ChatError::LogPoisoned)?;
        log.append(Role::User, input);
        log.append(Role::Bot, answer.clone());

        Ok(answer)
    }

    /// Handle one voice interaction given its transcript.
    ///
    /// An empty transcript means the speech collaborator recognized
    /// nothing (or failed); no turns are appended and no answer is
    /// produced.
    pub async fn handle_transcript(&self, transcript: &str) -> Result<Option<String>, ChatError> {
        if transcript.trim().is_empty() {
            tracing::debug!("Empty transcript; skipping interaction");
            return Ok(None);
        }
        self.handle_message(transcript).await.map(Some)
    }

    /// Clear the session's conversation history.
    pub fn clear(&self) -> Result<(), ChatError> {
        self.log.lock().map_err(|_| ChatError::LogPoisoned)?.clear();
        Ok(())
    }

    /// Snapshot of all turns in insertion order.
    pub fn turns(&self) -> Result<Vec<Turn>, ChatError> {
        let log = self.log.lock().map_err(|_| ChatError::LogPoisoned)?;
        Ok(log.turns().to_vec())
    }

    /// Renderer-facing transcript with deterministic per-turn keys.
    pub fn rendered(&self) -> Result<Vec<RenderedTurn>, ChatError> {
        let log = self.log.lock().map_err(|_| ChatError::LogPoisoned)?;
        Ok(transcript::render(log.turns()))
    }

    /// Number of turns currently in the log.
    pub fn turn_count(&self) -> usize {
        self.log.lock().map(|log| log.len()).unwrap_or(0)
    }
}

// =============================================================================
// Tests
// =============================================================================

//! Speech input collaborator.
//!
//! Provides a trait-based abstraction over microphone capture plus
//! speech-to-text, along with a mock implementation for testing and for
//! hosts without an audio backend. The contract deliberately collapses
//! every failure mode (unrecognized speech, service error) into an empty
//! transcript: the caller treats "" as "nothing was said" and appends no
//! turns.

use async_trait::async_trait;

use civica_core::config::SpeechConfig;

// =============================================================================
// Trait
// =============================================================================

/// Service converting one round of microphone audio into text.
///
/// Returns the transcript, or an empty string when nothing could be
/// recognized or the backend failed. Failures are never surfaced to the
/// caller as errors.
#[async_trait]
pub trait SpeechService: Send + Sync {
    /// Capture audio and return its transcription.
    async fn capture(&self) -> String;
}

// =============================================================================
// Mock implementation
// =============================================================================

/// Mock speech service returning a fixed transcript.
///
/// An empty transcript simulates unrecognized speech or a backend error,
/// both of which the real contract collapses to "".
#[derive(Debug, Clone, Default)]
pub struct MockSpeechService {
    transcript: String,
}

impl MockSpeechService {
    /// Create a mock that always "hears" the given text.
    pub fn with_transcript(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
        }
    }

    /// Create a mock that never recognizes anything.
    pub fn unrecognized() -> Self {
        Self::default()
    }

    /// Create the mock the host should use for the given config.
    pub fn from_config(config: &SpeechConfig) -> Self {
        if config.enabled {
            tracing::warn!(
                language = %config.language,
                "No speech backend built in; voice capture will return empty transcripts"
            );
        }
        Self::default()
    }
}

#[async_trait]
impl SpeechService for MockSpeechService {
    async fn capture(&self) -> String {
        tracing::debug!(
            recognized = !self.transcript.is_empty(),
            "Mock speech capture"
        );
        self.transcript.clone()
    }
}

// =============================================================================
// Tests
// =============================================================================

//! Encyclopedia lookup collaborator.
//!
//! Provides the tagged lookup outcome consumed by the summary formatter,
//! a trait-based abstraction over the encyclopedia backend, a MediaWiki
//! Action API client, and a mock implementation for testing without
//! network access.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

pub mod mediawiki;

pub use mediawiki::MediaWikiClient;

// =============================================================================
// LookupResult
// =============================================================================

/// The tagged outcome of an encyclopedia query.
///
/// The formatter's behavior is fully determined by which case occurred, so
/// failures travel as data rather than as errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupResult {
    /// A plain-text article summary.
    Summary(String),
    /// The topic was ambiguous; candidate article titles to suggest.
    Ambiguous(Vec<String>),
    /// No page exists for the topic.
    NotFound,
    /// The lookup itself failed (transport, decode, backend error).
    Failed(String),
}

// =============================================================================
// Trait
// =============================================================================

/// Service answering topic queries against an encyclopedia backend.
///
/// Both operations are infallible by contract: `lookup` folds every
/// failure into [`LookupResult::Failed`], and `link_for` swallows
/// failures into `None`.
#[async_trait]
pub trait LookupService: Send + Sync {
    /// Fetch a summary for `topic`, limited to `sentence_limit` sentences.
    async fn lookup(&self, topic: &str, sentence_limit: usize) -> LookupResult;

    /// Fetch the canonical article URL for `topic`, if one exists.
    async fn link_for(&self, topic: &str) -> Option<String>;
}

// =============================================================================
// Mock implementation
// =============================================================================

/// Mock lookup service returning canned results.
///
/// Counts `lookup` invocations so tests can assert that the real-time
/// routing path never reaches the encyclopedia.
pub struct MockLookupService {
    result: LookupResult,
    link: Option<String>,
    lookup_calls: AtomicUsize,
}

impl MockLookupService {
    /// Create a mock that answers every lookup with `result` and no link.
    pub fn new(result: LookupResult) -> Self {
        Self {
            result,
            link: None,
            lookup_calls: AtomicUsize::new(0),
        }
    }

    /// Attach a canned article link.
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    /// Number of `lookup` calls observed so far.
    pub fn lookup_calls(&self) -> usize {
        self.lookup_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LookupService for MockLookupService {
    async fn lookup(&self, topic: &str, _sentence_limit: usize) -> LookupResult {
        self.lookup_calls.fetch_add(1, Ordering::SeqCst);
        tracing::debug!(topic, "Mock lookup answered");
        self.result.clone()
    }

    async fn link_for(&self, _topic: &str) -> Option<String> {
        self.link.clone()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_canned_result() {
        let mock = MockLookupService::new(LookupResult::Summary("A city.".to_string()));
        let result = mock.lookup("Vijayawada", 8).await;
        assert_eq!(result, LookupResult::Summary("A city.".to_string()));
    }

    #[tokio::test]
    async fn test_mock_counts_lookup_calls() {
        let mock = MockLookupService::new(LookupResult::NotFound);
        assert_eq!(mock.lookup_calls(), 0);
        mock.lookup("a", 8).await;
        mock.lookup("b", 8).await;
        assert_eq!(mock.lookup_calls(), 2);
    }

    #[tokio::test]
    async fn test_mock_link_defaults_to_none() {
        let mock = MockLookupService::new(LookupResult::NotFound);
        assert_eq!(mock.link_for("anything").await, None);
    }

    #[tokio::test]
    async fn test_mock_with_link() {
        let mock = MockLookupService::new(LookupResult::Summary("x".to_string()))
            .with_link("https://en.wikipedia.org/wiki/Smart_city");
        assert_eq!(
            mock.link_for("smart city").await.as_deref(),
            Some("https://en.wikipedia.org/wiki/Smart_city")
        );
        // link_for does not count as a lookup call
        assert_eq!(mock.lookup_calls(), 0);
    }

    #[test]
    fn test_lookup_result_equality() {
        assert_eq!(LookupResult::NotFound, LookupResult::NotFound);
        assert_ne!(
            LookupResult::Summary("a".to_string()),
            LookupResult::Failed("a".to_string())
        );
        assert_eq!(
            LookupResult::Ambiguous(vec!["A".to_string(), "B".to_string()]),
            LookupResult::Ambiguous(vec!["A".to_string(), "B".to_string()])
        );
    }
}

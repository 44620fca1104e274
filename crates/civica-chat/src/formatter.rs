//! Summary formatting for lookup outcomes.
//!
//! Transforms the tagged lookup result into display text. This is a total
//! function over `LookupResult`; it never fails.

use civica_lookup::LookupResult;

/// Formats lookup outcomes into user-visible answers.
pub struct SummaryFormatter {
    /// Maximum disambiguation candidates listed as suggestions.
    pub max_candidates: usize,
}

impl SummaryFormatter {
    /// Create a formatter with the given candidate-list limit.
    pub fn new(max_candidates: usize) -> Self {
        Self { max_candidates }
    }

    /// Combine a lookup result and an optional reference link into the
    /// final display string.
    pub fn format(&self, topic: &str, result: &LookupResult, link: Option<&str>) -> String {
        match result {
            LookupResult::Summary(text) => match link {
                Some(link) => format!("{}\n\nLearn more: {}", text, link),
                None => text.clone(),
            },
            LookupResult::Ambiguous(candidates) => {
                let shown: Vec<&str> = candidates
                    .iter()
                    .take(self.max_candidates)
                    .map(String::as_str)
                    .collect();
                if shown.is_empty() {
                    format!("'{}' is too broad. Try a more specific question.", topic)
                } else {
                    format!("'{}' is too broad. Try one of: {}", topic, shown.join(", "))
                }
            }
            LookupResult::NotFound => {
                format!("No encyclopedia page found for '{}'.", topic)
            }
            LookupResult::Failed(message) => {
                format!("Encyclopedia lookup failed: {}", message)
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

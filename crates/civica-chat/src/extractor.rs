//! Topic extraction from natural-language questions.
//!
//! A pure, stateless decision procedure; rule order matters. Capitalized
//! tokens win because they usually name the place or subject the question
//! is about; otherwise the longest content word stands in; otherwise the
//! fixed default topic.

use std::sync::LazyLock;

use regex::Regex;

/// Topic returned when nothing usable can be extracted.
pub const DEFAULT_TOPIC: &str = "smart city";

// Question-word stop-list for the capitalized-token scan. These start
// sentences capitalized without naming a subject.
static TITLE_STOP_WORDS: &[&str] = &["what", "how", "is", "in"];

// English stop words dropped by the longest-content-word fallback.
static STOP_WORDS: &[&str] = &[
    "a", "an", "the", "is", "are", "was", "were", "am", "be", "been", "being",
    "have", "has", "had", "do", "does", "did", "will", "would", "shall", "should",
    "may", "might", "must", "can", "could", "i", "me", "my", "we", "our", "you",
    "your", "he", "she", "it", "they", "them", "his", "her", "its", "their",
    "what", "which", "who", "whom", "this", "that", "these", "those", "of", "in",
    "to", "for", "with", "on", "at", "from", "by", "about", "as", "into",
    "through", "during", "before", "after", "above", "below", "between", "and",
    "but", "or", "not", "no", "so", "if", "then", "than", "too", "very", "just",
    "also", "up", "out", "all", "any", "some", "how", "when", "where", "why",
];

// Alphabetic runs of at least two characters, scanned over the lowercased
// question.
static TERM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[a-z]{2,}").unwrap());

/// Extract the best-guess topic from a question, falling back to
/// [`DEFAULT_TOPIC`].
pub fn extract_topic(question: &str) -> String {
    extract_topic_or(question, DEFAULT_TOPIC)
}

/// Extract the best-guess topic from a question, falling back to
/// `default_topic` when the question contains only stop words or no
/// alphabetic content at all.
///
/// Rules, in order:
/// 1. The first whitespace token whose alphabetic core starts uppercase
///    and is not a question word, trimmed of surrounding punctuation.
/// 2. The longest non-stop-word term of the lowercased question; ties
///    break to the first-encountered term of maximal length.
/// 3. `default_topic`.
pub fn extract_topic_or(question: &str, default_topic: &str) -> String {
    if let Some(topic) = first_capitalized_token(question) {
        return topic;
    }
    if let Some(topic) = longest_content_term(question) {
        return topic;
    }
    default_topic.to_string()
}

fn first_capitalized_token(question: &str) -> Option<String> {
    for token in question.split_whitespace() {
        let core = token.trim_matches(|c: char| !c.is_alphabetic());
        if core.is_empty() || !core.chars().all(|c| c.is_alphabetic()) {
            continue;
        }
        let starts_upper = core.chars().next().is_some_and(|c| c.is_uppercase());
        if starts_upper && !TITLE_STOP_WORDS.contains(&core.to_lowercase().as_str()) {
            return Some(core.to_string());
        }
    }
    None
}

fn longest_content_term(question: &str) -> Option<String> {
    let lowered = question.to_lowercase();
    let mut best: Option<&str> = None;
    for m in TERM_RE.find_iter(&lowered) {
        let term = m.as_str();
        if STOP_WORDS.contains(&term) {
            continue;
        }
        // Strictly longer only, so the first term of maximal length wins.
        if best.is_none_or(|b| term.len() > b.len()) {
            best = Some(term);
        }
    }
    best.map(str::to_string)
}

// =============================================================================
// Tests
// =============================================================================

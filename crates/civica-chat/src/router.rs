//! Real-time versus encyclopedic query routing.
//!
//! A pure classification step: questions mentioning any configured
//! real-time keyword get a canned message pointing at live dashboards
//! instead of an encyclopedia lookup.

use civica_core::config::RealtimeConfig;

/// How a question should be answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryKind {
    /// Asks for live readings the encyclopedia cannot provide.
    Realtime,
    /// Answerable by an encyclopedia summary.
    Encyclopedic,
}

/// Classifies questions and carries the prebuilt dashboard reply.
pub struct ResponseRouter {
    keywords: Vec<String>,
    dashboard_message: String,
}

impl ResponseRouter {
    /// Build a router from the real-time routing configuration.
    pub fn new(config: &RealtimeConfig) -> Self {
        let mut lines = vec![
            "Real-time data such as air quality is not available from the encyclopedia."
                .to_string(),
            String::new(),
            "For live readings, visit:".to_string(),
        ];
        for dashboard in &config.dashboards {
            lines.push(format!("- {}: {}", dashboard.name, dashboard.url));
        }

        Self {
            keywords: config.keywords.iter().map(|k| k.to_lowercase()).collect(),
            dashboard_message: lines.join("\n"),
        }
    }

    /// Classify a question by substring keyword match on its lowercase form.
    pub fn classify(&self, question: &str) -> QueryKind {
        let lowered = question.to_lowercase();
        if self.keywords.iter().any(|k| lowered.contains(k.as_str())) {
            QueryKind::Realtime
        } else {
            QueryKind::Encyclopedic
        }
    }

    /// The fixed informational message for real-time questions.
    pub fn dashboard_message(&self) -> &str {
        &self.dashboard_message
    }
}

// =============================================================================
// Tests
// =============================================================================

//! MediaWiki Action API client.
//!
//! One query per lookup fetches the plain-text extract, disambiguation
//! marker, canonical URL, and outgoing links for a title, and the response
//! is mapped onto [`LookupResult`]. Transport and decode failures never
//! escape: `lookup` folds them into [`LookupResult::Failed`] and
//! `link_for` swallows them into `None`.

use async_trait::async_trait;
use serde::Deserialize;

use civica_core::config::LookupConfig;
use civica_core::error::{CivicaError, Result};

use crate::{LookupResult, LookupService};

/// The Action API caps `exsentences` at 10.
const MAX_EXTRACT_SENTENCES: usize = 10;

/// How many disambiguation candidates to request per lookup.
const CANDIDATE_LINK_LIMIT: usize = 10;

// =============================================================================
// Response shapes
// =============================================================================

#[derive(Debug, Deserialize)]
struct QueryResponse {
    query: Option<QueryBody>,
}

#[derive(Debug, Deserialize)]
struct QueryBody {
    #[serde(default)]
    pages: Vec<Page>,
}

#[derive(Debug, Deserialize)]
struct Page {
    #[serde(default)]
    missing: bool,
    extract: Option<String>,
    pageprops: Option<PageProps>,
    fullurl: Option<String>,
    #[serde(default)]
    links: Vec<PageLink>,
}

#[derive(Debug, Deserialize)]
struct PageProps {
    // Present (as an empty string) on disambiguation pages.
    disambiguation: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PageLink {
    title: String,
}

impl Page {
    fn is_disambiguation(&self) -> bool {
        self.pageprops
            .as_ref()
            .is_some_and(|p| p.disambiguation.is_some())
    }
}

// =============================================================================
// Client
// =============================================================================

/// Encyclopedia client backed by the MediaWiki Action API.
pub struct MediaWikiClient {
    client: reqwest::Client,
    config: LookupConfig,
}

impl MediaWikiClient {
    /// Build a client with the configured endpoint and user agent.
    pub fn new(config: LookupConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| CivicaError::Lookup(e.to_string()))?;
        Ok(Self { client, config })
    }

    async fn query_page(&self, topic: &str, sentence_limit: usize) -> Result<Option<Page>> {
        let sentences = sentence_limit.clamp(1, MAX_EXTRACT_SENTENCES).to_string();
        let link_limit = CANDIDATE_LINK_LIMIT.to_string();
        let response: QueryResponse = self
            .client
            .get(&self.config.api_endpoint)
            .query(&[
                ("action", "query"),
                ("format", "json"),
                ("formatversion", "2"),
                ("redirects", "1"),
                ("prop", "extracts|pageprops|info|links"),
                ("explaintext", "1"),
                ("exsectionformat", "plain"),
                ("exsentences", sentences.as_str()),
                ("inprop", "url"),
                ("plnamespace", "0"),
                ("pllimit", link_limit.as_str()),
                ("titles", topic),
            ])
            .send()
            .await
            .map_err(|e| CivicaError::Lookup(e.to_string()))?
            .error_for_status()
            .map_err(|e| CivicaError::Lookup(e.to_string()))?
            .json()
            .await
            .map_err(|e| CivicaError::Lookup(e.to_string()))?;

        Ok(response
            .query
            .and_then(|q| q.pages.into_iter().next()))
    }
}

#[async_trait]
impl LookupService for MediaWikiClient {
    async fn lookup(&self, topic: &str, sentence_limit: usize) -> LookupResult {
        let page = match self.query_page(topic, sentence_limit).await {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!(topic, error = %e, "Encyclopedia query failed");
                return LookupResult::Failed(e.to_string());
            }
        };

        let Some(page) = page else {
            return LookupResult::NotFound;
        };
        if page.missing {
            return LookupResult::NotFound;
        }
        if page.is_disambiguation() {
            let candidates: Vec<String> =
                page.links.into_iter().map(|l| l.title).collect();
            tracing::debug!(topic, candidates = candidates.len(), "Topic is ambiguous");
            return LookupResult::Ambiguous(candidates);
        }
        match page.extract {
            Some(extract) if !extract.trim().is_empty() => LookupResult::Summary(extract),
            _ => LookupResult::NotFound,
        }
    }

    async fn link_for(&self, topic: &str) -> Option<String> {
        match self.query_page(topic, 1).await {
            Ok(Some(page)) if !page.missing => page.fullurl,
            Ok(_) => None,
            Err(e) => {
                tracing::debug!(topic, error = %e, "Link fetch failed");
                None
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn page_from_json(json: &str) -> Page {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_client_builds_from_default_config() {
        assert!(MediaWikiClient::new(LookupConfig::default()).is_ok());
    }

    #[test]
    fn test_page_decode_summary() {
        let page = page_from_json(
            r#"{
                "title": "Vijayawada",
                "extract": "Vijayawada is a city in Andhra Pradesh.",
                "fullurl": "https://en.wikipedia.org/wiki/Vijayawada"
            }"#,
        );
        assert!(!page.missing);
        assert!(!page.is_disambiguation());
        assert_eq!(
            page.extract.as_deref(),
            Some("Vijayawada is a city in Andhra Pradesh.")
        );
        assert_eq!(
            page.fullurl.as_deref(),
            Some("https://en.wikipedia.org/wiki/Vijayawada")
        );
    }

    #[test]
    fn test_page_decode_missing() {
        let page = page_from_json(r#"{"title": "Xyzzyplex", "missing": true}"#);
        assert!(page.missing);
    }

    #[test]
    fn test_page_decode_disambiguation_with_links() {
        let page = page_from_json(
            r#"{
                "title": "Mercury",
                "pageprops": {"disambiguation": ""},
                "links": [
                    {"title": "Mercury (planet)"},
                    {"title": "Mercury (element)"}
                ]
            }"#,
        );
        assert!(page.is_disambiguation());
        assert_eq!(page.links.len(), 2);
        assert_eq!(page.links[0].title, "Mercury (planet)");
    }

    #[test]
    fn test_page_without_pageprops_is_not_disambiguation() {
        let page = page_from_json(r#"{"title": "Plain", "extract": "text"}"#);
        assert!(!page.is_disambiguation());
    }

    #[test]
    fn test_query_response_decode_formatversion2() {
        let response: QueryResponse = serde_json::from_str(
            r#"{
                "batchcomplete": true,
                "query": {
                    "pages": [
                        {"title": "Smart city", "extract": "A smart city uses sensors."}
                    ]
                }
            }"#,
        )
        .unwrap();
        let page = response.query.unwrap().pages.into_iter().next().unwrap();
        assert_eq!(page.extract.as_deref(), Some("A smart city uses sensors."));
    }

    #[test]
    fn test_query_response_decode_no_query_body() {
        let response: QueryResponse =
            serde_json::from_str(r#"{"batchcomplete": true}"#).unwrap();
        assert!(response.query.is_none());
    }
}

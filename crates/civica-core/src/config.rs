use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{CivicaError, Result};

/// Top-level configuration for the Civica assistant.
///
/// Loaded from `~/.civica/config.toml` by default. Each section corresponds
/// to one subsystem; every field has a default carrying the assistant's
/// fixed constants, so a missing or partial file still yields a working
/// configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CivicaConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub lookup: LookupConfig,
    #[serde(default)]
    pub speech: SpeechConfig,
    #[serde(default)]
    pub realtime: RealtimeConfig,
    #[serde(default)]
    pub api: ApiConfig,
}

impl Default for CivicaConfig {
    fn default() -> Self {
        Self {
            general: GeneralConfig::default(),
            chat: ChatConfig::default(),
            lookup: LookupConfig::default(),
            speech: SpeechConfig::default(),
            realtime: RealtimeConfig::default(),
            api: ApiConfig::default(),
        }
    }
}

impl CivicaConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: CivicaConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| CivicaError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Chat engine settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Number of sentences requested from the encyclopedia summary.
    pub summary_sentences: usize,
    /// Maximum disambiguation candidates listed in a reply.
    pub max_candidates: usize,
    /// Topic used when extraction yields nothing usable.
    pub default_topic: String,
    /// Maximum accepted message length in characters.
    pub max_message_chars: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            summary_sentences: 8,
            max_candidates: 3,
            default_topic: "smart city".to_string(),
            max_message_chars: 2000,
        }
    }
}

/// Encyclopedia lookup settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// MediaWiki Action API endpoint.
    pub api_endpoint: String,
    /// User-Agent header sent with every request.
    pub user_agent: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            api_endpoint: "https://en.wikipedia.org/w/api.php".to_string(),
            user_agent: format!("civica/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Speech input settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    /// Whether voice capture is offered by the host surface.
    pub enabled: bool,
    /// Recognition language code.
    pub language: String,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            language: "en".to_string(),
        }
    }
}

/// A named external dashboard offering live readings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dashboard {
    pub name: String,
    pub url: String,
}

/// Real-time query routing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RealtimeConfig {
    /// Lowercase keywords that route a question away from encyclopedia lookup.
    pub keywords: Vec<String>,
    /// Dashboards listed in the canned real-time reply.
    pub dashboards: Vec<Dashboard>,
}

impl Default for RealtimeConfig {
    fn default() -> Self {
        Self {
            keywords: vec![
                "air quality".to_string(),
                "pollution".to_string(),
                "aqi".to_string(),
                "temperature".to_string(),
                "weather".to_string(),
            ],
            dashboards: vec![
                Dashboard {
                    name: "AQI India - Vijayawada".to_string(),
                    url: "https://www.aqi.in/dashboard/india/andhra-pradesh/vijayawada"
                        .to_string(),
                },
                Dashboard {
                    name: "IQAir - Vijayawada".to_string(),
                    url: "https://www.iqair.com/india/andhra-pradesh/vijayawada".to_string(),
                },
                Dashboard {
                    name: "CPCB India".to_string(),
                    url: "https://cpcb.nic.in/".to_string(),
                },
            ],
        }
    }
}

/// HTTP API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// API server port.
    pub port: u16,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { port: 3031 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_carries_fixed_constants() {
        let config = CivicaConfig::default();
        assert_eq!(config.chat.summary_sentences, 8);
        assert_eq!(config.chat.max_candidates, 3);
        assert_eq!(config.chat.default_topic, "smart city");
        assert_eq!(config.realtime.keywords.len(), 5);
        assert!(config.realtime.keywords.contains(&"aqi".to_string()));
        assert_eq!(config.realtime.dashboards.len(), 3);
    }

    #[test]
    fn test_default_lookup_endpoint() {
        let config = CivicaConfig::default();
        assert_eq!(config.lookup.api_endpoint, "https://en.wikipedia.org/w/api.php");
        assert!(config.lookup.user_agent.starts_with("civica/"));
    }

    #[test]
    fn test_speech_disabled_by_default() {
        let config = CivicaConfig::default();
        assert!(!config.speech.enabled);
        assert_eq!(config.speech.language, "en");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let toml_str = r#"
            [chat]
            summary_sentences = 4
        "#;
        let config: CivicaConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.chat.summary_sentences, 4);
        // Untouched sections keep their defaults.
        assert_eq!(config.chat.max_candidates, 3);
        assert_eq!(config.realtime.keywords.len(), 5);
        assert_eq!(config.api.port, 3031);
    }

    #[test]
    fn test_empty_toml_is_all_defaults() {
        let config: CivicaConfig = toml::from_str("").unwrap();
        assert_eq!(config.chat.default_topic, "smart city");
        assert_eq!(config.general.log_level, "info");
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = CivicaConfig::default();
        config.chat.max_candidates = 5;
        config.realtime.keywords.push("humidity".to_string());
        config.save(&path).unwrap();

        let loaded = CivicaConfig::load(&path).unwrap();
        assert_eq!(loaded.chat.max_candidates, 5);
        assert_eq!(loaded.realtime.keywords.len(), 6);
        assert_eq!(loaded.chat.summary_sentences, 8);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.toml");
        assert!(CivicaConfig::load(&path).is_err());
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.toml");
        let config = CivicaConfig::load_or_default(&path);
        assert_eq!(config.chat.summary_sentences, 8);
    }

    #[test]
    fn test_load_or_default_on_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "chat = [[[").unwrap();
        let config = CivicaConfig::load_or_default(&path);
        assert_eq!(config.chat.default_topic, "smart city");
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deep").join("config.toml");
        CivicaConfig::default().save(&path).unwrap();
        assert!(path.exists());
    }
}

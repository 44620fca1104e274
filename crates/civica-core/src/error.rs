use thiserror::Error;

/// Top-level error type for the Civica system.
///
/// Each variant wraps a subsystem-specific error. Subsystem crates define
/// their own error types and implement `From<SubsystemError> for CivicaError`
/// so that the `?` operator works seamlessly across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CivicaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Lookup error: {0}")]
    Lookup(String),

    #[error("Speech error: {0}")]
    Speech(String),

    #[error("Chat error: {0}")]
    Chat(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for CivicaError {
    fn from(err: toml::de::Error) -> Self {
        CivicaError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for CivicaError {
    fn from(err: toml::ser::Error) -> Self {
        CivicaError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for CivicaError {
    fn from(err: serde_json::Error) -> Self {
        CivicaError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Civica operations.
pub type Result<T> = std::result::Result<T, CivicaError>;

//! Conversational engine for Civica.
//!
//! Provides topic extraction, real-time-versus-encyclopedic routing,
//! summary formatting, the session conversation log, and the `Assistant`
//! orchestrator that wires them around the lookup collaborator.

pub mod error;
pub mod extractor;
pub mod formatter;
pub mod log;
pub mod orchestrator;
pub mod router;
pub mod transcript;

pub use error::ChatError;
pub use extractor::{extract_topic, DEFAULT_TOPIC};
pub use formatter::SummaryFormatter;
pub use log::ConversationLog;
pub use orchestrator::Assistant;
pub use router::{QueryKind, ResponseRouter};
pub use transcript::{render, RenderedTurn};

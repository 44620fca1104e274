//! Core types, configuration, and errors shared across the Civica crates.

pub mod config;
pub mod error;
pub mod types;

pub use config::CivicaConfig;
pub use error::{CivicaError, Result};
pub use types::{Role, Turn};

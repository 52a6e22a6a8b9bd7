use crate::config::ConfigError;
use thiserror::Error;

/// Errors surfaced by the `lms-data` binary.
///
/// Service calls never produce these; they only cover startup and
/// argument handling.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Usage: {0}")]
    Usage(String),
    #[error("Failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

//! Error types used by the crate.

use galileo::error::GalileoError;
use thiserror::Error;

/// Showcase error type.
#[derive(Debug, Error)]
pub enum ShowcaseError {
    /// Two catalog entries share the same title.
    #[error("duplicate catalog entry title: {0}")]
    DuplicateTitle(String),
    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Config(String),
    /// Error reading the configuration file.
    #[error("failed to read file")]
    FsIo(#[from] std::io::Error),
    /// Error parsing the configuration file.
    #[error("failed to parse configuration: {0}")]
    Json(#[from] serde_json::Error),
    /// Galileo failed to create a map layer.
    #[error("failed to create map layer: {0}")]
    Layer(#[from] GalileoError),
}

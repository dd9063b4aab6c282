//! Error types for selection editing

use thiserror::Error;

/// Main error type for the crate
///
/// Editor operations themselves never fail; these cover data coming in
/// from outside (config files, serialized selections).
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Selection error: {0}")]
    Selection(String),
}

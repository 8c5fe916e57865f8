//! Error types for evgen

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// evgen errors
///
/// Event-case generation itself never fails; these come from loading
/// component API documents and config, and from parsing CLI input.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Spec parse error: {0}")]
    SpecParse(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Unknown framework: {0} (expected Vue(PC), VueNext(PC) or React(PC))")]
    UnknownFramework(String),

    #[error("Unknown test runner: {0} (expected vitest or jest)")]
    UnknownRunner(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_norway::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}

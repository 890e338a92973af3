//! Error types for specport

use thiserror::Error;

/// Main error type for specport
#[derive(Error, Debug)]
pub enum SpecportError {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Spec error: {0}")]
    Spec(String),

    #[error("Workspace error: {0}")]
    Workspace(String),

    /// Remote call answered outside 2xx. The body text is kept verbatim so
    /// failure logging can show the full response detail.
    #[error("{context} failed with status {status}: {body}")]
    Api {
        context: String,
        status: u16,
        body: String,
    },
}

pub type Result<T> = std::result::Result<T, SpecportError>;

use thiserror::Error;

/// Sigcard error types
#[derive(Error, Debug)]
pub enum SigcardError {
    #[error("Cannot determine signature: {0}")]
    Signature(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for sigcard operations
pub type Result<T> = std::result::Result<T, SigcardError>;

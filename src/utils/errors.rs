use thiserror::Error;

/// Main error type for Quill
#[derive(Error, Debug)]
pub enum QuillError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Persistence error: {0}")]
    PersistenceError(String),

    #[error("Clipboard error: {0}")]
    ClipboardError(String),

    #[error("Backend error: {0}")]
    BackendError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("UI error: {0}")]
    UIError(String),
}

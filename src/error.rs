//! Error types for the lipcue pipeline.

/// Top-level error type for timeline generation and ingestion.
#[derive(Debug, thiserror::Error)]
pub enum LipsyncError {
    /// Viseme parse or classification error.
    #[error("viseme error: {0}")]
    Viseme(String),

    /// Timeline invariant violation.
    #[error("timeline error: {0}")]
    Timeline(String),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Wire-format decode error.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, LipsyncError>;

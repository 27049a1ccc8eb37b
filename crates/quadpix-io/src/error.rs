//! Error types for quadpix-io

use thiserror::Error;

/// Errors that can occur while exporting quadtree outputs
#[derive(Debug, Error)]
pub enum IoError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] quadpix_core::Error),

    /// Tree engine error
    #[error("tree error: {0}")]
    Tree(#[from] quadpix_tree::TreeError),

    /// Underlying I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image encode error
    #[error("encode error: {0}")]
    Encode(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for export operations
pub type IoResult<T> = Result<T, IoError>;

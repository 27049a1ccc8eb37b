//! Error types for quadpix-tree

use thiserror::Error;

/// Errors that can occur during quadtree operations
#[derive(Debug, Error)]
pub enum TreeError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] quadpix_core::Error),

    /// Query or render invoked before a successful build
    #[error("no tree built: call build() first")]
    NotBuilt,

    /// Degenerate output dimensions for a render call
    #[error("invalid render size: {width}x{height}")]
    InvalidRenderSize { width: u32, height: u32 },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for quadtree operations
pub type TreeResult<T> = Result<T, TreeError>;

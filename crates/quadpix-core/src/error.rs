//! Error types for quadpix-core
//!
//! Provides a unified error type for the core data structures.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.

use thiserror::Error;

/// quadpix-core error type
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid raster or matrix dimensions
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Input matrix has no rows
    #[error("empty matrix: no cells to process")]
    EmptyMatrix,

    /// Input matrix is not square
    #[error("non-square matrix: {rows} rows, row {row} has {cols} columns")]
    NonSquare { rows: usize, row: usize, cols: usize },

    /// Matrix cell holds a value other than 0 or 1
    #[error("non-binary value {value} at ({x}, {y})")]
    NonBinaryValue { x: u32, y: u32, value: u8 },

    /// Coordinate outside the matrix or raster
    #[error("index out of bounds: ({x}, {y}) in {width}x{height}")]
    IndexOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;

//! Error types for tensor expressions
//!
//! Provides a unified error type for the recoverable failure paths of all
//! tensor-kernels crates. Shape violations between expressions are rejected by
//! the type system and never surface here.

use thiserror::Error;

/// Core error type for tensor construction and checked operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Buffer or operand length does not match the expected element count
    #[error("Size mismatch in {context}: expected {expected} elements, got {actual}")]
    SizeMismatch {
        expected: usize,
        actual: usize,
        context: String,
    },

    /// Multi-index outside the bounds of a shape
    #[error("Index {index:?} out of bounds for shape {dims:?}")]
    IndexOutOfBounds { index: Vec<usize>, dims: Vec<usize> },

    /// Runtime shape validation failed
    #[error("Invalid shape: {0}")]
    InvalidShape(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::SizeMismatch {
            expected,
            actual,
            context: context.to_string(),
        }
    }

    /// Create an error for an out-of-bounds multi-index
    pub fn index_out_of_bounds(index: &[usize], dims: &[usize]) -> Self {
        Self::IndexOutOfBounds {
            index: index.to_vec(),
            dims: dims.to_vec(),
        }
    }

    /// Create an error for a multi-index of the wrong rank
    pub fn rank_mismatch(expected: usize, actual: usize) -> Self {
        Self::InvalidShape(format!(
            "expected a multi-index of rank {expected}, got rank {actual}"
        ))
    }
}

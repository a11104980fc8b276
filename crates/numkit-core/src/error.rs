//! Error types for numeric array helpers
//!
//! Provides a unified error type for all numkit crates.

use thiserror::Error;

/// Core error type for numkit operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Array has the wrong number of dimensions
    #[error("Shape error: expected {expected}-dimensional array, got {actual} dimensions")]
    Shape { expected: usize, actual: usize },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for empty input
    pub fn empty_input() -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for a bucket width that is not a positive finite number
    pub fn invalid_step(step: f64) -> Self {
        Self::InvalidParameter(format!("Step {step} must be positive and finite"))
    }

    /// Create an error for an array with the wrong dimensionality
    pub fn dimension_mismatch(expected: usize, actual: usize) -> Self {
        Self::Shape { expected, actual }
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::Computation(format!("{context} contains NaN or infinite values"))
    }
}

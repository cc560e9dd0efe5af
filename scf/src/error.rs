//! Error types for the chemisorption solver.

use band::BandError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScfError {
    /// Missing, mismatched or out-of-range inputs
    #[error("Validation error: {0}")]
    Validation(String),

    /// A modeling bound that must hold for every valid input was broken
    #[error("Invariant violated: {0}")]
    Invariant(String),

    #[error(transparent)]
    Band(#[from] BandError),
}

impl ScfError {
    pub fn validation(message: impl Into<String>) -> Self {
        ScfError::Validation(message.into())
    }

    pub fn invariant(message: impl Into<String>) -> Self {
        ScfError::Invariant(message.into())
    }
}

pub type Result<T> = std::result::Result<T, ScfError>;

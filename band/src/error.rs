use thiserror::Error;

/// Errors raised while building spectral quantities.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BandError {
    /// Input that cannot be mapped onto the band model
    #[error("Validation error: {0}")]
    Validation(String),
}

impl BandError {
    pub fn validation(message: impl Into<String>) -> Self {
        BandError::Validation(message.into())
    }
}

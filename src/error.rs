//! Error types for the loan-versus-invest advisor

use thiserror::Error;

/// Result type alias for advisor operations
pub type Result<T> = std::result::Result<T, AdvisorError>;

#[derive(Error, Debug)]
pub enum AdvisorError {

    // =============================
    // Input Errors
    // =============================

    /// Out-of-range rate or unrecognized risk tolerance
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Non-numeric text where a rate was expected
    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    // =============================
    // External Library Conversions
    // =============================

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl AdvisorError {
    /// Errors the interactive shell recovers from by asking again
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            AdvisorError::InvalidArgument(_) | AdvisorError::ParseError(_)
        )
    }

    /// Text shown at the console: bare message for input errors
    pub fn user_message(&self) -> String {
        match self {
            AdvisorError::InvalidArgument(msg) | AdvisorError::ParseError(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

//! Error types for name generation.

use thiserror::Error;

/// Errors that can occur while generating or resolving names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NamingError {
    /// A precondition on the call arguments was violated.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A suffix search tried its whole attempt budget without finding a usable name.
    #[error("No usable name for '{base}' after {attempts} attempts")]
    ResourceExhausted { base: String, attempts: usize },

    /// The cancellation token was signalled during a search.
    #[error("Name generation cancelled")]
    Cancelled,
}

impl NamingError {
    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create an exhaustion error for the given base name.
    pub fn exhausted(base: impl Into<String>, attempts: usize) -> Self {
        Self::ResourceExhausted {
            base: base.into(),
            attempts,
        }
    }

    /// Check if this error came from hitting the attempt bound.
    pub fn is_exhausted(&self) -> bool {
        matches!(self, Self::ResourceExhausted { .. })
    }
}

/// Result type for naming operations.
pub type NamingResult<T> = Result<T, NamingError>;

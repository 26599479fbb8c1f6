//! Lattice error types.
//!
//! All failures here are fail-fast construction or parameter errors.
//! "Not enough history yet" is deliberately NOT an error: the spectrum and
//! forecast analyzers return `None` for that case, which callers must treat
//! as a valid, expected outcome.

use thiserror::Error;

/// Errors that can occur while building or mutating an oscillator network.
#[derive(Debug, Error)]
pub enum LatticeError {
    /// Invalid network configuration (rejected before any node is created)
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {value}. {reason}")]
    InvalidParameter {
        /// Parameter name
        name: String,
        /// Parameter value as string
        value: String,
        /// Reason for invalidity
        reason: String,
    },

    /// Referenced node does not exist in the network
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    /// Node phase access or mutation failure
    #[error("Phase error: {0}")]
    PhaseError(String),

    /// A non-finite value reached a computation that must stay finite
    #[error("Numeric error in {operation}: {details}")]
    NumericError {
        /// The operation that produced the value
        operation: String,
        /// Details about the degenerate value
        details: String,
    },
}

/// Result type for lattice operations.
pub type LatticeResult<T> = Result<T, LatticeError>;

impl LatticeError {
    /// Create an invalid parameter error.
    pub fn invalid_param(
        name: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        LatticeError::InvalidParameter {
            name: name.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Check if this error is a configuration problem (fixable by the caller
    /// with different inputs).
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            LatticeError::ConfigError(_) | LatticeError::InvalidParameter { .. }
        )
    }
}

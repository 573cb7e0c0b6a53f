//! Error types for benekli

use thiserror::Error;

/// Result type for benekli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in benekli operations
#[derive(Error, Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Input outside the domain of a conversion (zero divisor, undefined hue)
    #[error("Domain error in {operation}: {reason}")]
    Domain {
        operation: &'static str,
        reason: &'static str,
    },

    /// A computation produced a non-finite value
    #[error("Numeric instability in {operation}: got {value}")]
    NumericInstability { operation: &'static str, value: f64 },

    /// Illuminant name not in the standard table
    #[error("Unknown illuminant: {0}")]
    UnknownIlluminant(String),

    /// Color difference formula name not recognized
    #[error("Unknown color difference formula: {0}")]
    UnknownFormula(String),

    /// Buffer size mismatch
    #[error("Buffer size mismatch: expected {expected}, got {actual}")]
    BufferSize { expected: usize, actual: usize },
}

impl Error {
    pub(crate) const fn domain(operation: &'static str, reason: &'static str) -> Self {
        Self::Domain { operation, reason }
    }
}

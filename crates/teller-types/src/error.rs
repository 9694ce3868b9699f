//! Error types for amount parsing and arithmetic

use thiserror::Error;

/// Errors raised while building or combining amounts
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountError {
    /// Text that does not parse as a decimal number
    #[error("invalid amount: {0}")]
    Invalid(String),

    /// Arithmetic left the representable range
    #[error("amount overflow during arithmetic operation")]
    Overflow,
}

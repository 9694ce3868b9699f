//! Account error types

use teller_types::{AccountId, Amount, AmountError};
use thiserror::Error;

/// Errors raised by account-level operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccountError {
    /// Debit rejected by the account's balance rule. Nothing was changed.
    #[error("Insufficient balance in account {account}: available {available}, requested {requested}")]
    InsufficientAccountBalance {
        account: AccountId,
        available: Amount,
        requested: Amount,
    },

    #[error("Credit line for account {account} must not be negative, got {credit_line}")]
    NegativeCreditLine {
        account: AccountId,
        credit_line: Amount,
    },

    #[error(transparent)]
    Amount(#[from] AmountError),
}

pub type Result<T> = std::result::Result<T, AccountError>;

//! Terminal error types
//!
//! Every variant is an expected, recoverable condition.

use teller_accounts::AccountError;
use teller_types::{AccountId, Amount, AmountError};
use thiserror::Error;

/// Errors returned by terminal operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TerminalError {
    /// The operation needs an authenticated session
    #[error("No account is authenticated")]
    NoActiveSession,

    #[error("Destination account {account} not found")]
    DestinationNotFound { account: AccountId },

    /// The terminal does not hold enough physical cash
    #[error("Insufficient cash in terminal: available {available}, requested {requested}")]
    InsufficientCashReserve { available: Amount, requested: Amount },

    #[error("Invalid amount {amount}: must be greater than zero")]
    InvalidAmount { amount: Amount },

    /// Rejected by the account, e.g. insufficient account balance
    #[error(transparent)]
    Account(#[from] AccountError),

    #[error(transparent)]
    Amount(#[from] AmountError),
}

impl TerminalError {
    /// True when the account's balance rule rejected a debit.
    pub fn is_insufficient_account_balance(&self) -> bool {
        matches!(
            self,
            TerminalError::Account(AccountError::InsufficientAccountBalance { .. })
        )
    }
}

pub type Result<T> = std::result::Result<T, TerminalError>;

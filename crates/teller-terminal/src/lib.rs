//! Teller Terminal - the automated teller controller
//!
//! The [`Terminal`] owns a registry of accounts, a single session slot and a
//! physical cash reserve. It authenticates a user against an account and
//! then deposits, transfers or dispenses cash on that account's behalf.
//!
//! # Invariants
//!
//! 1. At most one account is authenticated at a time
//! 2. Every operation other than authentication and registration needs a
//!    session
//! 3. Cash withdrawal checks the reserve first, then the account, and debits
//!    the reserve only after the account debit succeeded
//! 4. A failed operation leaves no partial change behind
//! 5. The session only names a registered account; replacing that account
//!    closes the session
//!
//! ```
//! use teller_accounts::StandardAccount;
//! use teller_terminal::Terminal;
//! use teller_types::Amount;
//!
//! let mut terminal = Terminal::new(Amount::new(100_000));
//! terminal.register_account(Box::new(StandardAccount::new("123", "Alice", Amount::new(5000))));
//!
//! assert!(terminal.authenticate("123", "Alice"));
//! let outcome = terminal.withdraw_cash(Amount::new(3000)).unwrap();
//! assert!(outcome.is_dispensed());
//! assert_eq!(terminal.cash_reserve(), Amount::new(97_000));
//! ```

pub mod config;
pub mod error;
pub mod session;
pub mod terminal;

pub use config::{ConfigError, LoggingConfig, TerminalConfig};
pub use error::{Result, TerminalError};
pub use session::Session;
pub use terminal::{CashWithdrawal, Terminal};

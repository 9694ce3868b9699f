//! Teller Types - foundation types shared by the account and terminal layers
//!
//! This crate has no dependency on other teller crates. It defines:
//!
//! - `Amount`, a signed fixed-point decimal used for balances, credit lines
//!   and the terminal's cash reserve
//! - `AccountId` and `OwnerName`, the two strings an account is identified by

pub mod amount;
pub mod error;
pub mod identity;

pub use amount::*;
pub use error::*;
pub use identity::*;

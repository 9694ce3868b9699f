//! Teller Accounts - balance-holding accounts and their debit rules
//!
//! Every account implements the [`Account`] capability. Two variants exist:
//!
//! - [`StandardAccount`]: a debit is allowed only while `balance >= amount`
//! - [`CreditLineAccount`]: a debit is allowed while
//!   `balance + credit_line >= amount`, so the balance may go negative down
//!   to `-credit_line`
//!
//! # Invariants
//!
//! 1. Debits are check-then-commit: a rejected debit changes nothing
//! 2. Deposits have no balance rule and fail only on decimal overflow
//! 3. A transfer either debits the source and credits the destination, or
//!    touches neither
//!
//! Accounts know nothing about the terminal that drives them.

pub mod config;
pub mod credit_line;
pub mod error;
pub mod standard;

pub use config::AccountConfig;
pub use credit_line::CreditLineAccount;
pub use error::{AccountError, Result};
pub use standard::StandardAccount;

use std::fmt;

use serde::{Deserialize, Serialize};
use teller_types::{AccountId, Amount, OwnerName};

/// Which balance rule an account follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountKind {
    Standard,
    CreditLine,
}

impl fmt::Display for AccountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccountKind::Standard => write!(f, "standard"),
            AccountKind::CreditLine => write!(f, "credit-line"),
        }
    }
}

/// The account capability.
///
/// The terminal owns accounts as `Box<dyn Account>` and hands a transfer
/// destination over as `&mut dyn Account`.
pub trait Account: fmt::Debug + Send {
    fn id(&self) -> &AccountId;

    fn owner(&self) -> &OwnerName;

    fn balance(&self) -> Amount;

    fn kind(&self) -> AccountKind;

    /// The most this account can be debited right now.
    fn available_funds(&self) -> Amount;

    /// Credit the account.
    ///
    /// There is no balance rule on credits; the only failure is a balance
    /// that would leave the decimal range, which leaves the account unchanged.
    fn deposit(&mut self, amount: Amount) -> Result<()>;

    /// Debit the account if its balance rule allows it.
    fn withdraw(&mut self, amount: Amount) -> Result<()>;

    /// Whether a debit of `amount` would pass the sufficiency check.
    fn can_debit(&self, amount: Amount) -> bool {
        self.available_funds() >= amount
    }

    /// Whether a credit of `amount` fits in the balance.
    fn can_credit(&self, amount: Amount) -> bool {
        self.balance().checked_add(amount).is_ok()
    }

    /// Move `amount` from this account to `destination`.
    ///
    /// The destination's headroom is checked before the source is debited,
    /// and the debit applies the same sufficiency check as `withdraw`. Either
    /// both balances move or neither does.
    fn transfer(&mut self, destination: &mut dyn Account, amount: Amount) -> Result<()> {
        destination.balance().checked_add(amount)?;
        self.withdraw(amount)?;
        destination.deposit(amount)?;
        tracing::debug!(
            from = %self.id(),
            to = %destination.id(),
            amount = %amount,
            "transfer applied"
        );
        Ok(())
    }
}

/// State shared by both account variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Holder {
    pub(crate) id: AccountId,
    pub(crate) owner: OwnerName,
    pub(crate) balance: Amount,
}

impl Holder {
    pub(crate) fn new(id: AccountId, owner: OwnerName, balance: Amount) -> Self {
        Self { id, owner, balance }
    }

    pub(crate) fn credit(&mut self, amount: Amount) -> Result<()> {
        self.balance = self.balance.checked_add(amount)?;
        tracing::debug!(account = %self.id, amount = %amount, balance = %self.balance, "account credited");
        Ok(())
    }

    /// Debit after checking `amount` against `available`.
    pub(crate) fn debit(&mut self, amount: Amount, available: Amount) -> Result<()> {
        if available < amount {
            return Err(AccountError::InsufficientAccountBalance {
                account: self.id.clone(),
                available,
                requested: amount,
            });
        }
        self.balance = self.balance.checked_sub(amount)?;
        tracing::debug!(account = %self.id, amount = %amount, balance = %self.balance, "account debited");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use teller_types::AmountError;

    fn standard(balance: i64) -> StandardAccount {
        StandardAccount::new("123", "Alice", Amount::new(balance))
    }

    fn credit_line(balance: i64, line: i64) -> CreditLineAccount {
        CreditLineAccount::new("789", "Charlie", Amount::new(balance), Amount::new(line)).unwrap()
    }

    #[test]
    fn test_transfer_between_variants() {
        let mut source = credit_line(2000, 5000);
        let mut destination = standard(0);

        source
            .transfer(&mut destination, Amount::new(6000))
            .unwrap();

        assert_eq!(source.balance(), Amount::new(-4000));
        assert_eq!(destination.balance(), Amount::new(6000));
    }

    #[test]
    fn test_failed_transfer_leaves_destination_untouched() {
        let mut source = standard(100);
        let mut destination = standard(50);

        let result = source.transfer(&mut destination, Amount::new(101));

        assert!(matches!(
            result,
            Err(AccountError::InsufficientAccountBalance { .. })
        ));
        assert_eq!(source.balance(), Amount::new(100));
        assert_eq!(destination.balance(), Amount::new(50));
    }

    #[test]
    fn test_accounts_as_trait_objects() {
        let accounts: Vec<Box<dyn Account>> =
            vec![Box::new(standard(10)), Box::new(credit_line(10, 90))];

        let kinds: Vec<AccountKind> = accounts.iter().map(|a| a.kind()).collect();
        assert_eq!(kinds, vec![AccountKind::Standard, AccountKind::CreditLine]);
        assert!(!accounts[0].can_debit(Amount::new(11)));
        assert!(accounts[1].can_debit(Amount::new(100)));
    }

    #[test]
    fn test_transfer_into_full_destination_moves_nothing() {
        let mut source = standard(10);
        let mut destination = StandardAccount::new("456", "Bob", Amount::from_decimal(Decimal::MAX));

        assert!(!destination.can_credit(Amount::new(10)));
        let result = source.transfer(&mut destination, Amount::new(10));

        assert_eq!(result, Err(AccountError::Amount(AmountError::Overflow)));
        assert_eq!(source.balance(), Amount::new(10));
        assert_eq!(destination.balance(), Amount::from_decimal(Decimal::MAX));
    }

    #[test]
    fn test_overflowing_deposit_is_rejected() {
        let max = Amount::from_decimal(Decimal::MAX);
        let mut account = StandardAccount::new("456", "Bob", max);

        let err = account.deposit(Amount::new(1)).unwrap_err();

        assert_eq!(err, AccountError::Amount(AmountError::Overflow));
        assert_eq!(account.balance(), max);
    }

    proptest! {
        #[test]
        fn prop_deposit_adds_exactly(start in -1_000_000i64..1_000_000, amount in -1_000_000i64..1_000_000) {
            let mut account = standard(start);
            account.deposit(Amount::new(amount)).unwrap();
            prop_assert_eq!(account.balance(), Amount::new(start + amount));
        }

        #[test]
        fn prop_standard_withdraw_iff_covered(start in 0i64..1_000_000, amount in 0i64..2_000_000) {
            let mut account = standard(start);
            let result = account.withdraw(Amount::new(amount));
            if amount <= start {
                prop_assert!(result.is_ok());
                prop_assert_eq!(account.balance(), Amount::new(start - amount));
            } else {
                prop_assert!(result.is_err());
                prop_assert_eq!(account.balance(), Amount::new(start));
            }
        }

        #[test]
        fn prop_credit_line_never_below_limit(
            start in 0i64..100_000,
            line in 0i64..100_000,
            amounts in proptest::collection::vec(1i64..50_000, 1..20),
        ) {
            let mut account = credit_line(start, line);
            for amount in amounts {
                let before = account.balance();
                let covered = Amount::new(amount) <= account.available_funds();
                let result = account.withdraw(Amount::new(amount));
                prop_assert_eq!(result.is_ok(), covered);
                if !covered {
                    prop_assert_eq!(account.balance(), before);
                }
                prop_assert!(account.balance() >= -Amount::new(line));
            }
        }

        #[test]
        fn prop_transfer_is_all_or_nothing(
            start in 0i64..10_000,
            peer in 0i64..10_000,
            amount in 0i64..20_000,
        ) {
            let mut source = standard(start);
            let mut destination = StandardAccount::new("456", "Bob", Amount::new(peer));
            let ok = source.transfer(&mut destination, Amount::new(amount)).is_ok();
            if ok {
                prop_assert_eq!(source.balance(), Amount::new(start - amount));
                prop_assert_eq!(destination.balance(), Amount::new(peer + amount));
            } else {
                prop_assert_eq!(source.balance(), Amount::new(start));
                prop_assert_eq!(destination.balance(), Amount::new(peer));
            }
        }
    }
}

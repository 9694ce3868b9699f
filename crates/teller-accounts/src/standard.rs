//! Standard accounts: no overdraft

use teller_types::{AccountId, Amount, OwnerName};

use crate::{Account, AccountKind, Holder, Result};

/// An account whose balance never goes below zero through a debit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StandardAccount {
    holder: Holder,
}

impl StandardAccount {
    pub fn new(id: impl Into<AccountId>, owner: impl Into<OwnerName>, balance: Amount) -> Self {
        Self {
            holder: Holder::new(id.into(), owner.into(), balance),
        }
    }
}

impl Account for StandardAccount {
    fn id(&self) -> &AccountId {
        &self.holder.id
    }

    fn owner(&self) -> &OwnerName {
        &self.holder.owner
    }

    fn balance(&self) -> Amount {
        self.holder.balance
    }

    fn kind(&self) -> AccountKind {
        AccountKind::Standard
    }

    fn available_funds(&self) -> Amount {
        self.holder.balance
    }

    fn deposit(&mut self, amount: Amount) -> Result<()> {
        self.holder.credit(amount)
    }

    fn withdraw(&mut self, amount: Amount) -> Result<()> {
        let available = self.available_funds();
        self.holder.debit(amount, available)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AccountError;

    #[test]
    fn test_deposit_then_withdraw() {
        let mut account = StandardAccount::new("123", "Alice", Amount::new(5000));
        account.deposit(Amount::new(1000)).unwrap();
        assert_eq!(account.balance(), Amount::new(6000));

        account.withdraw(Amount::new(6000)).unwrap();
        assert_eq!(account.balance(), Amount::ZERO);
    }

    #[test]
    fn test_overdraw_rejected() {
        let mut account = StandardAccount::new("456", "Bob", Amount::new(3000));
        let err = account.withdraw(Amount::new(3001)).unwrap_err();

        assert_eq!(
            err,
            AccountError::InsufficientAccountBalance {
                account: AccountId::new("456"),
                available: Amount::new(3000),
                requested: Amount::new(3001),
            }
        );
        assert_eq!(account.balance(), Amount::new(3000));
    }

    #[test]
    fn test_identity_accessors() {
        let account = StandardAccount::new("123", "Alice", Amount::ZERO);
        assert_eq!(account.id().as_str(), "123");
        assert!(account.owner().matches("Alice"));
        assert_eq!(account.kind(), AccountKind::Standard);
    }
}

//! Credit-line accounts: overdraft up to a fixed limit

use teller_types::{AccountId, Amount, OwnerName};

use crate::{Account, AccountError, AccountKind, Holder, Result};

/// An account that may be debited down to `-credit_line`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditLineAccount {
    holder: Holder,
    credit_line: Amount,
}

impl CreditLineAccount {
    /// Create a credit-line account. The credit line must be non-negative.
    pub fn new(
        id: impl Into<AccountId>,
        owner: impl Into<OwnerName>,
        balance: Amount,
        credit_line: Amount,
    ) -> Result<Self> {
        let id = id.into();
        if credit_line.is_negative() {
            return Err(AccountError::NegativeCreditLine {
                account: id,
                credit_line,
            });
        }
        Ok(Self {
            holder: Holder::new(id, owner.into(), balance),
            credit_line,
        })
    }

    pub fn credit_line(&self) -> Amount {
        self.credit_line
    }
}

impl Account for CreditLineAccount {
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
        AccountKind::CreditLine
    }

    fn available_funds(&self) -> Amount {
        Amount::from_decimal(
            self.holder
                .balance
                .as_decimal()
                .saturating_add(self.credit_line.as_decimal()),
        )
    }

    fn deposit(&mut self, amount: Amount) -> Result<()> {
        self.holder.credit(amount)
    }

    fn withdraw(&mut self, amount: Amount) -> Result<()> {
        let available = self.available_funds();
        self.holder.debit(amount, available)
    }
}

//! Declarative account setup
//!
//! Accounts can be listed in terminal configuration. An entry with a
//! `credit_line` becomes a [`CreditLineAccount`], otherwise a
//! [`StandardAccount`].

use serde::{Deserialize, Serialize};
use teller_types::{AccountId, Amount, OwnerName};

use crate::{Account, CreditLineAccount, Result, StandardAccount};

/// One account as it appears in configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountConfig {
    pub id: AccountId,
    pub owner: OwnerName,
    #[serde(default)]
    pub balance: Amount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_line: Option<Amount>,
}

impl AccountConfig {
    pub fn standard(id: &str, owner: &str, balance: i64) -> Self {
        Self {
            id: AccountId::new(id),
            owner: OwnerName::new(owner),
            balance: Amount::new(balance),
            credit_line: None,
        }
    }

    pub fn credit_line(id: &str, owner: &str, balance: i64, credit_line: i64) -> Self {
        Self {
            credit_line: Some(Amount::new(credit_line)),
            ..Self::standard(id, owner, balance)
        }
    }

    /// Build the account this entry describes.
    pub fn into_account(self) -> Result<Box<dyn Account>> {
        match self.credit_line {
            Some(line) => Ok(Box::new(CreditLineAccount::new(
                self.id,
                self.owner,
                self.balance,
                line,
            )?)),
            None => Ok(Box::new(StandardAccount::new(self.id, self.owner, self.balance))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AccountError, AccountKind};

    #[test]
    fn test_builds_variant_from_credit_line_presence() {
        let standard = AccountConfig::standard("123", "Alice", 5000)
            .into_account()
            .unwrap();
        let vip = AccountConfig::credit_line("789", "Charlie", 2000, 5000)
            .into_account()
            .unwrap();

        assert_eq!(standard.kind(), AccountKind::Standard);
        assert_eq!(vip.kind(), AccountKind::CreditLine);
        assert_eq!(vip.available_funds(), Amount::new(7000));
    }

    #[test]
    fn test_deserialize_entry() {
        let entry: AccountConfig = serde_json::from_str(
            r#"{"id": "789", "owner": "Charlie", "balance": 2000, "credit_line": "5000"}"#,
        )
        .unwrap();
        assert_eq!(entry, AccountConfig::credit_line("789", "Charlie", 2000, 5000));

        let bare: AccountConfig =
            serde_json::from_str(r#"{"id": "1", "owner": "Eve"}"#).unwrap();
        assert_eq!(bare.balance, Amount::ZERO);
        assert_eq!(bare.credit_line, None);
    }

    #[test]
    fn test_negative_credit_line_surfaces() {
        let result = AccountConfig::credit_line("9", "Mallory", 0, -10).into_account();
        assert!(matches!(result, Err(AccountError::NegativeCreditLine { .. })));
    }
}

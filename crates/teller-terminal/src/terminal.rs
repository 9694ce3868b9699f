//! The teller terminal
//!
//! A terminal owns every registered account, tracks at most one
//! authenticated session, and holds the physical cash it can dispense.

use std::collections::HashMap;

use teller_accounts::{Account, AccountError};
use teller_types::{AccountId, Amount};
use tracing::{info, warn};

use crate::config::{ConfigError, TerminalConfig};
use crate::error::{Result, TerminalError};
use crate::session::Session;

/// Outcome of a cash withdrawal that passed the session and reserve checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CashWithdrawal {
    /// Cash was handed out and both ledgers were debited
    Dispensed {
        amount: Amount,
        balance: Amount,
        cash_reserve: Amount,
    },
    /// The account refused the debit; no cash left the terminal
    Declined { reason: AccountError },
}

impl CashWithdrawal {
    pub fn is_dispensed(&self) -> bool {
        matches!(self, CashWithdrawal::Dispensed { .. })
    }
}

/// The teller controller
#[derive(Debug)]
pub struct Terminal {
    cash_reserve: Amount,
    accounts: HashMap<AccountId, Box<dyn Account>>,
    session: Session,
}

impl Terminal {
    /// Create a terminal holding `cash_reserve` in physical cash
    pub fn new(cash_reserve: Amount) -> Self {
        Self {
            cash_reserve,
            accounts: HashMap::new(),
            session: Session::Unauthenticated,
        }
    }

    /// Build a terminal and register every configured account
    pub fn from_config(config: &TerminalConfig) -> std::result::Result<Self, ConfigError> {
        config.validate()?;

        let mut terminal = Self::new(config.cash_reserve);
        for entry in &config.accounts {
            terminal.register_account(entry.clone().into_account()?);
        }

        info!(
            cash_reserve = %terminal.cash_reserve,
            accounts = terminal.accounts.len(),
            "Terminal configured"
        );
        Ok(terminal)
    }

    // ========================================================================
    // Session
    // ========================================================================

    /// Open a session for `account_id` if `name` matches its owner exactly.
    ///
    /// On failure the previous session, if any, stays in place. A successful
    /// call replaces any session already open.
    pub fn authenticate(&mut self, account_id: &str, name: &str) -> bool {
        match self.accounts.get(account_id) {
            Some(account) if account.owner().matches(name) => {
                let id = account.id().clone();
                info!(account = %id, "Session authenticated");
                self.session = Session::Authenticated(id);
                true
            }
            _ => {
                warn!(account = %account_id, "Authentication rejected");
                false
            }
        }
    }

    /// Add an account to the registry.
    ///
    /// An account already registered under the same id is replaced and
    /// handed back. Replacing the authenticated account closes the session:
    /// the new account's owner has not authenticated.
    pub fn register_account(&mut self, account: Box<dyn Account>) -> Option<Box<dyn Account>> {
        let id = account.id().clone();
        info!(account = %id, kind = %account.kind(), balance = %account.balance(), "Account registered");

        let previous = self.accounts.insert(id.clone(), account);
        if previous.is_some() {
            warn!(account = %id, "Registration replaced an existing account");
            if self.session.account_id() == Some(&id) {
                warn!(account = %id, "Active account replaced, session closed");
                self.session = Session::Unauthenticated;
            }
        }
        previous
    }

    // ========================================================================
    // Operations on the active account
    // ========================================================================

    /// Balance of the authenticated account
    pub fn check_balance(&self) -> Result<Amount> {
        self.active_account().map(|account| account.balance())
    }

    /// Credit the authenticated account
    pub fn deposit_to_self(&mut self, amount: Amount) -> Result<()> {
        let id = self.active_id()?;
        Self::require_positive(amount)?;

        let account = self.active_account_mut()?;
        account.deposit(amount)?;
        info!(account = %id, amount = %amount, balance = %account.balance(), "Deposit completed");
        Ok(())
    }

    /// Credit another account.
    ///
    /// The authenticated account is not debited.
    pub fn deposit_to_other(&mut self, destination: &str, amount: Amount) -> Result<()> {
        let id = self.active_id()?;
        Self::require_positive(amount)?;

        let target = self
            .accounts
            .get_mut(destination)
            .ok_or_else(|| Self::destination_not_found(destination))?;
        target.deposit(amount)?;
        info!(
            session = %id,
            destination = %destination,
            amount = %amount,
            "Deposit to other account completed"
        );
        Ok(())
    }

    /// Move funds from the authenticated account to another account
    pub fn transfer_to_other(&mut self, destination: &str, amount: Amount) -> Result<()> {
        let id = self.active_id()?;
        Self::require_positive(amount)?;

        if !self.accounts.contains_key(destination) {
            return Err(Self::destination_not_found(destination));
        }

        let result = if id.as_str() == destination {
            // Self-transfer: the debit must still pass, then cancels out.
            let account = self.active_account_mut()?;
            account.withdraw(amount).and_then(|()| account.deposit(amount))
        } else {
            let mut source = self
                .accounts
                .remove(&id)
                .ok_or(TerminalError::NoActiveSession)?;
            let outcome = match self.accounts.get_mut(destination) {
                Some(target) => source.transfer(&mut **target, amount),
                None => Ok(()),
            };
            self.accounts.insert(id.clone(), source);
            outcome
        };

        match result {
            Ok(()) => {
                info!(from = %id, to = %destination, amount = %amount, "Transfer completed");
                Ok(())
            }
            Err(err) => {
                warn!(from = %id, to = %destination, amount = %amount, error = %err, "Transfer rejected");
                Err(err.into())
            }
        }
    }

    /// Dispense cash from the authenticated account.
    ///
    /// The reserve is checked before the account. The reserve is debited only
    /// after the account debit succeeds. An account without enough funds is
    /// reported as [`CashWithdrawal::Declined`], not as an error; any other
    /// account failure is returned as one.
    pub fn withdraw_cash(&mut self, amount: Amount) -> Result<CashWithdrawal> {
        let id = self.active_id()?;
        Self::require_positive(amount)?;

        if self.cash_reserve < amount {
            warn!(
                account = %id,
                available = %self.cash_reserve,
                requested = %amount,
                "Cash withdrawal rejected: terminal reserve too low"
            );
            return Err(TerminalError::InsufficientCashReserve {
                available: self.cash_reserve,
                requested: amount,
            });
        }
        let remaining = self.cash_reserve.checked_sub(amount)?;

        let account = self.active_account_mut()?;
        match account.withdraw(amount) {
            Ok(()) => {
                let balance = account.balance();
                self.cash_reserve = remaining;
                info!(
                    account = %id,
                    amount = %amount,
                    balance = %balance,
                    cash_reserve = %remaining,
                    "Cash dispensed"
                );
                Ok(CashWithdrawal::Dispensed {
                    amount,
                    balance,
                    cash_reserve: remaining,
                })
            }
            Err(reason @ AccountError::InsufficientAccountBalance { .. }) => {
                warn!(account = %id, amount = %amount, error = %reason, "Cash withdrawal declined");
                Ok(CashWithdrawal::Declined { reason })
            }
            Err(err) => {
                warn!(account = %id, amount = %amount, error = %err, "Cash withdrawal failed");
                Err(err.into())
            }
        }
    }

    // ========================================================================
    // Operator and read-only access
    // ========================================================================

    /// Load more physical cash into the terminal. Returns the new reserve.
    pub fn replenish_cash(&mut self, amount: Amount) -> Result<Amount> {
        Self::require_positive(amount)?;
        self.cash_reserve = self.cash_reserve.checked_add(amount)?;
        info!(amount = %amount, cash_reserve = %self.cash_reserve, "Cash reserve replenished");
        Ok(self.cash_reserve)
    }

    pub fn cash_reserve(&self) -> Amount {
        self.cash_reserve
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn active_account_id(&self) -> Option<&AccountId> {
        self.session.account_id()
    }

    pub fn account(&self, id: &str) -> Option<&dyn Account> {
        self.accounts.get(id).map(|account| &**account)
    }

    /// Registered account ids in sorted order
    pub fn account_ids(&self) -> Vec<&AccountId> {
        let mut ids: Vec<&AccountId> = self.accounts.keys().collect();
        ids.sort();
        ids
    }

    pub fn account_count(&self) -> usize {
        self.accounts.len()
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn active_id(&self) -> Result<AccountId> {
        self.session
            .account_id()
            .cloned()
            .ok_or(TerminalError::NoActiveSession)
    }

    // The session only ever names a registered account: accounts are never
    // removed, and replacing the active one closes the session.
    fn active_account(&self) -> Result<&dyn Account> {
        let id = self.session.account_id().ok_or(TerminalError::NoActiveSession)?;
        self.accounts
            .get(id)
            .map(|account| &**account)
            .ok_or(TerminalError::NoActiveSession)
    }

    fn active_account_mut(&mut self) -> Result<&mut Box<dyn Account>> {
        let id = self.session.account_id().ok_or(TerminalError::NoActiveSession)?;
        self.accounts
            .get_mut(id)
            .ok_or(TerminalError::NoActiveSession)
    }

    fn require_positive(amount: Amount) -> Result<()> {
        if amount.is_positive() {
            Ok(())
        } else {
            Err(TerminalError::InvalidAmount { amount })
        }
    }

    fn destination_not_found(destination: &str) -> TerminalError {
        TerminalError::DestinationNotFound {
            account: AccountId::new(destination),
        }
    }
}

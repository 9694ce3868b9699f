//! Terminal configuration
//!
//! Supports config files and environment variables. Layers, lowest priority
//! first: an explicit file, `config/default`, `config/local`, then
//! `TELLER__*` environment variables (e.g. `TELLER__CASH_RESERVE=50000`).

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use teller_accounts::{AccountConfig, AccountError};
use teller_types::{AccountId, Amount};
use thiserror::Error;

/// Errors raised while loading or applying configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid account configuration: {0}")]
    Account(#[from] AccountError),

    #[error("Account {account} is configured more than once")]
    DuplicateAccount { account: AccountId },

    #[error("Cash reserve must not be negative, got {amount}")]
    NegativeCashReserve { amount: Amount },
}

/// Terminal configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TerminalConfig {
    /// Physical cash loaded into the terminal
    #[serde(default = "default_cash_reserve")]
    pub cash_reserve: Amount,

    /// Accounts registered at startup
    #[serde(default)]
    pub accounts: Vec<AccountConfig>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format (json, pretty)
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            cash_reserve: default_cash_reserve(),
            accounts: Vec::new(),
            logging: LoggingConfig::default(),
        }
    }
}

// =============================================================================
// Default Functions
// =============================================================================

fn default_cash_reserve() -> Amount {
    Amount::new(100_000)
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

// =============================================================================
// Configuration Loading
// =============================================================================

impl TerminalConfig {
    /// Load configuration from an optional file, the default locations and
    /// the environment
    pub fn load(config_path: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder();

        if let Some(path) = config_path {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }

        builder = builder
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("TELLER")
                    .separator("__")
                    .try_parsing(true),
            );

        let loaded: TerminalConfig = builder.build()?.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let loaded: TerminalConfig = config::Config::builder()
            .add_source(config::File::from_str(text, config::FileFormat::Toml))
            .build()?
            .try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// The reference setup: 100000 in cash, two standard accounts and one
    /// credit-line account
    pub fn demo() -> Self {
        Self {
            cash_reserve: Amount::new(100_000),
            accounts: vec![
                AccountConfig::standard("123", "Alice", 5000),
                AccountConfig::standard("456", "Bob", 3000),
                AccountConfig::credit_line("789", "Charlie", 2000, 5000),
            ],
            logging: LoggingConfig::default(),
        }
    }

    /// Reject a negative reserve and duplicate account ids
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cash_reserve.is_negative() {
            return Err(ConfigError::NegativeCashReserve {
                amount: self.cash_reserve,
            });
        }

        let mut seen = HashSet::new();
        for entry in &self.accounts {
            if !seen.insert(&entry.id) {
                return Err(ConfigError::DuplicateAccount {
                    account: entry.id.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Terminal;

    #[test]
    fn test_defaults_from_empty_document() {
        let config = TerminalConfig::from_toml("").unwrap();
        assert_eq!(config, TerminalConfig::default());
        assert_eq!(config.cash_reserve, Amount::new(100_000));
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_parse_accounts() {
        let config = TerminalConfig::from_toml(
            r#"
            cash_reserve = 2500

            [logging]
            level = "debug"

            [[accounts]]
            id = "123"
            owner = "Alice"
            balance = 5000

            [[accounts]]
            id = "789"
            owner = "Charlie"
            balance = 2000
            credit_line = 5000
            "#,
        )
        .unwrap();

        assert_eq!(config.cash_reserve, Amount::new(2500));
        assert_eq!(config.logging.level, "debug");
        assert_eq!(
            config.accounts,
            vec![
                AccountConfig::standard("123", "Alice", 5000),
                AccountConfig::credit_line("789", "Charlie", 2000, 5000),
            ]
        );
    }

    #[test]
    fn test_duplicate_account_rejected() {
        let mut config = TerminalConfig::demo();
        config.accounts.push(AccountConfig::standard("456", "Robert", 1));

        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateAccount { account } if account.as_str() == "456"));
        assert!(Terminal::from_config(&config).is_err());
    }

    #[test]
    fn test_negative_reserve_rejected() {
        let err = TerminalConfig::from_toml("cash_reserve = -1").unwrap_err();
        assert!(matches!(err, ConfigError::NegativeCashReserve { .. }));
    }

    #[test]
    fn test_negative_credit_line_rejected_on_build() {
        let mut config = TerminalConfig::demo();
        config.accounts = vec![AccountConfig::credit_line("1", "Eve", 0, -100)];
        assert!(matches!(
            Terminal::from_config(&config),
            Err(ConfigError::Account(AccountError::NegativeCreditLine { .. }))
        ));
    }

    #[test]
    fn test_demo_builds_terminal() {
        let terminal = Terminal::from_config(&TerminalConfig::demo()).unwrap();
        assert_eq!(terminal.account_count(), 3);
        assert_eq!(terminal.cash_reserve(), Amount::new(100_000));
    }
}

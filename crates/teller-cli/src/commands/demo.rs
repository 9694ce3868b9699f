//! Scripted walkthrough of the reference scenario
//!
//! Two standard accounts and one credit-line account; a deposit, a transfer,
//! a successful cash withdrawal, one the terminal cannot cover, and an
//! overdraft withdrawal on the credit line.

use std::io::Write;

use anyhow::Context;
use teller_accounts::Account;
use teller_terminal::{CashWithdrawal, Terminal, TerminalConfig};
use teller_types::Amount;

use crate::display;

pub fn run_demo(out: &mut impl Write) -> anyhow::Result<()> {
    let mut terminal = Terminal::from_config(&TerminalConfig::demo())?;

    display::section(out, "Teller demo")?;
    display::labeled(out, "Cash reserve", &terminal.cash_reserve().to_string())?;

    display::section(out, "Standard account 123")?;
    login(&mut terminal, out, "123", "Alice")?;
    show_balance(&terminal, out)?;

    terminal.deposit_to_self(Amount::new(1000))?;
    display::success(out, "Deposited 1000")?;
    show_balance(&terminal, out)?;

    terminal.transfer_to_other("456", Amount::new(2000))?;
    display::success(out, "Transferred 2000 to 456")?;
    show_balance(&terminal, out)?;
    let peer = terminal
        .account("456")
        .context("account 456 is part of the demo setup")?;
    display::labeled(out, "Balance of 456", &peer.balance().to_string())?;

    withdraw(&mut terminal, out, Amount::new(3000))?;
    withdraw(&mut terminal, out, Amount::new(100_000))?;

    display::section(out, "Credit-line account 789")?;
    login(&mut terminal, out, "789", "Charlie")?;
    show_balance(&terminal, out)?;
    withdraw(&mut terminal, out, Amount::new(6000))?;

    tracing::info!(cash_reserve = %terminal.cash_reserve(), "Demo finished");
    Ok(())
}

fn login(terminal: &mut Terminal, out: &mut impl Write, id: &str, name: &str) -> anyhow::Result<()> {
    if terminal.authenticate(id, name) {
        display::success(out, &format!("Authenticated {} as {}", id, name))?;
        Ok(())
    } else {
        anyhow::bail!("demo account {} did not authenticate as {}", id, name)
    }
}

fn show_balance(terminal: &Terminal, out: &mut impl Write) -> anyhow::Result<()> {
    display::labeled(out, "Balance", &terminal.check_balance()?.to_string())?;
    Ok(())
}

fn withdraw(terminal: &mut Terminal, out: &mut impl Write, amount: Amount) -> anyhow::Result<()> {
    match terminal.withdraw_cash(amount) {
        Ok(CashWithdrawal::Dispensed { balance, cash_reserve, .. }) => {
            display::success(out, &format!("Dispensed {}", amount))?;
            display::labeled(out, "Balance", &balance.to_string())?;
            display::labeled(out, "Cash reserve", &cash_reserve.to_string())?;
        }
        Ok(CashWithdrawal::Declined { reason }) => {
            display::warning(out, &format!("Withdrawal of {} declined: {}", amount, reason))?;
        }
        Err(err) => {
            display::error(out, &format!("Withdrawal of {} failed: {}", amount, err))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_runs_to_completion() {
        let mut out = Vec::new();
        run_demo(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Dispensed 3000"));
        assert!(text.contains("Withdrawal of 100000 failed"));
        assert!(text.contains("-4000"));
        assert!(text.contains("91000"));
    }
}

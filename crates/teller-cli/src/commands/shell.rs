//! Interactive line-oriented console
//!
//! Reads one command per line and runs it against the terminal. A failed
//! command is reported and the shell keeps going.

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::{anyhow, bail};
use teller_accounts::Account;
use teller_terminal::{CashWithdrawal, Terminal};
use teller_types::Amount;

use crate::display;

/// A parsed shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Login { id: String, name: String },
    Balance,
    Deposit { amount: Amount },
    DepositTo { id: String, amount: Amount },
    Transfer { id: String, amount: Amount },
    Withdraw { amount: Amount },
    Reserve,
    Accounts,
    Help,
    Exit,
}

impl FromStr for ShellCommand {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let args: Vec<&str> = line.split_whitespace().collect();
        let Some((&command, rest)) = args.split_first() else {
            bail!("empty command");
        };

        let command = match (command, rest) {
            ("login", [id, name]) => ShellCommand::Login {
                id: id.to_string(),
                name: name.to_string(),
            },
            ("balance", []) => ShellCommand::Balance,
            ("deposit", [amount]) => ShellCommand::Deposit {
                amount: parse_amount(amount)?,
            },
            ("deposit-to", [id, amount]) => ShellCommand::DepositTo {
                id: id.to_string(),
                amount: parse_amount(amount)?,
            },
            ("transfer", [id, amount]) => ShellCommand::Transfer {
                id: id.to_string(),
                amount: parse_amount(amount)?,
            },
            ("withdraw", [amount]) => ShellCommand::Withdraw {
                amount: parse_amount(amount)?,
            },
            ("reserve", []) => ShellCommand::Reserve,
            ("accounts", []) => ShellCommand::Accounts,
            ("help", []) => ShellCommand::Help,
            ("exit" | "quit", []) => ShellCommand::Exit,
            (other, _) => bail!("unknown command or wrong arguments: '{}' (try 'help')", other),
        };
        Ok(command)
    }
}

fn parse_amount(text: &str) -> anyhow::Result<Amount> {
    text.parse::<Amount>().map_err(|err| anyhow!("{}", err))
}

/// Run the shell until `exit` or end of input
pub fn run_shell<R: BufRead, W: Write>(
    terminal: &mut Terminal,
    mut input: R,
    out: &mut W,
) -> anyhow::Result<()> {
    help(out)?;

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<ShellCommand>() {
            Ok(command) => command,
            Err(err) => {
                display::error(out, &err.to_string())?;
                continue;
            }
        };
        tracing::debug!(?command, "Shell command");

        if command == ShellCommand::Exit {
            break;
        }
        if let Err(err) = execute(terminal, command, out) {
            display::error(out, &err.to_string())?;
        }
    }

    writeln!(out, "Bye.")?;
    Ok(())
}

fn execute<W: Write>(terminal: &mut Terminal, command: ShellCommand, out: &mut W) -> anyhow::Result<()> {
    match command {
        ShellCommand::Login { id, name } => {
            if terminal.authenticate(&id, &name) {
                display::success(out, &format!("Authenticated {} as {}", id, name))?;
            } else {
                display::error(out, "Authentication failed")?;
            }
        }
        ShellCommand::Balance => {
            display::labeled(out, "Balance", &terminal.check_balance()?.to_string())?;
        }
        ShellCommand::Deposit { amount } => {
            terminal.deposit_to_self(amount)?;
            display::success(out, &format!("Deposited {}", amount))?;
        }
        ShellCommand::DepositTo { id, amount } => {
            terminal.deposit_to_other(&id, amount)?;
            display::success(out, &format!("Deposited {} to {}", amount, id))?;
        }
        ShellCommand::Transfer { id, amount } => {
            terminal.transfer_to_other(&id, amount)?;
            display::success(out, &format!("Transferred {} to {}", amount, id))?;
        }
        ShellCommand::Withdraw { amount } => match terminal.withdraw_cash(amount)? {
            CashWithdrawal::Dispensed { balance, .. } => {
                display::success(out, &format!("Dispensed {}", amount))?;
                display::labeled(out, "Balance", &balance.to_string())?;
            }
            CashWithdrawal::Declined { reason } => {
                display::warning(out, &format!("Declined: {}", reason))?;
            }
        },
        ShellCommand::Reserve => {
            display::labeled(out, "Cash reserve", &terminal.cash_reserve().to_string())?;
        }
        ShellCommand::Accounts => {
            for id in terminal.account_ids() {
                if let Some(account) = terminal.account(id.as_str()) {
                    writeln!(
                        out,
                        "  {:<10} {:<12} {}",
                        id.as_str(),
                        account.kind().to_string(),
                        account.owner()
                    )?;
                }
            }
        }
        ShellCommand::Help => help(out)?,
        ShellCommand::Exit => {}
    }
    Ok(())
}

fn help<W: Write>(out: &mut W) -> anyhow::Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  login <id> <name>          - authenticate against an account")?;
    writeln!(out, "  balance                    - show the balance of the active account")?;
    writeln!(out, "  deposit <amount>           - deposit into the active account")?;
    writeln!(out, "  deposit-to <id> <amount>   - deposit into another account")?;
    writeln!(out, "  transfer <id> <amount>     - transfer to another account")?;
    writeln!(out, "  withdraw <amount>          - withdraw cash")?;
    writeln!(out, "  reserve                    - show the terminal's cash reserve")?;
    writeln!(out, "  accounts                   - list registered accounts")?;
    writeln!(out, "  exit                       - leave the shell")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use teller_terminal::TerminalConfig;

    fn run(script: &str) -> (Terminal, String) {
        let mut terminal = Terminal::from_config(&TerminalConfig::demo()).unwrap();
        let mut out = Vec::new();
        run_shell(&mut terminal, Cursor::new(script.to_string()), &mut out).unwrap();
        (terminal, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(
            "login 123 Alice".parse::<ShellCommand>().unwrap(),
            ShellCommand::Login {
                id: "123".to_string(),
                name: "Alice".to_string()
            }
        );
        assert_eq!(
            "withdraw 12.5".parse::<ShellCommand>().unwrap(),
            ShellCommand::Withdraw {
                amount: Amount::from_decimal_str("12.5").unwrap()
            }
        );
        assert_eq!("quit".parse::<ShellCommand>().unwrap(), ShellCommand::Exit);
        assert!("deposit lots".parse::<ShellCommand>().is_err());
        assert!("transfer 456".parse::<ShellCommand>().is_err());
        assert!("fly".parse::<ShellCommand>().is_err());
    }

    #[test]
    fn test_session_script() {
        let (terminal, output) = run(
            "login 123 Alice\ndeposit 1000\ntransfer 456 2000\nwithdraw 3000\nbalance\nexit\n",
        );

        assert!(output.contains("Dispensed 3000"));
        assert_eq!(terminal.check_balance().unwrap(), Amount::new(1000));
        assert_eq!(terminal.cash_reserve(), Amount::new(97_000));
    }

    #[test]
    fn test_errors_do_not_stop_the_shell() {
        let (terminal, output) = run("balance\nbogus\nlogin 456 Bob\nwithdraw 9000\nbalance\n");

        assert!(output.contains("No account is authenticated"));
        assert!(output.contains("unknown command"));
        assert!(output.contains("Declined"));
        assert!(output.contains("Bye."));
        assert_eq!(terminal.check_balance().unwrap(), Amount::new(3000));
    }
}

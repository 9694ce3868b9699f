//! Teller CLI - operator console for the automated teller
//!
//! # Usage
//!
//! ```bash
//! # Run the reference scenario
//! teller demo
//!
//! # Drive a terminal interactively with accounts from a config file
//! teller --config teller.toml shell
//!
//! # Environment overrides
//! TELLER__CASH_RESERVE=50000 RUST_LOG=debug teller shell
//! ```

use std::io;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use teller_terminal::{LoggingConfig, Terminal, TerminalConfig};

mod commands;
mod display;

use commands::{demo, shell};

/// Teller - an automated teller terminal
#[derive(Parser, Debug)]
#[command(name = "teller")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to configuration file (TOML, JSON, or YAML)
    #[arg(short, long, global = true, env = "TELLER_CONFIG")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "TELLER_LOG_LEVEL")]
    log_level: Option<String>,

    /// Log format (json, pretty)
    #[arg(long, global = true, env = "TELLER_LOG_FORMAT")]
    log_format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the scripted reference scenario
    Demo,

    /// Read commands from stdin and run them against a terminal
    Shell,
}

fn main() -> anyhow::Result<()> {
    // Load .env if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = TerminalConfig::load(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    if let Some(format) = cli.log_format {
        config.logging.format = format;
    }

    init_logging(&config.logging);
    tracing::debug!(?config, "Configuration loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Demo => demo::run_demo(&mut out)?,
        Commands::Shell => {
            let mut terminal = Terminal::from_config(&config)?;
            if terminal.account_count() == 0 {
                tracing::warn!("No accounts configured; every login will fail");
            }
            shell::run_shell(&mut terminal, io::stdin().lock(), &mut out)?;
        }
    }

    Ok(())
}

/// Initialize tracing/logging
fn init_logging(config: &LoggingConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let subscriber = tracing_subscriber::registry().with(env_filter);

    // Logs go to stderr so they never interleave with console output.
    match config.format.as_str() {
        "json" => {
            subscriber
                .with(fmt::layer().json().with_target(true).with_writer(io::stderr))
                .init();
        }
        _ => {
            subscriber
                .with(fmt::layer().pretty().with_target(true).with_writer(io::stderr))
                .init();
        }
    }
}

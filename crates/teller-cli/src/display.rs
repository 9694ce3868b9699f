//! Display utilities for the CLI

use std::io::{self, Write};

use colored::*;

/// Print a section header
pub fn section(out: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", "━".repeat(60).bright_black())?;
    writeln!(out, " {}", title.bright_white().bold())?;
    writeln!(out, "{}", "━".repeat(60).bright_black())
}

/// Print a success message
pub fn success(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "  {} {}", "✓".bright_green(), message)
}

/// Print an error message
pub fn error(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "  {} {}", "✗".bright_red(), message.bright_red())
}

/// Print a warning message
pub fn warning(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "  {} {}", "⚠".yellow(), message.yellow())
}

/// Print a labeled value
pub fn labeled(out: &mut impl Write, label: &str, value: &str) -> io::Result<()> {
    writeln!(out, "  {}: {}", label.bright_white(), value.bright_cyan())
}

//! Output formatting helpers.

use std::io::{self, Write};

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

const RULE_WIDTH: usize = 50;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a warning message.
pub fn warning(msg: &str) {
    println!("{} {}", "⚠".yellow(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a horizontal rule of `ch`.
pub fn rule(ch: char) {
    println!("{}", ch.to_string().repeat(RULE_WIDTH));
}

/// Overwrite the current line with `msg`, leaving the cursor on it.
pub fn status_line(msg: &str) -> Result<()> {
    print!("   {}\r", msg);
    io::stdout().flush()?;
    Ok(())
}

/// Print a value as compact JSON.
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    println!("{}", json);
    Ok(())
}

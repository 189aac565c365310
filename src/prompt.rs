//! Terminal input collaborator.

use std::io::{self, BufRead, Write};

use anyhow::{bail, Context, Result};
use colored::Colorize;

/// Source of interactive answers.
///
/// The loop only ever needs one line of text at a time; tests substitute
/// a scripted implementation.
pub trait Prompter {
    /// Ask `message` and return one line of input without the trailing
    /// newline.
    fn read_text(&mut self, message: &str) -> Result<String>;
}

/// Prompter backed by stdin/stdout.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for TerminalPrompter {
    fn read_text(&mut self, message: &str) -> Result<String> {
        print!("{} {} ", "?".cyan().bold(), message);
        io::stdout().flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        let bytes = io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Failed to read from terminal")?;
        if bytes == 0 {
            bail!("Input closed");
        }

        // Strip the line terminator only; command matching is exact and
        // must see the rest of the line untouched.
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }

        Ok(line)
    }
}

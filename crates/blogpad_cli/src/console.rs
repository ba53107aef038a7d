//! Console read-line / write-line boundary.
//!
//! # Responsibility
//! - Keep handler code independent of the real tty so tests can
//!   script the interaction.
//!
//! # Invariants
//! - `read_line` strips the trailing newline and reports EOF as `None`.
//! - `write` flushes, so prompts are visible before the blocking read.

use std::io::{self, BufRead, Write};

/// Blocking line-oriented console surface used by all handlers.
pub trait Console {
    /// Writes one line followed by a newline.
    fn write_line(&mut self, text: &str) -> io::Result<()>;
    /// Writes text without a newline and flushes.
    fn write(&mut self, text: &str) -> io::Result<()>;
    /// Reads one line, without its newline. `None` on EOF.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Prints a prompt and reads the reply on the same line.
    fn prompt(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.write(prompt)?;
        self.read_line()
    }
}

/// Console over process stdin/stdout.
pub struct StdConsole;

impl StdConsole {
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    fn write_line(&mut self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.write_all(b"\n")
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(text.as_bytes())?;
        stdout.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}

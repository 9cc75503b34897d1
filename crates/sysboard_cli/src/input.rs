//! Line-oriented prompting helpers.

use std::io::{self, Write};
use thiserror::Error;

/// Errors from interactive input handling.
#[derive(Debug, Error)]
pub enum InputError {
    /// Underlying terminal I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Input stream closed.
    #[error("input stream closed")]
    Eof,
}

/// Prints a prompt and reads one trimmed line from stdin.
pub fn prompt_line(prompt: &str) -> Result<String, InputError> {
    print!("{prompt}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Err(InputError::Eof);
    }
    Ok(line.trim().to_string())
}

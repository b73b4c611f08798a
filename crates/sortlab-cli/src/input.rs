//! Numeric input validation for the menu loop.
//!
//! Prompts are written to stdout, one answer is read from stdin, and the
//! parse distinguishes the three failure modes a classroom user actually
//! hits: not a number, a number too large for the machine type, and a
//! number outside the prompted range. All three are recoverable; the
//! caller reports the message and abandons the current operation.

use std::fmt;
use std::io::{self, BufRead, Write};
use std::num::IntErrorKind;

/// Recoverable input failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The line did not parse as an integer at all.
    NotANumber,

    /// The number does not fit in an i64.
    Overflow,

    /// The number parsed but lies outside the prompted range.
    OutOfRange { min: i64, max: i64 },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotANumber => write!(f, "Error: input is not a number."),
            Self::Overflow => write!(f, "Error: number is too large or too small."),
            Self::OutOfRange { min, max } => {
                write!(f, "Error: number outside range [{min} ... {max}].")
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Prompt for an integer in `[min, max]` (inclusive).
///
/// Returns `Ok(None)` with the message already printed when the answer is
/// invalid; `Err` only for I/O failures on the console itself.
pub fn prompt_number(prompt: &str, min: i64, max: i64) -> io::Result<Option<i64>> {
    print!("{prompt} [{min} ... {max}]: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    match parse_in_range(line.trim(), min, max) {
        Ok(value) => Ok(Some(value)),
        Err(err) => {
            println!("{err}");
            Ok(None)
        }
    }
}

/// Prompt for a 0/1 answer mapped to a bool.
pub fn prompt_flag(prompt: &str) -> io::Result<Option<bool>> {
    Ok(prompt_number(prompt, 0, 1)?.map(|value| value == 1))
}

/// Parse `text` as an i64 constrained to `[min, max]`.
fn parse_in_range(text: &str, min: i64, max: i64) -> Result<i64, InputError> {
    let value: i64 = text.parse().map_err(|err: std::num::ParseIntError| {
        match err.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => InputError::Overflow,
            _ => InputError::NotANumber,
        }
    })?;

    if value < min || value > max {
        return Err(InputError::OutOfRange { min, max });
    }
    Ok(value)
}

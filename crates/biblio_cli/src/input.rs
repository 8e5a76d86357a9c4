//! Line-oriented input helpers.
//!
//! # Responsibility
//! - Collect free-form text and numbers from stdin, parsed to the
//!   primitive types the engine expects.
//!
//! # Invariants
//! - Malformed numbers are re-prompted here; the engine never sees them.
//! - A closed stdin surfaces as an error instead of a busy loop.

use once_cell::sync::Lazy;
use regex::Regex;
use std::io::{self, Write};
use std::str::FromStr;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

/// Prints `label`, reads one line and returns it trimmed.
///
/// # Errors
/// - Propagates I/O failures; end of input is reported as
///   [`io::ErrorKind::UnexpectedEof`].
pub fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
    }
    Ok(line.trim().to_owned())
}

/// Prompts until the answer parses as `T`.
pub fn prompt_parse<T: FromStr>(label: &str) -> io::Result<T> {
    loop {
        match prompt(label)?.parse::<T>() {
            Ok(value) => return Ok(value),
            Err(_) => println!("Invalid number, try again."),
        }
    }
}

/// Prompts for an optional value; an empty answer means "keep current".
pub fn prompt_optional(label: &str) -> io::Result<Option<String>> {
    let line = prompt(label)?;
    Ok((!line.is_empty()).then_some(line))
}

/// Loose shape check for email addresses.
///
/// Presentation-level only; the engine stores whatever it is given.
pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

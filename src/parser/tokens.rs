//  TOKENS.rs
//    by Lut99
//
//  Created:
//    14 Apr 2025, 10:21:44
//  Last edited:
//    17 Apr 2025, 13:50:02
//  Auto updated?
//    Yes
//
//  Description:
//!   Implements the tokenizer for input lines.
//!
//!   The grammar is very strict about whitespace: tokens are separated by
//!   exactly one ASCII space, and a line may neither start nor end with
//!   one.
//

use std::error;
use std::fmt::{Display, Formatter, Result as FResult};


/***** ERRORS *****/
/// Defines errors originating from [`tokenize()`].
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// The line did not use single spaces as separators.
    MalformedWhitespace { line: String, column: usize },
}
impl Display for Error {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult {
        match self {
            Self::MalformedWhitespace { line, column } => {
                write!(f, "Malformed whitespace at column {} in \"{line}\" (tokens must be separated by exactly one space)", column + 1)
            },
        }
    }
}
impl error::Error for Error {}





/***** LIBRARY FUNCTIONS *****/
/// Strips the line terminator (`\n` or `\r\n`) off of a line, if any.
///
/// # Arguments
/// - `line`: The line to strip.
///
/// # Returns
/// The same line without the terminator.
#[inline]
pub fn strip_newline(line: &str) -> &str {
    let line: &str = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Splits a single input line into its space-separated tokens.
///
/// An empty line yields no tokens at all.
///
/// # Arguments
/// - `line`: The line to tokenize. A trailing newline is ignored.
///
/// # Returns
/// The tokens in the line, in order. They borrow from `line`.
///
/// # Errors
/// This function errors with [`Error::MalformedWhitespace`] if the line starts or ends with a
/// space, or if two spaces follow each other anywhere.
pub fn tokenize(line: &str) -> Result<Vec<&str>, Error> {
    let line: &str = strip_newline(line);
    if line.is_empty() {
        return Ok(Vec::new());
    }

    // Find the first offending space, if any
    let column: Option<usize> = if line.starts_with(' ') {
        Some(0)
    } else if let Some(pos) = line.find("  ") {
        Some(pos + 1)
    } else if line.ends_with(' ') {
        Some(line.len() - 1)
    } else {
        None
    };
    if let Some(column) = column {
        return Err(Error::MalformedWhitespace { line: line.into(), column });
    }

    Ok(line.split(' ').collect())
}





/***** TESTS *****/

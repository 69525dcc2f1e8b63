//  MOD.rs
//    by Lut99
//
//  Created:
//    14 Apr 2025, 10:17:08
//  Last edited:
//    17 Apr 2025, 14:02:36
//  Auto updated?
//    Yes
//
//  Description:
//!   Implements the line-level parser for the calculator's input format.
//!
//!   Every line is one directive, identified by its first token:
//!   ```plain
//!   U a b c
//!   S a b
//!   R (a b) (b c)
//!   C union 2 3
//!   ```
//

// Declare appropriate submodules
pub mod tokens;

// Imports
use std::error;
use std::fmt::{Display, Formatter, Result as FResult};

use enum_debug::EnumDebug;


/***** ERRORS *****/
/// Defines errors that occur when [parsing](parse_line()) a line.
#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    /// The line was empty.
    EmptyLine,
    /// Failed to tokenize the line.
    Tokenize { err: tokens::Error },
    /// The line started with something that is not a directive.
    UnknownDirective { tag: String },
}
impl Display for Error {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult {
        match self {
            Self::EmptyLine => write!(f, "Empty line (expected one of 'U', 'S', 'R' or 'C')"),
            Self::Tokenize { .. } => write!(f, "Failed to tokenize line"),
            Self::UnknownDirective { tag } => write!(f, "Unknown directive '{tag}' (expected one of 'U', 'S', 'R' or 'C')"),
        }
    }
}
impl error::Error for Error {
    #[inline]
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::EmptyLine => None,
            Self::Tokenize { err } => Some(err),
            Self::UnknownDirective { .. } => None,
        }
    }
}
impl From<tokens::Error> for Error {
    #[inline]
    fn from(value: tokens::Error) -> Self { Self::Tokenize { err: value } }
}





/***** LIBRARY *****/
/// Defines the four kinds of lines in an input file.
#[derive(Clone, Copy, Debug, EnumDebug, Eq, Hash, PartialEq)]
pub enum Directive {
    /// `U`: defines the universe.
    Universe,
    /// `S`: defines a set.
    Set,
    /// `R`: defines a relation.
    Relation,
    /// `C`: runs a command.
    Command,
}
impl Directive {
    /// Classifies a line by its leading tag.
    ///
    /// Note that matching is exact and case-sensitive.
    ///
    /// # Arguments
    /// - `tag`: The first token of a line.
    ///
    /// # Returns
    /// The matching [`Directive`], or [`None`] if the tag is not known.
    #[inline]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "U" => Some(Self::Universe),
            "S" => Some(Self::Set),
            "R" => Some(Self::Relation),
            "C" => Some(Self::Command),
            _ => None,
        }
    }

    /// Returns the tag that introduces this directive.
    #[inline]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Universe => "U",
            Self::Set => "S",
            Self::Relation => "R",
            Self::Command => "C",
        }
    }
}
impl Display for Directive {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> FResult { write!(f, "{}", self.tag()) }
}



/// A tokenized line, classified by its [`Directive`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Line<'s> {
    /// What kind of line this is.
    pub directive: Directive,
    /// All tokens in the line, _including_ the leading tag.
    pub tokens:    Vec<&'s str>,
}
impl<'s> Line<'s> {
    /// Returns the tokens following the leading tag.
    #[inline]
    pub fn args(&self) -> &[&'s str] { &self.tokens[1..] }
}



/// Parses a single input line.
///
/// # Arguments
/// - `line`: The raw line to parse. A trailing newline is ignored.
///
/// # Returns
/// A [`Line`] that borrows its tokens from `line`.
///
/// # Errors
/// This function errors if the line is empty, has malformed whitespace or does not start with a
/// known directive tag.
pub fn parse_line(line: &str) -> Result<Line<'_>, Error> {
    let tokens: Vec<&str> = tokens::tokenize(line)?;
    let tag: &str = *tokens.first().ok_or(Error::EmptyLine)?;
    match Directive::from_tag(tag) {
        Some(directive) => Ok(Line { directive, tokens }),
        None => Err(Error::UnknownDirective { tag: tag.into() }),
    }
}





/***** TESTS *****/
#[cfg(test)]
mod tests {
    use super::*;


    #[test]
    fn test_parse_line_directives() {
        let line: Line = parse_line("U a b\n").unwrap();
        assert_eq!(line.directive, Directive::Universe);
        assert_eq!(line.args(), &["a", "b"]);

        let line: Line = parse_line("S").unwrap();
        assert_eq!(line.directive, Directive::Set);
        assert!(line.args().is_empty());

        assert_eq!(parse_line("R (a b)").unwrap().directive, Directive::Relation);
        assert_eq!(parse_line("C card 1").unwrap().directive, Directive::Command);
    }

    #[test]
    fn test_parse_line_errors() {
        assert_eq!(parse_line("\n"), Err(Error::EmptyLine));
        assert_eq!(parse_line("X a b"), Err(Error::UnknownDirective { tag: "X".into() }));
        assert_eq!(parse_line("s a"), Err(Error::UnknownDirective { tag: "s".into() }));
        assert!(matches!(parse_line("S a  b"), Err(Error::Tokenize { .. })));
    }
}

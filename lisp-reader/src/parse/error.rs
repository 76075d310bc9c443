//! When parsing a token stream goes wrong.

use crate::error::{at, Location};

/// This type represents the ways turning tokens into forms can fail.
///
/// Locations are only known when the tokens came out of the
/// [lexer](crate::lex); hand-made tokens carry none.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The token stream ended while a list was still open.
    #[error("EOF while parsing a list{}", at(.location))]
    UnexpectedEnd {
        /// Location of the unclosed opening parenthesis.
        location: Option<Location>,
    },

    /// A closing parenthesis without a matching opening one.
    #[error("unmatched closing parenthesis{}", at(.location))]
    UnmatchedClose {
        /// Location of the closing parenthesis.
        location: Option<Location>,
    },

    /// An integer literal outside the range of `i64`.
    #[error("number out of range: {text}{}", at(.location))]
    NumberOutOfRange {
        /// The literal text.
        text: Box<str>,
        /// Location of the literal.
        location: Option<Location>,
    },

    /// Lists nested deeper than the configured limit.
    #[error("recursion limit of {limit} exceeded{}", at(.location))]
    RecursionLimitExceeded {
        /// The configured nesting limit.
        limit: usize,
        /// Location of the opening parenthesis crossing the limit.
        location: Option<Location>,
    },
}

impl ParseError {
    /// Location the error refers to, if known.
    pub fn location(&self) -> Option<Location> {
        match self {
            ParseError::UnexpectedEnd { location }
            | ParseError::UnmatchedClose { location }
            | ParseError::NumberOutOfRange { location, .. }
            | ParseError::RecursionLimitExceeded { location, .. } => *location,
        }
    }
}

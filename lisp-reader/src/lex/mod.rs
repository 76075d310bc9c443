//! Splitting source text into tokens.
//!
//! The tokenizer knows nothing about nesting; it produces a flat stream of
//! parentheses, atoms and reader-macro markers, each tagged with the
//! location of its first character.
//!
//! ```
//! use lisp_reader::lex::{tokenize, Token};
//!
//! let tokens = tokenize("(funcall '+ 1)").unwrap();
//! assert_eq!(
//!     tokens,
//!     vec![
//!         Token::LParen,
//!         Token::atom("funcall"),
//!         Token::QuoteMark,
//!         Token::atom("+"),
//!         Token::atom("1"),
//!         Token::RParen,
//!     ]
//! );
//! ```

use std::fmt::{self, Display};

use tracing::trace;

use crate::error::Location;
use crate::form::Marker;

/// A token of source text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// An opening parenthesis.
    LParen,
    /// A closing parenthesis.
    RParen,
    /// Atom text, as found in the source. Quoted text keeps its quotes.
    Atom(Box<str>),
    /// `'`
    QuoteMark,
    /// `` ` ``
    BackquoteMark,
    /// `,`
    UnquoteMark,
    /// `,@`
    UnquoteSplicingMark,
    /// `#'`
    FunctionMark,
}

impl Token {
    /// Construct an atom token.
    pub fn atom(text: impl Into<Box<str>>) -> Self {
        Token::Atom(text.into())
    }

    /// The reader-macro marker this token stands for, if any.
    pub fn marker(&self) -> Option<Marker> {
        match self {
            Token::QuoteMark => Some(Marker::Quote),
            Token::BackquoteMark => Some(Marker::Quasiquote),
            Token::UnquoteMark => Some(Marker::Unquote),
            Token::UnquoteSplicingMark => Some(Marker::UnquoteSplicing),
            Token::FunctionMark => Some(Marker::Function),
            Token::LParen | Token::RParen | Token::Atom(_) => None,
        }
    }
}

impl From<Marker> for Token {
    fn from(marker: Marker) -> Self {
        match marker {
            Marker::Quote => Token::QuoteMark,
            Marker::Quasiquote => Token::BackquoteMark,
            Marker::Unquote => Token::UnquoteMark,
            Marker::UnquoteSplicing => Token::UnquoteSplicingMark,
            Marker::Function => Token::FunctionMark,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::LParen => f.write_str("("),
            Token::RParen => f.write_str(")"),
            Token::Atom(text) => f.write_str(text),
            marker => match marker.marker() {
                Some(marker) => f.write_str(marker.text()),
                None => Ok(()),
            },
        }
    }
}

/// A token together with where it was found.
///
/// Tokens constructed by hand have no location; the parser accepts them all
/// the same, its errors will just not point into any source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    /// The token.
    pub token: Token,
    /// Location of the token's first character.
    pub location: Option<Location>,
}

impl From<Token> for Lexeme {
    fn from(token: Token) -> Self {
        Lexeme {
            token,
            location: None,
        }
    }
}

/// This type represents the ways tokenizing can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A string literal's opening quote has no matching closing quote.
    #[error("EOF while parsing a string starting at {location}")]
    UnterminatedString {
        /// Location of the opening quote.
        location: Location,
    },
}

impl LexError {
    /// Location the error refers to.
    pub fn location(&self) -> Location {
        match self {
            LexError::UnterminatedString { location } => *location,
        }
    }
}

/// Options to influence tokenizing.
#[derive(Debug, Clone, Default)]
pub struct Options {
    line_comments: bool,
}

impl Options {
    /// Construct the default set of options: `;` is an ordinary character.
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose whether `;` starts a comment that runs to the end of the line.
    pub fn with_line_comments(mut self, enabled: bool) -> Self {
        self.line_comments = enabled;
        self
    }

    /// Query whether line comments are recognized.
    pub fn line_comments(&self) -> bool {
        self.line_comments
    }
}

/// Tokenizer over a string slice.
///
/// The lexer is an iterator over lexemes; it stops after the first error.
pub struct Lexer<'a> {
    input: &'a str,
    /// Byte offset of the next character.
    pos: usize,
    line: usize,
    column: usize,
    failed: bool,
    options: Options,
}

impl<'a> Lexer<'a> {
    /// Create a lexer using the default options.
    pub fn new(input: &'a str) -> Self {
        Lexer::with_options(input, Options::default())
    }

    /// Create a lexer using the given options.
    pub fn with_options(input: &'a str, options: Options) -> Self {
        Lexer {
            input,
            pos: 0,
            line: 1,
            column: 1,
            failed: false,
            options,
        }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn location(&self) -> Location {
        Location::new(self.line, self.column)
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if c.is_whitespace() {
                self.bump();
            } else if c == ';' && self.options.line_comments {
                while let Some(c) = self.bump() {
                    if c == '\n' {
                        break;
                    }
                }
            } else {
                break;
            }
        }
    }

    /// Returns the next lexeme, or `None` at the end of input.
    pub fn next_lexeme(&mut self) -> Result<Option<Lexeme>, LexError> {
        self.skip_whitespace();
        let location = self.location();
        let c = match self.peek() {
            Some(c) => c,
            None => return Ok(None),
        };
        let token = match c {
            '(' => {
                self.bump();
                Token::LParen
            }
            ')' => {
                self.bump();
                Token::RParen
            }
            '\'' => {
                self.bump();
                Token::QuoteMark
            }
            '`' => {
                self.bump();
                Token::BackquoteMark
            }
            ',' => {
                self.bump();
                if self.peek() == Some('@') {
                    self.bump();
                    Token::UnquoteSplicingMark
                } else {
                    Token::UnquoteMark
                }
            }
            '#' if self.rest().starts_with("#'") => {
                self.bump();
                self.bump();
                Token::FunctionMark
            }
            '"' => self.string(location)?,
            _ => self.atom(),
        };
        trace!(%token, line = location.line(), column = location.column(), "token");
        Ok(Some(Lexeme {
            token,
            location: Some(location),
        }))
    }

    /// Assumes the next character is a double quote. Consumes the text up to
    /// and including the next unescaped double quote.
    fn string(&mut self, location: Location) -> Result<Token, LexError> {
        let start = self.pos;
        self.bump();
        let mut escaped = false;
        while let Some(c) = self.bump() {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                return Ok(Token::atom(&self.input[start..self.pos]));
            }
        }
        Err(LexError::UnterminatedString { location })
    }

    /// Consumes a maximal run of atom characters. The next character must
    /// not terminate an atom.
    fn atom(&mut self) -> Token {
        let start = self.pos;
        while let Some(c) = self.peek() {
            let terminates = c.is_whitespace()
                || matches!(c, '(' | ')' | '"' | '\'' | '`' | ',')
                || (c == ';' && self.options.line_comments)
                || (c == '#' && self.rest().starts_with("#'"));
            if terminates {
                break;
            }
            self.bump();
        }
        Token::atom(&self.input[start..self.pos])
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Result<Lexeme, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        match self.next_lexeme() {
            Ok(lexeme) => lexeme.map(Ok),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

impl<'a> std::iter::FusedIterator for Lexer<'a> {}

/// Tokenize source text, keeping token locations, using the given options.
pub fn lex_custom(text: &str, options: Options) -> Result<Vec<Lexeme>, LexError> {
    Lexer::with_options(text, options).collect()
}

/// Tokenize source text, keeping token locations.
pub fn lex(text: &str) -> Result<Vec<Lexeme>, LexError> {
    lex_custom(text, Options::default())
}

/// Tokenize source text.
///
/// Fails if a string literal is not closed before the end of the input.
///
/// ```
/// use lisp_reader::lex::{tokenize, LexError};
///
/// let err = tokenize("(print \"oops)").unwrap_err();
/// assert!(matches!(err, LexError::UnterminatedString { .. }));
/// ```
pub fn tokenize(text: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(text)
        .map(|lexeme| lexeme.map(|lexeme| lexeme.token))
        .collect()
}

#[cfg(test)]
mod tests;

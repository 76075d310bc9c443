//! Turning tokens into forms.
//!
//! The parser is a recursive-descent parser over a stream of
//! [lexemes](crate::lex::Lexeme). It is the only place where parentheses turn
//! into nesting. Reader-macro markers are *not* expanded here: each marker
//! token becomes a [`Marker`](crate::Marker) atom at the position it occurred,
//! a sibling of its operand. Use [`expand`](crate::expand) (or
//! [`read`](crate::read), which does everything in one go) to get rid of them.
//!
//! ```
//! use lisp_reader::{parse, Form, Marker};
//!
//! let program = parse::from_str("(funcall 'a 1 2)").unwrap();
//! assert_eq!(
//!     program,
//!     vec![Form::list(vec![
//!         Form::symbol("funcall"),
//!         Form::marker(Marker::Quote),
//!         Form::symbol("a"),
//!         Form::integer(1),
//!         Form::integer(2),
//!     ])]
//! );
//! ```

use std::iter::Peekable;

use tracing::debug;

use crate::error::Location;
use crate::form::{Atom, AtomKind, Form, Marker, Program};
use crate::lex::{self, Lexeme, Token};

#[doc(inline)]
pub use self::error::ParseError;

/// Nesting depth accepted by default.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Parser for token streams.
///
/// This type, given a stream of lexemes, provides the [`parse`] method,
/// which reads a single top-level form, and [`parse_program`], which reads
/// all of them.
///
/// [`parse`]: Parser::parse
/// [`parse_program`]: Parser::parse_program
pub struct Parser<I>
where
    I: Iterator<Item = Lexeme>,
{
    lexemes: Peekable<I>,
    remaining_depth: usize,
    options: Options,
}

/// Various options to influence parser behavior.
#[derive(Debug, Clone)]
pub struct Options {
    max_depth: usize,
}

impl Options {
    /// Construct the default set of options.
    pub fn new() -> Self {
        Options {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set how deeply lists may nest before parsing fails with
    /// [`ParseError::RecursionLimitExceeded`].
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Query the nesting limit.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}

impl Default for Options {
    fn default() -> Self {
        Options::new()
    }
}

impl<I> Parser<I>
where
    I: Iterator<Item = Lexeme>,
{
    /// Create a parser reading from a stream of lexemes.
    pub fn new(lexemes: I) -> Self {
        Parser::with_options(lexemes, Options::default())
    }

    /// Create a customized parser reading from a stream of lexemes.
    pub fn with_options(lexemes: I, options: Options) -> Self {
        Parser {
            lexemes: lexemes.peekable(),
            remaining_depth: options.max_depth,
            options,
        }
    }

    /// Returns true if no tokens are left.
    pub fn is_at_end(&mut self) -> bool {
        self.lexemes.peek().is_none()
    }

    /// Parse a single top-level form.
    ///
    /// If the end of input is encountered, this will return `Ok(None)`,
    /// otherwise, if parsing succeeded, `Ok(Some(form))`.
    ///
    /// ```
    /// # use lisp_reader::{lex, parse::Parser, Form};
    /// let mut parser = Parser::new(lex::lex("x (y)").unwrap().into_iter());
    /// assert_eq!(parser.parse().unwrap(), Some(Form::symbol("x")));
    /// assert_eq!(parser.parse().unwrap(), Some(Form::list(vec![Form::symbol("y")])));
    /// assert_eq!(parser.parse().unwrap(), None);
    /// ```
    pub fn parse(&mut self) -> Result<Option<Form>, ParseError> {
        match self.lexemes.next() {
            Some(lexeme) => self.parse_lexeme(lexeme).map(Some),
            None => Ok(None),
        }
    }

    /// Parse a single form, which is expected to be present.
    ///
    /// Fails with [`ParseError::UnexpectedEnd`] when called at the end of
    /// input.
    pub fn parse_form(&mut self) -> Result<Form, ParseError> {
        self.parse()?.ok_or(ParseError::UnexpectedEnd { location: None })
    }

    /// Parse top-level forms until the token stream is exhausted.
    ///
    /// The first error aborts parsing; no partial program is returned.
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut program = Vec::new();
        while let Some(form) = self.parse()? {
            program.push(form);
        }
        debug!(forms = program.len(), "parsed program");
        Ok(program)
    }

    fn parse_lexeme(&mut self, lexeme: Lexeme) -> Result<Form, ParseError> {
        let Lexeme { token, location } = lexeme;
        match token {
            Token::LParen => {
                if self.remaining_depth == 0 {
                    return Err(ParseError::RecursionLimitExceeded {
                        limit: self.options.max_depth,
                        location,
                    });
                }
                self.remaining_depth -= 1;
                let ret = self.parse_list_elements(location);
                self.remaining_depth += 1;
                ret
            }
            Token::RParen => Err(ParseError::UnmatchedClose { location }),
            Token::Atom(text) => parse_atom(text, location),
            Token::QuoteMark => Ok(Form::marker(Marker::Quote)),
            Token::BackquoteMark => Ok(Form::marker(Marker::Quasiquote)),
            Token::UnquoteMark => Ok(Form::marker(Marker::Unquote)),
            Token::UnquoteSplicingMark => Ok(Form::marker(Marker::UnquoteSplicing)),
            Token::FunctionMark => Ok(Form::marker(Marker::Function)),
        }
    }

    fn parse_list_elements(&mut self, open: Option<Location>) -> Result<Form, ParseError> {
        let mut elements = Vec::new();
        loop {
            match self.lexemes.next() {
                Some(Lexeme {
                    token: Token::RParen,
                    ..
                }) => return Ok(Form::List(elements)),
                Some(lexeme) => elements.push(self.parse_lexeme(lexeme)?),
                None => return Err(ParseError::UnexpectedEnd { location: open }),
            }
        }
    }
}

fn parse_atom(text: Box<str>, location: Option<Location>) -> Result<Form, ParseError> {
    match AtomKind::of(&text) {
        AtomKind::Integer => match text.parse::<i64>() {
            Ok(n) => Ok(Form::integer(n)),
            Err(_) => Err(ParseError::NumberOutOfRange { text, location }),
        },
        AtomKind::Text => Ok(Form::Atom(Atom::Text(text))),
        AtomKind::Symbol => Ok(Form::Atom(Atom::Symbol(text))),
    }
}

/// Parse a token sequence into a program, without expanding reader macros.
///
/// Accepts plain [`Token`]s as well as [`Lexeme`]s; the latter make for
/// errors pointing into the source text.
///
/// ```
/// use lisp_reader::lex::Token;
/// use lisp_reader::parse::{parse, ParseError};
///
/// let err = parse(vec![Token::RParen]).unwrap_err();
/// assert_eq!(err, ParseError::UnmatchedClose { location: None });
/// ```
pub fn parse<T, L>(tokens: T) -> Result<Program, ParseError>
where
    T: IntoIterator<Item = L>,
    L: Into<Lexeme>,
{
    parse_custom(tokens, Options::default())
}

/// Parse a token sequence into a program using the given options.
pub fn parse_custom<T, L>(tokens: T, options: Options) -> Result<Program, ParseError>
where
    T: IntoIterator<Item = L>,
    L: Into<Lexeme>,
{
    Parser::with_options(tokens.into_iter().map(Into::<Lexeme>::into), options).parse_program()
}

/// Tokenize and parse source text using the given options, without expanding
/// reader macros.
pub fn from_str_custom(
    text: &str,
    lex_options: lex::Options,
    options: Options,
) -> crate::Result<Program> {
    let lexemes = lex::lex_custom(text, lex_options)?;
    Ok(parse_custom(lexemes, options)?)
}

/// Tokenize and parse source text, without expanding reader macros.
///
/// ```
/// # use lisp_reader::{parse, Form};
/// let program = parse::from_str("(define x 3)\n(+ x 4)").unwrap();
/// assert_eq!(program.len(), 2);
/// assert_eq!(program[1].to_string(), "(+ x 4)");
/// ```
pub fn from_str(text: &str) -> crate::Result<Program> {
    from_str_custom(text, lex::Options::default(), Options::default())
}

mod error;

#[cfg(test)]
mod tests;

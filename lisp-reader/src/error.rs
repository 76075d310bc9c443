//! When reading goes wrong.
//!
//! Each stage of the reader reports failures with its own error type:
//! [`LexError`], [`ParseError`] and [`ExpandError`]. The composed entry
//! points, such as [`read`](crate::read), unify these into [`Error`].

use std::error;
use std::fmt::{self, Debug, Display};
use std::io;
use std::result;

use crate::expand::ExpandError;
use crate::lex::LexError;
use crate::parse::ParseError;

/// This type represents the possible errors when reading source text.
pub struct Error {
    /// Boxed to keep `Result<Program, Error>` small.
    err: Box<ErrorCode>,
}

/// Alias for a `Result` with the error type `lisp_reader::Error`.
pub type Result<T> = result::Result<T, Error>;

/// Location of a token in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Location {
    line: usize,
    column: usize,
}

impl Location {
    pub(crate) fn new(line: usize, column: usize) -> Self {
        Location { line, column }
    }

    /// One-based line number.
    ///
    /// Characters in the first line of the input (before the first newline
    /// character) are in line 1.
    pub fn line(&self) -> usize {
        self.line
    }

    /// One-based column number, counted in characters.
    ///
    /// The first character in the input and any characters immediately
    /// following a newline character are in column 1.
    pub fn column(&self) -> usize {
        self.column
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {} column {}", self.line, self.column)
    }
}

impl Error {
    /// Location of the error in the input text, if known.
    ///
    /// Expansion errors never carry a location, as the expander works on
    /// trees that no longer remember where they came from.
    pub fn location(&self) -> Option<Location> {
        match &*self.err {
            ErrorCode::Io(_) | ErrorCode::Expand(_) => None,
            ErrorCode::Lex(err) => Some(err.location()),
            ErrorCode::Parse(err) => err.location(),
        }
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Io` - failure to read bytes from an IO stream
    /// - `Category::Syntax` - input that can never be completed into valid source text
    /// - `Category::Eof` - unexpected end of the input data
    /// - `Category::Expand` - a reader macro that could not be expanded
    pub fn classify(&self) -> Category {
        match &*self.err {
            ErrorCode::Io(_) => Category::Io,
            ErrorCode::Lex(LexError::UnterminatedString { .. }) => Category::Eof,
            ErrorCode::Parse(ParseError::UnexpectedEnd { .. }) => Category::Eof,
            ErrorCode::Parse(ParseError::UnmatchedClose { .. })
            | ErrorCode::Parse(ParseError::NumberOutOfRange { .. })
            | ErrorCode::Parse(ParseError::RecursionLimitExceeded { .. }) => Category::Syntax,
            ErrorCode::Expand(_) => Category::Expand,
        }
    }

    /// Returns true if this error was caused by a failure to read bytes on an
    /// IO stream.
    pub fn is_io(&self) -> bool {
        self.classify() == Category::Io
    }

    /// Returns true if this error was caused by input that is not
    /// syntactically valid.
    pub fn is_syntax(&self) -> bool {
        self.classify() == Category::Syntax
    }

    /// Returns true if this error was caused by prematurely reaching the end
    /// of the input data.
    ///
    /// Callers that process interactive input may want to prompt for more
    /// input and try again.
    pub fn is_eof(&self) -> bool {
        self.classify() == Category::Eof
    }

    /// Returns true if this error was raised while expanding reader macros.
    pub fn is_expand(&self) -> bool {
        self.classify() == Category::Expand
    }

    /// The tokenizer error behind this error, if any.
    pub fn as_lex(&self) -> Option<&LexError> {
        match &*self.err {
            ErrorCode::Lex(err) => Some(err),
            _ => None,
        }
    }

    /// The parser error behind this error, if any.
    pub fn as_parse(&self) -> Option<&ParseError> {
        match &*self.err {
            ErrorCode::Parse(err) => Some(err),
            _ => None,
        }
    }

    /// The expander error behind this error, if any.
    pub fn as_expand(&self) -> Option<&ExpandError> {
        match &*self.err {
            ErrorCode::Expand(err) => Some(err),
            _ => None,
        }
    }

    fn new(code: ErrorCode) -> Self {
        Error {
            err: Box::new(code),
        }
    }
}

/// Categorizes the cause of a `lisp_reader::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The error was caused by a failure to read bytes from an input source.
    Io,

    /// The error was caused by input that is not syntactically valid.
    Syntax,

    /// The error was caused by prematurely reaching the end of the input data.
    Eof,

    /// The error was caused by a reader macro without an operand, or by
    /// nesting too deep to expand.
    Expand,
}

pub(crate) enum ErrorCode {
    /// Some IO error occurred while reading the input.
    Io(io::Error),

    /// The input could not be tokenized.
    Lex(LexError),

    /// The token stream did not form a program.
    Parse(ParseError),

    /// A reader macro could not be expanded.
    Expand(ExpandError),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::new(ErrorCode::Io(err))
    }
}

impl From<LexError> for Error {
    fn from(err: LexError) -> Self {
        Error::new(ErrorCode::Lex(err))
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Error::new(ErrorCode::Parse(err))
    }
}

impl From<ExpandError> for Error {
    fn from(err: ExpandError) -> Self {
        Error::new(ErrorCode::Expand(err))
    }
}

impl From<Error> for io::Error {
    /// Convert a `lisp_reader::Error` into an `io::Error`.
    ///
    /// Syntax and expansion errors are turned into `InvalidData` IO errors.
    /// EOF errors are turned into `UnexpectedEof` IO errors.
    fn from(l: Error) -> Self {
        if let ErrorCode::Io(err) = *l.err {
            err
        } else {
            match l.classify() {
                Category::Eof => io::Error::new(io::ErrorKind::UnexpectedEof, l),
                _ => io::Error::new(io::ErrorKind::InvalidData, l),
            }
        }
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCode::Io(err) => Display::fmt(err, f),
            ErrorCode::Lex(err) => Display::fmt(err, f),
            ErrorCode::Parse(err) => Display::fmt(err, f),
            ErrorCode::Expand(err) => Display::fmt(err, f),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match &*self.err {
            ErrorCode::Io(err) => Some(err),
            ErrorCode::Lex(err) => Some(err),
            ErrorCode::Parse(err) => Some(err),
            ErrorCode::Expand(err) => Some(err),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&*self.err, f)
    }
}

// Remove a layer of verbosity from the debug representation. Humans often end
// up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(loc) = self.location() {
            write!(
                f,
                "Error({:?}, line: {}, column: {})",
                self.err.to_string(),
                loc.line,
                loc.column,
            )
        } else {
            write!(f, "Error({:?})", self.err.to_string())
        }
    }
}

/// Renders an optional location as a message suffix.
pub(crate) struct At(pub Option<Location>);

impl Display for At {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(loc) => write!(f, " at {}", loc),
            None => Ok(()),
        }
    }
}

pub(crate) fn at(location: &Option<Location>) -> At {
    At(*location)
}

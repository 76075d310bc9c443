//! Reading source text into expanded programs.

use std::io;

use tracing::instrument;

use crate::error::Result;
use crate::form::Program;
use crate::{expand, lex, parse};

/// Options for all stages of reading.
#[derive(Debug, Clone, Default)]
pub struct Options {
    lex: lex::Options,
    parse: parse::Options,
    expand: expand::Options,
}

impl Options {
    /// Construct the default set of options for every stage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tokenizer options.
    pub fn with_lex_options(mut self, options: lex::Options) -> Self {
        self.lex = options;
        self
    }

    /// Set the parser options.
    pub fn with_parse_options(mut self, options: parse::Options) -> Self {
        self.parse = options;
        self
    }

    /// Set the expander options.
    pub fn with_expand_options(mut self, options: expand::Options) -> Self {
        self.expand = options;
        self
    }

    /// Query the tokenizer options.
    pub fn lex_options(&self) -> &lex::Options {
        &self.lex
    }

    /// Query the parser options.
    pub fn parse_options(&self) -> &parse::Options {
        &self.parse
    }

    /// Query the expander options.
    pub fn expand_options(&self) -> &expand::Options {
        &self.expand
    }
}

/// Read source text into an expanded program, using the given options.
///
/// ```
/// use lisp_reader::{expand::{self, QuasiquoteTag}, Options};
///
/// let options = Options::new()
///     .with_expand_options(expand::Options::new().with_quasiquote(QuasiquoteTag::Quasiquote));
/// let program = lisp_reader::read_custom("`(a ,b)", &options).unwrap();
/// assert_eq!(program[0].to_string(), "(quasiquote (a (unquote b)))");
/// ```
#[instrument(level = "debug", skip_all, fields(len = text.len()))]
pub fn read_custom(text: &str, options: &Options) -> Result<Program> {
    let raw = parse::from_str_custom(text, options.lex.clone(), options.parse.clone())?;
    Ok(expand::expand_program_custom(raw, options.expand.clone())?)
}

/// Read source text into an expanded program.
///
/// The text is tokenized, parsed, and stripped of reader-macro shorthands;
/// the first failure of any stage is returned.
///
/// ```
/// let program = lisp_reader::read("(defun double (x) (* x 2))\n(double '3)").unwrap();
/// assert_eq!(program.len(), 2);
/// assert_eq!(program[1].to_string(), "(double (quote 3))");
///
/// let err = lisp_reader::read("(car '(a . 1)").unwrap_err();
/// assert!(err.is_eof());
/// ```
pub fn read(text: &str) -> Result<Program> {
    read_custom(text, &Options::default())
}

/// Read all of an IO stream into an expanded program, using the given
/// options.
pub fn read_from_reader_custom<R: io::Read>(mut reader: R, options: &Options) -> Result<Program> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    read_custom(&text, options)
}

/// Read all of an IO stream into an expanded program.
///
/// Fails with an IO error if the stream cannot be read or does not hold
/// valid UTF-8.
pub fn read_from_reader<R: io::Read>(reader: R) -> Result<Program> {
    read_from_reader_custom(reader, &Options::default())
}

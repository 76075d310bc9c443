//! Expanding reader-macro shorthands.
//!
//! The parser leaves each reader-macro marker in place, as an atom right
//! before its operand. Expansion fuses every marker with the element
//! following it in the same sequence into an explicit two-element list:
//!
//! | Source | Expansion |
//! |---|---|
//! | `'x` | `(quote x)` |
//! | `` `x `` | `(quote x)` |
//! | `,x` | `(unquote x)` |
//! | `,@x` | `(unquote-splicing x)` |
//! | `#'x` | `(function x)` |
//!
//! Markers inside operands are expanded first, so a backquoted template
//! keeps its inner `unquote` forms:
//!
//! ```
//! let program = lisp_reader::read("`(1 ,(+ 1 2))").unwrap();
//! assert_eq!(program[0].to_string(), "(quote (1 (unquote (+ 1 2))))");
//! ```
//!
//! Nothing else is touched. In particular, `.` is an ordinary symbol, so
//! dotted-pair notation survives expansion as written.

use std::vec;

use tracing::{debug, trace};

use crate::form::{Atom, Form, Marker, Program};

/// Nesting depth accepted by default.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// This type represents the ways expansion can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExpandError {
    /// A marker is the last element of its sequence, so it has no operand.
    #[error("reader macro `{marker}` has no operand")]
    DanglingMarker {
        /// The marker lacking an operand.
        marker: Marker,
    },

    /// Lists or marker chains nested deeper than the configured limit.
    #[error("recursion limit of {limit} exceeded")]
    RecursionLimitExceeded {
        /// The configured nesting limit.
        limit: usize,
    },
}

/// Defines the tag the backquote expands to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuasiquoteTag {
    /// Expand `` `x `` to `(quote x)`, exactly like `'x`.
    ///
    /// Unquotes inside the operand are expanded all the same; telling a
    /// template apart from a plain quotation is left to the evaluator.
    Quote,

    /// Expand `` `x `` to `(quasiquote x)`.
    Quasiquote,
}

/// Various options to influence expansion.
#[derive(Debug, Clone)]
pub struct Options {
    quasiquote: QuasiquoteTag,
    max_depth: usize,
}

impl Options {
    /// Construct the default set of options.
    ///
    /// - The backquote expands to `quote`.
    /// - Nesting is limited to [`DEFAULT_MAX_DEPTH`] levels.
    pub fn new() -> Self {
        Options {
            quasiquote: QuasiquoteTag::Quote,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Choose the tag the backquote expands to.
    pub fn with_quasiquote(mut self, tag: QuasiquoteTag) -> Self {
        self.quasiquote = tag;
        self
    }

    /// Set how deeply lists and marker chains may nest before expansion
    /// fails with [`ExpandError::RecursionLimitExceeded`].
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Query the tag the backquote expands to.
    pub fn quasiquote(&self) -> QuasiquoteTag {
        self.quasiquote
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

/// Rewrites raw trees into trees free of marker atoms.
pub struct Expander {
    remaining_depth: usize,
    options: Options,
}

impl Expander {
    /// Create an expander using the default options.
    pub fn new() -> Self {
        Expander::with_options(Options::default())
    }

    /// Create an expander using the given options.
    pub fn with_options(options: Options) -> Self {
        Expander {
            remaining_depth: options.max_depth,
            options,
        }
    }

    /// The tag heading the expansion of `marker`.
    pub fn tag(&self, marker: Marker) -> &'static str {
        match (marker, self.options.quasiquote) {
            (Marker::Quasiquote, QuasiquoteTag::Quasiquote) => "quasiquote",
            _ => marker.tag(),
        }
    }

    /// Expand a single form.
    ///
    /// A marker atom on its own has nothing to apply to, and fails with
    /// [`ExpandError::DanglingMarker`].
    pub fn expand(&mut self, form: Form) -> Result<Form, ExpandError> {
        match form {
            Form::Atom(Atom::Marker(marker)) => Err(ExpandError::DanglingMarker { marker }),
            Form::Atom(atom) => Ok(Form::Atom(atom)),
            Form::List(elements) => {
                self.descend()?;
                let ret = self.expand_sequence(elements);
                self.remaining_depth += 1;
                ret.map(Form::List)
            }
        }
    }

    /// Expand a program.
    ///
    /// The top-level forms are treated as one sequence, so a marker fuses
    /// with the top-level form following it.
    pub fn expand_program(&mut self, program: Program) -> Result<Program, ExpandError> {
        let expanded = self.expand_sequence(program)?;
        debug!(forms = expanded.len(), "expanded program");
        Ok(expanded)
    }

    fn descend(&mut self) -> Result<(), ExpandError> {
        if self.remaining_depth == 0 {
            return Err(ExpandError::RecursionLimitExceeded {
                limit: self.options.max_depth,
            });
        }
        self.remaining_depth -= 1;
        Ok(())
    }

    fn expand_sequence(&mut self, elements: Vec<Form>) -> Result<Vec<Form>, ExpandError> {
        let mut expanded = Vec::with_capacity(elements.len());
        for element in elements {
            expanded.push(match element {
                Form::List(_) => self.expand(element)?,
                atom => atom,
            });
        }

        let mut fused = Vec::with_capacity(expanded.len());
        let mut rest = expanded.into_iter();
        while let Some(form) = self.fuse_next(&mut rest)? {
            fused.push(form);
        }
        Ok(fused)
    }

    /// Takes the next element of an expanded sequence. A marker is fused with
    /// its operand; a run of markers nests, the last one applying first.
    fn fuse_next(&self, rest: &mut vec::IntoIter<Form>) -> Result<Option<Form>, ExpandError> {
        let mut markers = Vec::new();
        loop {
            match rest.next() {
                Some(Form::Atom(Atom::Marker(marker))) => {
                    if markers.len() == self.remaining_depth {
                        return Err(ExpandError::RecursionLimitExceeded {
                            limit: self.options.max_depth,
                        });
                    }
                    markers.push(marker);
                }
                Some(operand) => {
                    let fused = markers.into_iter().rev().fold(operand, |operand, marker| {
                        trace!(%marker, "fused reader macro");
                        Form::tagged(self.tag(marker), operand)
                    });
                    return Ok(Some(fused));
                }
                None => {
                    return match markers.pop() {
                        Some(marker) => Err(ExpandError::DanglingMarker { marker }),
                        None => Ok(None),
                    };
                }
            }
        }
    }
}

impl Default for Expander {
    fn default() -> Self {
        Expander::new()
    }
}

/// Expand a single form using the given options.
pub fn expand_custom(form: Form, options: Options) -> Result<Form, ExpandError> {
    Expander::with_options(options).expand(form)
}

/// Expand a single form.
///
/// ```
/// use lisp_reader::{expand::expand, Form, Marker};
///
/// let raw = Form::list(vec![
///     Form::symbol("funcall"),
///     Form::marker(Marker::Quote),
///     Form::symbol("a"),
///     Form::integer(1),
/// ]);
/// assert_eq!(expand(raw).unwrap().to_string(), "(funcall (quote a) 1)");
/// ```
pub fn expand(form: Form) -> Result<Form, ExpandError> {
    expand_custom(form, Options::default())
}

/// Expand a program using the given options.
pub fn expand_program_custom(program: Program, options: Options) -> Result<Program, ExpandError> {
    Expander::with_options(options).expand_program(program)
}

/// Expand a program.
///
/// ```
/// use lisp_reader::{expand::{expand_program, ExpandError}, parse, Marker};
///
/// let raw = parse::from_str("(a ')").unwrap();
/// assert_eq!(
///     expand_program(raw).unwrap_err(),
///     ExpandError::DanglingMarker { marker: Marker::Quote }
/// );
/// ```
pub fn expand_program(program: Program) -> Result<Program, ExpandError> {
    expand_program_custom(program, Options::default())
}

#![deny(missing_docs)]

//! This crate provides the reading front end of a Lisp: it turns source
//! text into a tree of [`Form`]s, with the reader-macro shorthands of the
//! Common Lisp family spelled out as explicit lists.
//!
//! ```lisp
//! (defun double (x) (* x 2))
//! (mapcar #'double '(1 2 3))
//! `(a ,b ,@rest)
//! ```
//!
//! Reading happens in three stages, each of which is usable on its own:
//!
//! - The [tokenizer](lex) splits text into parentheses, atoms and
//!   reader-macro markers.
//! - The [parser](parse) builds the nesting structure out of tokens. Its
//!   output is a *raw* tree, in which markers are still standalone atoms.
//! - The [expander](expand) fuses each marker with the form following it,
//!   e.g. `'x` becomes `(quote x)`.
//!
//! [`read`] runs all of them:
//!
//! ```
//! use lisp_reader::Form;
//!
//! let program = lisp_reader::read("(mapcar #'double '(1 2 3))").unwrap();
//! assert_eq!(
//!     program,
//!     vec![Form::list(vec![
//!         Form::symbol("mapcar"),
//!         Form::list(vec![Form::symbol("function"), Form::symbol("double")]),
//!         Form::list(vec![
//!             Form::symbol("quote"),
//!             Form::list(vec![1, 2, 3]),
//!         ]),
//!     ])]
//! );
//! ```
//!
//! # Atoms
//!
//! Atom text is classified by its shape alone:
//!
//! - An optional `-` followed by decimal digits is an integer, which has to
//!   fit into an `i64`.
//! - Text delimited by double quotes is kept verbatim, quotes and escape
//!   sequences included.
//! - Anything else, including `.`, is a symbol.
//!
//! There is no special syntax for dotted pairs: `(a . b)` is a list of three
//! symbols, and is left to later stages to interpret.
//!
//! # Printing
//!
//! Forms implement `Display`, and the [`print`] module offers more control,
//! such as printing `(quote x)` as `'x` again. Printed text reads back to an
//! equal tree:
//!
//! ```
//! let program = lisp_reader::read("(car '(a . 1))").unwrap();
//! let text = lisp_reader::print::program_to_string(&program).unwrap();
//! assert_eq!(text, "(car (quote (a . 1)))\n");
//! assert_eq!(lisp_reader::read(&text).unwrap(), program);
//! ```
//!
//! # Errors
//!
//! Every stage reports failures through its own error type. The composed
//! entry points return [`Error`], which allows telling input that is merely
//! incomplete apart from input that is broken:
//!
//! ```
//! let err = lisp_reader::read("(let ((x 1))").unwrap_err();
//! assert!(err.is_eof());
//! assert_eq!(err.location().map(|loc| loc.line()), Some(1));
//!
//! let err = lisp_reader::read("(a ')").unwrap_err();
//! assert!(err.is_expand());
//! ```
//!
//! # Logging
//!
//! The stages emit [`tracing`](https://docs.rs/tracing) events: a `trace`
//! event per token and per fused marker, and `debug` events summarizing each
//! stage. No subscriber is installed by this crate.

/// Construct a [`Form`] using syntax similar to Lisp source text.
///
/// This requires the `form-macro` feature.
///
/// # Atoms
///
/// Identifiers and runs of punctuation are symbols, integer literals are
/// integers, and string literals become quoted text. Symbols that are not
/// valid Rust tokens can be written using the `#"..."` syntax.
///
/// ```
/// # use lisp_reader::{form, Form};
/// assert_eq!(form!(car), Form::symbol("car"));
/// assert_eq!(form!(-42), Form::integer(-42));
/// assert_eq!(form!("hi"), Form::text("\"hi\""));
/// assert_eq!(form!(#"unquote-splicing"), Form::symbol("unquote-splicing"));
/// ```
///
/// # Lists
///
/// ```
/// # use lisp_reader::form;
/// let program = lisp_reader::read("(+ (* x 2) 1)").unwrap();
/// assert_eq!(program[0], form!((+ (* x 2) 1)));
/// ```
///
/// # Interpolation
///
/// A comma inserts the value of a Rust expression convertible into a form.
///
/// ```
/// # use lisp_reader::form;
/// let n = 3;
/// assert_eq!(form!((double ,n)).to_string(), "(double 3)");
/// ```
#[cfg(feature = "form-macro")]
pub use lisp_reader_macros::form;

pub mod error;
pub mod expand;
pub mod form;
pub mod lex;
pub mod parse;
pub mod print;
mod reader;

#[doc(inline)]
pub use self::error::{Category, Error, Location, Result};

#[doc(inline)]
pub use self::form::{Atom, AtomKind, Form, Marker, Program};

#[doc(inline)]
pub use self::reader::{read, read_custom, read_from_reader, read_from_reader_custom, Options};

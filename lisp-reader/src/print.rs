//! Converting forms into text.
//!
//! Printing is the inverse of reading, up to whitespace: the text produced
//! for a form reads back to an equal form. Raw trees print their markers as
//! standalone shorthands, expanded trees print tagged lists in full unless
//! [abbreviations](Options::with_abbreviations) are enabled.
//!
//! ```
//! use lisp_reader::print::{self, Options};
//!
//! let program = lisp_reader::read("(mapcar #'car '((a . 1)))").unwrap();
//! assert_eq!(
//!     print::to_string(&program[0]).unwrap(),
//!     "(mapcar (function car) (quote ((a . 1))))"
//! );
//! let options = Options::new().with_abbreviations(true);
//! assert_eq!(
//!     print::to_string_custom(&program[0], options).unwrap(),
//!     "(mapcar #'car '((a . 1)))"
//! );
//! ```

use std::io;

use crate::form::{Atom, Form, Marker};

/// Options for printing forms.
#[derive(Clone, Debug, Default)]
pub struct Options {
    abbreviations: bool,
}

impl Options {
    /// Construct the default set of options: tagged lists are printed in
    /// full.
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose whether two-element lists headed by a reader-macro tag are
    /// printed using the shorthand, e.g. `'x` instead of `(quote x)`.
    ///
    /// Note that `(quasiquote x)` is printed as `` `x ``, which only reads
    /// back to the same tree when expanding with
    /// [`QuasiquoteTag::Quasiquote`](crate::expand::QuasiquoteTag).
    pub fn with_abbreviations(mut self, enabled: bool) -> Self {
        self.abbreviations = enabled;
        self
    }

    /// Query whether abbreviations are used.
    pub fn abbreviations(&self) -> bool {
        self.abbreviations
    }
}

/// This trait abstracts away writing the pieces of a form, allowing the
/// implementer to customize the output.
///
/// The default implementation prints all forms on a single line, with
/// list elements separated by single spaces.
pub trait Formatter {
    /// Writes an integer to the specified writer.
    #[inline]
    fn write_integer<W: ?Sized>(&mut self, writer: &mut W, n: i64) -> io::Result<()>
    where
        W: io::Write,
    {
        let mut buffer = itoa::Buffer::new();
        writer.write_all(buffer.format(n).as_bytes())
    }

    /// Writes a symbol to the specified writer.
    #[inline]
    fn write_symbol<W: ?Sized>(&mut self, writer: &mut W, name: &str) -> io::Result<()>
    where
        W: io::Write,
    {
        writer.write_all(name.as_bytes())
    }

    /// Writes quoted text, which includes its delimiters, as-is.
    #[inline]
    fn write_text<W: ?Sized>(&mut self, writer: &mut W, raw: &str) -> io::Result<()>
    where
        W: io::Write,
    {
        writer.write_all(raw.as_bytes())
    }

    /// Writes the shorthand of a reader-macro marker.
    #[inline]
    fn write_marker<W: ?Sized>(&mut self, writer: &mut W, marker: Marker) -> io::Result<()>
    where
        W: io::Write,
    {
        writer.write_all(marker.text().as_bytes())
    }

    /// Called before any list elements.  Writes a `(` to the specified
    /// writer.
    #[inline]
    fn begin_list<W: ?Sized>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        writer.write_all(b"(")
    }

    /// Called after all list elements have been written.  Writes a `)` to the
    /// specified writer.
    #[inline]
    fn end_list<W: ?Sized>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        writer.write_all(b")")
    }

    /// Called before starting to write a list element. Writes a space to the
    /// specified writer, if needed.
    #[inline]
    fn begin_seq_element<W: ?Sized>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b" ")
        }
    }

    /// Called after every list element.
    #[inline]
    fn end_seq_element<W: ?Sized>(&mut self, _writer: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        Ok(())
    }

    /// The shorthand to use for a two-element list headed by the symbol
    /// `tag`, if any. The default never abbreviates.
    #[inline]
    fn abbreviation(&self, _tag: &str) -> Option<Marker> {
        None
    }
}

/// This structure prints a form on a single line, spelling out tagged
/// lists.
#[derive(Clone, Debug)]
pub struct DefaultFormatter;

impl Formatter for DefaultFormatter {}

/// A formatter which can be tuned using [`Options`].
#[derive(Clone, Debug)]
pub struct CustomizedFormatter {
    options: Options,
}

impl Formatter for CustomizedFormatter {
    fn abbreviation(&self, tag: &str) -> Option<Marker> {
        if self.options.abbreviations {
            Marker::from_tag(tag)
        } else {
            None
        }
    }
}

/// A printer for forms.
#[derive(Debug)]
pub struct Printer<W, F = DefaultFormatter> {
    writer: W,
    formatter: F,
}

impl<W> Printer<W, CustomizedFormatter>
where
    W: io::Write,
{
    /// Construct a printer tuned given the specified options.
    pub fn with_options(writer: W, options: Options) -> Self {
        Printer {
            writer,
            formatter: CustomizedFormatter { options },
        }
    }
}

impl<W, F> Printer<W, F>
where
    W: io::Write,
    F: Formatter,
{
    /// Creates a new printer whose output will be written to the writer
    /// specified.
    #[inline]
    pub fn with_formatter(writer: W, formatter: F) -> Self {
        Printer { writer, formatter }
    }

    /// Unwrap the `Writer` from the `Printer`.
    #[inline]
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Output the representation of the specified form to the underlying
    /// writer.
    pub fn print(&mut self, form: &Form) -> io::Result<()> {
        match form {
            Form::Atom(Atom::Integer(n)) => self.formatter.write_integer(&mut self.writer, *n),
            Form::Atom(Atom::Symbol(name)) => self.formatter.write_symbol(&mut self.writer, name),
            Form::Atom(Atom::Text(raw)) => self.formatter.write_text(&mut self.writer, raw),
            Form::Atom(Atom::Marker(marker)) => {
                self.formatter.write_marker(&mut self.writer, *marker)
            }
            Form::List(elements) => {
                if let Some((marker, operand)) = self.abbreviated(elements) {
                    self.formatter.write_marker(&mut self.writer, marker)?;
                    // `,@x` would read back as splicing.
                    if marker == Marker::Unquote && starts_with_at(operand) {
                        self.writer.write_all(b" ")?;
                    }
                    return self.print(operand);
                }
                self.formatter.begin_list(&mut self.writer)?;
                for (i, element) in elements.iter().enumerate() {
                    self.formatter.begin_seq_element(&mut self.writer, i == 0)?;
                    self.print(element)?;
                    self.formatter.end_seq_element(&mut self.writer)?;
                }
                self.formatter.end_list(&mut self.writer)
            }
        }
    }

    /// Output a sequence of top-level forms, each followed by a newline.
    pub fn print_program(&mut self, program: &[Form]) -> io::Result<()> {
        for form in program {
            self.print(form)?;
            self.writer.write_all(b"\n")?;
        }
        Ok(())
    }

    fn abbreviated<'a>(&self, elements: &'a [Form]) -> Option<(Marker, &'a Form)> {
        match elements {
            [head, operand] if !operand.is_marker() => {
                let marker = self.formatter.abbreviation(head.as_symbol()?)?;
                Some((marker, operand))
            }
            _ => None,
        }
    }
}

fn starts_with_at(form: &Form) -> bool {
    form.as_symbol()
        .map_or(false, |name| name.starts_with('@'))
}

impl<W> Printer<W>
where
    W: io::Write,
{
    /// Creates a new printer using the default formatter.
    #[inline]
    pub fn new(writer: W) -> Self {
        Printer::with_formatter(writer, DefaultFormatter)
    }
}

fn into_string(vec: Vec<u8>) -> io::Result<String> {
    String::from_utf8(vec).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

/// Print the given form as text into the IO stream, using the default
/// printer options.
#[inline]
pub fn to_writer<W: io::Write>(writer: W, form: &Form) -> io::Result<()> {
    let mut printer = Printer::new(writer);
    printer.print(form)
}

/// Print the given form as text into the IO stream.
#[inline]
pub fn to_writer_custom<W: io::Write>(writer: W, form: &Form, options: Options) -> io::Result<()> {
    let mut printer = Printer::with_options(writer, options);
    printer.print(form)
}

/// Print the given form as a byte vector, using the default printer
/// options.
#[inline]
pub fn to_vec(form: &Form) -> io::Result<Vec<u8>> {
    let mut writer = Vec::with_capacity(128);
    to_writer(&mut writer, form)?;
    Ok(writer)
}

/// Print the given form as a byte vector.
#[inline]
pub fn to_vec_custom(form: &Form, options: Options) -> io::Result<Vec<u8>> {
    let mut writer = Vec::with_capacity(128);
    to_writer_custom(&mut writer, form, options)?;
    Ok(writer)
}

/// Print the given form as a string, using the default printer options.
#[inline]
pub fn to_string(form: &Form) -> io::Result<String> {
    into_string(to_vec(form)?)
}

/// Print the given form as a string.
#[inline]
pub fn to_string_custom(form: &Form, options: Options) -> io::Result<String> {
    into_string(to_vec_custom(form, options)?)
}

/// Print a program as a string, one top-level form per line.
///
/// ```
/// let program = lisp_reader::parse::from_str("'a (b\n c)").unwrap();
/// assert_eq!(lisp_reader::print::program_to_string(&program).unwrap(), "'\na\n(b c)\n");
/// ```
pub fn program_to_string(program: &[Form]) -> io::Result<String> {
    program_to_string_custom(program, Options::default())
}

/// Print a program as a string, one top-level form per line.
pub fn program_to_string_custom(program: &[Form], options: Options) -> io::Result<String> {
    let mut printer = Printer::with_options(Vec::with_capacity(128), options);
    printer.print_program(program)?;
    into_string(printer.into_inner())
}

#[cfg(test)]
mod tests;

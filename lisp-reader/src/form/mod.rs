//! The `Form` tree, the representation of parsed source text.
//!
//! A [`Form`] is either an [`Atom`] or a list of forms. Parsing source text
//! yields a [`Program`], the sequence of its top-level forms.
//!
//! Trees straight out of the parser are *raw*: reader-macro shorthands like
//! `'x` show up as a [`Marker`] atom followed by its operand, as siblings in
//! the enclosing sequence. The [expander](crate::expand) fuses each marker
//! with its operand into an explicit tagged list, after which no markers
//! remain.
//!
//! ```
//! use lisp_reader::{Form, Marker};
//!
//! let raw = lisp_reader::parse::from_str("'a").unwrap();
//! assert_eq!(raw, vec![Form::marker(Marker::Quote), Form::symbol("a")]);
//!
//! let expanded = lisp_reader::read("'a").unwrap();
//! assert_eq!(
//!     expanded,
//!     vec![Form::list(vec![Form::symbol("quote"), Form::symbol("a")])]
//! );
//! ```

use std::fmt::{self, Display};

use crate::print;

mod from;

/// An ordered sequence of top-level forms, in source order.
pub type Program = Vec<Form>;

/// A reader-macro shorthand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// The quote character, `'`.
    Quote,
    /// The backquote character, `` ` ``.
    Quasiquote,
    /// The comma, `,`.
    Unquote,
    /// The splicing comma, `,@`.
    UnquoteSplicing,
    /// The function shorthand, `#'`.
    Function,
}

impl Marker {
    /// All markers, longest source text first within a shared prefix.
    pub const ALL: [Marker; 5] = [
        Marker::Quote,
        Marker::Quasiquote,
        Marker::UnquoteSplicing,
        Marker::Unquote,
        Marker::Function,
    ];

    /// The source text of the marker.
    pub fn text(self) -> &'static str {
        match self {
            Marker::Quote => "'",
            Marker::Quasiquote => "`",
            Marker::Unquote => ",",
            Marker::UnquoteSplicing => ",@",
            Marker::Function => "#'",
        }
    }

    /// The symbol heading the list the marker expands into.
    ///
    /// Note that the backquote expands to `quote`, just like the plain quote;
    /// see [`expand::QuasiquoteTag`](crate::expand::QuasiquoteTag) for
    /// getting a distinct tag.
    pub fn tag(self) -> &'static str {
        match self {
            Marker::Quote | Marker::Quasiquote => "quote",
            Marker::Unquote => "unquote",
            Marker::UnquoteSplicing => "unquote-splicing",
            Marker::Function => "function",
        }
    }

    /// The marker whose shorthand abbreviates a list headed by `tag`.
    ///
    /// This is the inverse of [`Marker::tag`], with `quasiquote` mapping to
    /// the backquote.
    pub fn from_tag(tag: &str) -> Option<Marker> {
        match tag {
            "quote" => Some(Marker::Quote),
            "quasiquote" => Some(Marker::Quasiquote),
            "unquote" => Some(Marker::Unquote),
            "unquote-splicing" => Some(Marker::UnquoteSplicing),
            "function" => Some(Marker::Function),
            _ => None,
        }
    }
}

impl Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// The kind of atom a piece of source text denotes.
///
/// Classification only looks at the shape of the text; it does not check
/// whether an integer fits into the supported range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtomKind {
    /// An optional `-` followed by one or more decimal digits.
    Integer,
    /// Text delimited by double quotes.
    Text,
    /// Anything else.
    Symbol,
}

impl AtomKind {
    /// Classify atom text.
    ///
    /// ```
    /// use lisp_reader::AtomKind;
    ///
    /// assert_eq!(AtomKind::of("-42"), AtomKind::Integer);
    /// assert_eq!(AtomKind::of("\"hi\""), AtomKind::Text);
    /// assert_eq!(AtomKind::of("-"), AtomKind::Symbol);
    /// assert_eq!(AtomKind::of("+1"), AtomKind::Symbol);
    /// ```
    pub fn of(text: &str) -> AtomKind {
        let digits = text.strip_prefix('-').unwrap_or(text);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            AtomKind::Integer
        } else if text.len() >= 2 && text.starts_with('"') && text.ends_with('"') {
            AtomKind::Text
        } else {
            AtomKind::Symbol
        }
    }
}

/// A leaf of the form tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Atom {
    /// An integer literal.
    Integer(i64),
    /// A symbol. Symbols are identified by their exact text.
    Symbol(Box<str>),
    /// Quoted literal text, including the delimiting double quotes.
    ///
    /// Escape sequences are kept as written.
    Text(Box<str>),
    /// A reader-macro marker. Only present in raw trees.
    Marker(Marker),
}

impl Atom {
    /// The atom's kind, or `None` for a marker.
    pub fn kind(&self) -> Option<AtomKind> {
        match self {
            Atom::Integer(_) => Some(AtomKind::Integer),
            Atom::Symbol(_) => Some(AtomKind::Symbol),
            Atom::Text(_) => Some(AtomKind::Text),
            Atom::Marker(_) => None,
        }
    }
}

/// Represents a parsed form: an atom or a list of forms.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Form {
    /// A leaf.
    Atom(Atom),
    /// An ordered, possibly empty, sequence of forms.
    List(Vec<Form>),
}

impl Form {
    /// Construct a symbol, given its name.
    pub fn symbol(name: impl Into<Box<str>>) -> Self {
        Form::Atom(Atom::Symbol(name.into()))
    }

    /// Construct an integer.
    pub fn integer(n: i64) -> Self {
        Form::Atom(Atom::Integer(n))
    }

    /// Construct quoted text, given its raw source text.
    ///
    /// The text is kept as-is; it is expected to include the delimiting
    /// quotes.
    ///
    /// ```
    /// # use lisp_reader::Form;
    /// assert_eq!(lisp_reader::read(r#""a""#).unwrap(), vec![Form::text(r#""a""#)]);
    /// ```
    pub fn text(raw: impl Into<Box<str>>) -> Self {
        Form::Atom(Atom::Text(raw.into()))
    }

    /// Construct a marker atom.
    pub fn marker(marker: Marker) -> Self {
        Form::Atom(Atom::Marker(marker))
    }

    /// Create a list from elements convertible into `Form`.
    ///
    /// ```
    /// # use lisp_reader::Form;
    /// let list = Form::list(vec![1, 2, 3]);
    /// assert_eq!(list.as_list().map(|elements| elements.len()), Some(3));
    /// ```
    pub fn list<I>(elements: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Form>,
    {
        Form::List(elements.into_iter().map(Into::into).collect())
    }

    /// Create the two-element list `(tag operand)`.
    pub fn tagged(tag: &str, operand: Form) -> Self {
        Form::List(vec![Form::symbol(tag), operand])
    }

    /// Returns true if the form is an atom, markers included.
    pub fn is_atom(&self) -> bool {
        self.as_atom().is_some()
    }

    /// Returns true if the form is a list.
    pub fn is_list(&self) -> bool {
        self.as_list().is_some()
    }

    /// Returns true if the form is a symbol.
    pub fn is_symbol(&self) -> bool {
        self.as_symbol().is_some()
    }

    /// Returns true if the form is an integer.
    pub fn is_integer(&self) -> bool {
        self.as_integer().is_some()
    }

    /// Returns true if the form is quoted text.
    pub fn is_text(&self) -> bool {
        self.as_text().is_some()
    }

    /// Returns true if the form is a marker atom.
    pub fn is_marker(&self) -> bool {
        self.as_marker().is_some()
    }

    /// Returns true if a marker atom occurs anywhere in the tree.
    ///
    /// ```
    /// # use lisp_reader::{Form, Marker};
    /// let raw = Form::list(vec![Form::symbol("a"), Form::list(vec![Form::marker(Marker::Quote)])]);
    /// assert!(raw.contains_marker());
    /// ```
    pub fn contains_marker(&self) -> bool {
        let mut pending = vec![self];
        while let Some(form) = pending.pop() {
            match form {
                Form::Atom(atom) => {
                    if let Atom::Marker(_) = atom {
                        return true;
                    }
                }
                Form::List(elements) => pending.extend(elements),
            }
        }
        false
    }

    /// If the form is an atom, return a reference to it.
    pub fn as_atom(&self) -> Option<&Atom> {
        match self {
            Form::Atom(atom) => Some(atom),
            Form::List(_) => None,
        }
    }

    /// If the form is a symbol, return its name.
    ///
    /// ```
    /// # use lisp_reader::Form;
    /// assert_eq!(Form::symbol("car").as_symbol(), Some("car"));
    /// assert_eq!(Form::integer(1).as_symbol(), None);
    /// ```
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Form::Atom(Atom::Symbol(name)) => Some(name),
            _ => None,
        }
    }

    /// If the form is an integer, return its value.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Form::Atom(Atom::Integer(n)) => Some(*n),
            _ => None,
        }
    }

    /// If the form is quoted text, return its raw text, quotes included.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Form::Atom(Atom::Text(raw)) => Some(raw),
            _ => None,
        }
    }

    /// If the form is a marker atom, return the marker.
    pub fn as_marker(&self) -> Option<Marker> {
        match self {
            Form::Atom(Atom::Marker(marker)) => Some(*marker),
            _ => None,
        }
    }

    /// If the form is a list, return its elements.
    pub fn as_list(&self) -> Option<&[Form]> {
        match self {
            Form::List(elements) => Some(elements),
            Form::Atom(_) => None,
        }
    }

    /// If the form is a list, return a mutable reference to its elements.
    pub fn as_list_mut(&mut self) -> Option<&mut Vec<Form>> {
        match self {
            Form::List(elements) => Some(elements),
            Form::Atom(_) => None,
        }
    }
}

impl Display for Form {
    /// Renders the form as source text, using the default printer options.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = print::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

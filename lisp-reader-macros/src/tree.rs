use proc_macro2::TokenTree;

/// A form as written in the macro input.
#[derive(Debug)]
pub enum Tree {
    Integer(i64),
    Symbol(String),
    /// Quoted text, delimiters included.
    Text(String),
    Unquoted(TokenTree),
    List(Vec<Tree>),
}

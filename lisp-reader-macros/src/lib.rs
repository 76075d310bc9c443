//! Internal crate implementing the `form!` macro exposed by the
//! `lisp-reader` crate.

extern crate proc_macro;

mod generator;
mod parser;
mod tree;

use proc_macro2::TokenStream;
use quote::quote;

#[proc_macro]
pub fn form(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let output = match expand(TokenStream::from(input)) {
        Err(e) => {
            let msg = format!("could not parse form: {:?}", e);
            quote! { compile_error!(#msg) }
        }
        Ok(output) => output,
    };

    proc_macro::TokenStream::from(output)
}

fn expand(input: TokenStream) -> Result<TokenStream, parser::ParseError> {
    let tree = parser::parse(input)?;
    Ok(generator::generate(tree))
}

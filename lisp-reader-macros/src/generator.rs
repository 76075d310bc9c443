use crate::tree::Tree;

use proc_macro2::TokenStream;
use quote::{quote, ToTokens};

impl ToTokens for Tree {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let expanded = match self {
            Tree::Integer(n) => quote! { ::lisp_reader::Form::integer(#n) },
            Tree::Symbol(name) => quote! { ::lisp_reader::Form::symbol(#name) },
            Tree::Text(raw) => quote! { ::lisp_reader::Form::text(#raw) },
            Tree::Unquoted(tt) => quote! { ::lisp_reader::Form::from(#tt) },
            Tree::List(elements) => quote! {
                ::lisp_reader::Form::List(::std::vec![#(#elements),*])
            },
        };
        tokens.extend(expanded);
    }
}

pub fn generate(tree: Tree) -> TokenStream {
    tree.into_token_stream()
}

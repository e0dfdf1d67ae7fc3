//! Compile-time lookups into the SUS grammar.
//!
//! Node kind and field ids are only known once the generated parser is
//! loaded. These macros resolve them while compiling, so a misspelled kind is
//! a compile error instead of a silent `0`:
//!
//! ```ignore
//! match node.kind_id() {
//!     kind!("if_statement") => { /* ... */ }
//!     kw!("module") => { /* ... */ }
//!     _ => {}
//! }
//! let name = node.child_by_field_id(field!("name").get());
//! ```

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, LitStr};
use tree_sitter::Language;
use tree_sitter_sus::load;

/// The `u16` id of a named node kind, usable as a match pattern.
#[proc_macro]
pub fn kind(input: TokenStream) -> TokenStream {
    let name = parse_macro_input!(input as LitStr);
    expand(&name, "node kind", |language, kind| {
        let id = language.id_for_node_kind(kind, true);
        (id != 0).then(|| quote! { #id })
    })
}

/// The `u16` id of an anonymous node such as a keyword or operator.
#[proc_macro]
pub fn kw(input: TokenStream) -> TokenStream {
    let name = parse_macro_input!(input as LitStr);
    expand(&name, "keyword", |language, keyword| {
        let id = language.id_for_node_kind(keyword, false);
        (id != 0).then(|| quote! { #id })
    })
}

/// The `NonZeroU16` id of a field, evaluated in a const context.
#[proc_macro]
pub fn field(input: TokenStream) -> TokenStream {
    let name = parse_macro_input!(input as LitStr);
    expand(&name, "field", |language, field| {
        let id = u16::from(language.field_id_for_name(field)?);
        Some(quote! {
            {
                const ID: ::std::num::NonZeroU16 = match ::std::num::NonZeroU16::new(#id) {
                    ::std::option::Option::Some(id) => id,
                    ::std::option::Option::None => ::core::panic!("field ids start at 1"),
                };
                ID
            }
        })
    })
}

fn expand(
    name: &LitStr,
    what: &str,
    resolve: impl FnOnce(&Language, &str) -> Option<TokenStream2>,
) -> TokenStream {
    let language = match load() {
        Ok(language) => language,
        Err(err) => return syn::Error::new(name.span(), err).to_compile_error().into(),
    };

    match resolve(&language, &name.value()) {
        Some(tokens) => tokens.into(),
        None => syn::Error::new(
            name.span(),
            format!("`{}` is not a valid {what} in the SUS grammar", name.value()),
        )
        .to_compile_error()
        .into(),
    }
}

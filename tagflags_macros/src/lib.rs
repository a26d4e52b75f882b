//! Procedural macros for `tagflags`.
//!
//! `#[derive(Flags)]` stands in for reflection over struct tags: it records
//! each field's `#[tag(...)]` metadata and emits the code that hands the
//! field to the `tagflags` walker.

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod derive;

/// Derive macro for `tagflags::Flags`.
///
/// Every field with a `#[tag(key = "value", marker, ...)]` attribute is
/// offered to the walker together with its tags. Fields without one are
/// ignored. `#[flags(crate = "path")]` on the struct changes the path used
/// to reach the `tagflags` crate.
#[proc_macro_derive(Flags, attributes(tag, flags))]
pub fn derive_flags(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    derive::expand(&input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

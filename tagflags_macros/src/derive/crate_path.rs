//! Path generated code uses to reach the runtime crate.

use proc_macro2::TokenStream;
use quote::quote;

/// Tokens naming the runtime crate: `::tagflags` unless overridden with
/// `#[flags(crate = "...")]`.
pub(crate) fn resolve(crate_path: Option<&syn::Path>) -> TokenStream {
    crate_path.map_or_else(|| quote! { ::tagflags }, |path| quote! { #path })
}

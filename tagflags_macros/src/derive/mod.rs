//! Expansion of `#[derive(Flags)]`.

mod crate_path;
mod generate;
mod literals;
mod parse;


use proc_macro2::TokenStream;
use syn::DeriveInput;

/// Parse `input` and generate the `Flags` and `FlagField` impls.
pub(crate) fn expand(input: &DeriveInput) -> Result<TokenStream, syn::Error> {
    let parsed = parse::parse_input(input)?;
    Ok(generate::generate(&parsed))
}

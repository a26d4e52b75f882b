//! Literal parsing for `#[tag(...)]` values.

use syn::Lit;
use syn::meta::ParseNestedMeta;

/// Parses the value of `key = <literal>` into its tag string.
///
/// Strings are taken as written; characters, booleans, and numbers are
/// rendered the way they read in source, so `shorthand = 'v'` and
/// `shorthand = "v"` are equivalent.
pub(crate) fn tag_value(meta: &ParseNestedMeta, key: &str) -> Result<String, syn::Error> {
    let literal = meta.value()?.parse::<Lit>()?;
    match literal {
        Lit::Str(s) => Ok(s.value()),
        Lit::Char(c) => Ok(c.value().to_string()),
        Lit::Bool(b) => Ok(b.value.to_string()),
        Lit::Int(i) => Ok(i.base10_digits().to_owned()),
        Lit::Float(f) => Ok(f.base10_digits().to_owned()),
        other => Err(syn::Error::new(
            other.span(),
            format!("{key} must be a string, character, boolean, or number literal"),
        )),
    }
}

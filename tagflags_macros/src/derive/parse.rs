//! Parsing of `#[flags(...)]` and `#[tag(...)]` attributes.

use syn::ext::IdentExt;
use syn::spanned::Spanned;
use syn::{Attribute, Data, DeriveInput, Fields, Generics, Ident, Token};

use super::literals::tag_value;

/// Struct-level options from `#[flags(...)]`.
#[derive(Default)]
pub(crate) struct StructAttrs {
    pub(crate) crate_path: Option<syn::Path>,
}

/// One `key = value` (or bare `key`) entry of a `#[tag(...)]` attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TagEntry {
    pub(crate) key: String,
    pub(crate) value: String,
}

/// A tagged field ready for code generation.
#[derive(Debug)]
pub(crate) struct FieldTags {
    pub(crate) ident: Ident,
    pub(crate) entries: Vec<TagEntry>,
}

impl FieldTags {
    /// Field name as the walker sees it, without any `r#` prefix.
    pub(crate) fn name(&self) -> String {
        self.ident.unraw().to_string()
    }
}

/// Everything the generator needs from the derive input.
pub(crate) struct ParsedInput {
    pub(crate) ident: Ident,
    pub(crate) generics: Generics,
    pub(crate) attrs: StructAttrs,
    pub(crate) fields: Vec<FieldTags>,
}

pub(crate) fn parse_input(input: &DeriveInput) -> Result<ParsedInput, syn::Error> {
    let attrs = parse_struct_attrs(&input.attrs)?;
    let named = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => &named.named,
            Fields::Unnamed(_) | Fields::Unit => {
                return Err(syn::Error::new(
                    input.ident.span(),
                    "Flags can only be derived for structs with named fields",
                ));
            }
        },
        Data::Enum(_) | Data::Union(_) => {
            return Err(syn::Error::new(
                input.ident.span(),
                "Flags can only be derived for structs",
            ));
        }
    };

    let mut fields = Vec::new();
    for field in named {
        let Some(ident) = field.ident.clone() else {
            return Err(syn::Error::new(field.span(), "unnamed field"));
        };
        if let Some(entries) = parse_field_tags(&field.attrs)? {
            fields.push(FieldTags { ident, entries });
        }
    }

    Ok(ParsedInput {
        ident: input.ident.clone(),
        generics: input.generics.clone(),
        attrs,
        fields,
    })
}

/// Parses `#[flags(crate = "path")]`.
pub(crate) fn parse_struct_attrs(attrs: &[Attribute]) -> Result<StructAttrs, syn::Error> {
    let mut out = StructAttrs::default();
    for attr in attrs.iter().filter(|a| a.path().is_ident("flags")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("crate") {
                let path = meta.value()?.parse::<syn::LitStr>()?;
                out.crate_path = Some(syn::parse_str::<syn::Path>(&path.value())?);
                Ok(())
            } else {
                Err(meta.error("unknown flags attribute; expected `crate`"))
            }
        })?;
    }
    Ok(out)
}

/// Collects the entries of every `#[tag(...)]` attribute on a field.
///
/// Returns `None` when the field carries no `tag` attribute at all, so it is
/// not offered to the walker. A key given twice is rejected.
pub(crate) fn parse_field_tags(attrs: &[Attribute]) -> Result<Option<Vec<TagEntry>>, syn::Error> {
    let mut entries: Vec<TagEntry> = Vec::new();
    let mut seen = false;
    for attr in attrs.iter().filter(|a| a.path().is_ident("tag")) {
        seen = true;
        if matches!(attr.meta, syn::Meta::Path(_)) {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            let key = tag_key(&meta.path)?;
            if entries.iter().any(|entry| entry.key == key) {
                return Err(meta.error(format!("duplicate tag key `{key}`")));
            }
            let value = if meta.input.peek(Token![=]) {
                tag_value(&meta, &key)?
            } else if meta.input.is_empty() || meta.input.peek(Token![,]) {
                String::new()
            } else {
                return Err(meta.error(format!("expected `{key} = <literal>` or a bare `{key}`")));
            };
            entries.push(TagEntry { key, value });
            Ok(())
        })?;
    }
    Ok(seen.then_some(entries))
}

fn tag_key(path: &syn::Path) -> Result<String, syn::Error> {
    path.get_ident()
        .map(|ident| ident.unraw().to_string())
        .ok_or_else(|| syn::Error::new(path.span(), "tag keys must be plain identifiers"))
}

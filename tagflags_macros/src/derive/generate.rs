//! Code generation for `#[derive(Flags)]`.
//!
//! Each tagged field becomes one `FlagField::accept` call carrying a static
//! `FieldInfo`. The struct itself also implements `FlagField`, so it can be
//! nested inside another flags struct under a `recurse` tag.

use proc_macro2::TokenStream;
use quote::quote;

use super::crate_path;
use super::parse::{FieldTags, ParsedInput};

fn field_visit(krate: &TokenStream, field: &FieldTags) -> TokenStream {
    let ident = &field.ident;
    let name = field.name();
    let keys = field.entries.iter().map(|entry| entry.key.as_str());
    let values = field.entries.iter().map(|entry| entry.value.as_str());
    quote! {
        #krate::FlagField::accept(
            &mut self.#ident,
            &#krate::FieldInfo::new(#name, &[#((#keys, #values)),*]),
            walker,
        );
    }
}

pub(crate) fn generate(input: &ParsedInput) -> TokenStream {
    let krate = crate_path::resolve(input.attrs.crate_path.as_ref());
    let ident = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let visits = input.fields.iter().map(|field| field_visit(&krate, field));
    let walker = if input.fields.is_empty() {
        quote! { _walker }
    } else {
        quote! { walker }
    };

    quote! {
        impl #impl_generics #krate::Flags for #ident #ty_generics #where_clause {
            fn walk<'__tagflags, __V: #krate::FieldVisitor<'__tagflags>>(
                &'__tagflags mut self,
                #walker: &mut #krate::Walker<'__tagflags, '_, __V>,
            ) {
                #(#visits)*
            }
        }

        impl #impl_generics #krate::FlagField for #ident #ty_generics #where_clause {
            fn accept<'__tagflags, __V: #krate::FieldVisitor<'__tagflags>>(
                &'__tagflags mut self,
                field: &#krate::FieldInfo,
                walker: &mut #krate::Walker<'__tagflags, '_, __V>,
            ) {
                walker.nested(field, self);
            }
        }
    }
}

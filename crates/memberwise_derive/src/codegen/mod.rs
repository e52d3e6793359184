//! Code generation for the Record derive macro.

mod record;

use crate::parse::RecordInput;
use darling::FromDeriveInput;
use proc_macro2::TokenStream;
use syn::DeriveInput;

/// Main entry point for code generation.
pub fn expand(input: &DeriveInput) -> syn::Result<TokenStream> {
    let parsed = RecordInput::from_derive_input(input)
        .map_err(|e| syn::Error::new_spanned(input, e.to_string()))?;

    for field in parsed.fields() {
        if field.base
            && (field.rename.is_some()
                || field.skip
                || field.identity
                || field.opaque
                || field.compare.is_some())
        {
            return Err(syn::Error::new_spanned(
                field.ident(),
                "#[record(base)] cannot be combined with other member options. \
                 The members of a base record are spliced into the parent as declared.",
            ));
        }

        if field.identity && field.compare.is_some() {
            return Err(syn::Error::new_spanned(
                field.ident(),
                "#[record(identity)] and #[record(compare)] cannot be used together",
            ));
        }
    }

    for property in &parsed.properties {
        if property.identity && property.compare.is_some() {
            return Err(syn::Error::new_spanned(
                &property.get,
                "property options `identity` and `compare` cannot be used together",
            ));
        }
    }

    record::generate(&parsed)
}

//! `Record` impl generation.
//!
//! Each member becomes one `Accessor` registration inside `describe`, so
//! name lookup happens once when the table is built and never again.

use crate::parse::{FieldInput, PropertyInput, RecordInput};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Path, Type};

/// Generate the `Record` trait implementation.
pub fn generate(input: &RecordInput) -> syn::Result<TokenStream> {
    let struct_name = &input.ident;
    let krate = runtime_crate(input);
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let fields = input.fields();

    let properties = input
        .properties
        .iter()
        .map(|p| generate_property(&krate, p));

    let members = fields
        .iter()
        .filter(|f| f.is_member())
        .map(|f| generate_field(&krate, f));

    let has_members = !input.properties.is_empty() || fields.iter().any(|f| f.is_member() || f.base);
    let table = if has_members {
        quote!(table)
    } else {
        quote!(_table)
    };

    let bases = fields.iter().filter(|f| f.base).map(|f| {
        let ident = f.ident();
        let ty = &f.ty;
        quote! {
            table.base::<#ty>(|r| &r.#ident, |r| &mut r.#ident)?;
        }
    });

    Ok(quote! {
        impl #impl_generics #krate::Record for #struct_name #ty_generics #where_clause {
            fn describe(#table: &mut #krate::TableBuilder<Self>) -> #krate::Result<()> {
                #(#properties)*
                #(#members)*
                #(#bases)*
                Ok(())
            }
        }
    })
}

fn runtime_crate(input: &RecordInput) -> TokenStream {
    match &input.krate {
        Some(path) => quote!(#path),
        None => quote!(::memberwise_access),
    }
}

/// Tokens building the `ValueOps` for a member of type `ty`.
fn value_ops(
    krate: &TokenStream,
    ty: &Type,
    opaque: bool,
    identity: bool,
    compare: Option<&Path>,
) -> TokenStream {
    let custom = if identity {
        Some(quote!(<#ty as #krate::Identity>::same))
    } else {
        compare.map(|path| quote!(#path))
    };

    match (opaque, custom) {
        (false, None) => quote!(#krate::ValueOps::<#ty>::standard()),
        (false, Some(eq)) => quote!(#krate::ValueOps::<#ty>::converted(#eq)),
        (true, None) => quote!(#krate::ValueOps::<#ty>::opaque()),
        (true, Some(eq)) => quote!(#krate::ValueOps::<#ty>::opaque_with(#eq)),
    }
}

fn generate_field(krate: &TokenStream, field: &FieldInput) -> TokenStream {
    let ident = field.ident();
    let ty = &field.ty;
    let name = field.member_name();
    let ops = value_ops(
        krate,
        ty,
        field.opaque,
        field.identity,
        field.compare.as_ref(),
    );

    quote! {
        table.add(#krate::Accessor::<Self>::field::<#ty>(
            #name,
            |r| &r.#ident,
            |r| &mut r.#ident,
            #ops,
        ));
    }
}

fn generate_property(krate: &TokenStream, property: &PropertyInput) -> TokenStream {
    let name = &property.name;

    let Some(set) = &property.set else {
        return quote! {
            table.read_only(#name);
        };
    };

    let ty = &property.ty;
    let get = &property.get;
    let ops = value_ops(
        krate,
        ty,
        property.opaque,
        property.identity,
        property.compare.as_ref(),
    );

    quote! {
        table.add(#krate::Accessor::<Self>::property::<#ty>(
            #name,
            #get,
            #set,
            #ops,
        ));
    }
}

//! Parsing logic for the Record derive macro.

use darling::{FromDeriveInput, FromField, FromMeta, ast};
use syn::{Generics, Ident, Path, Type, Visibility};

/// Parsed struct-level options.
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(record), supports(struct_named))]
pub struct RecordInput {
    /// The struct identifier.
    pub ident: Ident,

    /// Generic parameters.
    pub generics: Generics,

    /// Struct data (fields).
    pub data: ast::Data<(), FieldInput>,

    /// Path to the runtime crate (e.g., `#[record(crate = "::memberwise::access")]`).
    #[darling(default, rename = "crate")]
    pub krate: Option<Path>,

    /// Accessor-backed members (`#[record(property(...))]`).
    #[darling(multiple, rename = "property")]
    pub properties: Vec<PropertyInput>,
}

impl RecordInput {
    /// Get the fields as a vector.
    pub fn fields(&self) -> Vec<&FieldInput> {
        self.data
            .as_ref()
            .take_struct()
            .map(|s| s.fields.to_vec())
            .unwrap_or_default()
    }
}

/// A property declared at struct level.
#[derive(Debug, FromMeta)]
pub struct PropertyInput {
    /// Member name.
    pub name: String,

    /// Value type produced by the getter and consumed by the setter.
    pub ty: Type,

    /// Getter, `fn(&Self) -> ty`.
    pub get: Path,

    /// Setter, `fn(&mut Self, ty)`. Properties without one are read-only.
    #[darling(default)]
    pub set: Option<Path>,

    /// Compare by identity instead of `PartialEq`.
    #[darling(default)]
    pub identity: bool,

    /// Custom comparison function, `fn(&ty, &ty) -> bool`.
    #[darling(default)]
    pub compare: Option<Path>,

    /// Carry the value as an opaque dynamic value.
    #[darling(default)]
    pub opaque: bool,
}

/// Parsed field-level options.
#[derive(Debug, FromField)]
#[darling(attributes(record))]
pub struct FieldInput {
    /// Field identifier.
    pub ident: Option<Ident>,

    /// Field visibility.
    pub vis: Visibility,

    /// Field type.
    pub ty: Type,

    /// Member name to use instead of the field name.
    #[darling(default)]
    pub rename: Option<String>,

    /// Hide a public field.
    #[darling(default)]
    pub skip: bool,

    /// Compare by identity instead of `PartialEq`.
    #[darling(default)]
    pub identity: bool,

    /// Custom comparison function, `fn(&ty, &ty) -> bool`.
    #[darling(default)]
    pub compare: Option<Path>,

    /// Carry the value as an opaque dynamic value.
    #[darling(default)]
    pub opaque: bool,

    /// Splice the members of this record field into the parent.
    #[darling(default)]
    pub base: bool,
}

impl FieldInput {
    /// Get the field identifier (panics if None).
    pub fn ident(&self) -> &Ident {
        self.ident.as_ref().expect("named field required")
    }

    /// Get the member name for this field.
    pub fn member_name(&self) -> String {
        self.rename.clone().unwrap_or_else(|| {
            self.ident()
                .to_string()
                .trim_start_matches("r#")
                .to_owned()
        })
    }

    /// Public, non-skipped, non-base fields become members.
    pub fn is_member(&self) -> bool {
        !self.skip && !self.base && matches!(self.vis, Visibility::Public(_))
    }
}

//! Member descriptors.

use std::fmt;

use memberwise_foundation::Type;

/// Whether a member is backed by accessor functions or by a struct field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MemberKind {
    /// Getter/setter pair.
    Property,
    /// Public struct field.
    Field,
}

/// Description of one readable and writable named member of a record type.
///
/// Owned by the accessor table of the record that declares it. Holds no
/// reference to any instance.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct MemberDescriptor {
    name: &'static str,
    declared_type: Type,
    kind: MemberKind,
    declaring_record: &'static str,
}

impl MemberDescriptor {
    /// Creates a descriptor.
    #[must_use]
    pub fn new(
        name: &'static str,
        declared_type: Type,
        kind: MemberKind,
        declaring_record: &'static str,
    ) -> Self {
        Self {
            name,
            declared_type,
            kind,
            declaring_record,
        }
    }

    /// The member name, unique within its record's table.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// The static type of the member's value.
    #[must_use]
    pub const fn declared_type(&self) -> &Type {
        &self.declared_type
    }

    /// Property or field.
    #[must_use]
    pub const fn kind(&self) -> MemberKind {
        self.kind
    }

    /// Type name of the record that declares the member.
    ///
    /// For members spliced in from a base record this is the base record.
    #[must_use]
    pub const fn declaring_record(&self) -> &'static str {
        self.declaring_record
    }

    /// Returns true for property members.
    #[must_use]
    pub const fn is_property(&self) -> bool {
        matches!(self.kind, MemberKind::Property)
    }

    /// Returns true for field members.
    #[must_use]
    pub const fn is_field(&self) -> bool {
        matches!(self.kind, MemberKind::Field)
    }
}

impl fmt::Display for MemberDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            MemberKind::Property => "property",
            MemberKind::Field => "field",
        };
        write!(f, "{kind} {}: {}", self.name, self.declared_type)
    }
}

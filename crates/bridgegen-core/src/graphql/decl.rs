use super::{TypeKind, TypeRef};

/// A single type declaration from the parsed schema.
#[derive(Debug, Clone)]
pub struct TypeDecl {
    pub name: String,

    pub kind: TypeKind,

    pub description: String,

    /// Field declarations, in declaration order. Empty for scalars and enums.
    pub fields: Vec<FieldDecl>,

    /// Enum values, in declaration order. Empty unless `kind` is `Enum`.
    pub enum_values: Vec<EnumValueDecl>,

    /// Names of the interfaces this type implements.
    pub implements: Vec<String>,
}

impl TypeDecl {
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            description: String::new(),
            fields: vec![],
            enum_values: vec![],
            implements: vec![],
        }
    }

    pub fn field(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.fields.push(FieldDecl {
            name: name.into(),
            ty,
            description: String::new(),
        });
        self
    }

    pub fn value(mut self, name: impl Into<String>) -> Self {
        self.enum_values.push(EnumValueDecl {
            name: name.into(),
            description: String::new(),
        });
        self
    }

    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.implements.push(interface.into());
        self
    }
}

/// A field declaration on an object-like type.
#[derive(Debug, Clone)]
pub struct FieldDecl {
    /// The schema-side field name.
    pub name: String,

    /// The declared type reference.
    pub ty: TypeRef,

    pub description: String,
}

/// A value declaration on an enum type.
#[derive(Debug, Clone)]
pub struct EnumValueDecl {
    pub name: String,

    pub description: String,
}

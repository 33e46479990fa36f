use std::fmt;

/// Kind tag of a schema type declaration.
///
/// Kinds arrive from the parser as tags; anything the engine does not
/// recognize is carried as [`TypeKind::Other`] and rejected with a fatal
/// error the moment a field of that kind must be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeKind {
    Scalar,
    Object,
    InputObject,
    Interface,
    Union,
    Enum,
    Other(String),
}

impl TypeKind {
    /// Object-like kinds: the ones that produce struct values at the storage
    /// boundary and mark a field as a relation.
    pub fn is_object_like(&self) -> bool {
        matches!(self, TypeKind::Object | TypeKind::InputObject)
    }
}

/// A field's declared type reference with its nullability and list modifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    Named { name: String, non_null: bool },
    List { of: Box<TypeRef>, non_null: bool },
}

impl TypeRef {
    /// A nullable named type: `User`.
    pub fn named(name: impl Into<String>) -> Self {
        TypeRef::Named {
            name: name.into(),
            non_null: false,
        }
    }

    /// A non-null named type: `User!`.
    pub fn required(name: impl Into<String>) -> Self {
        TypeRef::Named {
            name: name.into(),
            non_null: true,
        }
    }

    /// A nullable list: `[T]`.
    pub fn list(of: TypeRef) -> Self {
        TypeRef::List {
            of: Box::new(of),
            non_null: false,
        }
    }

    /// A non-null list: `[T]!`.
    pub fn required_list(of: TypeRef) -> Self {
        TypeRef::List {
            of: Box::new(of),
            non_null: true,
        }
    }

    /// The innermost named type.
    pub fn name(&self) -> &str {
        match self {
            TypeRef::Named { name, .. } => name,
            TypeRef::List { of, .. } => of.name(),
        }
    }

    /// Returns `true` if any level of this reference is a list.
    pub fn is_list(&self) -> bool {
        matches!(self, TypeRef::List { .. })
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named { name, non_null } => {
                write!(f, "{}{}", name, if *non_null { "!" } else { "" })
            }
            TypeRef::List { of, non_null } => {
                write!(f, "[{}]{}", of, if *non_null { "!" } else { "" })
            }
        }
    }
}

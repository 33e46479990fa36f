//! Input contract for the parsed API schema.
//!
//! The schema parser is an external collaborator; it hands the engine a fully
//! materialized [`Document`]. Nothing here is mutated after construction.

mod decl;
pub use decl::{EnumValueDecl, FieldDecl, TypeDecl};

mod ty;
pub use ty::{TypeKind, TypeRef};

use indexmap::IndexMap;

/// A parsed API schema: ordered type declarations plus the names of the three
/// root operation types.
#[derive(Debug, Default)]
pub struct Document {
    /// Type declarations, keyed by name, in declaration order.
    pub types: IndexMap<String, TypeDecl>,

    /// Name of the query root type, if the schema declares one.
    pub query: Option<String>,

    /// Name of the mutation root type, if the schema declares one.
    pub mutation: Option<String>,

    /// Name of the subscription root type, if the schema declares one.
    pub subscription: Option<String>,
}

impl Document {
    /// Adds a type declaration, keyed by its name.
    pub fn insert(&mut self, decl: TypeDecl) {
        self.types.insert(decl.name.clone(), decl);
    }

    /// Looks up a type declaration by name.
    pub fn type_decl(&self, name: &str) -> Option<&TypeDecl> {
        self.types.get(name)
    }

    /// Iterates type declarations in declaration order.
    pub fn type_decls(&self) -> impl Iterator<Item = &TypeDecl> {
        self.types.values()
    }

    /// Returns `true` if `name` is one of the root operation types.
    pub fn is_operation_root(&self, name: &str) -> bool {
        [&self.query, &self.mutation, &self.subscription]
            .into_iter()
            .any(|root| root.as_deref() == Some(name))
    }
}

/// A storage column descriptor.
///
/// The default value doubles as the "unmatched" marker: a reconciled API
/// field that found no storage counterpart carries an empty `Field`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Field {
    /// The generated struct field name, e.g. `AuthorID`.
    pub name: String,

    /// Raw storage type text, e.g. `uint`, `string`, `null.Int`, `types.JSON`.
    /// Nullability is encoded in the type text by the storage generator.
    pub ty: String,

    /// Set when the column is a foreign key.
    pub relationship: Option<Relationship>,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            relationship: None,
        }
    }

    pub fn relates_to(mut self, model: impl Into<String>, table: impl Into<String>) -> Self {
        self.relationship = Some(Relationship {
            name: model.into(),
            table_name: table.into(),
        });
        self
    }

    /// Returns `true` if no storage column was matched.
    pub fn is_unmatched(&self) -> bool {
        self.name.is_empty()
    }
}

/// The relation edge carried by a foreign-key column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// The related storage model name, e.g. `User`.
    pub name: String,

    /// The related table name, e.g. `users`.
    pub table_name: String,
}

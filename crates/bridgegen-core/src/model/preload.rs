/// One eager-loading entry: API field key to storage relation accessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preload {
    /// The schema-side field name.
    pub key: String,

    pub column: ColumnSetting,
}

/// Describes the storage-side accessor for a preloaded relation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSetting {
    /// Accessor path, e.g. `models.PostRels.Author`.
    pub name: String,

    /// The related table name.
    pub relationship_model_name: String,

    /// True when the relation yields a single value; plural relations have no
    /// direct id column.
    pub id_available: bool,
}

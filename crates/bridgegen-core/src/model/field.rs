use super::Convert;
use crate::boiler;

/// A reconciled field: the API-side declaration matched to its storage
/// column, classified, and annotated with a conversion directive.
#[derive(Debug, Clone, Default)]
pub struct Field {
    /// Normalized API-side name, e.g. `AuthorID`.
    pub name: String,

    /// The original schema-side name (or configured override), e.g. `authorId`.
    pub json_name: String,

    pub plural_name: String,

    /// Short display type, e.g. `*User` or `string`.
    pub ty: String,

    /// `ty` without the pointer marker and with dots flattened, used as an
    /// enum lookup key and in generated helper names.
    pub ty_without_pointer: String,

    /// The matched storage column; empty if unmatched.
    pub column: boiler::Field,

    pub is_relation: bool,
    pub is_primary_id: bool,
    pub is_number_id: bool,
    pub is_primary_number_id: bool,
    pub is_plural: bool,

    /// Filter composition markers for `or`/`and` fields.
    pub is_or: bool,
    pub is_and: bool,

    /// Name of the related entity, resolved after all entities exist.
    /// Set only for fields whose column carries a relation edge.
    pub relation_entity: Option<String>,

    pub convert: Convert,

    pub description: String,
}

/// Placeholder for the source expression in a conversion template.
///
/// The renderer substitutes the receiver expression for every occurrence.
pub const VALUE: &str = "VALUE";

/// A pair of expression templates describing how to convert a field's value
/// between the storage and API representations.
///
/// When `is_custom` is false both directions are the identity and the
/// templates are empty. The normalized type texts are recorded either way;
/// downstream consumers use them as conversion-function lookup keys even for
/// identity fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Convert {
    pub is_custom: bool,

    /// API to storage template: either a bare conversion-function name or an
    /// expression containing a single [`VALUE`] placeholder.
    pub to_storage: String,

    /// Storage to API template, same shape as `to_storage`.
    pub to_api: String,

    /// Normalized API type text, e.g. `PointerUser`.
    pub api_type_text: String,

    /// Normalized storage type text, e.g. `NullDotUint`.
    pub storage_type_text: String,
}

impl Convert {
    /// Returns `true` if both directions are the identity.
    pub fn is_identity(&self) -> bool {
        !self.is_custom
    }
}

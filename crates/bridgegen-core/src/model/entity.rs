use super::{Field, Preload};
use crate::{boiler, graphql};

/// A reconciled API entity paired with its storage model descriptor.
///
/// Created once per schema type declaration during extraction, mutated in
/// place by the reconciliation and preload phases, immutable afterward.
#[derive(Debug, Clone, Default)]
pub struct Entity {
    pub name: String,

    pub plural_name: String,

    pub description: String,

    /// The matched storage model descriptor (shared by an entity and its
    /// input/where/filter/payload variants).
    pub boiler: boiler::Model,

    /// The primary key's storage type text, set once a primary id field is
    /// reconciled.
    pub primary_key_type: String,

    /// Reconciled fields, in declaration order.
    pub fields: Vec<Field>,

    /// Role flags. Exactly one of `is_normal`, `is_input`, `is_filter`,
    /// `is_where`, `is_payload` is true; the create/update/normal-input flags
    /// refine `is_input`.
    pub is_normal: bool,
    pub is_input: bool,
    pub is_create_input: bool,
    pub is_update_input: bool,
    pub is_normal_input: bool,
    pub is_payload: bool,
    pub is_where: bool,
    pub is_filter: bool,

    /// True for plain entities, the only ones that get preload maps.
    pub is_preloadable: bool,

    /// Preload entries, sorted by key.
    pub preloads: Vec<Preload>,

    pub has_organization_id: bool,
    pub has_user_organization_id: bool,
    pub has_user_id: bool,
    pub has_string_primary_id: bool,

    /// Names of the interfaces this entity implements.
    pub implements: Vec<String>,

    /// Raw field declarations retained between extraction and reconciliation.
    pub(crate) raw_fields: Vec<graphql::FieldDecl>,
}

impl Entity {
    /// Finds a field by normalized name, ignoring case.
    pub fn find_field(&self, name: &str) -> Option<&Field> {
        self.fields
            .iter()
            .find(|field| field.name.eq_ignore_ascii_case(name))
    }
}

use indexmap::IndexMap;
use serde::Deserialize;

/// Naming-override configuration for a generation run.
///
/// Loaded from the generator's config file; all overrides are optional and
/// the defaults reproduce the plain convention-driven behavior.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Package qualifier applied to generated API model types.
    pub model_package: String,

    /// Maps a schema type name to a concrete model type path, overriding the
    /// synthesized one, e.g. `Time` -> `time.Time`.
    pub type_overrides: IndexMap<String, String>,

    /// Per-entity, per-field name overrides, keyed by entity name then by
    /// schema-side field name.
    pub field_renames: IndexMap<String, IndexMap<String, String>>,

    /// Enables a fallback strategy for a known defect in sub-model filtering
    /// on one storage backend. Opaque to the engine; toggled through to the
    /// output.
    pub sub_model_filter_fallback: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model_package: "graphql_models".to_string(),
            type_overrides: IndexMap::new(),
            field_renames: IndexMap::new(),
            sub_model_filter_fallback: false,
        }
    }
}

impl Config {
    /// The configured name for a field, if one is set.
    pub fn field_name(&self, entity: &str, field: &str) -> Option<&str> {
        self.field_renames
            .get(entity)
            .and_then(|fields| fields.get(field))
            .map(String::as_str)
    }

    /// The configured concrete type for a schema type, if one is set.
    pub fn type_override(&self, ty: &str) -> Option<&str> {
        self.type_overrides.get(ty).map(String::as_str)
    }
}

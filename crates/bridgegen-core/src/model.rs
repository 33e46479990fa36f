//! The enriched output model.
//!
//! This is the in-memory contract between the reconciliation engine and the
//! rendering collaborator: entities with classified, conversion-annotated
//! fields, preload maps, and the schema extras (enums, interfaces, scalars).
//! Everything here is plain data; it is built once by [`crate::Builder`] and
//! immutable afterward.

mod entity;
pub use entity::Entity;

mod field;
pub use field::Field;

mod convert;
pub use convert::{Convert, VALUE};

mod preload;
pub use preload::{ColumnSetting, Preload};

mod extras;
pub use extras::{Enum, EnumValue, Interface};

/// The fully reconciled model handed to the renderer.
#[derive(Debug, Default)]
pub struct Output {
    /// Reconciled entities, sorted by name.
    pub entities: Vec<Entity>,

    pub enums: Vec<Enum>,

    pub interfaces: Vec<Interface>,

    /// Names of the scalar types declared by the schema.
    pub scalars: Vec<String>,

    /// True if any entity has a string-typed primary key.
    pub has_string_primary_ids: bool,

    /// Fallback strategy flag for sub-model filtering, toggled through from
    /// the configuration; the engine does not interpret it.
    pub sub_model_filter_fallback: bool,
}

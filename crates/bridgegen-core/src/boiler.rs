//! Persistence descriptor index.
//!
//! Descriptors are extracted from the generated storage layer by an external
//! collaborator and handed to the engine as a fully materialized [`Catalog`].
//! The catalog is built once per generation run and read-only afterward;
//! reconciled fields hold copies of [`Field`] descriptors, never references
//! back into the catalog.

mod model;
pub use model::Model;

mod field;
pub use field::{Field, Relationship};

/// The full set of storage model descriptors, with case-insensitive lookup.
#[derive(Debug, Default)]
pub struct Catalog {
    pub models: Vec<Model>,
}

impl Catalog {
    pub fn new(models: Vec<Model>) -> Self {
        Self { models }
    }

    /// Looks up a storage model by name, ignoring case.
    pub fn find(&self, name: &str) -> Option<&Model> {
        self.models
            .iter()
            .find(|model| model.name.eq_ignore_ascii_case(name))
    }
}

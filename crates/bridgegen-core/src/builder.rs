mod convert;
pub use convert::ConvertCatalog;

mod extract;
mod fields;
mod preload;

use crate::{boiler, graphql, model::Output, Config, Result};
use tracing::debug;

/// Reconciles a parsed API schema with a storage descriptor catalog into the
/// enriched model consumed by the renderer.
///
/// The build is a single synchronous pass: extract entities, reconcile every
/// field, derive preload maps, sort. Both inputs must be fully materialized
/// before `build` is called; neither is mutated.
#[derive(Debug, Default)]
pub struct Builder {
    config: Config,

    functions: ConvertCatalog,
}

impl Builder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            functions: ConvertCatalog::default(),
        }
    }

    /// Replaces the conversion-function catalog.
    pub fn functions(&mut self, functions: ConvertCatalog) -> &mut Self {
        self.functions = functions;
        self
    }

    /// Runs the reconciliation.
    ///
    /// Returns `Ok(None)` when no schema type could be paired with a storage
    /// model, so callers can short-circuit instead of rendering empty files.
    pub fn build(
        &self,
        document: &graphql::Document,
        catalog: &boiler::Catalog,
    ) -> Result<Option<Output>> {
        debug!("extracting schema extras");
        let (interfaces, enums, scalars) = extract::extras_from_document(document);

        debug!("pairing schema types with storage models");
        let mut entities = extract::entities_from_document(document, catalog);

        debug!("reconciling fields");
        fields::reconcile(
            document,
            &self.config,
            &enums,
            &self.functions,
            &mut entities,
        )?;

        debug!("building preload maps");
        preload::build(&mut entities);

        entities.sort_by(|a, b| a.name.cmp(&b.name));

        if entities.is_empty() {
            debug!("no entities paired with a storage model; nothing to generate");
            return Ok(None);
        }

        let has_string_primary_ids = entities.iter().any(|entity| entity.has_string_primary_id);

        Ok(Some(Output {
            entities,
            enums,
            interfaces,
            scalars,
            has_string_primary_ids,
            sub_model_filter_fallback: self.config.sub_model_filter_fallback,
        }))
    }
}

use crate::{
    boiler,
    graphql::{Document, TypeKind},
    model::{Entity, Enum, EnumValue, Interface},
    name,
};
use tracing::warn;

/// Prefix marking generator-internal type declarations.
const RESERVED_PREFIX: &str = "_";

/// Walks the document's type declarations and produces the initial entity
/// list, in declaration order, each paired with its storage model.
///
/// Input/Where/Filter/Payload variants without a storage counterpart are
/// expected and skipped silently; a plain entity without one is dropped with
/// a warning.
pub(super) fn entities_from_document(
    document: &Document,
    catalog: &boiler::Catalog,
) -> Vec<Entity> {
    let mut entities = vec![];

    for decl in document.type_decls() {
        if decl.name.starts_with(RESERVED_PREFIX) {
            continue;
        }
        if !decl.kind.is_object_like() {
            continue;
        }
        if document.is_operation_root(&decl.name) {
            continue;
        }

        let is_input = name::has_role_suffix(&decl.name, "Input");
        let is_create_input = name::has_role_suffix(&decl.name, "CreateInput");
        let is_update_input = name::has_role_suffix(&decl.name, "UpdateInput");
        let is_filter = name::has_role_suffix(&decl.name, "Filter");
        let is_where = name::has_role_suffix(&decl.name, "Where");
        let is_payload = name::has_role_suffix(&decl.name, "Payload");

        let base = name::base_entity_name(&decl.name);
        let Some(boiler) = catalog.find(base) else {
            if is_input || is_where || is_filter || is_payload {
                continue;
            }
            warn!(name = %decl.name, "skipping type: no storage model found");
            continue;
        };

        let is_plain = !is_input && !is_where && !is_filter && !is_payload;

        entities.push(Entity {
            name: decl.name.clone(),
            plural_name: name::plural(&decl.name),
            description: decl.description.clone(),
            boiler: boiler.clone(),
            is_input,
            is_create_input,
            is_update_input,
            is_normal_input: is_input && !is_create_input && !is_update_input,
            is_filter,
            is_where,
            is_payload,
            is_normal: is_plain,
            is_preloadable: is_plain,
            implements: decl.implements.clone(),
            raw_fields: decl.fields.clone(),
            ..Entity::default()
        });
    }

    entities
}

/// Extracts the flat schema extras: interfaces (including unions), enums with
/// their values, and scalar names.
pub(super) fn extras_from_document(
    document: &Document,
) -> (Vec<Interface>, Vec<Enum>, Vec<String>) {
    let mut interfaces = vec![];
    let mut enums = vec![];
    let mut scalars = vec![];

    for decl in document.type_decls() {
        match &decl.kind {
            TypeKind::Interface | TypeKind::Union => interfaces.push(Interface {
                name: decl.name.clone(),
                description: decl.description.clone(),
            }),
            TypeKind::Enum => {
                if decl.name.starts_with(RESERVED_PREFIX) {
                    continue;
                }
                enums.push(Enum {
                    name: decl.name.clone(),
                    description: decl.description.clone(),
                    values: decl
                        .enum_values
                        .iter()
                        .map(|value| EnumValue {
                            name: value.name.clone(),
                            name_lower: name::lower_camel(&value.name.to_lowercase()),
                            description: value.description.clone(),
                        })
                        .collect(),
                });
            }
            TypeKind::Scalar => scalars.push(decl.name.clone()),
            _ => {}
        }
    }

    (interfaces, enums, scalars)
}

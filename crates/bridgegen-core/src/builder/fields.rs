use super::{convert, ConvertCatalog};
use crate::{
    graphql::{Document, FieldDecl, TypeKind},
    model::{Entity, Enum, Field},
    name, Config, Error, Result,
};
use tracing::warn;

/// Pagination artifact from legacy Relay schemas; carries no storage meaning.
const CLIENT_MUTATION_ID: &str = "clientMutationId";

/// Reserved composition field names on filter/where types.
const FILTER_RESERVED_NAMES: [&str; 4] = ["and", "or", "search", "where"];

/// Package qualifiers stripped from display types so generated code reads
/// naturally.
const IGNORED_TYPE_QUALIFIERS: [&str; 3] = ["graphql_models", "models", "boilergql"];

/// Populates every entity's fields from its raw schema declarations, then
/// runs the linking pass.
///
/// Fields are processed in declaration order; callers may depend on that for
/// stable output. A field without a storage counterpart is dropped (with a
/// warning) unless the entity is a payload/filter/where variant.
pub(super) fn reconcile(
    document: &Document,
    config: &Config,
    enums: &[Enum],
    functions: &ConvertCatalog,
    entities: &mut [Entity],
) -> Result<()> {
    for entity in entities.iter_mut() {
        let raw_fields = entity.raw_fields.clone();
        for decl in &raw_fields {
            reconcile_field(document, config, enums, functions, entity, decl)?;
        }
    }

    link_entities(entities);

    Ok(())
}

fn reconcile_field(
    document: &Document,
    config: &Config,
    enums: &[Enum],
    functions: &ConvertCatalog,
    entity: &mut Entity,
    decl: &FieldDecl,
) -> Result<()> {
    let (long_type, kind) = resolve_field_type(document, config, decl)?;

    let json_name = config
        .field_name(&entity.name, &decl.name)
        .unwrap_or(&decl.name)
        .to_string();
    let field_name = name::api_field_name(&json_name);

    if field_name.eq_ignore_ascii_case(CLIENT_MUTATION_ID) {
        return Ok(());
    }

    let is_relation = kind.is_object_like();
    let short = short_type(&long_type);

    let column = entity
        .boiler
        .find_field_or_foreign_key(&field_name, is_relation)
        .cloned()
        .unwrap_or_default();

    let is_string = column.ty.to_lowercase().contains("string");
    let is_primary_id = field_name.eq_ignore_ascii_case("id");
    let is_number_id = field_name.ends_with("ID") && !is_string;
    let is_primary_number_id = is_primary_id && !is_string;
    let is_primary_string_id = is_primary_id && is_string;

    if is_primary_string_id {
        entity.has_string_primary_id = true;
    }
    if is_primary_number_id || is_primary_string_id {
        entity.primary_key_type = column.ty.clone();
    }

    if column.ty.is_empty() && should_warn_missing_column(entity, &field_name) {
        warn!(
            entity = %entity.name,
            field = %field_name,
            "no storage type available for field"
        );
    }

    if column.is_unmatched() && !(entity.is_payload || entity.is_filter || entity.is_where) {
        warn!(
            entity = %entity.name,
            field = %field_name,
            "no storage column matched; dropping field"
        );
        return Ok(());
    }

    let mut field = Field {
        json_name,
        ty: short.clone(),
        ty_without_pointer: short.trim_start_matches('*').replace('.', "Dot"),
        column,
        is_relation,
        is_primary_id,
        is_number_id,
        is_primary_number_id,
        is_or: field_name.eq_ignore_ascii_case("or"),
        is_and: field_name.eq_ignore_ascii_case("and"),
        is_plural: name::is_plural(&field_name),
        plural_name: name::plural(&field_name),
        description: decl.description.clone(),
        name: field_name,
        ..Field::default()
    };
    field.convert = convert::synthesize(enums, functions, &entity.name, &field);

    entity.fields.push(field);

    Ok(())
}

/// Resolves a field's declared type to its long type text plus the declared
/// kind of the referenced type.
///
/// The long text mimics the generated model package layout so that
/// [`short_type`] can reduce it to a display form. Unrecognized kinds are a
/// hard failure: they mean the generator does not understand this schema
/// dialect.
fn resolve_field_type(
    document: &Document,
    config: &Config,
    decl: &FieldDecl,
) -> Result<(String, TypeKind)> {
    let type_name = decl.ty.name();
    let Some(type_decl) = document.type_decl(type_name) else {
        return Err(Error::invalid_schema(format!(
            "field `{}` references undeclared type `{}`",
            decl.name, type_name
        )));
    };

    let overridden = config.type_override(type_name);
    let base = match overridden {
        Some(path) => path.to_string(),
        None => match &type_decl.kind {
            TypeKind::Scalar => "string".to_string(),
            TypeKind::Interface
            | TypeKind::Union
            | TypeKind::Enum
            | TypeKind::Object
            | TypeKind::InputObject => {
                format!("{}.{}", config.model_package, name::upper_camel(type_name))
            }
            TypeKind::Other(kind) => return Err(Error::unsupported_kind(kind.clone())),
        },
    };

    let mut ty = apply_modifiers(&decl.ty, base);

    // Object-typed values cross the storage boundary behind a pointer; they
    // are never required to be non-null there. Lists stay bare collections.
    if type_decl.kind.is_object_like()
        && overridden.is_none()
        && !ty.starts_with('*')
        && !decl.ty.is_list()
    {
        ty = format!("*{ty}");
    }

    Ok((ty, type_decl.kind.clone()))
}

/// Re-applies the declaration's list/nullability modifiers on top of the
/// resolved base type. List nullability is absorbed by the collection itself.
fn apply_modifiers(ty: &crate::graphql::TypeRef, base: String) -> String {
    use crate::graphql::TypeRef;

    match ty {
        TypeRef::List { of, .. } => format!("[]{}", apply_modifiers(of, base)),
        TypeRef::Named { non_null, .. } => {
            if *non_null {
                base
            } else {
                format!("*{base}")
            }
        }
    }
}

/// Reduces a long type text to `[pointer-marker]Qualifier.TypeName`, then
/// drops known internal qualifiers.
pub(super) fn short_type(long_type: &str) -> String {
    let last_part = long_type.rsplit('/').next().unwrap_or(long_type);
    let is_pointer = long_type.starts_with('*');

    if !last_part.contains('.') {
        return long_type.to_string();
    }

    let mut short = last_part.strip_prefix('*').unwrap_or(last_part).to_string();
    for qualifier in IGNORED_TYPE_QUALIFIERS {
        if let Some(rest) = short.strip_prefix(&format!("{qualifier}.")) {
            short = rest.to_string();
        }
    }

    if is_pointer {
        format!("*{short}")
    } else {
        short
    }
}

/// Decides whether an unmatched field deserves a warning.
///
/// Payload fields, plural field names, and the reserved composition names on
/// filter/where types legitimately lack a storage column; warning on those
/// would be noise. Required behavior, not incidental.
fn should_warn_missing_column(entity: &Entity, field_name: &str) -> bool {
    if entity.is_payload {
        return false;
    }
    if name::is_plural(field_name) {
        return false;
    }
    if (entity.is_filter || entity.is_where)
        && FILTER_RESERVED_NAMES
            .iter()
            .any(|reserved| field_name.eq_ignore_ascii_case(reserved))
    {
        return false;
    }
    true
}

/// Second pass, after all entities have all fields: compute the convenience
/// flags and resolve relation back-references by name.
fn link_entities(entities: &mut [Entity]) {
    for entity in entities.iter_mut() {
        entity.has_organization_id = entity.find_field("organizationId").is_some();
        entity.has_user_organization_id = entity.find_field("userOrganizationId").is_some();
        entity.has_user_id = entity.find_field("userId").is_some();
    }

    // Relation targets are looked up among the plain entities by backing
    // table name; variants share the plain entity's storage model.
    let plain: Vec<(String, String)> = entities
        .iter()
        .filter(|entity| entity.is_normal)
        .map(|entity| (entity.boiler.table_name.clone(), entity.name.clone()))
        .collect();

    for entity in entities.iter_mut() {
        for field in entity.fields.iter_mut() {
            let Some(relationship) = &field.column.relationship else {
                continue;
            };
            field.relation_entity = plain
                .iter()
                .find(|(table, _)| table.eq_ignore_ascii_case(&relationship.table_name))
                .map(|(_, name)| name.clone());
        }
    }
}

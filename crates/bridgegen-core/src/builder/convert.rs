use crate::{
    model::{Convert, Enum, Field, VALUE},
    name,
};

/// Names of the helper conversion functions referenced by synthesized
/// directives.
///
/// The defaults match the runtime helper package shipped with the renderer;
/// swapping them lets a project point at its own helpers without touching the
/// synthesis rules. Catalog names are emitted unqualified, the renderer
/// decides how to import them.
#[derive(Debug, Clone)]
pub struct ConvertCatalog {
    /// Unboxes an optional API-side string id.
    pub pointer_string_to_string: String,

    /// Decodes an opaque id into a nullable storage integer.
    pub id_to_null_storage: String,

    /// Narrows a nullable unsigned value to the nullable signed storage type.
    pub null_uint_to_null_int: String,

    /// Decodes an opaque id into a non-null storage integer.
    pub id_to_storage: String,

    /// Suffix of the per-entity opaque-id encoder, prefixed with the entity
    /// name, e.g. `UserIDToGraphQL`.
    pub id_to_api_suffix: String,
}

impl Default for ConvertCatalog {
    fn default() -> Self {
        Self {
            pointer_string_to_string: "PointerStringToString".to_string(),
            id_to_null_storage: "IDToNullBoiler".to_string(),
            null_uint_to_null_int: "NullUintToNullInt".to_string(),
            id_to_storage: "IDToBoiler".to_string(),
            id_to_api_suffix: "IDToGraphQL".to_string(),
        }
    }
}

/// Synthesizes the conversion directives for a reconciled field.
///
/// Three cases, checked in order: enum-typed fields get catalog-style
/// function names, number-id fields get the id codec chain, and any other
/// type mismatch gets a generic `<From>To<To>` function name. Matching types
/// produce the identity directive.
pub(super) fn synthesize(
    enums: &[Enum],
    functions: &ConvertCatalog,
    entity_name: &str,
    field: &Field,
) -> Convert {
    let api_type = &field.ty;
    let storage_type = &field.column.ty;

    let mut convert = Convert {
        api_type_text: api_type_text(api_type),
        storage_type_text: storage_type_text(storage_type),
        ..Convert::default()
    };

    let is_enum = enums
        .iter()
        .any(|decl| decl.name == field.ty_without_pointer);

    if is_enum {
        convert.is_custom = true;
        convert.to_storage = format!("{}To{}", convert.api_type_text, convert.storage_type_text);
        convert.to_api = format!("{}To{}", convert.storage_type_text, convert.api_type_text);
    } else if api_type != storage_type {
        convert.is_custom = true;

        let fk = field.is_number_id && field.column.relationship.is_some();
        if field.is_primary_number_id || fk {
            synthesize_id_chain(functions, entity_name, field, &mut convert);
        } else {
            convert.to_storage =
                format!("{}To{}", convert.api_type_text, convert.storage_type_text);
            convert.to_api = format!("{}To{}", convert.storage_type_text, convert.api_type_text);
        }
    }

    convert
}

/// The number-id chain: unbox the optional API string, decode the opaque id
/// into the storage integer (nullable or not), narrow to signed where the
/// column is signed; on the way out, widen to unsigned and encode with the
/// owning entity's encoder.
fn synthesize_id_chain(
    functions: &ConvertCatalog,
    entity_name: &str,
    field: &Field,
    convert: &mut Convert,
) {
    let storage_type = &field.column.ty;

    convert.to_api = VALUE.to_string();
    convert.to_storage = VALUE.to_string();

    if field.ty.starts_with('*') {
        convert.to_storage = format!("{}({VALUE})", functions.pointer_string_to_string);
    }

    let to_uint = format!("{}ToUint", convert.storage_type_text);
    if to_uint == "IntToUint" {
        convert.to_api = format!("uint({VALUE})");
    } else if to_uint != "UintToUint" {
        convert.to_api = format!("{to_uint}({VALUE})");
    }

    let encoder_owner = if field.is_primary_number_id {
        Some(entity_name)
    } else {
        field
            .column
            .relationship
            .as_ref()
            .map(|relationship| relationship.name.as_str())
    };
    if let Some(owner) = encoder_owner {
        convert.to_api = format!(
            "{owner}{}({})",
            functions.id_to_api_suffix, convert.to_api
        );
    }

    // The integer family is read through the nullable wrapper: `null.Int` is
    // as signed as `int`.
    let family = storage_type.to_lowercase();
    let family = family.strip_prefix("null.").unwrap_or(&family);
    let is_signed_int = family.starts_with("int");

    if storage_type.starts_with("null") {
        convert.to_storage = format!("{}({})", functions.id_to_null_storage, convert.to_storage);
        if is_signed_int {
            convert.to_storage =
                format!("{}({})", functions.null_uint_to_null_int, convert.to_storage);
        }
    } else {
        convert.to_storage = format!("{}({})", functions.id_to_storage, convert.to_storage);
        if is_signed_int {
            convert.to_storage = format!("int({})", convert.to_storage);
        }
    }
}

/// Normalizes a storage type to its text form: `types.` becomes a `Types`
/// prefix, any remaining dot becomes `Dot`, upper camel overall.
pub(super) fn storage_type_text(ty: &str) -> String {
    let ty = match ty.strip_prefix("types.") {
        Some(rest) => format!("Types{}", name::upper_camel(rest)),
        None => ty.to_string(),
    };
    name::upper_camel(&ty.replace('.', "Dot"))
}

/// Normalizes an API type to its text form: a leading `*` becomes a `Pointer`
/// prefix, upper camel overall.
pub(super) fn api_type_text(ty: &str) -> String {
    match ty.strip_prefix('*') {
        Some(rest) => format!("Pointer{}", name::upper_camel(rest)),
        None => name::upper_camel(ty),
    }
}

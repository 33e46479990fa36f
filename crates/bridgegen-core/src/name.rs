//! Naming and pluralization helpers.
//!
//! The API schema and the storage model follow independently chosen naming
//! conventions; everything in this module is a deterministic, pure bridge
//! between the two. Comparisons elsewhere in the crate are case-insensitive,
//! so these helpers only need to produce a stable normalized form.

use heck::{ToLowerCamelCase, ToUpperCamelCase};

/// Role suffixes recognized on API type names, most specific first.
///
/// The order is a correctness requirement: `FooCreateInput` must be stripped
/// of `CreateInput`, not merely `Input`.
pub const ROLE_SUFFIXES: [&str; 6] = [
    "CreateInput",
    "UpdateInput",
    "Input",
    "Payload",
    "Where",
    "Filter",
];

pub fn upper_camel(s: &str) -> String {
    s.to_upper_camel_case()
}

pub fn lower_camel(s: &str) -> String {
    s.to_lower_camel_case()
}

/// Normalizes a schema-side field name to the API naming convention.
///
/// `Id` and `Url` tokens are rendered as `ID` and `URL`.
pub fn api_field_name(s: &str) -> String {
    upper_camel(s).replace("Id", "ID").replace("Url", "URL")
}

pub fn plural(s: &str) -> String {
    pluralizer::pluralize(s, 2, false)
}

pub fn is_plural(s: &str) -> bool {
    plural(s) == s
}

/// Derives the storage relation accessor from a foreign-key column name.
///
/// `AuthorID` and `author_id` both become `Author`.
pub fn relation_accessor(s: &str) -> String {
    let normalized = api_field_name(s);
    match normalized.strip_suffix("ID") {
        Some(base) => base.to_string(),
        None => normalized,
    }
}

/// Recovers the base entity name from an API type name by stripping role
/// suffixes.
///
/// A name that *is* a role suffix is left untouched, so a type literally
/// named `Payload` is not emptied out.
pub fn base_entity_name(name: &str) -> &str {
    let mut base = name;
    for suffix in ROLE_SUFFIXES {
        base = strip_role_suffix(base, suffix);
    }
    base
}

/// Returns `true` if `name` carries the role suffix without being exactly it.
pub fn has_role_suffix(name: &str, suffix: &str) -> bool {
    name != suffix && name.ends_with(suffix)
}

fn strip_role_suffix<'a>(name: &'a str, suffix: &str) -> &'a str {
    if name == suffix {
        name
    } else {
        name.strip_suffix(suffix).unwrap_or(name)
    }
}

use bridgegen_core::boiler;
use bridgegen_core::graphql::{Document, TypeDecl, TypeKind, TypeRef};
use bridgegen_core::{Builder, Config};

use pretty_assertions::assert_eq;

fn scalar(name: &str) -> TypeDecl {
    TypeDecl::new(name, TypeKind::Scalar)
}

fn document(decls: Vec<TypeDecl>) -> Document {
    let mut document = Document {
        query: Some("Query".to_string()),
        mutation: Some("Mutation".to_string()),
        ..Document::default()
    };
    document.insert(scalar("ID"));
    document.insert(scalar("String"));
    for decl in decls {
        document.insert(decl);
    }
    document
}

fn user_type(name: &str, kind: TypeKind) -> TypeDecl {
    TypeDecl::new(name, kind)
        .field("id", TypeRef::required("ID"))
        .field("name", TypeRef::required("String"))
}

fn user_model() -> boiler::Model {
    boiler::Model::new("User", "users")
        .field(boiler::Field::new("ID", "uint"))
        .field(boiler::Field::new("Name", "string"))
}

/// Schema:
///   User / UserCreateInput / UserUpdateInput / UserInput / UserPayload /
///   UserWhere / UserFilter, all backed by the `User` storage model.
#[test]
fn role_suffixes_classify_variants() {
    let document = document(vec![
        user_type("User", TypeKind::Object),
        user_type("UserCreateInput", TypeKind::InputObject),
        user_type("UserUpdateInput", TypeKind::InputObject),
        user_type("UserInput", TypeKind::InputObject),
        user_type("UserPayload", TypeKind::Object),
        user_type("UserWhere", TypeKind::InputObject),
        user_type("UserFilter", TypeKind::InputObject),
    ]);
    let catalog = boiler::Catalog::new(vec![user_model()]);

    let output = Builder::new(Config::default())
        .build(&document, &catalog)
        .unwrap()
        .unwrap();

    let names: Vec<&str> = output
        .entities
        .iter()
        .map(|entity| entity.name.as_str())
        .collect();
    assert_eq!(
        names,
        [
            "User",
            "UserCreateInput",
            "UserFilter",
            "UserInput",
            "UserPayload",
            "UserUpdateInput",
            "UserWhere",
        ]
    );

    for entity in &output.entities {
        assert_eq!(entity.boiler.name, "User", "{}", entity.name);
    }

    let user = &output.entities[0];
    assert!(user.is_normal);
    assert!(user.is_preloadable);
    assert!(!user.is_input);

    let create = output.entities.iter().find(|e| e.is_create_input).unwrap();
    assert_eq!(create.name, "UserCreateInput");
    assert!(create.is_input);
    assert!(!create.is_normal_input);
    assert!(!create.is_preloadable);

    let normal_input = output.entities.iter().find(|e| e.is_normal_input).unwrap();
    assert_eq!(normal_input.name, "UserInput");

    assert!(output.entities.iter().any(|e| e.is_update_input));
    assert!(output.entities.iter().any(|e| e.is_payload));
    assert!(output.entities.iter().any(|e| e.is_where));
    assert!(output.entities.iter().any(|e| e.is_filter));
}

#[test]
fn roots_internals_and_non_objects_are_skipped() {
    let document = document(vec![
        user_type("User", TypeKind::Object),
        TypeDecl::new("Query", TypeKind::Object).field("user", TypeRef::named("User")),
        TypeDecl::new("Mutation", TypeKind::Object).field("user", TypeRef::named("User")),
        TypeDecl::new("_Internal", TypeKind::Object).field("id", TypeRef::required("ID")),
        TypeDecl::new("UserRole", TypeKind::Enum).value("ADMIN").value("MEMBER"),
        TypeDecl::new("Node", TypeKind::Interface).field("id", TypeRef::required("ID")),
    ]);
    let catalog = boiler::Catalog::new(vec![user_model()]);

    let output = Builder::new(Config::default())
        .build(&document, &catalog)
        .unwrap()
        .unwrap();

    let names: Vec<&str> = output
        .entities
        .iter()
        .map(|entity| entity.name.as_str())
        .collect();
    assert_eq!(names, ["User"]);
}

#[test]
fn unmatched_types_are_dropped() {
    // `Ghost` has no storage model: dropped with a warning. Its input/where
    // variants are expected to be storage-less and dropped silently either way.
    let document = document(vec![
        user_type("User", TypeKind::Object),
        user_type("Ghost", TypeKind::Object),
        user_type("GhostCreateInput", TypeKind::InputObject),
        user_type("GhostWhere", TypeKind::InputObject),
        user_type("GhostFilter", TypeKind::InputObject),
        user_type("GhostPayload", TypeKind::Object),
    ]);
    let catalog = boiler::Catalog::new(vec![user_model()]);

    let output = Builder::new(Config::default())
        .build(&document, &catalog)
        .unwrap()
        .unwrap();

    assert_eq!(output.entities.len(), 1);
    assert_eq!(output.entities[0].name, "User");
}

#[test]
fn type_named_exactly_like_a_suffix_is_plain() {
    let document = document(vec![user_type("Payload", TypeKind::Object)]);
    let catalog = boiler::Catalog::new(vec![
        boiler::Model::new("Payload", "payloads")
            .field(boiler::Field::new("ID", "uint"))
            .field(boiler::Field::new("Name", "string")),
    ]);

    let output = Builder::new(Config::default())
        .build(&document, &catalog)
        .unwrap()
        .unwrap();

    let payload = &output.entities[0];
    assert_eq!(payload.name, "Payload");
    assert!(payload.is_normal);
    assert!(!payload.is_payload);
}

#[test]
fn storage_lookup_ignores_case() {
    let document = document(vec![user_type("USERProfile", TypeKind::Object)]);
    let catalog = boiler::Catalog::new(vec![
        boiler::Model::new("UserProfile", "user_profiles")
            .field(boiler::Field::new("ID", "uint"))
            .field(boiler::Field::new("Name", "string")),
    ]);

    let output = Builder::new(Config::default())
        .build(&document, &catalog)
        .unwrap()
        .unwrap();

    assert_eq!(output.entities[0].boiler.name, "UserProfile");
}

#[test]
fn nothing_to_generate_short_circuits() {
    let document = document(vec![user_type("Ghost", TypeKind::Object)]);
    let catalog = boiler::Catalog::new(vec![user_model()]);

    let output = Builder::new(Config::default())
        .build(&document, &catalog)
        .unwrap();

    assert!(output.is_none());
}

#[test]
fn extras_are_collected() {
    let document = document(vec![
        user_type("User", TypeKind::Object),
        TypeDecl::new("UserRole", TypeKind::Enum).value("ADMIN").value("SUPER_USER"),
        TypeDecl::new("_Hidden", TypeKind::Enum).value("A"),
        TypeDecl::new("Node", TypeKind::Interface).field("id", TypeRef::required("ID")),
        TypeDecl::new("SearchResult", TypeKind::Union),
        scalar("Time"),
    ]);
    let catalog = boiler::Catalog::new(vec![user_model()]);

    let output = Builder::new(Config::default())
        .build(&document, &catalog)
        .unwrap()
        .unwrap();

    let enum_names: Vec<&str> = output.enums.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(enum_names, ["UserRole"]);

    let role = &output.enums[0];
    let lowers: Vec<&str> = role.values.iter().map(|v| v.name_lower.as_str()).collect();
    assert_eq!(lowers, ["admin", "superUser"]);

    let interface_names: Vec<&str> = output
        .interfaces
        .iter()
        .map(|i| i.name.as_str())
        .collect();
    assert_eq!(interface_names, ["Node", "SearchResult"]);

    assert!(output.scalars.contains(&"Time".to_string()));
}

#[test]
fn implemented_interfaces_are_recorded() {
    let document = document(vec![
        TypeDecl::new("Node", TypeKind::Interface).field("id", TypeRef::required("ID")),
        user_type("User", TypeKind::Object).implements("Node"),
    ]);
    let catalog = boiler::Catalog::new(vec![user_model()]);

    let output = Builder::new(Config::default())
        .build(&document, &catalog)
        .unwrap()
        .unwrap();

    assert_eq!(output.entities[0].implements, ["Node"]);
}

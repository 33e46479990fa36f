use crate::{
    model::{ColumnSetting, Entity, Preload},
    name,
};
use indexmap::IndexMap;

/// Derives the first-level preload map for every preloadable entity.
///
/// Variants never get one; the relationship is only declared on the plain
/// entity. Entries are emitted sorted by key so generated lookup tables are
/// stable across runs.
pub(super) fn build(entities: &mut [Entity]) {
    for entity in entities.iter_mut() {
        if !entity.is_preloadable {
            continue;
        }

        let mut map = IndexMap::new();
        for field in &entity.fields {
            if !field.is_relation {
                continue;
            }
            let Some(relationship) = &field.column.relationship else {
                continue;
            };

            // "models" is the storage package; the relationship accessor is
            // derived from the foreign-key column name.
            let setting = ColumnSetting {
                name: format!(
                    "models.{}Rels.{}",
                    entity.name,
                    name::relation_accessor(&field.column.name)
                ),
                relationship_model_name: relationship.table_name.clone(),
                id_available: !field.is_plural,
            };
            map.insert(field.json_name.clone(), setting);
        }

        map.sort_keys();
        entity.preloads = map
            .into_iter()
            .map(|(key, column)| Preload { key, column })
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{boiler, model::Field};

    fn relation_field(json_name: &str, column: boiler::Field) -> Field {
        Field {
            json_name: json_name.to_string(),
            name: name::api_field_name(json_name),
            is_relation: true,
            column,
            ..Field::default()
        }
    }

    #[test]
    fn builds_sorted_entries_for_relation_fields() {
        let mut entity = Entity {
            name: "Post".to_string(),
            is_preloadable: true,
            fields: vec![
                relation_field(
                    "reviewer",
                    boiler::Field::new("ReviewerID", "uint").relates_to("User", "users"),
                ),
                relation_field(
                    "author",
                    boiler::Field::new("AuthorID", "uint").relates_to("User", "users"),
                ),
            ],
            ..Entity::default()
        };

        build(std::slice::from_mut(&mut entity));

        let keys: Vec<&str> = entity.preloads.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, ["author", "reviewer"]);

        let author = &entity.preloads[0].column;
        assert_eq!(author.name, "models.PostRels.Author");
        assert_eq!(author.relationship_model_name, "users");
        assert!(author.id_available);
    }

    #[test]
    fn plural_relations_have_no_id() {
        let mut field = relation_field(
            "comments",
            boiler::Field::new("Comments", "CommentSlice").relates_to("Comment", "comments"),
        );
        field.is_plural = true;
        let mut entity = Entity {
            name: "Post".to_string(),
            is_preloadable: true,
            fields: vec![field],
            ..Entity::default()
        };

        build(std::slice::from_mut(&mut entity));

        assert_eq!(entity.preloads.len(), 1);
        assert!(!entity.preloads[0].column.id_available);
    }

    #[test]
    fn variants_and_scalar_fields_are_skipped() {
        let mut input = Entity {
            name: "PostCreateInput".to_string(),
            is_input: true,
            is_create_input: true,
            fields: vec![relation_field(
                "author",
                boiler::Field::new("AuthorID", "uint").relates_to("User", "users"),
            )],
            ..Entity::default()
        };

        build(std::slice::from_mut(&mut input));
        assert!(input.preloads.is_empty());

        let mut plain = Entity {
            name: "Post".to_string(),
            is_preloadable: true,
            fields: vec![Field {
                json_name: "title".to_string(),
                name: "Title".to_string(),
                column: boiler::Field::new("Title", "string"),
                ..Field::default()
            }],
            ..Entity::default()
        };

        build(std::slice::from_mut(&mut plain));
        assert!(plain.preloads.is_empty());
    }
}

use super::Field;

/// A storage model descriptor: one generated struct backed by one table.
#[derive(Debug, Clone, Default)]
pub struct Model {
    /// The generated struct name, e.g. `User`.
    pub name: String,

    /// The backing table name, e.g. `users`.
    pub table_name: String,

    /// Typed columns, in column order.
    pub fields: Vec<Field>,
}

impl Model {
    pub fn new(name: impl Into<String>, table_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table_name: table_name.into(),
            fields: vec![],
        }
    }

    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Matches an API field name against this model's columns.
    ///
    /// For relation fields the foreign-key convention (`<name>ID`) is tried
    /// first; the bare name is the fallback. Both lookups ignore case, since
    /// the two sides follow independent case conventions.
    pub fn find_field_or_foreign_key(&self, name: &str, is_relation: bool) -> Option<&Field> {
        if is_relation {
            let foreign_key = format!("{name}ID");
            if let Some(field) = self.find_field(&foreign_key) {
                return Some(field);
            }
        }
        self.find_field(name)
    }

    fn find_field(&self, name: &str) -> Option<&Field> {
        self.fields
            .iter()
            .find(|field| field.name.eq_ignore_ascii_case(name))
    }
}

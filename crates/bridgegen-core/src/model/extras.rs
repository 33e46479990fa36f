/// An enum declared by the schema, carried through for the renderer and used
/// by directive synthesis to detect enum-typed fields.
#[derive(Debug, Clone, Default)]
pub struct Enum {
    pub name: String,

    pub description: String,

    pub values: Vec<EnumValue>,
}

#[derive(Debug, Clone)]
pub struct EnumValue {
    pub name: String,

    /// Lower-camel rendering of the value name, e.g. `inProgress`.
    pub name_lower: String,

    pub description: String,
}

/// An interface or union declared by the schema.
#[derive(Debug, Clone)]
pub struct Interface {
    pub name: String,

    pub description: String,
}

use crate::model::{Category, CategoryKind, DatabaseSchema, SchemaProperty};

/// Picks the selectable fields out of a database schema, in schema order.
pub fn categories_from_schema(schema: &DatabaseSchema) -> Vec<Category> {
    schema
        .properties
        .iter()
        .filter_map(|(name, property)| {
            let (kind, options) = match property {
                SchemaProperty::Select { options } => (CategoryKind::Select, options),
                SchemaProperty::MultiSelect { options } => (CategoryKind::MultiSelect, options),
                SchemaProperty::Other { .. } => return None,
            };
            Some(Category {
                name: name.clone(),
                kind,
                options: options.clone(),
            })
        })
        .collect()
}

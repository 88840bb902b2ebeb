use super::{PropertyValue, SchemaProperty};
use indexmap::IndexMap;
use serde::Deserialize;

/// One database row ("page") as returned by a database query.
///
/// `properties` keeps the key order of the response body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PageRecord {
    pub id: String,
    pub created_time: String,
    #[serde(default)]
    pub properties: IndexMap<String, PropertyValue>,
}

/// A database's declared properties (its schema, not its rows).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DatabaseSchema {
    pub id: String,
    #[serde(default)]
    pub properties: IndexMap<String, SchemaProperty>,
}

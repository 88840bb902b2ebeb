use super::SelectOption;
use serde::{Deserialize, Serialize};

/// A database record flattened for the front-end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRow {
    pub id: String,
    pub created_time: String,
    pub properties: Vec<Property>,
}

/// One `(name, type, value)` triple of a [`ReviewRow`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    #[serde(rename = "type")]
    pub property_type: String,
    pub value: ExtractedValue,
}

/// A flattened property value: a single string, or a list of strings for
/// multi-valued types. Serializes as a bare JSON string or array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtractedValue {
    Text(String),
    List(Vec<String>),
}

impl ExtractedValue {
    pub fn empty_text() -> Self {
        ExtractedValue::Text(String::new())
    }
}

impl From<&str> for ExtractedValue {
    fn from(text: &str) -> Self {
        ExtractedValue::Text(text.to_string())
    }
}

impl From<Vec<String>> for ExtractedValue {
    fn from(items: Vec<String>) -> Self {
        ExtractedValue::List(items)
    }
}

/// A selectable schema field and its allowed values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CategoryKind,
    pub options: Vec<SelectOption>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    Select,
    MultiSelect,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn row_serializes_to_flat_shape() {
        let row = ReviewRow {
            id: "p1".into(),
            created_time: "2024-01-01T00:00:00.000Z".into(),
            properties: vec![
                Property {
                    name: "Status".into(),
                    property_type: "select".into(),
                    value: "Done".into(),
                },
                Property {
                    name: "Tags".into(),
                    property_type: "multi_select".into(),
                    value: vec!["x".to_string(), "y".to_string()].into(),
                },
            ],
        };

        assert_eq!(
            serde_json::to_value(&row).unwrap(),
            json!({
                "id": "p1",
                "created_time": "2024-01-01T00:00:00.000Z",
                "properties": [
                    {"name": "Status", "type": "select", "value": "Done"},
                    {"name": "Tags", "type": "multi_select", "value": ["x", "y"]}
                ]
            })
        );
    }

    #[test]
    fn category_serializes_type_tag_and_options() {
        let category = Category {
            name: "Genre".into(),
            kind: CategoryKind::MultiSelect,
            options: vec![SelectOption {
                name: "Sci-Fi".into(),
                color: "blue".into(),
                id: "1".into(),
            }],
        };
        assert_eq!(
            serde_json::to_value(&category).unwrap(),
            json!({
                "name": "Genre",
                "type": "multi_select",
                "options": [{"name": "Sci-Fi", "color": "blue", "id": "1"}]
            })
        );
    }
}

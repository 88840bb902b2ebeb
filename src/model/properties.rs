//! Typed property values.
//!
//! Notion encodes a property as `{ "id": .., "type": "<tag>", "<tag>": <payload> }`.
//! Parsing dispatches on the tag. Tags this service does not read, and payloads
//! that do not match their tag, degrade to an empty value instead of failing the
//! whole record.

use super::RichText;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A selectable option, as found on a page's `select`/`multi_select` value
/// and in a database schema's option list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub name: String,
    #[serde(default = "default_color")]
    pub color: String,
    #[serde(default)]
    pub id: String,
}

fn default_color() -> String {
    "default".to_string()
}

/// One entry of a `files` property.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FileEntry {
    /// Uploaded to Notion; the URL is signed and expires.
    File {
        #[serde(default)]
        name: String,
        file: HostedFile,
    },
    External {
        #[serde(default)]
        name: String,
        external: ExternalFile,
    },
}

impl FileEntry {
    /// The URL this entry resolves to, whichever way it is hosted.
    pub fn url(&self) -> &str {
        match self {
            FileEntry::File { file, .. } => &file.url,
            FileEntry::External { external, .. } => &external.url,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HostedFile {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExternalFile {
    #[serde(default)]
    pub url: String,
}

/// A page property value, keyed by the tags this service understands.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Title(Vec<RichText>),
    RichText(Vec<RichText>),
    Select(Option<SelectOption>),
    MultiSelect(Vec<SelectOption>),
    Files(Vec<FileEntry>),
    /// Any other tag; only the tag itself is kept.
    Other { type_name: String },
}

impl PropertyValue {
    /// Returns the Notion type tag this value was declared with.
    pub fn type_name(&self) -> &str {
        match self {
            PropertyValue::Title(_) => "title",
            PropertyValue::RichText(_) => "rich_text",
            PropertyValue::Select(_) => "select",
            PropertyValue::MultiSelect(_) => "multi_select",
            PropertyValue::Files(_) => "files",
            PropertyValue::Other { type_name } => type_name,
        }
    }

    /// Builds a value from a full property object (`{"type": .., "<tag>": ..}`).
    pub fn from_payload(payload: Value) -> Self {
        let (property_type, inner) = split_tagged(payload);
        Self::parse(&property_type, inner)
    }

    /// Builds a value from a type tag and the payload stored under that tag.
    pub fn parse(property_type: &str, value: Value) -> Self {
        match property_type {
            "title" => PropertyValue::Title(decode_or_default(property_type, value)),
            "rich_text" => PropertyValue::RichText(decode_or_default(property_type, value)),
            "select" => PropertyValue::Select(decode_or_default(property_type, value)),
            "multi_select" => PropertyValue::MultiSelect(decode_or_default(property_type, value)),
            "files" => PropertyValue::Files(parse_file_entries(value)),
            other => {
                log::debug!("Property type '{}' is not extracted", other);
                PropertyValue::Other {
                    type_name: other.to_string(),
                }
            }
        }
    }
}

impl<'de> Deserialize<'de> for PropertyValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(PropertyValue::from_payload)
    }
}

/// A property declaration in a database schema.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaProperty {
    Select { options: Vec<SelectOption> },
    MultiSelect { options: Vec<SelectOption> },
    Other { type_name: String },
}

#[derive(Deserialize, Default)]
struct OptionList {
    #[serde(default)]
    options: Option<Vec<SelectOption>>,
}

impl SchemaProperty {
    pub fn from_payload(payload: Value) -> Self {
        let (property_type, inner) = split_tagged(payload);
        match property_type.as_str() {
            "select" => SchemaProperty::Select {
                options: decode_or_default::<Option<OptionList>>(&property_type, inner)
                    .and_then(|list| list.options)
                    .unwrap_or_default(),
            },
            "multi_select" => SchemaProperty::MultiSelect {
                options: decode_or_default::<Option<OptionList>>(&property_type, inner)
                    .and_then(|list| list.options)
                    .unwrap_or_default(),
            },
            _ => SchemaProperty::Other {
                type_name: property_type,
            },
        }
    }
}

impl<'de> Deserialize<'de> for SchemaProperty {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(SchemaProperty::from_payload)
    }
}

// --- Parsing helpers ---

/// Splits `{"type": tag, tag: payload, ..}` into the tag and its payload.
fn split_tagged(mut payload: Value) -> (String, Value) {
    let property_type = payload
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    let inner = payload
        .as_object_mut()
        .and_then(|object| object.remove(&property_type))
        .unwrap_or(Value::Null);
    (property_type, inner)
}

/// Decodes a tag's payload; a payload that does not fit degrades to the
/// empty value for that tag. `null` counts as empty.
fn decode_or_default<T>(property_type: &str, value: Value) -> T
where
    T: DeserializeOwned + Default,
{
    if value.is_null() {
        return T::default();
    }
    serde_json::from_value::<T>(value).unwrap_or_else(|e| {
        log::warn!(
            "Malformed '{}' property payload ({}), using empty value",
            property_type,
            e
        );
        T::default()
    })
}

/// Parses file entries one at a time so a single unknown hosting kind
/// drops only that entry.
fn parse_file_entries(value: Value) -> Vec<FileEntry> {
    decode_or_default::<Vec<Value>>("files", value)
        .into_iter()
        .filter_map(|entry| {
            serde_json::from_value::<FileEntry>(entry)
                .map_err(|e| log::debug!("Skipping unreadable file entry: {}", e))
                .ok()
        })
        .collect()
}

use crate::model::{ExtractedValue, PropertyValue, RichText};

/// Flattens one property value into a string or a list of strings.
///
/// Every tag this service does not read maps to the empty string, so one
/// exotic field never fails a whole row.
pub fn extract(property: &PropertyValue) -> ExtractedValue {
    match property {
        PropertyValue::Title(fragments) | PropertyValue::RichText(fragments) => {
            ExtractedValue::Text(RichText::concat_plain(fragments))
        }
        PropertyValue::Select(option) => ExtractedValue::Text(
            option
                .as_ref()
                .map(|option| option.name.clone())
                .unwrap_or_default(),
        ),
        PropertyValue::MultiSelect(options) => {
            ExtractedValue::List(options.iter().map(|option| option.name.clone()).collect())
        }
        PropertyValue::Files(entries) => ExtractedValue::List(
            entries
                .iter()
                .map(|entry| entry.url())
                .filter(|url| !url.is_empty())
                .map(str::to_string)
                .collect(),
        ),
        PropertyValue::Other { .. } => ExtractedValue::empty_text(),
    }
}

use super::extract;
use crate::model::{PageRecord, Property, ReviewRow};

/// Maps one database record to a [`ReviewRow`], keeping property order.
pub fn map_row(record: &PageRecord) -> ReviewRow {
    let properties = record
        .properties
        .iter()
        .map(|(name, value)| Property {
            name: name.clone(),
            property_type: value.type_name().to_string(),
            value: extract(value),
        })
        .collect();

    ReviewRow {
        id: record.id.clone(),
        created_time: record.created_time.clone(),
        properties,
    }
}

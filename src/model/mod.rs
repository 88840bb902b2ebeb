//! Remote records as parsed from the Notion API, and the flattened shapes
//! the service hands back to callers.

mod block;
pub mod properties;
mod records;
mod rich_text;
mod rows;

pub use block::{Block, BlockKind, MediaKind};
pub use properties::{FileEntry, PropertyValue, SchemaProperty, SelectOption};
pub use records::{DatabaseSchema, PageRecord};
pub use rich_text::{Annotations, RichText};
pub use rows::{Category, CategoryKind, ExtractedValue, Property, ReviewRow};

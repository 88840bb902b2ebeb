//! Pure mappings from remote records to the flattened output shapes.

mod categories;
mod extract;
mod rows;

pub use categories::categories_from_schema;
pub use extract::extract;
pub use rows::map_row;

// src/readers/mod.rs
//! The three read operations the service exposes.
//!
//! Each takes an already authenticated repository and an identifier, and
//! returns plain data for the caller to serialize. Failures propagate as-is.

use crate::api::NotionRepository;
use crate::error::Result;
use crate::markdown::MarkdownConverter;
use crate::model::{Category, ReviewRow};
use crate::transform::{categories_from_schema, map_row};
use crate::types::NotionId;

/// Queries every row of `database` and flattens each one, in remote order.
pub async fn list_reviews(
    repository: &dyn NotionRepository,
    database: &NotionId,
) -> Result<Vec<ReviewRow>> {
    log::info!("Listing reviews of database {}", database);
    let records = repository.query_database(database).await?;
    let reviews: Vec<ReviewRow> = records.iter().map(map_row).collect();
    log::info!("Mapped {} reviews", reviews.len());
    Ok(reviews)
}

/// Returns the `select` and `multi_select` fields of `database`'s schema
/// with their options, in schema order.
pub async fn list_categories(
    repository: &dyn NotionRepository,
    database: &NotionId,
) -> Result<Vec<Category>> {
    log::info!("Listing categories of database {}", database);
    let schema = repository.retrieve_database_schema(database).await?;
    let categories = categories_from_schema(&schema);
    log::info!(
        "Found {} categories among {} schema properties",
        categories.len(),
        schema.properties.len()
    );
    Ok(categories)
}

pub async fn page_to_markdown(
    repository: &dyn NotionRepository,
    converter: &dyn MarkdownConverter,
    page: &NotionId,
) -> Result<String> {
    log::info!("Converting page {} to markdown", page);
    let markdown = converter.page_to_markdown(repository, page).await?;
    log::info!("Rendered {} characters of markdown", markdown.len());
    Ok(markdown)
}

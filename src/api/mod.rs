// src/api/mod.rs
//! Notion API interaction: the ability to read a review database and its pages.
//!
//! Business logic depends on [`NotionRepository`], never on HTTP details.
//! [`NotionHttpClient`] is the reqwest-backed implementation.

pub mod client;
mod notion_client_adapter;
pub mod parser;
mod responses;
mod simple_pagination;

use crate::error::AppError;
use crate::model::{Block, DatabaseSchema, PageRecord};
use crate::types::NotionId;

/// The ability to read content from a Notion workspace.
#[async_trait::async_trait]
pub trait NotionRepository: Send + Sync {
    /// Fetches a database's declared properties (not its rows).
    async fn retrieve_database_schema(&self, id: &NotionId) -> Result<DatabaseSchema, AppError>;

    /// Fetches every row of a database, in the order the API returns them.
    async fn query_database(&self, id: &NotionId) -> Result<Vec<PageRecord>, AppError>;

    /// Fetches the direct children of a page or block. Nested children are
    /// not populated.
    async fn retrieve_block_children(&self, parent: &NotionId) -> Result<Vec<Block>, AppError>;
}

pub use client::NotionHttpClient;
pub use responses::{PaginatedResponse, PaginationResult};

// src/api/responses.rs
//! Wire envelopes of the Notion API.

use serde::Deserialize;

/// One page of a cursor-paginated listing.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginatedResponse<T> {
    pub results: Vec<T>,
    #[serde(default)]
    pub next_cursor: Option<String>,
    #[serde(default)]
    pub has_more: bool,
}

/// Error body returned with non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct NotionErrorBody {
    pub status: u16,
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub request_id: Option<String>,
}

/// All items accumulated across pagination rounds.
#[derive(Debug, Clone)]
pub struct PaginationResult<T> {
    pub items: Vec<T>,
    pub total_fetched: usize,
    /// Set when the round cap stopped the loop before the cursor ran out.
    pub truncated: bool,
}

/// Database query results.
pub type QueryDatabaseResponse = PaginatedResponse<crate::model::PageRecord>;

/// Block children, still raw so each entry decodes on its own.
pub type RetrieveBlockChildrenResponse = PaginatedResponse<serde_json::Value>;

impl RetrieveBlockChildrenResponse {
    /// Converts every block to the domain model, keeping pagination metadata.
    pub fn into_domain_blocks(self) -> PaginatedResponse<crate::model::Block> {
        PaginatedResponse {
            results: self
                .results
                .into_iter()
                .map(super::notion_client_adapter::convert_raw_block)
                .collect(),
            next_cursor: self.next_cursor,
            has_more: self.has_more,
        }
    }
}

// src/markdown/mod.rs
//! Page content to markdown.
//!
//! [`MarkdownConverter`] is the seam readers depend on. [`BlockTreeConverter`]
//! fetches the block tree through a [`NotionRepository`] and renders it.

mod fetch;
mod render;
mod rich_text;

pub use fetch::fetch_block_tree;
pub use render::render_blocks;

use crate::api::NotionRepository;
use crate::constants::NOTION_MAX_FETCH_DEPTH;
use crate::error::AppError;
use crate::types::NotionId;

/// Converts one page's content to a single markdown string.
#[async_trait::async_trait]
pub trait MarkdownConverter: Send + Sync {
    async fn page_to_markdown(
        &self,
        repository: &dyn NotionRepository,
        page: &NotionId,
    ) -> Result<String, AppError>;
}

/// Fetches the full block tree, then renders it.
#[derive(Debug, Clone, Copy)]
pub struct BlockTreeConverter {
    max_depth: u8,
}

impl BlockTreeConverter {
    pub fn new(max_depth: u8) -> Self {
        Self { max_depth }
    }
}

impl Default for BlockTreeConverter {
    fn default() -> Self {
        Self::new(NOTION_MAX_FETCH_DEPTH)
    }
}

#[async_trait::async_trait]
impl MarkdownConverter for BlockTreeConverter {
    async fn page_to_markdown(
        &self,
        repository: &dyn NotionRepository,
        page: &NotionId,
    ) -> Result<String, AppError> {
        let blocks = fetch_block_tree(repository, page, self.max_depth).await?;
        log::debug!("Rendering {} top-level blocks of {}", blocks.len(), page);
        render_blocks(&blocks)
    }
}

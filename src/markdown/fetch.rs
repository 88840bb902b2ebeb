// src/markdown/fetch.rs
//! Recursive retrieval of a page's block tree.

use crate::api::NotionRepository;
use crate::error::AppError;
use crate::model::Block;
use crate::types::NotionId;
use std::future::Future;
use std::pin::Pin;

type BlocksFuture<'a> = Pin<Box<dyn Future<Output = Result<Vec<Block>, AppError>> + Send + 'a>>;

/// Fetches the children of `root` and, recursively, of every block that
/// reports children, one request at a time. Levels beyond `max_depth` are
/// left empty.
pub async fn fetch_block_tree(
    repository: &dyn NotionRepository,
    root: &NotionId,
    max_depth: u8,
) -> Result<Vec<Block>, AppError> {
    fetch_children(repository, root.clone(), 1, max_depth).await
}

fn fetch_children<'a>(
    repository: &'a dyn NotionRepository,
    parent: NotionId,
    depth: u8,
    max_depth: u8,
) -> BlocksFuture<'a> {
    Box::pin(async move {
        log::debug!("Fetching children of {} (depth {})", parent, depth);
        let mut blocks = repository.retrieve_block_children(&parent).await?;

        for block in blocks.iter_mut().filter(|block| block.wants_children()) {
            if depth >= max_depth {
                log::warn!(
                    "Block {} is nested deeper than {} levels; its children are skipped",
                    block.id,
                    max_depth
                );
                continue;
            }
            let child_id = NotionId::parse(&block.id)?;
            block.children = fetch_children(repository, child_id, depth + 1, max_depth).await?;
        }

        Ok(blocks)
    })
}

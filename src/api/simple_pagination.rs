// src/api/simple_pagination.rs
//! Cursor pagination over async closures.

use super::{PaginatedResponse, PaginationResult};
use crate::constants::NOTION_API_PAGE_SIZE;
use crate::error::AppError;

/// Fetches pages until the cursor runs out or `max_pages` rounds are spent.
///
/// `fetch_fn` receives the page size and the cursor of the previous round
/// (`None` for the first). Items keep the order the pages arrived in.
pub async fn fetch_all_pages_simple<T, F, Fut>(
    mut fetch_fn: F,
    max_pages: Option<u32>,
) -> Result<PaginationResult<T>, AppError>
where
    T: Send + 'static,
    F: FnMut(u32, Option<String>) -> Fut,
    Fut: std::future::Future<Output = Result<PaginatedResponse<T>, AppError>>,
{
    let mut all_items = Vec::new();
    let mut cursor = None;
    let mut pages_fetched = 0u32;
    let mut truncated = false;

    loop {
        if let Some(max) = max_pages {
            if pages_fetched >= max {
                log::warn!(
                    "Stopped after {} pagination rounds with more results pending",
                    max
                );
                truncated = true;
                break;
            }
        }

        let response = fetch_fn(NOTION_API_PAGE_SIZE, cursor).await?;

        let has_more = response.has_more;
        cursor = response.next_cursor;
        all_items.extend(response.results);
        pages_fetched += 1;

        if !has_more || cursor.is_none() {
            break;
        }
    }

    log::debug!(
        "Fetched {} items in {} pagination round(s)",
        all_items.len(),
        pages_fetched
    );

    Ok(PaginationResult {
        total_fetched: all_items.len(),
        items: all_items,
        truncated,
    })
}

// src/constants.rs
//! Domain constants that define the operational boundaries of the service.

// ---------------------------------------------------------------------------
// Notion API boundaries
// ---------------------------------------------------------------------------

/// Default REST endpoint of the Notion API.
pub const NOTION_API_BASE_URL: &str = "https://api.notion.com/v1";

/// Value of the `Notion-Version` header sent with every request.
pub const NOTION_API_VERSION: &str = "2022-06-28";

/// How many objects the Notion API returns per page of results (its maximum).
pub const NOTION_API_PAGE_SIZE: u32 = 100;

/// Upper bound on cursor rounds for one paginated listing.
///
/// 1000 rounds of 100 results is far more than a review database holds;
/// hitting it means the remote cursor is not advancing.
pub const NOTION_MAX_PAGINATION_ROUNDS: u32 = 1000;

/// Maximum nesting depth when fetching a page's block tree.
pub const NOTION_MAX_FETCH_DEPTH: u8 = 50;

// ---------------------------------------------------------------------------
// Environment
// ---------------------------------------------------------------------------

pub const ENV_API_KEY: &str = "NOTION_API_KEY";
pub const ENV_API_KEY_LEGACY: &str = "NETLIFY_NOTION_KEY";
pub const ENV_DATABASE_ID: &str = "NOTION_DATABASE_ID";
pub const ENV_DATABASE_ID_LEGACY: &str = "NETLIFY_DATABASE_ID";

/// Default listen address for `serve`.
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8888";

// ---------------------------------------------------------------------------
// Formatting
// ---------------------------------------------------------------------------

/// Estimated characters per block, used to pre-allocate markdown output.
pub const CHARS_PER_BLOCK_ESTIMATE: usize = 256;

/// Maximum characters shown when previewing unparseable response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 500;

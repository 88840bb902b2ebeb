// src/lib.rs
//! notion-reviews library: reshapes a Notion review database into flat JSON
//! and renders review pages as markdown.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `AppError`, `NotionErrorCode`, `ValidationError`
//! - **Configuration**: `CommandLineInput`, `ServiceConfig`
//! - **Domain model**: `PageRecord`, `DatabaseSchema`, `PropertyValue`, `Block`, etc.
//! - **Output shapes**: `ReviewRow`, `Property`, `ExtractedValue`, `Category`
//! - **API client**: `NotionRepository`, `NotionHttpClient`, parsers
//! - **Operations**: `list_reviews`, `list_categories`, `page_to_markdown`
//! - **HTTP surface**: `create_router`, `serve`, `AppState`

mod api;
mod config;
mod constants;
mod error;
mod markdown;
mod model;
mod readers;
mod server;
mod transform;
mod types;

// --- Error Handling ---
pub use crate::error::{AppError, NotionErrorCode};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{Command, CommandLineInput, ServiceConfig};

// --- Domain Model ---
pub use crate::model::{
    Annotations, Block, BlockKind, DatabaseSchema, FileEntry, MediaKind, PageRecord,
    PropertyValue, RichText, SchemaProperty, SelectOption,
};

// --- Output Shapes ---
pub use crate::model::{Category, CategoryKind, ExtractedValue, Property, ReviewRow};

// --- Domain Types ---
pub use crate::types::{ApiBaseUrl, ApiKey, NotionId};

// --- API Client ---
pub use crate::api::{
    client::ApiResponse,
    parser::{parse_blocks_pagination, parse_database_schema, parse_pages_pagination},
    NotionHttpClient, NotionRepository, PaginatedResponse,
};

// --- Transformation ---
pub use crate::transform::{categories_from_schema, extract, map_row};

// --- Markdown ---
pub use crate::markdown::{render_blocks, BlockTreeConverter, MarkdownConverter};

// --- Operations ---
pub use crate::readers::{list_categories, list_reviews, page_to_markdown};

// --- HTTP Surface ---
pub use crate::server::{
    create_router, serve, ApiError, AppState, RepositoryFactory, ReviewResponse, ReviewsResponse,
};

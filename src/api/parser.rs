// src/api/parser.rs
//! Turns raw API responses into domain values or typed errors.

use super::client::ApiResponse;
use super::responses::{
    NotionErrorBody, PaginatedResponse, QueryDatabaseResponse, RetrieveBlockChildrenResponse,
};
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{AppError, NotionErrorCode};
use crate::model::{Block, DatabaseSchema};
use reqwest::StatusCode;

/// Parses a response body as `T` on success, or as a Notion error otherwise.
pub fn parse_api_response<T>(result: ApiResponse<String>) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    if result.status.is_success() {
        parse_success(&result.data, &result.url)
    } else {
        Err(parse_error(&result.data, result.status, &result.url))
    }
}

fn parse_success<T>(body: &str, url: &str) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", url, e);
        AppError::MalformedResponse {
            url: url.to_string(),
            body: preview(body),
            source: e,
        }
    })
}

fn parse_error(body: &str, status: StatusCode, url: &str) -> AppError {
    if let Ok(notion_error) = serde_json::from_str::<NotionErrorBody>(body) {
        log::debug!(
            "Notion API error from {}: {} ({})",
            url,
            notion_error.code,
            notion_error.message
        );
        return AppError::NotionApi {
            status: notion_error.status,
            code: NotionErrorCode::from_api_response(&notion_error.code),
            message: notion_error.message,
            request_id: notion_error.request_id,
        };
    }

    AppError::NotionService {
        code: NotionErrorCode::from_http_status(status.as_u16()),
        status,
        url: url.to_string(),
    }
}

/// Truncates a body for error messages without splitting a character.
fn preview(body: &str) -> String {
    match body.char_indices().nth(ERROR_BODY_PREVIEW_LENGTH) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

pub fn parse_database_schema(result: ApiResponse<String>) -> Result<DatabaseSchema, AppError> {
    parse_api_response(result)
}

pub fn parse_pages_pagination(
    result: ApiResponse<String>,
) -> Result<QueryDatabaseResponse, AppError> {
    parse_api_response(result)
}

pub fn parse_blocks_pagination(
    result: ApiResponse<String>,
) -> Result<PaginatedResponse<Block>, AppError> {
    let response: RetrieveBlockChildrenResponse = parse_api_response(result)?;
    Ok(response.into_domain_blocks())
}

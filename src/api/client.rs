// src/api/client.rs
//! Thin HTTP client wrapper for the Notion API.
//!
//! Handles authentication headers and request plumbing. Parsing lives in
//! [`super::parser`].

use crate::constants::{NOTION_API_VERSION, NOTION_MAX_PAGINATION_ROUNDS};
use crate::error::AppError;
use crate::model::{Block, DatabaseSchema, PageRecord};
use crate::types::{ApiBaseUrl, ApiKey, NotionId};
use reqwest::{header, Client, Response};
use serde::Serialize;

/// A reqwest client preconfigured with Notion credentials.
#[derive(Clone, Debug)]
pub struct NotionHttpClient {
    client: Client,
    base_url: ApiBaseUrl,
}

impl NotionHttpClient {
    /// Creates a client that authenticates every request with `api_key`.
    pub fn new(api_key: &ApiKey, base_url: ApiBaseUrl) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers(api_key)?)
            .build()?;
        Ok(Self { client, base_url })
    }

    fn create_headers(api_key: &ApiKey) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        let auth_header = format!("Bearer {}", api_key.as_str());
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&auth_header).map_err(|e| {
                AppError::MissingConfiguration(format!("Invalid API token format: {}", e))
            })?,
        );

        headers.insert(
            "Notion-Version",
            header::HeaderValue::from_static(NOTION_API_VERSION),
        );

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }

    pub fn base_url(&self) -> &ApiBaseUrl {
        &self.base_url
    }

    /// Makes a GET request to `endpoint` (a path relative to the base URL).
    pub async fn get(&self, endpoint: &str, query: &[(&str, String)]) -> Result<Response, AppError> {
        let url = self.base_url.endpoint(endpoint);
        log::debug!("GET {}", url);
        Ok(self.client.get(url).query(query).send().await?)
    }

    /// Makes a POST request with a JSON body.
    pub async fn post<T: Serialize>(&self, endpoint: &str, body: &T) -> Result<Response, AppError> {
        let url = self.base_url.endpoint(endpoint);
        log::debug!("POST {}", url);
        Ok(self.client.post(url).json(body).send().await?)
    }
}

#[async_trait::async_trait]
impl super::NotionRepository for NotionHttpClient {
    async fn retrieve_database_schema(&self, id: &NotionId) -> Result<DatabaseSchema, AppError> {
        let endpoint = format!("databases/{}", id.to_hyphenated());
        let response = self.get(&endpoint, &[]).await?;
        let result = extract_response_text(response).await?;
        super::parser::parse_database_schema(result)
    }

    async fn query_database(&self, id: &NotionId) -> Result<Vec<PageRecord>, AppError> {
        let endpoint = format!("databases/{}/query", id.to_hyphenated());
        let client = self.clone();
        let pagination_result = super::simple_pagination::fetch_all_pages_simple(
            |page_size, cursor| {
                let client = client.clone();
                let endpoint = endpoint.clone();
                async move {
                    let mut query = serde_json::json!({ "page_size": page_size });
                    if let Some(cursor) = cursor {
                        query["start_cursor"] = serde_json::json!(cursor);
                    }
                    let response = client.post(&endpoint, &query).await?;
                    let result = extract_response_text(response).await?;
                    super::parser::parse_pages_pagination(result)
                }
            },
            Some(NOTION_MAX_PAGINATION_ROUNDS),
        )
        .await?;
        if pagination_result.truncated {
            log::warn!(
                "Database {} returned more than {} rows; the rest were not fetched",
                id,
                pagination_result.total_fetched
            );
        }
        Ok(pagination_result.items)
    }

    async fn retrieve_block_children(&self, parent: &NotionId) -> Result<Vec<Block>, AppError> {
        let endpoint = format!("blocks/{}/children", parent.to_hyphenated());
        let client = self.clone();
        let pagination_result = super::simple_pagination::fetch_all_pages_simple(
            |page_size, cursor| {
                let client = client.clone();
                let endpoint = endpoint.clone();
                async move {
                    let mut query = vec![("page_size", page_size.to_string())];
                    if let Some(cursor) = cursor {
                        query.push(("start_cursor", cursor));
                    }
                    let response = client.get(&endpoint, &query).await?;
                    let result = extract_response_text(response).await?;
                    super::parser::parse_blocks_pagination(result)
                }
            },
            Some(NOTION_MAX_PAGINATION_ROUNDS),
        )
        .await?;
        Ok(pagination_result.items)
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

/// Reads the body as text, keeping status and URL for error reporting.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}

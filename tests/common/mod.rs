// tests/common/mod.rs
//! Shared fakes and request helpers for the integration tests.

#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{HeaderMap, Method, Request, StatusCode};
use notion_reviews::{
    create_router, ApiKey, AppError, AppState, Block, BlockTreeConverter, DatabaseSchema, NotionErrorCode,
    NotionId, NotionRepository, PageRecord, RepositoryFactory, ServiceConfig,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

pub const DATABASE_ID: &str = "1429989fe8ac4effbc8f57f56486db54";
pub const PAGE_ID: &str = "598337872cf94fdf8782e53db20768a5";

/// An in-memory workspace. Every repository call is counted.
#[derive(Default)]
pub struct FakeNotion {
    pub schema: Option<DatabaseSchema>,
    pub rows: Vec<PageRecord>,
    pub blocks: HashMap<String, Vec<Block>>,
    pub reject_with: Option<String>,
    pub calls: AtomicUsize,
}

impl FakeNotion {
    pub fn with_rows(rows: serde_json::Value) -> Self {
        Self {
            rows: serde_json::from_value(rows).expect("rows fixture"),
            ..Self::default()
        }
    }

    pub fn with_schema(schema: serde_json::Value) -> Self {
        Self {
            schema: Some(serde_json::from_value(schema).expect("schema fixture")),
            ..Self::default()
        }
    }

    /// Every call fails the way Notion rejects a revoked token.
    pub fn unauthorized(message: &str) -> Self {
        Self {
            reject_with: Some(message.to_string()),
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), AppError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reject_with {
            Some(message) => Err(AppError::NotionApi {
                status: 401,
                code: NotionErrorCode::Unauthorized,
                message: message.clone(),
                request_id: Some("req-test".to_string()),
            }),
            None => Ok(()),
        }
    }

    fn not_found(id: &NotionId) -> AppError {
        AppError::NotionApi {
            status: 404,
            code: NotionErrorCode::ObjectNotFound,
            message: format!("Could not find object with ID: {}", id.to_hyphenated()),
            request_id: None,
        }
    }
}

#[async_trait::async_trait]
impl NotionRepository for FakeNotion {
    async fn retrieve_database_schema(&self, id: &NotionId) -> Result<DatabaseSchema, AppError> {
        self.check()?;
        self.schema.clone().ok_or_else(|| Self::not_found(id))
    }

    async fn query_database(&self, _: &NotionId) -> Result<Vec<PageRecord>, AppError> {
        self.check()?;
        Ok(self.rows.clone())
    }

    async fn retrieve_block_children(&self, parent: &NotionId) -> Result<Vec<Block>, AppError> {
        self.check()?;
        self.blocks
            .get(parent.as_str())
            .cloned()
            .ok_or_else(|| Self::not_found(parent))
    }
}

/// Configuration with both credentials present.
pub fn configured() -> ServiceConfig {
    ServiceConfig {
        api_key: Some(ApiKey::new("secret_test_key").expect("valid key")),
        database_id: Some(NotionId::parse(DATABASE_ID).expect("valid id")),
        ..ServiceConfig::default()
    }
}

/// A router over `fake`, plus a counter of how often a repository was built.
pub fn router_with(fake: Arc<FakeNotion>, config: ServiceConfig) -> (axum::Router, Arc<AtomicUsize>) {
    let connects = Arc::new(AtomicUsize::new(0));
    let counter = connects.clone();
    let factory: RepositoryFactory = Arc::new(
        move |_: &ServiceConfig| -> Result<Arc<dyn NotionRepository>, AppError> {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(fake.clone())
        },
    );
    let state = AppState::with_repository(config, factory, Arc::new(BlockTreeConverter::default()));
    (create_router(state), connects)
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).expect("JSON body")
    }
}

pub async fn send(router: axum::Router, method: Method, uri: &str) -> TestResponse {
    send_request(
        router,
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("request"),
    )
    .await
}

pub async fn send_request(router: axum::Router, request: Request<Body>) -> TestResponse {
    let response = router.oneshot(request).await.expect("response");
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    TestResponse {
        status,
        headers,
        body: String::from_utf8_lossy(&body).into_owned(),
    }
}

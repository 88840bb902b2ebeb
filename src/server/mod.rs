// src/server/mod.rs
//! HTTP surface: the three read operations as GET endpoints with CORS.
//!
//! Every route is also reachable under its legacy `/.netlify/functions/..`
//! path so existing front-ends keep working.

mod error;
mod handlers;

pub use error::ApiError;
pub use handlers::{ReviewResponse, ReviewsResponse};

use crate::api::NotionRepository;
use crate::config::ServiceConfig;
use crate::error::AppError;
use crate::markdown::{BlockTreeConverter, MarkdownConverter};
use axum::http::{header, Method};
use axum::routing::{get, MethodRouter};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Builds a repository for one request from the start-up configuration.
pub type RepositoryFactory =
    Arc<dyn Fn(&ServiceConfig) -> Result<Arc<dyn NotionRepository>, AppError> + Send + Sync>;

/// Shared, read-only request state.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServiceConfig>,
    pub converter: Arc<dyn MarkdownConverter>,
    connect: RepositoryFactory,
}

impl AppState {
    /// State backed by the Notion HTTP API.
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_repository(
            config,
            Arc::new(http_repository),
            Arc::new(BlockTreeConverter::default()),
        )
    }

    pub fn with_repository(
        config: ServiceConfig,
        connect: RepositoryFactory,
        converter: Arc<dyn MarkdownConverter>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            converter,
            connect,
        }
    }

    /// Checks for the credential before building anything.
    fn repository(&self) -> Result<Arc<dyn NotionRepository>, AppError> {
        self.config.require_api_key()?;
        (self.connect)(&self.config)
    }
}

fn http_repository(config: &ServiceConfig) -> Result<Arc<dyn NotionRepository>, AppError> {
    Ok(Arc::new(config.client()?))
}

fn operation<H, T>(handler: H) -> MethodRouter<AppState>
where
    H: axum::handler::Handler<T, AppState>,
    T: 'static,
{
    get(handler)
        .options(handlers::preflight)
        .fallback(handlers::method_not_allowed)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
}

pub fn create_router(state: AppState) -> Router {
    let reviews = operation(handlers::get_reviews);
    let categories = operation(handlers::get_categories);
    let review = operation(handlers::get_review);

    Router::new()
        .route("/api/reviews", reviews.clone())
        .route("/api/categories", categories.clone())
        .route("/api/review", review.clone())
        .route("/.netlify/functions/getAllReviews", reviews)
        .route("/.netlify/functions/getCategories", categories)
        .route("/.netlify/functions/getMarkdownFromReview", review)
        .route("/health", get(handlers::health))
        .layer(cors_layer())
        .with_state(state)
}

/// Serves until Ctrl-C.
pub async fn serve(listener: tokio::net::TcpListener, state: AppState) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        log::info!("Listening on http://{}", addr);
    }
    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::warn!("Could not listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutting down");
}

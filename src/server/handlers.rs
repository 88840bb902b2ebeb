// src/server/handlers.rs
use super::error::ApiError;
use super::AppState;
use crate::model::{Category, ReviewRow};
use crate::readers;
use crate::types::NotionId;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ReviewsResponse {
    pub reviews: Vec<ReviewRow>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReviewResponse {
    pub review: String,
}

#[derive(Debug, Deserialize)]
pub struct ReviewQuery {
    #[serde(rename = "pageId")]
    pub page_id: Option<String>,
}

pub async fn get_reviews(State(state): State<AppState>) -> Result<Json<ReviewsResponse>, ApiError> {
    let database = state.config.require_database_id()?.clone();
    let repository = state.repository()?;
    let reviews = readers::list_reviews(repository.as_ref(), &database).await?;
    Ok(Json(ReviewsResponse { reviews }))
}

pub async fn get_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, ApiError> {
    let database = state.config.require_database_id()?.clone();
    let repository = state.repository()?;
    let categories = readers::list_categories(repository.as_ref(), &database).await?;
    Ok(Json(categories))
}

pub async fn get_review(
    State(state): State<AppState>,
    Query(query): Query<ReviewQuery>,
) -> Result<Json<ReviewResponse>, ApiError> {
    let raw = query
        .page_id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest("Missing pageId query parameter".to_string()))?;
    let page = NotionId::parse(&raw)
        .map_err(|_| ApiError::BadRequest("Invalid pageId query parameter".to_string()))?;

    let repository = state.repository()?;
    let review =
        readers::page_to_markdown(repository.as_ref(), state.converter.as_ref(), &page).await?;
    Ok(Json(ReviewResponse { review }))
}

/// Answers a bare `OPTIONS` request with an empty 200.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

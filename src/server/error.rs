// src/server/error.rs
//! The uniform failure envelope: `{ "error": .., "message": .. }`.

use crate::error::AppError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

const MISSING_CONFIGURATION: &str = "Missing required environment variables";
const INTERNAL_SERVER_ERROR: &str = "Internal server error";
const METHOD_NOT_ALLOWED: &str = "Method not allowed";

/// A failure classified for an HTTP caller.
#[derive(Debug)]
pub enum ApiError {
    /// Credentials or the database ID are absent. No remote call was made.
    Configuration(String),
    BadRequest(String),
    MethodNotAllowed,
    /// The remote call failed; the cause is passed through as `message`.
    Remote(AppError),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        if error.is_configuration() {
            ApiError::Configuration(error.to_string())
        } else {
            ApiError::Remote(error)
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Configuration(detail) => {
                log::error!("Request rejected: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: MISSING_CONFIGURATION.to_string(),
                        message: None,
                    },
                )
            }
            ApiError::BadRequest(error) => (
                StatusCode::BAD_REQUEST,
                ErrorBody {
                    error,
                    message: None,
                },
            ),
            ApiError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                ErrorBody {
                    error: METHOD_NOT_ALLOWED.to_string(),
                    message: None,
                },
            ),
            ApiError::Remote(error) => {
                log::error!("Request failed: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: INTERNAL_SERVER_ERROR.to_string(),
                        message: Some(error.to_string()),
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotionErrorCode;

    #[test]
    fn configuration_errors_are_not_remote_failures() {
        let missing = ApiError::from(AppError::MissingConfiguration("NOTION_API_KEY".into()));
        assert!(matches!(missing, ApiError::Configuration(_)));

        let remote = ApiError::from(AppError::NotionApi {
            status: 401,
            code: NotionErrorCode::Unauthorized,
            message: "API token is invalid.".into(),
            request_id: None,
        });
        assert!(matches!(remote, ApiError::Remote(_)));
    }

    #[test]
    fn statuses_follow_the_error_class() {
        assert_eq!(
            ApiError::BadRequest("x".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::MethodNotAllowed.into_response().status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            ApiError::Configuration("x".into()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

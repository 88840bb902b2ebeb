// src/error.rs
//! Application error types.
//!
//! Each variant names a failure mode of the service: configuration that is
//! absent, identifiers that do not parse, and the ways a Notion API call can
//! fail. HTTP and CLI boundaries classify these into their own responses.

use std::fmt;
use thiserror::Error;

/// Notion API error codes as a typed vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotionErrorCode {
    /// API rate limit exceeded
    RateLimited,
    /// The requested object does not exist or is not shared with the integration
    ObjectNotFound,
    /// API key is invalid or expired
    Unauthorized,
    /// API key lacks permission for this resource
    RestrictedResource,
    InvalidJson,
    ValidationFailed,
    Conflict,
    InternalError,
    ServiceUnavailable,
    /// HTTP status code fallback when the error body is unparseable
    HttpStatus(u16),
    /// An error code this client doesn't recognize yet
    Unknown(String),
}

impl NotionErrorCode {
    /// Parse a Notion API error code string into the typed vocabulary.
    pub fn from_api_response(code: &str) -> Self {
        match code {
            "rate_limited" => Self::RateLimited,
            "object_not_found" => Self::ObjectNotFound,
            "unauthorized" => Self::Unauthorized,
            "restricted_resource" => Self::RestrictedResource,
            "invalid_json" => Self::InvalidJson,
            "validation_error" => Self::ValidationFailed,
            "conflict_error" => Self::Conflict,
            "internal_server_error" => Self::InternalError,
            "service_unavailable" => Self::ServiceUnavailable,
            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn from_http_status(status: u16) -> Self {
        Self::HttpStatus(status)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ObjectNotFound | Self::HttpStatus(404))
    }
}

impl fmt::Display for NotionErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RateLimited => write!(f, "rate_limited"),
            Self::ObjectNotFound => write!(f, "object_not_found"),
            Self::Unauthorized => write!(f, "unauthorized"),
            Self::RestrictedResource => write!(f, "restricted_resource"),
            Self::InvalidJson => write!(f, "invalid_json"),
            Self::ValidationFailed => write!(f, "validation_error"),
            Self::Conflict => write!(f, "conflict_error"),
            Self::InternalError => write!(f, "internal_server_error"),
            Self::ServiceUnavailable => write!(f, "service_unavailable"),
            Self::HttpStatus(code) => write!(f, "http_{}", code),
            Self::Unknown(code) => write!(f, "{}", code),
        }
    }
}

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Network failure: {0}")]
    NetworkFailure(#[from] reqwest::Error),

    #[error("Notion API error ({status}): {code} - {message}")]
    NotionApi {
        status: u16,
        code: NotionErrorCode,
        message: String,
        request_id: Option<String>,
    },

    #[error("Notion API returned HTTP {status} from {url}")]
    NotionService {
        code: NotionErrorCode,
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Malformed response from {url}: {source}\nBody: {body}")]
    MalformedResponse {
        url: String,
        body: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Markdown rendering failed: {0}")]
    Render(#[from] std::fmt::Error),

    #[error(transparent)]
    Validation(#[from] crate::types::ValidationError),
}

impl AppError {
    /// Whether this error was caused by absent or unusable configuration
    /// rather than by a remote call.
    pub fn is_configuration(&self) -> bool {
        matches!(self, AppError::MissingConfiguration(_))
    }
}

/// Result type alias for convenience
pub type Result<T, E = AppError> = std::result::Result<T, E>;

// src/types/domain_types.rs
//! Domain-specific newtypes for credentials and endpoints.

use super::ValidationError;
use std::fmt;
use url::Url;

/// Bearer credential for the Notion API.
///
/// The key is opaque: the only requirement is that it is non-blank and
/// usable as an HTTP header value. `Display` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Result<Self, ValidationError> {
        let key = key.into().trim().to_string();

        if key.is_empty() {
            return Err(ValidationError::InvalidApiKey {
                reason: "API key cannot be empty".to_string(),
            });
        }

        if key.chars().any(|c| c.is_control() || c.is_whitespace()) {
            return Err(ValidationError::InvalidApiKey {
                reason: "API key cannot contain whitespace or control characters".to_string(),
            });
        }

        Ok(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Keys shorter than this are masked entirely.
const MIN_KEY_LENGTH_FOR_PREFIX: usize = 8;

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.chars().count() < MIN_KEY_LENGTH_FOR_PREFIX {
            return f.write_str("***");
        }
        let visible: String = self.0.chars().take(4).collect();
        write!(f, "{}...", visible)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ApiKey({})", self)
    }
}

/// Base URL of the Notion REST API, e.g. `https://api.notion.com/v1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiBaseUrl(Url);

impl ApiBaseUrl {
    pub fn parse(url: &str) -> Result<Self, ValidationError> {
        let parsed = Url::parse(url).map_err(|e| ValidationError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ValidationError::InvalidUrl {
                url: url.to_string(),
                reason: "Only HTTP and HTTPS URLs are supported".to_string(),
            });
        }

        Ok(Self(parsed))
    }

    /// Joins an endpoint path (no leading slash) onto the base.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.0.as_str().trim_end_matches('/'), path)
    }
}

impl Default for ApiBaseUrl {
    fn default() -> Self {
        Self(Url::parse(crate::constants::NOTION_API_BASE_URL).expect("default API URL is valid"))
    }
}

impl fmt::Display for ApiBaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

//! Validated newtypes shared across the crate.

use thiserror::Error;

mod domain_types;
mod ids;

pub use domain_types::*;
pub use ids::*;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid Notion ID format: {0}")]
    InvalidId(String),

    #[error("Invalid API key format: {reason}")]
    InvalidApiKey { reason: String },

    #[error("Invalid URL: {url} - {reason}")]
    InvalidUrl { url: String, reason: String },
}

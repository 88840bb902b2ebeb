// src/config.rs
use crate::api::NotionHttpClient;
use crate::constants::{
    DEFAULT_BIND_ADDRESS, ENV_API_KEY, ENV_API_KEY_LEGACY, ENV_DATABASE_ID,
    ENV_DATABASE_ID_LEGACY, NOTION_API_BASE_URL,
};
use crate::error::AppError;
use crate::types::{ApiBaseUrl, ApiKey, NotionId};
use clap::{Parser, Subcommand};

/// Parsed command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,

    /// Base URL of the Notion REST API
    #[arg(long, global = true, default_value = NOTION_API_BASE_URL)]
    pub api_base_url: String,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Serve the read endpoints over HTTP (default)
    Serve {
        /// Address to listen on
        #[arg(long, default_value = DEFAULT_BIND_ADDRESS)]
        bind: String,
    },
    /// Print every review of the configured database as JSON
    Reviews,
    /// Print the selectable categories of the configured database as JSON
    Categories,
    /// Print one page's content as markdown wrapped in JSON
    Review {
        /// Notion page URL or ID
        page_id: String,
    },
}

impl CommandLineInput {
    /// The requested subcommand, `serve` when none was given.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or_else(|| Command::Serve {
            bind: DEFAULT_BIND_ADDRESS.to_string(),
        })
    }
}

/// Credentials and targets read once at start-up.
///
/// Missing values are kept as `None` so that each operation can report a
/// configuration error before touching the network.
#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    pub api_key: Option<ApiKey>,
    pub database_id: Option<NotionId>,
    pub api_base_url: ApiBaseUrl,
}

impl ServiceConfig {
    /// Resolves configuration from CLI input and the process environment.
    ///
    /// Only an unusable `--api-base-url` fails here.
    pub fn resolve(cli: &CommandLineInput) -> Result<Self, AppError> {
        let api_base_url = ApiBaseUrl::parse(&cli.api_base_url)?;
        Ok(Self::from_lookup(|name| std::env::var(name).ok(), api_base_url))
    }

    /// Builds configuration from any variable source.
    pub fn from_lookup<F>(lookup: F, api_base_url: ApiBaseUrl) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |primary: &str, legacy: &str| {
            lookup(primary)
                .filter(|value| !value.trim().is_empty())
                .or_else(|| lookup(legacy).filter(|value| !value.trim().is_empty()))
        };

        let api_key = read(ENV_API_KEY, ENV_API_KEY_LEGACY).and_then(|raw| {
            ApiKey::new(raw)
                .map_err(|e| log::warn!("Ignoring {}: {}", ENV_API_KEY, e))
                .ok()
        });

        let database_id = read(ENV_DATABASE_ID, ENV_DATABASE_ID_LEGACY).and_then(|raw| {
            NotionId::parse(&raw)
                .map_err(|e| log::warn!("Ignoring {}: {}", ENV_DATABASE_ID, e))
                .ok()
        });

        log::debug!(
            "Configuration: api key {}, database {}, base URL {}",
            if api_key.is_some() { "set" } else { "missing" },
            database_id
                .as_ref()
                .map(NotionId::to_string)
                .unwrap_or_else(|| "missing".to_string()),
            api_base_url
        );

        Self {
            api_key,
            database_id,
            api_base_url,
        }
    }

    pub fn require_api_key(&self) -> Result<&ApiKey, AppError> {
        self.api_key.as_ref().ok_or_else(|| {
            AppError::MissingConfiguration(format!(
                "{} (or {}) is not set",
                ENV_API_KEY, ENV_API_KEY_LEGACY
            ))
        })
    }

    pub fn require_database_id(&self) -> Result<&NotionId, AppError> {
        self.database_id.as_ref().ok_or_else(|| {
            AppError::MissingConfiguration(format!(
                "{} (or {}) is not set to a valid database ID",
                ENV_DATABASE_ID, ENV_DATABASE_ID_LEGACY
            ))
        })
    }

    /// Builds an authenticated client, or reports the missing credential.
    pub fn client(&self) -> Result<NotionHttpClient, AppError> {
        NotionHttpClient::new(self.require_api_key()?, self.api_base_url.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> ServiceConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServiceConfig::from_lookup(|name| vars.get(name).cloned(), ApiBaseUrl::default())
    }

    #[test]
    fn primary_variables_win_over_legacy_ones() {
        let config = config(&[
            ("NOTION_API_KEY", "secret_primary"),
            ("NETLIFY_NOTION_KEY", "secret_legacy"),
            ("NETLIFY_DATABASE_ID", "1429989fe8ac4effbc8f57f56486db54"),
        ]);
        assert_eq!(config.require_api_key().unwrap().as_str(), "secret_primary");
        assert_eq!(
            config.require_database_id().unwrap().as_str(),
            "1429989fe8ac4effbc8f57f56486db54"
        );
    }

    #[test]
    fn empty_values_count_as_missing() {
        let config = config(&[("NOTION_API_KEY", "  "), ("NOTION_DATABASE_ID", "")]);
        assert!(config.require_api_key().unwrap_err().is_configuration());
        assert!(config.require_database_id().unwrap_err().is_configuration());
        assert!(config.client().unwrap_err().is_configuration());
    }

    #[test]
    fn malformed_database_id_is_a_configuration_error() {
        let config = config(&[("NOTION_API_KEY", "secret"), ("NOTION_DATABASE_ID", "not-an-id")]);
        assert!(config.require_database_id().unwrap_err().is_configuration());
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = CommandLineInput::parse_from(["notion-reviews", "--verbose"]);
        assert!(cli.verbose);
        assert_eq!(
            cli.command(),
            Command::Serve {
                bind: "127.0.0.1:8888".to_string()
            }
        );

        let cli = CommandLineInput::parse_from(["notion-reviews", "review", "abc", "-v"]);
        assert_eq!(
            cli.command(),
            Command::Review {
                page_id: "abc".to_string()
            }
        );
        assert!(cli.verbose);
    }
}

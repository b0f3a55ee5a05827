//! Configuration from environment variables.
//!
//! All connection settings come from the environment at startup. A missing
//! required variable fails `Config::from_env` with the variable's name,
//! rather than surfacing later as a failed provider call.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const DEFAULT_API_VERSION: &str = "2024-12-01-preview";
pub const DEFAULT_PORT: u16 = 3000;

/// Environment variables that must be set for the server to start.
pub const REQUIRED_VARS: &[&str] = &[
    "AZURE_OPENAI_ENDPOINT",
    "AZURE_OPENAI_API_KEY",
    "AZURE_OPENAI_CHAT_COMPLETIONS_DEPLOYMENT_NAME",
    "AZURE_SEARCH_SERVICE_ENDPOINT",
    "AZURE_SEARCH_SERVICE_ADMIN_KEY",
    "SEARCH_INDEX_NAME",
];

/// Azure OpenAI connection settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiSettings {
    pub endpoint: String,
    pub api_key: String,
    /// Chat-completions deployment name; doubles as the reported model name.
    pub deployment: String,
    pub api_version: String,
}

/// Azure AI Search connection settings (the grounding source).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSettings {
    pub endpoint: String,
    pub admin_key: String,
    pub index_name: String,
}

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server port.
    pub port: u16,
    pub openai: OpenAiSettings,
    pub search: SearchSettings,
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let require = |name: &str| -> Result<String> {
            match lookup(name) {
                Some(v) if !v.trim().is_empty() => Ok(v),
                _ => Err(Error::Config(format!(
                    "missing environment variable {}",
                    name
                ))),
            }
        };

        let openai = OpenAiSettings {
            endpoint: require("AZURE_OPENAI_ENDPOINT")?,
            api_key: require("AZURE_OPENAI_API_KEY")?,
            deployment: require("AZURE_OPENAI_CHAT_COMPLETIONS_DEPLOYMENT_NAME")?,
            api_version: lookup("AZURE_OPENAI_API_VERSION")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_API_VERSION.into()),
        };

        let search = SearchSettings {
            endpoint: require("AZURE_SEARCH_SERVICE_ENDPOINT")?,
            admin_key: require("AZURE_SEARCH_SERVICE_ADMIN_KEY")?,
            index_name: require("SEARCH_INDEX_NAME")?,
        };

        let port = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Ok(Self {
            port,
            openai,
            search,
        })
    }
}

/// Required variables that are absent (or blank) under the given lookup.
pub fn missing_vars<F>(lookup: F) -> Vec<&'static str>
where
    F: Fn(&str) -> Option<String>,
{
    REQUIRED_VARS
        .iter()
        .copied()
        .filter(|name| lookup(name).map_or(true, |v| v.trim().is_empty()))
        .collect()
}

//! Client configuration.

use serde::Deserialize;

use crate::error::ApiError;

pub const DEFAULT_API_PREFIX: &str = "api/v1";

/// Where the API lives. Fixed once a client is built.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    pub base_url: String,
    /// Version segment inserted between `base_url` and every resource path.
    /// Empty disables the prefix.
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,
}

fn default_api_prefix() -> String {
    DEFAULT_API_PREFIX.to_string()
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_prefix: default_api_prefix(),
        }
    }

    #[must_use]
    pub fn with_api_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.api_prefix = prefix.into();
        self
    }

    /// Load from `LOCALIZE_API_URL` and the optional `LOCALIZE_API_PREFIX`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Config` when `LOCALIZE_API_URL` is unset or empty.
    pub fn from_env() -> Result<Self, ApiError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ApiError> {
        let base_url = lookup("LOCALIZE_API_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ApiError::Config("LOCALIZE_API_URL environment variable is required".to_string()))?;
        let config = Self::new(base_url);
        Ok(match lookup("LOCALIZE_API_PREFIX") {
            Some(prefix) => config.with_api_prefix(prefix),
            None => config,
        })
    }
}

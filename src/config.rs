//! Provider configuration
//!
//! Connection settings for the Secure Workload API: endpoint plus API
//! key/secret. Loadable from the environment, and the source of the default
//! root scope name when a label omits one.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Environment variables consulted by [`ProviderConfig::from_env`].
pub const ENV_API_URL: &str = "SECUREWORKLOAD_API_URL";
pub const ENV_API_KEY: &str = "SECUREWORKLOAD_API_KEY";
pub const ENV_API_SECRET: &str = "SECUREWORKLOAD_API_SECRET";

/// Connection configuration for the Secure Workload API.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ProviderConfig {
    /// Base endpoint, e.g. `https://acme.secureworkloadpreview.com`.
    pub api_url: String,
    /// OpenAPI key id.
    pub api_key: String,
    /// OpenAPI secret.
    pub api_secret: String,
}

impl ProviderConfig {
    pub fn new(api_url: &str, api_key: &str, api_secret: &str) -> Self {
        Self {
            api_url: api_url.to_string(),
            api_key: api_key.to_string(),
            api_secret: api_secret.to_string(),
        }
    }

    /// Load configuration from `SECUREWORKLOAD_API_URL`, `_API_KEY` and
    /// `_API_SECRET`. Unset variables yield empty fields; `validate` reports
    /// them.
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).unwrap_or_default();
        Self {
            api_url: var(ENV_API_URL),
            api_key: var(ENV_API_KEY),
            api_secret: var(ENV_API_SECRET),
        }
    }

    /// Check that every connection field is present and the endpoint parses
    /// as a URL.
    pub fn validate(&self) -> Result<()> {
        if self.api_url.is_empty() {
            return Err(Error::MissingParameter("api_url"));
        }
        if self.api_key.is_empty() {
            return Err(Error::MissingParameter("api_key"));
        }
        if self.api_secret.is_empty() {
            return Err(Error::MissingParameter("api_secret"));
        }
        url::Url::parse(&self.api_url)
            .map_err(|_| Error::MalformedApiUrl(self.api_url.clone()))?;
        Ok(())
    }

    /// Derive the tenant (root scope) name from the endpoint hostname: strip
    /// the scheme, then take everything before the first `.`.
    /// `https://acme.secureworkloadpreview.com` derives to `acme`.
    ///
    /// A hostname without any `.` is passed through whole; an endpoint
    /// without `://` is an error.
    pub fn default_root_scope(&self) -> Result<String> {
        let Some((_, host)) = self.api_url.split_once("://") else {
            return Err(Error::MalformedApiUrl(self.api_url.clone()));
        };
        Ok(host.split('.').next().unwrap_or_default().to_string())
    }
}

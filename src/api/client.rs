//! Secure Workload API client
//!
//! Main client for the OpenAPI surface, combining connection configuration
//! and HTTP functionality. Resource controllers take a reference to this
//! client explicitly; there is no ambient or global handle.

use super::filters::{CreateFilterRequest, Filter};
use super::http::HttpClient;
use super::tags::{CreateTagRequest, Tag};
use crate::config::ProviderConfig;
use crate::error::{Error, Result};
use serde_json::json;
use std::collections::HashMap;

/// Main Secure Workload client
#[derive(Clone)]
pub struct ApiClient {
    pub config: ProviderConfig,
    http: HttpClient,
}

impl ApiClient {
    /// Create a new client from connection configuration
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let http = HttpClient::new(&config.api_key, &config.api_secret)?;
        Ok(Self { config, http })
    }

    /// Build an OpenAPI URL from the configured endpoint
    fn openapi_url(&self, path: &str) -> String {
        format!(
            "{}/openapi/v1/{}",
            self.config.api_url.trim_end_matches('/'),
            path
        )
    }

    fn filters_url(&self) -> String {
        self.openapi_url("filters/inventories")
    }

    fn filter_url(&self, id: &str) -> String {
        self.openapi_url(&format!("filters/inventories/{id}"))
    }

    fn tags_url(&self, root_scope_name: &str) -> String {
        self.openapi_url(&format!(
            "inventory/tags/{}",
            urlencoding::encode(root_scope_name)
        ))
    }

    // =========================================================================
    // Inventory filters
    // =========================================================================

    /// Create an inventory filter and return the server's view of it,
    /// including the assigned id
    pub async fn create_filter(&self, request: &CreateFilterRequest) -> Result<Filter> {
        let response = self.http.post(&self.filters_url(), request).await?;
        serde_json::from_value(response).map_err(Error::Decode)
    }

    /// Look up an inventory filter by id
    pub async fn describe_filter(&self, id: &str) -> Result<Filter> {
        let response = self.http.get(&self.filter_url(id)).await?;
        serde_json::from_value(response).map_err(Error::Decode)
    }

    /// Delete an inventory filter by id
    pub async fn delete_filter(&self, id: &str) -> Result<()> {
        self.http.delete(&self.filter_url(id), None).await?;
        Ok(())
    }

    // =========================================================================
    // Inventory tags
    // =========================================================================

    /// Create or replace the tag binding for an ip within a root scope.
    /// The same call serves create and update; the server replaces the full
    /// attribute set.
    pub async fn create_tag(
        &self,
        root_scope_name: &str,
        request: &CreateTagRequest,
    ) -> Result<Tag> {
        let response = self.http.post(&self.tags_url(root_scope_name), request).await?;

        // Some API versions answer the upsert with an empty body; fall back
        // to the requested ip so callers can always compose an identifier.
        if response.is_null() {
            return Ok(Tag {
                ip: request.ip.clone(),
            });
        }
        let mut tag: Tag = serde_json::from_value(response).map_err(Error::Decode)?;
        if tag.ip.is_empty() {
            tag.ip = request.ip.clone();
        }
        Ok(tag)
    }

    /// Fetch the current attribute mapping for an ip within a root scope
    pub async fn describe_tag(
        &self,
        root_scope_name: &str,
        ip: &str,
    ) -> Result<HashMap<String, String>> {
        let url = format!(
            "{}?ip={}",
            self.tags_url(root_scope_name),
            urlencoding::encode(ip)
        );
        let response = self.http.get(&url).await?;
        serde_json::from_value(response).map_err(Error::Decode)
    }

    /// Remove the tag binding for an ip within a root scope
    pub async fn delete_tag(&self, root_scope_name: &str, ip: &str) -> Result<()> {
        self.http
            .delete(&self.tags_url(root_scope_name), Some(&json!({ "ip": ip })))
            .await?;
        Ok(())
    }
}

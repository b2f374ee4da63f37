//! Inventory label controller
//!
//! Maps a declarative IP-to-attribute binding onto the API's tag calls. The
//! external identity is the composite [`TagId`]; the two components are
//! recomputed from the stored id on every read and delete.

use super::schema::{self, LABEL_FIELDS};
use super::tag_id::TagId;
use crate::api::{ApiClient, CreateTagRequest};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Local state for an inventory label resource.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LabelResource {
    /// Composite identifier `root_scope_name:ip`; `None` until created.
    pub id: Option<String>,
    /// Root app scope name. Empty means: derive from the API endpoint
    /// hostname at create time.
    pub root_scope_name: String,
    /// IPv4 address or subnet being tagged.
    pub ip: String,
    /// Full attribute set for the binding. Updates replace the whole map;
    /// partial updates are not supported.
    pub attributes: HashMap<String, String>,
}

impl LabelResource {
    fn field_is_empty(&self, name: &str) -> bool {
        match name {
            "ip" => self.ip.is_empty(),
            "attributes" => self.attributes.is_empty(),
            _ => false,
        }
    }
}

/// Create or update the label binding. One idempotent upsert serves both
/// paths: the server replaces the full attribute set for the ip.
///
/// On success the composite id is stored, built from the effective root
/// scope name and the server-echoed ip.
pub async fn upsert(resource: &mut LabelResource, client: &ApiClient) -> Result<()> {
    if let Some(missing) =
        schema::first_missing_required(LABEL_FIELDS, |name| resource.field_is_empty(name))
    {
        return Err(Error::MissingParameter(missing));
    }

    let root_scope_name = if resource.root_scope_name.is_empty() {
        client.config.default_root_scope()?
    } else {
        resource.root_scope_name.clone()
    };

    // Reject components that could not round-trip through the composite id
    // before touching the API.
    TagId::new(&root_scope_name, &resource.ip)?;

    let request = CreateTagRequest {
        ip: resource.ip.clone(),
        attributes: resource.attributes.clone(),
    };

    tracing::debug!(scope = %root_scope_name, ip = %resource.ip, "upserting inventory label");
    let tag = client.create_tag(&root_scope_name, &request).await?;

    let id = TagId::new(&root_scope_name, &tag.ip)?;
    resource.id = Some(id.to_string());
    Ok(())
}

/// Refresh local state from the server: decompose the stored id and fetch
/// the current attribute mapping for that (scope, ip) pair.
pub async fn read(resource: &mut LabelResource, client: &ApiClient) -> Result<()> {
    let id = TagId::parse(resource.id.as_deref().ok_or(Error::MissingId)?)?;
    let attributes = client.describe_tag(id.root_scope_name(), id.ip()).await?;

    resource.root_scope_name = id.root_scope_name().to_string();
    resource.ip = id.ip().to_string();
    resource.attributes = attributes;
    Ok(())
}

/// Delete the binding addressed by the stored composite id.
pub async fn delete(resource: &LabelResource, client: &ApiClient) -> Result<()> {
    let id = TagId::parse(resource.id.as_deref().ok_or(Error::MissingId)?)?;
    tracing::debug!(scope = %id.root_scope_name(), ip = %id.ip(), "deleting inventory label");
    client.delete_tag(id.root_scope_name(), id.ip()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProviderConfig;

    fn offline_client() -> ApiClient {
        ApiClient::new(ProviderConfig::new("https://acme.example.com", "k", "s")).unwrap()
    }

    fn valid_resource() -> LabelResource {
        LabelResource {
            id: None,
            root_scope_name: "acme".to_string(),
            ip: "1.2.3.4".to_string(),
            attributes: HashMap::from([("Environment".to_string(), "test".to_string())]),
        }
    }

    #[tokio::test]
    async fn upsert_reports_first_missing_field() {
        let client = offline_client();

        let mut resource = LabelResource::default();
        let err = upsert(&mut resource, &client).await.unwrap_err();
        assert!(matches!(err, Error::MissingParameter("ip")));

        let mut resource = valid_resource();
        resource.attributes.clear();
        let err = upsert(&mut resource, &client).await.unwrap_err();
        assert!(matches!(err, Error::MissingParameter("attributes")));
    }

    #[tokio::test]
    async fn upsert_rejects_delimiter_bearing_components() {
        let client = offline_client();

        let mut resource = valid_resource();
        resource.root_scope_name = "acme:prod".to_string();
        let err = upsert(&mut resource, &client).await.unwrap_err();
        assert!(matches!(err, Error::DelimiterInComponent { .. }));

        let mut resource = valid_resource();
        resource.ip = "fe80::1".to_string();
        let err = upsert(&mut resource, &client).await.unwrap_err();
        assert!(matches!(err, Error::DelimiterInComponent { .. }));
        assert!(resource.id.is_none());
    }

    #[tokio::test]
    async fn upsert_fails_when_scope_cannot_be_derived() {
        // No explicit scope and an endpoint without a scheme.
        let client = ApiClient::new(ProviderConfig::new("acme.example.com", "k", "s")).unwrap();
        let mut resource = valid_resource();
        resource.root_scope_name.clear();

        let err = upsert(&mut resource, &client).await.unwrap_err();
        assert!(matches!(err, Error::MalformedApiUrl(_)));
    }

    #[tokio::test]
    async fn read_and_delete_reject_malformed_ids() {
        let client = offline_client();

        let mut resource = valid_resource();
        resource.id = Some("no-delimiter-here".to_string());
        assert!(matches!(
            read(&mut resource, &client).await,
            Err(Error::InvalidTagId(_))
        ));
        assert!(matches!(
            delete(&resource, &client).await,
            Err(Error::InvalidTagId(_))
        ));
    }

    #[tokio::test]
    async fn read_and_delete_require_an_id() {
        let client = offline_client();
        let mut resource = valid_resource();

        assert!(matches!(
            read(&mut resource, &client).await,
            Err(Error::MissingId)
        ));
        assert!(matches!(
            delete(&resource, &client).await,
            Err(Error::MissingId)
        ));
    }
}

//! Inventory filter controller
//!
//! Maps a declarative filter configuration onto the API's filter CRUD calls.
//! Filters have no update call: every field is force-new and any change is a
//! destroy-then-recreate driven by the host runtime.

use super::schema::{self, FILTER_FIELDS};
use crate::api::{ApiClient, CreateFilterRequest};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

/// Local state for an inventory filter resource.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterResource {
    /// Server-assigned identifier; `None` until created.
    pub id: Option<String>,
    pub name: String,
    /// Opaque JSON query payload. Never refreshed from the server.
    pub query: String,
    pub app_scope_id: String,
    pub primary: bool,
    pub public: bool,
}

impl FilterResource {
    fn field_is_empty(&self, name: &str) -> bool {
        match name {
            "name" => self.name.is_empty(),
            "app_scope_id" => self.app_scope_id.is_empty(),
            "query" => self.query.is_empty(),
            _ => false,
        }
    }
}

/// Create the filter and store the server-assigned id on success.
///
/// Fails before any network call when a required field is empty (first empty
/// field in schema order) or when `public` is set without `primary`.
pub async fn create(resource: &mut FilterResource, client: &ApiClient) -> Result<()> {
    if let Some(missing) =
        schema::first_missing_required(FILTER_FIELDS, |name| resource.field_is_empty(name))
    {
        return Err(Error::MissingParameter(missing));
    }
    if resource.public && !resource.primary {
        return Err(Error::PublicRequiresPrimary);
    }

    let request = CreateFilterRequest {
        name: resource.name.clone(),
        query: RawValue::from_string(resource.query.clone()).map_err(Error::InvalidQuery)?,
        app_scope_id: resource.app_scope_id.clone(),
        primary: resource.primary,
        public: resource.public,
    };

    tracing::debug!(name = %resource.name, "creating inventory filter");
    let filter = client.create_filter(&request).await?;
    resource.id = Some(filter.id);
    Ok(())
}

/// Refresh local state from the server's view of the filter. The opaque
/// query and the id are left untouched.
pub async fn read(resource: &mut FilterResource, client: &ApiClient) -> Result<()> {
    let id = resource.id.as_deref().ok_or(Error::MissingId)?;
    let filter = client.describe_filter(id).await?;

    resource.name = filter.name;
    resource.app_scope_id = filter.app_scope_id;
    resource.primary = filter.primary;
    resource.public = filter.public;
    Ok(())
}

/// Delete the filter by its stored id.
pub async fn delete(resource: &FilterResource, client: &ApiClient) -> Result<()> {
    let id = resource.id.as_deref().ok_or(Error::MissingId)?;
    tracing::debug!(%id, "deleting inventory filter");
    client.delete_filter(id).await
}

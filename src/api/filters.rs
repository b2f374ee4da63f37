//! Inventory filter wire types

use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

/// Request body for filter creation.
///
/// The query is an opaque JSON payload authored by the user; `RawValue`
/// forwards it byte-for-byte instead of reshaping it through a tree.
#[derive(Debug, Serialize)]
pub struct CreateFilterRequest {
    pub name: String,
    pub query: Box<RawValue>,
    pub app_scope_id: String,
    pub primary: bool,
    pub public: bool,
}

/// Inventory filter as returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct Filter {
    pub id: String,
    pub name: String,
    pub app_scope_id: String,
    #[serde(default)]
    pub primary: bool,
    #[serde(default)]
    pub public: bool,
}

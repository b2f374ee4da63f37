//! Inventory tag (label) wire types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Request body for the tag upsert call. The root scope rides in the URL
/// path, not the body.
#[derive(Debug, Serialize)]
pub struct CreateTagRequest {
    pub ip: String,
    pub attributes: HashMap<String, String>,
}

/// Tag binding as returned by the upsert call.
#[derive(Debug, Clone, Deserialize)]
pub struct Tag {
    #[serde(default)]
    pub ip: String,
}

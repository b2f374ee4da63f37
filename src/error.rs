//! Crate error type
//!
//! Two kinds of failure exist: local validation (a required field is missing,
//! an identifier cannot be composed or decomposed) and upstream API failures,
//! which are carried verbatim with no retry or classification.

use reqwest::StatusCode;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required configuration field was empty. Raised before any network
    /// call, naming the first missing field in schema order.
    #[error("{0} is required but was not provided")]
    MissingParameter(&'static str),

    /// A public filter must also be primary (scope restricted).
    #[error("public filters must also be primary")]
    PublicRequiresPrimary,

    /// A stored label identifier did not have the `root_scope_name:ip` shape.
    #[error("invalid identifier format: expected `root_scope_name:ip`, got {0:?}")]
    InvalidTagId(String),

    /// A label identifier component contained the `:` delimiter and would not
    /// survive decomposition.
    #[error("{field} must not contain {delimiter:?}")]
    DelimiterInComponent { field: &'static str, delimiter: char },

    /// The configured API URL has no scheme, so no root scope name can be
    /// derived from its hostname.
    #[error("cannot derive root scope name from API URL {0:?}: no `://` found")]
    MalformedApiUrl(String),

    /// Read or delete was invoked on a resource that has never been created.
    #[error("resource has no identifier; create it first")]
    MissingId,

    /// The filter query payload is not parseable JSON.
    #[error("filter query is not valid JSON")]
    InvalidQuery(#[source] serde_json::Error),

    /// API key or secret contains bytes that cannot be sent in an HTTP header.
    #[error("API credentials contain characters that cannot be sent in a header")]
    InvalidCredentials,

    /// The API answered with a non-success status. The body is the raw server
    /// response, passed through unchanged.
    #[error("API request failed: {status}: {body}")]
    Api { status: StatusCode, body: String },

    /// Connection-level failure before any API response was received.
    #[error("HTTP transport error")]
    Transport(#[from] reqwest::Error),

    /// The API response body did not match the expected wire shape.
    #[error("failed to decode API response")]
    Decode(#[source] serde_json::Error),
}

//! Secure Workload API interaction module
//!
//! Everything that talks to the remote inventory API lives here:
//!
//! - [`http`] - HTTP utilities for REST API calls
//! - [`client`] - Main API client, one method per remote operation
//! - [`filters`] - Inventory filter wire types
//! - [`tags`] - Inventory tag (label) wire types

pub mod client;
pub mod filters;
pub mod http;
pub mod tags;

pub use client::ApiClient;
pub use filters::{CreateFilterRequest, Filter};
pub use tags::{CreateTagRequest, Tag};

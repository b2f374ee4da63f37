//! Resource controllers
//!
//! One module per managed resource type, each exposing the standard
//! controller contract: create/read/delete functions (and update where the
//! resource supports it) that take the local state and an explicit
//! [`ApiClient`](crate::api::ApiClient) reference. Success on create stores
//! the persisted identifier before returning.
//!
//! - [`schema`] - static field-metadata tables shared with the host layer
//! - [`tag_id`] - composite identifier value type for labels
//! - [`filter`] - inventory filter controller
//! - [`label`] - inventory label controller

pub mod filter;
pub mod label;
pub mod schema;
pub mod tag_id;

pub use filter::FilterResource;
pub use label::LabelResource;
pub use tag_id::{TagId, TAG_ID_DELIMITER};

//! Resource controllers for Cisco Secure Workload inventory filters and
//! labels, intended to back a Terraform-style infrastructure-as-code
//! provider.
//!
//! Two independent controllers translate declarative configuration into
//! calls against the Secure Workload OpenAPI surface:
//!
//! - [`resource::filter`] manages inventory filters, identified by an opaque
//!   server-assigned id. Filters are create/read/delete only; every field is
//!   force-new.
//! - [`resource::label`] manages IP-to-attribute tag bindings, identified by
//!   the composite `root_scope_name:ip` key. Create and update share one
//!   idempotent upsert.
//!
//! Each operation takes its resource state and an explicit [`api::ApiClient`]
//! reference, runs the required-field validation gate before any network
//! I/O, and passes upstream API errors through unchanged.
//!
//! # Example
//!
//! ```ignore
//! use secureworkload_provider::{api::ApiClient, config::ProviderConfig, resource};
//!
//! async fn example() -> Result<(), secureworkload_provider::Error> {
//!     let client = ApiClient::new(ProviderConfig::from_env())?;
//!
//!     let mut label = resource::LabelResource {
//!         ip: "1.2.3.4".into(),
//!         attributes: [("Environment".into(), "test".into())].into(),
//!         ..Default::default()
//!     };
//!     resource::label::upsert(&mut label, &client).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod resource;

pub use api::ApiClient;
pub use config::ProviderConfig;
pub use error::{Error, Result};

//! # HubSpot Legacy API Client
//!
//! A Rust client for the legacy HubSpot REST API, providing type-safe
//! configuration, URL construction and async connections.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`HubspotConfig`] and [`HubspotConfigBuilder`]
//! - Validated newtypes for credentials and base URLs
//! - URL construction with `:placeholder` interpolation and the API's
//!   range, batch and timestamp parameter encodings
//! - JSON verb wrappers through [`clients::Connection`]
//! - Form submissions through [`clients::FormsConnection`]
//! - File uploads through [`clients::FilesConnection`]
//! - The [`resources::Form`] model
//!
//! ## Quick Start
//!
//! ```rust
//! use hubspot_legacy::{ApiKey, HubspotConfig, PortalId};
//!
//! let config = HubspotConfig::builder()
//!     .api_key(ApiKey::new("demo").unwrap())
//!     .portal_id(PortalId::from(62515))
//!     .build()
//!     .unwrap();
//! ```
//!
//! ## Building URLs
//!
//! ```rust
//! use hubspot_legacy::{ApiKey, HubspotConfig};
//! use hubspot_legacy::clients::{build_url, Params, UrlOptions};
//!
//! let config = HubspotConfig::builder()
//!     .api_key(ApiKey::new("demo").unwrap())
//!     .build()
//!     .unwrap();
//!
//! let params = Params::new()
//!     .with("email", "email@address.com")
//!     .with("batch_list_id", vec![1, 2, 3]);
//! let url = build_url(&config, "/test/:email/profile", &params, &UrlOptions::new()).unwrap();
//!
//! assert_eq!(
//!     url,
//!     "https://api.hubapi.com/test/email%40address.com/profile?listId=1&listId=2&listId=3&hapikey=demo"
//! );
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use hubspot_legacy::clients::{Connection, RequestOptions};
//! use hubspot_legacy::resources::Form;
//!
//! let connection = Connection::new(config)?;
//!
//! let forms = Form::all(&connection).await?;
//! let raw = connection
//!     .get_json("/forms/v2/forms/:form_guid", RequestOptions::new().param("form_guid", "abc"))
//!     .await?;
//! ```
//!
//! ## Logging
//!
//! Every request is logged through [`tracing`] at `INFO` level, with the
//! `hapikey` value masked. Install any `tracing` subscriber to see them.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: URL and configuration errors surface before any request
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod clients;
pub mod config;
pub mod error;
pub mod resources;

// Re-export public types at crate root for convenience
pub use config::{AccessToken, ApiKey, BaseUrl, HubspotConfig, HubspotConfigBuilder, PortalId};
pub use error::ConfigError;

// Re-export connection types
pub use clients::{
    Connection, FileUpload, FilesConnection, FormsConnection, HttpError, HttpResponse, Params,
    PostResponse, RequestError, RequestOptions,
};

// Re-export resource types
pub use resources::{Form, ResourceError};

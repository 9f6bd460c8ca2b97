//! HTTP client types for HubSpot API communication.
//!
//! This module provides the connection layer of the crate: URL construction,
//! the shared transport and the JSON verb wrappers.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`build_url`]: Path interpolation and query encoding
//! - [`Params`]: Ordered, typed request parameters
//! - [`Connection`]: JSON verbs (GET/POST/PUT/DELETE) against the REST API
//! - [`FormsConnection`]: Form-encoded submissions to the forms host
//! - [`FilesConnection`]: Multipart uploads to the files host
//! - [`HttpClient`]: The async transport shared by all connections
//! - [`HttpError`]: Unified error type for the layer
//!
//! # Example
//!
//! ```rust,ignore
//! use hubspot_legacy::{ApiKey, HubspotConfig};
//! use hubspot_legacy::clients::{Connection, RequestOptions};
//!
//! let config = HubspotConfig::builder()
//!     .api_key(ApiKey::new("demo")?)
//!     .build()?;
//! let connection = Connection::new(config)?;
//!
//! let form = connection
//!     .get_json(
//!         "/forms/v2/forms/:form_guid",
//!         RequestOptions::new().param("form_guid", "abc"),
//!     )
//!     .await?;
//! ```
//!
//! # Failure Behavior
//!
//! Nothing is retried. Configuration, interpolation and parameter errors are
//! raised before any network call; non-2xx responses surface as
//! [`HttpError::Request`] with the status code and raw body.

mod connection;
mod errors;
mod files;
mod forms;
mod http_client;
mod http_request;
mod http_response;
mod params;
mod url;

pub use connection::{Connection, PostResponse, RequestOptions};
pub use errors::{HttpError, InvalidParamError, MissingInterpolationError, RequestError};
pub use files::FilesConnection;
pub use forms::FormsConnection;
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{FileUpload, HttpMethod, HttpRequest, HttpRequestBuilder, RequestBody};
pub use http_response::HttpResponse;
pub use params::{escape, KeyEncoding, ParamScalar, ParamValue, Params};
pub use url::{build_query, build_url, placeholder_names, UrlOptions};

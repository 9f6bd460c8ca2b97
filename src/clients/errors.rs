//! HTTP-specific error types for the HubSpot client.
//!
//! # Error Handling
//!
//! - [`RequestError`]: Non-2xx HTTP responses, carrying status and body
//! - [`MissingInterpolationError`]: A path placeholder was left unresolved
//! - [`InvalidParamError`]: A parameter value does not fit its key's encoding
//! - [`HttpError`]: Unified error type encompassing all of the above
//!
//! URL-level errors ([`HttpError::Config`], [`HttpError::MissingInterpolation`],
//! [`HttpError::InvalidParam`]) are always raised before any network call.
//!
//! # Example
//!
//! ```rust,ignore
//! use hubspot_legacy::clients::{Connection, HttpError, RequestOptions};
//!
//! match connection.get_json("/forms/v2/forms", RequestOptions::new()).await {
//!     Ok(forms) => println!("Forms: {forms}"),
//!     Err(HttpError::Request(e)) => println!("API error {}: {}", e.code, e.body),
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::error::ConfigError;

/// Error returned when the API answers with a non-2xx status.
///
/// Both the status code and the raw body are kept for caller inspection.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Request failed with status {code}.\nResponse body: {body}")]
pub struct RequestError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The raw response body.
    pub body: String,
}

/// Error returned when a `:placeholder` in a path has no matching parameter.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Interpolation not resolved: ':{placeholder}' in '{path}'")]
pub struct MissingInterpolationError {
    /// The placeholder name, without the leading colon.
    pub placeholder: String,
    /// The path after all available substitutions were applied.
    pub path: String,
}

/// Error returned when a parameter value cannot be encoded for its key.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid value for parameter '{key}': {reason}")]
pub struct InvalidParamError {
    /// The parameter key.
    pub key: String,
    /// Why the value was rejected.
    pub reason: &'static str,
}

/// Unified error type for all connection errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A required configuration setting is missing.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A path placeholder could not be resolved.
    #[error(transparent)]
    MissingInterpolation(#[from] MissingInterpolationError),

    /// A parameter value does not match its key's encoding.
    #[error(transparent)]
    InvalidParam(#[from] InvalidParamError),

    /// A non-2xx response was received.
    #[error(transparent)]
    Request(#[from] RequestError),

    /// A successful response body was not valid JSON.
    #[error("Invalid JSON in response body: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code when the error came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Request(e) => Some(e.code),
            _ => None,
        }
    }
}

//! Error types for resource model operations.
//!
//! # Error Handling
//!
//! - [`ResourceError::Http`]: anything raised by the connection layer,
//!   including a missing `form_guid` placeholder and non-2xx responses
//! - [`ResourceError::UnexpectedResponse`]: a 2xx body of the wrong shape
//! - [`ResourceError::PathResolutionFailed`]: the resource declares no path
//!   for the operation
//!
//! # Example
//!
//! ```rust,ignore
//! use hubspot_legacy::resources::{Form, ResourceError};
//! use hubspot_legacy::clients::HttpError;
//!
//! match Form::find(&connection, "abc").await {
//!     Ok(form) => println!("Found: {:?}", form.name()),
//!     Err(ResourceError::Http(HttpError::Request(e))) if e.code == 404 => {
//!         println!("No such form");
//!     }
//!     Err(e) => println!("Other error: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::HttpError;

/// Error type for resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// No path is declared for the operation.
    #[error("Cannot resolve path for {resource}::{operation}")]
    PathResolutionFailed {
        /// The type name of the resource.
        resource: &'static str,
        /// The operation being attempted (e.g., "find", "all", "delete").
        operation: &'static str,
    },

    /// A successful response did not have the expected shape.
    #[error("Unexpected response for {resource}::{operation}: expected {expected}")]
    UnexpectedResponse {
        /// The type name of the resource.
        resource: &'static str,
        /// The operation being attempted.
        operation: &'static str,
        /// What the body should have been (e.g., "a JSON object").
        expected: &'static str,
    },

    /// An HTTP-level error occurred.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ResourceError {
    /// Returns the HTTP status code when the error came from a response.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http(e) => e.status(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{MissingInterpolationError, RequestError};

    #[test]
    fn test_path_resolution_message() {
        let error = ResourceError::PathResolutionFailed {
            resource: "Form",
            operation: "count",
        };
        assert_eq!(error.to_string(), "Cannot resolve path for Form::count");
    }

    #[test]
    fn test_unexpected_response_message() {
        let error = ResourceError::UnexpectedResponse {
            resource: "Form",
            operation: "all",
            expected: "a JSON array",
        };
        assert_eq!(
            error.to_string(),
            "Unexpected response for Form::all: expected a JSON array"
        );
    }

    #[test]
    fn test_http_errors_pass_through() {
        let error: ResourceError = HttpError::Request(RequestError {
            code: 404,
            body: "missing".to_string(),
        })
        .into();
        assert_eq!(error.status(), Some(404));

        let error: ResourceError = HttpError::MissingInterpolation(MissingInterpolationError {
            placeholder: "form_guid".to_string(),
            path: "/forms/v2/forms/:form_guid".to_string(),
        })
        .into();
        assert_eq!(error.status(), None);
        assert!(error.to_string().contains(":form_guid"));
    }
}

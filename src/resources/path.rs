//! Path tables for resource models.
//!
//! Each resource declares its endpoints as a constant slice of
//! [`ResourcePath`]s, one per [`ResourceOperation`]. Templates use the
//! `:placeholder` syntax understood by [`build_url`](crate::clients::build_url).
//!
//! # Example
//!
//! ```rust
//! use hubspot_legacy::resources::{get_path, ResourceOperation, ResourcePath};
//!
//! const PATHS: &[ResourcePath] = &[
//!     ResourcePath::new(ResourceOperation::All, "/forms/v2/forms"),
//!     ResourcePath::new(ResourceOperation::Find, "/forms/v2/forms/:form_guid"),
//! ];
//!
//! let path = get_path(PATHS, ResourceOperation::Find).unwrap();
//! assert_eq!(path.template, "/forms/v2/forms/:form_guid");
//! assert_eq!(path.placeholders(), vec!["form_guid"]);
//! ```

use crate::clients::placeholder_names;

/// Operations that can be performed on a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceOperation {
    /// List all resources.
    All,
    /// Find a single resource by id.
    Find,
    /// Create a new resource.
    Create,
    /// Update an existing resource.
    Update,
    /// Delete a resource.
    Delete,
    /// List the fields of a resource.
    Fields,
    /// Fetch one field of a resource.
    Field,
    /// Submit data to a resource.
    Submit,
}

impl ResourceOperation {
    /// Returns the operation name as a string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Find => "find",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::Fields => "fields",
            Self::Field => "field",
            Self::Submit => "submit",
        }
    }
}

/// An endpoint of a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourcePath {
    /// The operation this path is used for.
    pub operation: ResourceOperation,
    /// The path template with `:placeholder` tokens.
    pub template: &'static str,
}

impl ResourcePath {
    /// Creates a new `ResourcePath`.
    ///
    /// This is a `const fn` so paths can be declared as constants.
    #[must_use]
    pub const fn new(operation: ResourceOperation, template: &'static str) -> Self {
        Self {
            operation,
            template,
        }
    }

    /// Returns the placeholder names of the template, in order.
    #[must_use]
    pub fn placeholders(&self) -> Vec<&'static str> {
        placeholder_names(self.template)
    }
}

/// Finds the path declared for `operation`.
#[must_use]
pub fn get_path(paths: &[ResourcePath], operation: ResourceOperation) -> Option<&ResourcePath> {
    paths.iter().find(|p| p.operation == operation)
}

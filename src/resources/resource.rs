//! Shared behaviour of resource models.

use crate::resources::errors::ResourceError;
use crate::resources::path::{get_path, ResourceOperation, ResourcePath};

/// A remote resource with a fixed table of endpoints.
///
/// # Example
///
/// ```rust
/// use hubspot_legacy::resources::{Resource, ResourceOperation, ResourcePath};
///
/// struct Widget;
///
/// impl Resource for Widget {
///     const NAME: &'static str = "Widget";
///     const PATHS: &'static [ResourcePath] =
///         &[ResourcePath::new(ResourceOperation::All, "/widgets/v1/widgets")];
/// }
///
/// assert_eq!(Widget::path(ResourceOperation::All).unwrap(), "/widgets/v1/widgets");
/// assert!(Widget::path(ResourceOperation::Delete).is_err());
/// ```
pub trait Resource {
    /// The resource name used in errors and logs.
    const NAME: &'static str;

    /// The endpoints of this resource.
    const PATHS: &'static [ResourcePath];

    /// Returns the path template declared for `operation`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::PathResolutionFailed`] if none is declared.
    fn path(operation: ResourceOperation) -> Result<&'static str, ResourceError> {
        get_path(Self::PATHS, operation)
            .map(|p| p.template)
            .ok_or(ResourceError::PathResolutionFailed {
                resource: Self::NAME,
                operation: operation.as_str(),
            })
    }
}

//! Resource models built on the connection layer.
//!
//! # Key Types
//!
//! - [`Form`]: Marketing forms, their fields and submissions
//! - [`Resource`]: Trait tying a model to its endpoint table
//! - [`ResourcePath`] and [`ResourceOperation`]: Endpoint declarations
//! - [`ResourceError`]: Error type for resource operations

mod errors;
mod form;
mod path;
mod resource;

pub use errors::ResourceError;
pub use form::{
    Form, FIELDS_PATH, FIELD_PATH, FORMS_PATH, FORM_PATH, SUBMIT_DATA_PATH, SUBMIT_SUCCESS_CODES,
};
pub use path::{get_path, ResourceOperation, ResourcePath};
pub use resource::Resource;

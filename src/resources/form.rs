//! The Form resource.
//!
//! A [`Form`] is an attribute bag filled from the JSON the API returns. The
//! `fields` attribute doubles as a local cache of the form's fields.
//!
//! # Example
//!
//! ```rust,ignore
//! use hubspot_legacy::clients::{Connection, FormsConnection};
//! use hubspot_legacy::resources::Form;
//! use serde_json::json;
//!
//! let connection = Connection::new(config.clone())?;
//! let forms = FormsConnection::new(&config)?;
//!
//! let mut form = Form::create(&connection, json!({"name": "Newsletter"})).await?;
//! let accepted = form.submit(&forms, [("email", "ann@example.com")]).await?;
//! form.update(&connection, json!({"submitText": "Join"})).await?;
//! form.destroy(&connection).await?;
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clients::{Connection, FormsConnection, Params, RequestOptions};
use crate::resources::errors::ResourceError;
use crate::resources::path::{ResourceOperation, ResourcePath};
use crate::resources::resource::Resource;

/// List and create endpoint.
pub const FORMS_PATH: &str = "/forms/v2/forms";
/// Single form endpoint.
pub const FORM_PATH: &str = "/forms/v2/forms/:form_guid";
/// Fields of a form.
pub const FIELDS_PATH: &str = "/forms/v2/fields/:form_guid";
/// One field of a form.
pub const FIELD_PATH: &str = "/forms/v2/fields/:form_guid/:field_name";
/// Submission endpoint on the forms host.
pub const SUBMIT_DATA_PATH: &str = "/uploads/form/v2/:portal_id/:form_guid";

/// Status codes the forms host answers with for an accepted submission.
pub const SUBMIT_SUCCESS_CODES: [u16; 3] = [200, 204, 302];

const GUID: &str = "guid";
const FIELDS: &str = "fields";

/// A HubSpot form.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Form {
    #[serde(flatten)]
    properties: Map<String, Value>,
    #[serde(skip)]
    destroyed: bool,
}

impl Resource for Form {
    const NAME: &'static str = "Form";
    const PATHS: &'static [ResourcePath] = &[
        ResourcePath::new(ResourceOperation::All, FORMS_PATH),
        ResourcePath::new(ResourceOperation::Find, FORM_PATH),
        ResourcePath::new(ResourceOperation::Create, FORMS_PATH),
        ResourcePath::new(ResourceOperation::Update, FORM_PATH),
        ResourcePath::new(ResourceOperation::Delete, FORM_PATH),
        ResourcePath::new(ResourceOperation::Fields, FIELDS_PATH),
        ResourcePath::new(ResourceOperation::Field, FIELD_PATH),
        ResourcePath::new(ResourceOperation::Submit, SUBMIT_DATA_PATH),
    ];
}

impl Form {
    /// Wraps an attribute bag.
    #[must_use]
    pub const fn new(properties: Map<String, Value>) -> Self {
        Self {
            properties,
            destroyed: false,
        }
    }

    /// Lists every form of the portal.
    ///
    /// # Errors
    ///
    /// Connection errors, or [`ResourceError::UnexpectedResponse`] if the
    /// body is not an array of objects.
    pub async fn all(connection: &Connection) -> Result<Vec<Self>, ResourceError> {
        let path = Self::path(ResourceOperation::All)?;
        let response = connection.get_json(path, RequestOptions::new()).await?;

        match response {
            Value::Array(items) => items
                .into_iter()
                .map(|item| Self::from_value(item, ResourceOperation::All))
                .collect(),
            _ => Err(Self::unexpected(ResourceOperation::All, "a JSON array")),
        }
    }

    /// Fetches one form by guid.
    ///
    /// # Errors
    ///
    /// Connection errors (a 404 surfaces as a request error), or
    /// [`ResourceError::UnexpectedResponse`] for a non-object body.
    pub async fn find(connection: &Connection, guid: &str) -> Result<Self, ResourceError> {
        let path = Self::path(ResourceOperation::Find)?;
        let options = RequestOptions::new().param("form_guid", guid);
        let response = connection.get_json(path, options).await?;
        Self::from_value(response, ResourceOperation::Find)
    }

    /// Creates a form from `body` and returns it as stored by the API.
    ///
    /// # Errors
    ///
    /// Connection errors, or [`ResourceError::UnexpectedResponse`] for a
    /// non-object body.
    pub async fn create(connection: &Connection, body: Value) -> Result<Self, ResourceError> {
        let path = Self::path(ResourceOperation::Create)?;
        let response = connection
            .post_json(path, RequestOptions::new().body(body))
            .await?
            .into_json()?;
        Self::from_value(response, ResourceOperation::Create)
    }

    /// Returns the form guid, if known.
    #[must_use]
    pub fn guid(&self) -> Option<&str> {
        self.properties.get(GUID).and_then(Value::as_str)
    }

    /// Returns the form name, if known.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.properties.get("name").and_then(Value::as_str)
    }

    /// Returns every attribute.
    #[must_use]
    pub const fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }

    /// Returns `true` once [`Form::destroy`] succeeded.
    #[must_use]
    pub const fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    /// Returns the form's fields.
    ///
    /// Without `bypass_cache` this reads the cached `fields` attribute and
    /// makes no request. With it, the fields endpoint is fetched and the
    /// cache replaced.
    ///
    /// # Errors
    ///
    /// Connection errors, or [`ResourceError::UnexpectedResponse`] when the
    /// endpoint does not answer with an array.
    pub async fn fields(
        &mut self,
        connection: &Connection,
        bypass_cache: bool,
    ) -> Result<Vec<Value>, ResourceError> {
        if !bypass_cache {
            return Ok(self.cached_fields().to_vec());
        }

        let path = Self::path(ResourceOperation::Fields)?;
        let response = connection
            .get_json(path, RequestOptions::from(self.guid_params()))
            .await?;

        match response {
            Value::Array(fields) => {
                self.properties
                    .insert(FIELDS.to_string(), Value::Array(fields.clone()));
                Ok(fields)
            }
            _ => Err(Self::unexpected(ResourceOperation::Fields, "a JSON array")),
        }
    }

    /// Returns the field named `name`.
    ///
    /// Without `bypass_cache` the cached fields are searched. With it, the
    /// field endpoint is fetched; a body that is not an object yields `None`.
    ///
    /// # Errors
    ///
    /// Connection errors when `bypass_cache` is set.
    pub async fn field(
        &self,
        connection: &Connection,
        name: &str,
        bypass_cache: bool,
    ) -> Result<Option<Value>, ResourceError> {
        if !bypass_cache {
            return Ok(self
                .cached_fields()
                .iter()
                .find(|field| field.get("name").and_then(Value::as_str) == Some(name))
                .cloned());
        }

        let path = Self::path(ResourceOperation::Field)?;
        let options = RequestOptions::from(self.guid_params()).param("field_name", name);
        let response = connection.get_json(path, options).await?;

        Ok(response.is_object().then_some(response))
    }

    /// Submits `fields` to this form on the forms host.
    ///
    /// Returns `true` when the host answers 200, 204 or 302. Any other status
    /// is reported as `false`, not as an error.
    ///
    /// # Errors
    ///
    /// URL errors (missing guid or portal id) and transport failures.
    pub async fn submit<I, K, V>(
        &self,
        forms: &FormsConnection,
        fields: I,
    ) -> Result<bool, ResourceError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let path = Self::path(ResourceOperation::Submit)?;
        let response = forms.submit(path, &self.guid_params(), fields).await?;
        Ok(SUBMIT_SUCCESS_CODES.contains(&response.code))
    }

    /// Updates the form with `body` and merges the response into the
    /// attributes.
    ///
    /// # Errors
    ///
    /// Connection errors, or [`ResourceError::UnexpectedResponse`] for a
    /// non-object body.
    pub async fn update(
        &mut self,
        connection: &Connection,
        body: Value,
    ) -> Result<(), ResourceError> {
        let path = Self::path(ResourceOperation::Update)?;
        let options = RequestOptions::from(self.guid_params()).body(body);
        let response = connection.put_json(path, options).await?;

        match response {
            Value::Object(updated) => {
                self.properties.extend(updated);
                Ok(())
            }
            _ => Err(Self::unexpected(
                ResourceOperation::Update,
                "a JSON object",
            )),
        }
    }

    /// Deletes the form.
    ///
    /// Returns `true`, and marks the form destroyed, when the API answers
    /// 204.
    ///
    /// # Errors
    ///
    /// Connection errors, including non-2xx responses.
    pub async fn destroy(&mut self, connection: &Connection) -> Result<bool, ResourceError> {
        let path = Self::path(ResourceOperation::Delete)?;
        let response = connection
            .delete_json(path, RequestOptions::from(self.guid_params()))
            .await?;

        self.destroyed = response.code == 204;
        Ok(self.destroyed)
    }

    fn cached_fields(&self) -> &[Value] {
        self.properties
            .get(FIELDS)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    // Leaves `form_guid` unset when the guid is unknown, so the URL builder
    // reports the unresolved placeholder.
    fn guid_params(&self) -> Params {
        let mut params = Params::new();
        if let Some(guid) = self.guid() {
            params.insert("form_guid", guid);
        }
        params
    }

    fn from_value(value: Value, operation: ResourceOperation) -> Result<Self, ResourceError> {
        match value {
            Value::Object(properties) => Ok(Self::new(properties)),
            _ => Err(Self::unexpected(operation, "a JSON object")),
        }
    }

    const fn unexpected(operation: ResourceOperation, expected: &'static str) -> ResourceError {
        ResourceError::UnexpectedResponse {
            resource: Self::NAME,
            operation: operation.as_str(),
            expected,
        }
    }
}

impl From<Map<String, Value>> for Form {
    fn from(properties: Map<String, Value>) -> Self {
        Self::new(properties)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn example_form() -> Form {
        let Value::Object(properties) = json!({
            "guid": "78c2891f-ebdd-44c0-bd94-15c012bbbfbf",
            "name": "Demo Form",
            "fields": [
                {"name": "email", "label": "Email", "required": true},
                {"name": "firstname", "label": "First Name", "required": false}
            ]
        }) else {
            panic!("expected an object");
        };
        Form::new(properties)
    }

    #[test]
    fn test_accessors() {
        let form = example_form();

        assert_eq!(form.guid(), Some("78c2891f-ebdd-44c0-bd94-15c012bbbfbf"));
        assert_eq!(form.name(), Some("Demo Form"));
        assert!(form.properties().contains_key("fields"));
        assert!(!form.is_destroyed());
    }

    #[test]
    fn test_form_without_guid() {
        let form = Form::default();
        assert!(form.guid().is_none());
        assert!(form.guid_params().is_empty());
    }

    #[test]
    fn test_guid_params_carry_form_guid() {
        let params = example_form().guid_params();
        assert!(params.contains_key("form_guid"));
    }

    #[test]
    fn test_cached_fields() {
        let form = example_form();
        assert_eq!(form.cached_fields().len(), 2);
        assert!(Form::default().cached_fields().is_empty());
    }

    #[test]
    fn test_every_operation_has_a_path() {
        for operation in [
            ResourceOperation::All,
            ResourceOperation::Find,
            ResourceOperation::Create,
            ResourceOperation::Update,
            ResourceOperation::Delete,
            ResourceOperation::Fields,
            ResourceOperation::Field,
            ResourceOperation::Submit,
        ] {
            assert!(Form::path(operation).is_ok(), "{}", operation.as_str());
        }
        assert_eq!(
            Form::path(ResourceOperation::Submit).unwrap(),
            "/uploads/form/v2/:portal_id/:form_guid"
        );
    }

    #[test]
    fn test_serde_round_trip_keeps_attributes() {
        let form: Form =
            serde_json::from_value(json!({"guid": "abc", "name": "Demo", "redirect": ""}))
                .unwrap();
        assert_eq!(form.guid(), Some("abc"));
        assert_eq!(form.properties().len(), 3);

        let value = serde_json::to_value(&form).unwrap();
        assert_eq!(value, json!({"guid": "abc", "name": "Demo", "redirect": ""}));
    }

    #[test]
    fn test_from_value_rejects_non_objects() {
        let result = Form::from_value(json!([1, 2]), ResourceOperation::Find);
        assert!(matches!(
            result,
            Err(ResourceError::UnexpectedResponse {
                operation: "find",
                ..
            })
        ));
    }
}

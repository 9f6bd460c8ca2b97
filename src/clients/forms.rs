//! Connection to the form submission host.

use crate::clients::connection::{Connection, RequestOptions};
use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, RequestBody};
use crate::clients::http_response::HttpResponse;
use crate::clients::params::Params;
use crate::clients::url::UrlOptions;
use crate::config::HubspotConfig;

/// Posts form submissions to the forms host.
///
/// URLs are built against the configured forms base URL and never carry
/// the `hapikey` parameter. The body is form-encoded and the response is
/// returned as-is, whatever its status: the caller decides what counts as
/// success.
///
/// # Example
///
/// ```rust,ignore
/// use hubspot_legacy::clients::{FormsConnection, Params};
///
/// let forms = FormsConnection::new(&config)?;
/// let response = forms
///     .submit(
///         "/uploads/form/v2/:portal_id/:form_guid",
///         &Params::new().with("form_guid", "abc"),
///         [("email", "ann@example.com")],
///     )
///     .await?;
/// ```
#[derive(Clone, Debug)]
pub struct FormsConnection {
    connection: Connection,
}

impl FormsConnection {
    /// Creates a connection to the configured forms host.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be built.
    pub fn new(config: &HubspotConfig) -> Result<Self, HttpError> {
        let url_options = UrlOptions::new()
            .base_url(config.forms_base_url().clone())
            .without_api_key();
        Ok(Self {
            connection: Connection::with_url_options(config.clone(), url_options)?,
        })
    }

    /// Returns the configuration this connection was built with.
    #[must_use]
    pub const fn config(&self) -> &HubspotConfig {
        self.connection.config()
    }

    /// Submits `fields` to `path`, form-encoded.
    ///
    /// # Errors
    ///
    /// URL errors before any request is sent, and [`HttpError::Network`] for
    /// transport failures. Non-2xx statuses are not errors here.
    pub async fn submit<I, K, V>(
        &self,
        path: &str,
        params: &Params,
        fields: I,
    ) -> Result<HttpResponse, HttpError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let body = RequestBody::Form(
            fields
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        );
        let options = RequestOptions::new().with_params(params.clone());

        self.connection
            .dispatch(HttpMethod::Post, path, &options, Some(body))
            .await
    }
}

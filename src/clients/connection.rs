//! JSON verb wrappers over the transport.
//!
//! [`Connection`] turns `(path, RequestOptions)` into a URL with
//! [`build_url`], sends it through the shared [`HttpClient`] and applies the
//! success/failure contract: any non-2xx status becomes
//! [`HttpError::Request`], a 2xx body is parsed as JSON.
//!
//! Each verb keeps its own return shape:
//!
//! | Verb          | Returns                                   |
//! |---------------|-------------------------------------------|
//! | `get_json`    | parsed body                               |
//! | `post_json`   | [`PostResponse`], raw with `no_parse`     |
//! | `put_json`    | parsed body                               |
//! | `delete_json` | raw [`HttpResponse`]                      |

use std::time::Duration;

use serde_json::Value;

use crate::clients::errors::HttpError;
use crate::clients::http_client::HttpClient;
use crate::clients::http_request::{HttpMethod, HttpRequest, RequestBody};
use crate::clients::http_response::HttpResponse;
use crate::clients::params::{ParamValue, Params};
use crate::clients::url::{build_url, UrlOptions};
use crate::config::HubspotConfig;

/// Per-call options: parameters, body and overrides.
///
/// # Example
///
/// ```rust
/// use hubspot_legacy::clients::RequestOptions;
/// use serde_json::json;
/// use std::time::Duration;
///
/// let options = RequestOptions::new()
///     .param("form_guid", "abc")
///     .body(json!({"name": "Renamed"}))
///     .read_timeout(Duration::from_secs(5));
///
/// assert!(options.params().contains_key("form_guid"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RequestOptions {
    params: Params,
    body: Option<Value>,
    read_timeout: Option<Duration>,
    open_timeout: Option<Duration>,
    no_parse: bool,
}

impl RequestOptions {
    /// Creates empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the parameter bag.
    #[must_use]
    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Adds (or replaces) one parameter.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(key, value);
        self
    }

    /// Sets the JSON body.
    #[must_use]
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Overrides the read timeout for this call.
    #[must_use]
    pub const fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    /// Overrides the open (connect) timeout for this call.
    #[must_use]
    pub const fn open_timeout(mut self, timeout: Duration) -> Self {
        self.open_timeout = Some(timeout);
        self
    }

    /// Asks `post_json` for the raw response instead of the parsed body.
    #[must_use]
    pub const fn no_parse(mut self) -> Self {
        self.no_parse = true;
        self
    }

    /// Returns the parameters.
    #[must_use]
    pub const fn params(&self) -> &Params {
        &self.params
    }

    /// Returns the JSON body, if any.
    #[must_use]
    pub const fn payload(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Returns `true` when the raw response was requested.
    #[must_use]
    pub const fn is_no_parse(&self) -> bool {
        self.no_parse
    }
}

impl From<Params> for RequestOptions {
    fn from(params: Params) -> Self {
        Self::new().with_params(params)
    }
}

/// Result of [`Connection::post_json`].
#[derive(Clone, Debug, PartialEq)]
pub enum PostResponse {
    /// The parsed JSON body.
    Parsed(Value),
    /// The untouched response, returned when `no_parse` was requested.
    Raw(HttpResponse),
}

impl PostResponse {
    /// Returns the JSON body, parsing the raw response if needed.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidJson`] if a raw body is not valid JSON.
    pub fn into_json(self) -> Result<Value, HttpError> {
        match self {
            Self::Parsed(value) => Ok(value),
            Self::Raw(response) => response.json(),
        }
    }

    /// Returns the raw response, if this is one.
    #[must_use]
    pub const fn as_raw(&self) -> Option<&HttpResponse> {
        match self {
            Self::Raw(response) => Some(response),
            Self::Parsed(_) => None,
        }
    }
}

/// A connection to the HubSpot REST API.
///
/// # Example
///
/// ```rust,ignore
/// use hubspot_legacy::{ApiKey, HubspotConfig};
/// use hubspot_legacy::clients::{Connection, RequestOptions};
///
/// let config = HubspotConfig::builder()
///     .api_key(ApiKey::new("demo")?)
///     .build()?;
/// let connection = Connection::new(config)?;
///
/// let forms = connection
///     .get_json("/forms/v2/forms", RequestOptions::new())
///     .await?;
/// ```
#[derive(Clone, Debug)]
pub struct Connection {
    http_client: HttpClient,
    config: HubspotConfig,
    url_options: UrlOptions,
}

// Verify Connection is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Connection>();
};

impl Connection {
    /// Creates a connection against the configured REST API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be built.
    pub fn new(config: HubspotConfig) -> Result<Self, HttpError> {
        Self::with_url_options(config, UrlOptions::new())
    }

    pub(crate) fn with_url_options(
        config: HubspotConfig,
        url_options: UrlOptions,
    ) -> Result<Self, HttpError> {
        let http_client = HttpClient::new(&config)?;
        Ok(Self {
            http_client,
            config,
            url_options,
        })
    }

    /// Returns the configuration this connection was built with.
    #[must_use]
    pub const fn config(&self) -> &HubspotConfig {
        &self.config
    }

    /// Builds the URL this connection would request for `path` and `params`.
    ///
    /// # Errors
    ///
    /// Same as [`build_url`].
    pub fn url_for(&self, path: &str, params: &Params) -> Result<String, HttpError> {
        build_url(&self.config, path, params, &self.url_options)
    }

    /// Sends a GET request and returns the parsed body.
    ///
    /// # Errors
    ///
    /// - URL errors ([`HttpError::Config`], [`HttpError::MissingInterpolation`],
    ///   [`HttpError::InvalidParam`]) before any request is sent
    /// - [`HttpError::Request`] for non-2xx responses
    /// - [`HttpError::InvalidJson`] for an unparseable body
    /// - [`HttpError::Network`] for transport failures
    pub async fn get_json(&self, path: &str, options: RequestOptions) -> Result<Value, HttpError> {
        self.dispatch_checked(HttpMethod::Get, path, &options, None)
            .await?
            .json()
    }

    /// Sends a POST request with the JSON body.
    ///
    /// Returns [`PostResponse::Raw`] when `no_parse` is set, otherwise the
    /// parsed body.
    ///
    /// # Errors
    ///
    /// Same as [`Connection::get_json`].
    pub async fn post_json(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<PostResponse, HttpError> {
        let body = Self::json_body(&options);
        let response = self
            .dispatch_checked(HttpMethod::Post, path, &options, Some(body))
            .await?;

        if options.no_parse {
            Ok(PostResponse::Raw(response))
        } else {
            Ok(PostResponse::Parsed(response.json()?))
        }
    }

    /// Sends a PUT request with the JSON body and returns the parsed body.
    ///
    /// # Errors
    ///
    /// Same as [`Connection::get_json`].
    pub async fn put_json(&self, path: &str, options: RequestOptions) -> Result<Value, HttpError> {
        let body = Self::json_body(&options);
        self.dispatch_checked(HttpMethod::Put, path, &options, Some(body))
            .await?
            .json()
    }

    /// Sends a DELETE request and returns the raw response.
    ///
    /// DELETE carries no body: any JSON body in `options` is neither sent
    /// nor logged.
    ///
    /// # Errors
    ///
    /// Same as [`Connection::get_json`], minus JSON parsing.
    pub async fn delete_json(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<HttpResponse, HttpError> {
        self.dispatch_checked(HttpMethod::Delete, path, &options, None)
            .await
    }

    // A missing body is sent as JSON `null`.
    fn json_body(options: &RequestOptions) -> RequestBody {
        RequestBody::Json(options.body.clone().unwrap_or(Value::Null))
    }

    /// Builds the URL and sends the request without checking the status.
    pub(crate) async fn dispatch(
        &self,
        method: HttpMethod,
        path: &str,
        options: &RequestOptions,
        body: Option<RequestBody>,
    ) -> Result<HttpResponse, HttpError> {
        let url = self.url_for(path, &options.params)?;

        let mut builder = HttpRequest::builder(method, url).maybe_body(body);
        if let Some(timeout) = options.read_timeout {
            builder = builder.read_timeout(timeout);
        }
        if let Some(timeout) = options.open_timeout {
            builder = builder.open_timeout(timeout);
        }

        self.http_client.send(builder.build()).await
    }

    /// Like [`Connection::dispatch`], failing on non-2xx responses.
    pub(crate) async fn dispatch_checked(
        &self,
        method: HttpMethod,
        path: &str,
        options: &RequestOptions,
        body: Option<RequestBody>,
    ) -> Result<HttpResponse, HttpError> {
        let response = self.dispatch(method, path, options, body).await?;
        Ok(response.error_for_status()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ApiKey, BaseUrl, PortalId};
    use serde_json::json;
    use std::collections::HashMap;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn create_connection(base_url: &str) -> Connection {
        let config = HubspotConfig::builder()
            .api_key(ApiKey::new("demo").unwrap())
            .portal_id(PortalId::from(62515))
            .base_url(BaseUrl::new(base_url).unwrap())
            .build()
            .unwrap();
        Connection::new(config).unwrap()
    }

    #[test]
    fn test_request_options_builder() {
        let options = RequestOptions::new()
            .param("limit", 5)
            .body(json!({"a": 1}))
            .no_parse();

        assert_eq!(options.params().len(), 1);
        assert_eq!(options.payload(), Some(&json!({"a": 1})));
        assert!(options.is_no_parse());
    }

    #[test]
    fn test_request_options_from_params() {
        let options: RequestOptions = Params::new().with("form_guid", "abc").into();
        assert!(options.params().contains_key("form_guid"));
        assert!(!options.is_no_parse());
    }

    #[test]
    fn test_post_response_into_json() {
        assert_eq!(
            PostResponse::Parsed(json!({"ok": true})).into_json().unwrap(),
            json!({"ok": true})
        );

        let raw = PostResponse::Raw(HttpResponse::new(
            201,
            HashMap::new(),
            r#"{"guid":"abc"}"#.to_string(),
        ));
        assert!(raw.as_raw().is_some());
        assert_eq!(raw.into_json().unwrap()["guid"], "abc");
    }

    #[test]
    fn test_url_for_uses_configured_settings() {
        let connection = create_connection("https://api.hubapi.com");
        let url = connection
            .url_for("/test/:portal_id/profile", &Params::new())
            .unwrap();
        assert_eq!(url, "https://api.hubapi.com/test/62515/profile?hapikey=demo");
    }

    #[tokio::test]
    async fn test_get_json_parses_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/forms/v2/forms/abc"))
            .and(query_param("hapikey", "demo"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"guid": "abc"})))
            .mount(&mock_server)
            .await;

        let connection = create_connection(&mock_server.uri());
        let value = connection
            .get_json(
                "/forms/v2/forms/:form_guid",
                RequestOptions::new().param("form_guid", "abc"),
            )
            .await
            .unwrap();

        assert_eq!(value["guid"], "abc");
    }

    #[tokio::test]
    async fn test_non_success_status_is_request_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/forms/v2/forms"))
            .respond_with(ResponseTemplate::new(401).set_body_string("unauthorized"))
            .mount(&mock_server)
            .await;

        let connection = create_connection(&mock_server.uri());
        let result = connection
            .get_json("/forms/v2/forms", RequestOptions::new())
            .await;

        match result {
            Err(HttpError::Request(error)) => {
                assert_eq!(error.code, 401);
                assert_eq!(error.body, "unauthorized");
            }
            other => panic!("Expected Request error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_delete_returns_raw_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("DELETE"))
            .and(path("/forms/v2/forms/abc"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&mock_server)
            .await;

        let connection = create_connection(&mock_server.uri());
        let response = connection
            .delete_json(
                "/forms/v2/forms/:form_guid",
                RequestOptions::new().param("form_guid", "abc"),
            )
            .await
            .unwrap();

        assert_eq!(response.code, 204);
    }
}

//! HTTP transport for HubSpot API communication.
//!
//! This module provides the [`HttpClient`] type, which sends fully built
//! [`HttpRequest`]s and returns the raw [`HttpResponse`]. Status checking and
//! JSON decoding are left to the connections.

use std::collections::HashMap;
use std::time::Duration;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest, RequestBody};
use crate::clients::http_response::HttpResponse;
use crate::config::HubspotConfig;

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Placeholder written in place of the API key in logged URLs.
const REDACTED: &str = "*****";

/// HTTP client for making requests to the HubSpot API.
///
/// The client handles:
/// - Default headers including User-Agent and, for OAuth, the bearer token
/// - Default and per-request read/open timeouts
/// - Body encoding (JSON, form fields, multipart uploads)
/// - Logging of every exchange with the API key redacted
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use hubspot_legacy::HubspotConfig;
/// use hubspot_legacy::clients::{HttpClient, HttpMethod, HttpRequest};
///
/// let config = HubspotConfig::builder().build()?;
/// let client = HttpClient::new(&config)?;
///
/// let request = HttpRequest::builder(
///     HttpMethod::Get,
///     "https://api.hubapi.com/forms/v2/forms?hapikey=demo",
/// )
/// .build();
///
/// let response = client.send(request).await?;
/// println!("{} {}", response.code, response.body);
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Default open (connect) timeout baked into `client`.
    open_timeout: Option<Duration>,
    /// Default read timeout baked into `client`.
    read_timeout: Option<Duration>,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g. TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use hubspot_legacy::HubspotConfig;
    /// use hubspot_legacy::clients::HttpClient;
    ///
    /// let config = HubspotConfig::builder().build().unwrap();
    /// let client = HttpClient::new(&config).unwrap();
    ///
    /// assert!(client.default_headers().contains_key("User-Agent"));
    /// ```
    pub fn new(config: &HubspotConfig) -> Result<Self, HttpError> {
        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}HubSpot Legacy Client v{SDK_VERSION} | Rust {rust_version}"
        );

        // Build default headers
        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        if let Some(token) = config.access_token() {
            default_headers.insert(
                "Authorization".to_string(),
                format!("Bearer {}", token.as_ref()),
            );
        }

        let client = Self::build_client(config.open_timeout(), config.read_timeout())?;

        tracing::debug!(
            "Built HTTP client (open timeout: {:?}, read timeout: {:?}, oauth: {})",
            config.open_timeout(),
            config.read_timeout(),
            config.access_token().is_some()
        );

        Ok(Self {
            client,
            open_timeout: config.open_timeout(),
            read_timeout: config.read_timeout(),
            default_headers,
        })
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a request and returns the response, whatever its status.
    ///
    /// A per-request read timeout replaces the configured one. A per-request
    /// open timeout that differs from the configured one uses a dedicated
    /// reqwest client for that call.
    ///
    /// Every exchange is logged at `INFO` level with the `hapikey` value
    /// masked.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] on connection failures, timeouts or
    /// an invalid multipart MIME type.
    pub async fn send(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        let client = match request.open_timeout {
            Some(timeout) if Some(timeout) != self.open_timeout => {
                Self::build_client(Some(timeout), self.read_timeout)?
            }
            _ => self.client.clone(),
        };

        let mut req_builder = match request.http_method {
            HttpMethod::Get => client.get(&request.url),
            HttpMethod::Post => client.post(&request.url),
            HttpMethod::Put => client.put(&request.url),
            HttpMethod::Delete => client.delete(&request.url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(timeout) = request.read_timeout {
            req_builder = req_builder.timeout(timeout);
        }

        if let Some(body) = &request.body {
            req_builder = match body {
                RequestBody::Json(value) => req_builder
                    .header("Content-Type", body.content_type())
                    .body(value.to_string()),
                RequestBody::Form(fields) => req_builder.form(fields),
                RequestBody::Multipart(upload) => req_builder.multipart(upload.to_form()?),
            };
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        tracing::info!(
            "Hubspot: {} {}.\nBody: {}.\nResponse: {} {}",
            request.http_method,
            redact_api_key(&request.url),
            request
                .body
                .as_ref()
                .map(RequestBody::describe)
                .unwrap_or_default(),
            code,
            body
        );

        Ok(HttpResponse::new(code, headers, body))
    }

    fn build_client(
        open_timeout: Option<Duration>,
        read_timeout: Option<Duration>,
    ) -> Result<reqwest::Client, HttpError> {
        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = open_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = read_timeout {
            builder = builder.timeout(timeout);
        }
        Ok(builder.build()?)
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

/// Masks the value of every `hapikey` query parameter in `url`.
pub(crate) fn redact_api_key(url: &str) -> String {
    match url.split_once('?') {
        None => url.to_string(),
        Some((base, query)) => {
            let query = query
                .split('&')
                .map(|pair| {
                    if pair.starts_with("hapikey=") {
                        format!("hapikey={REDACTED}")
                    } else {
                        pair.to_string()
                    }
                })
                .collect::<Vec<_>>()
                .join("&");
            format!("{base}?{query}")
        }
    }
}

//! HTTP request types for the HubSpot client.
//!
//! This module provides the [`HttpRequest`] type and its builder, plus the
//! body encodings the API uses: JSON, form-encoded submissions and
//! multipart file uploads.

use std::fmt;
use std::time::Duration;

/// HTTP methods used by the HubSpot API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET method for retrieving resources.
    Get,
    /// HTTP POST method for creating resources.
    Post,
    /// HTTP PUT method for updating resources.
    Put,
    /// HTTP DELETE method for removing resources.
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// A file to upload as a multipart body.
///
/// # Example
///
/// ```rust
/// use hubspot_legacy::clients::FileUpload;
///
/// let upload = FileUpload::new("report.csv", b"a,b\n1,2\n".to_vec())
///     .mime_type("text/csv")
///     .field("folder_paths", "reports");
///
/// assert_eq!(upload.file_name(), "report.csv");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileUpload {
    part_name: String,
    file_name: String,
    content: Vec<u8>,
    mime_type: Option<String>,
    fields: Vec<(String, String)>,
}

impl FileUpload {
    /// Default multipart part name for the file.
    pub const DEFAULT_PART_NAME: &'static str = "files";

    /// Creates an upload for the given file name and content.
    #[must_use]
    pub fn new(file_name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            part_name: Self::DEFAULT_PART_NAME.to_string(),
            file_name: file_name.into(),
            content,
            mime_type: None,
            fields: Vec::new(),
        }
    }

    /// Overrides the multipart part name (default `files`).
    #[must_use]
    pub fn part_name(mut self, name: impl Into<String>) -> Self {
        self.part_name = name.into();
        self
    }

    /// Sets the MIME type of the file part.
    #[must_use]
    pub fn mime_type(mut self, mime: impl Into<String>) -> Self {
        self.mime_type = Some(mime.into());
        self
    }

    /// Adds a text field sent alongside the file.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Returns the file name.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Builds the reqwest multipart form.
    pub(crate) fn to_form(&self) -> Result<reqwest::multipart::Form, reqwest::Error> {
        let mut part =
            reqwest::multipart::Part::bytes(self.content.clone()).file_name(self.file_name.clone());
        if let Some(mime) = &self.mime_type {
            part = part.mime_str(mime)?;
        }

        let mut form = reqwest::multipart::Form::new();
        for (name, value) in &self.fields {
            form = form.text(name.clone(), value.clone());
        }
        Ok(form.part(self.part_name.clone(), part))
    }
}

/// The body of a request.
#[derive(Clone, Debug, PartialEq)]
pub enum RequestBody {
    /// A JSON document (`application/json`).
    Json(serde_json::Value),
    /// Form fields (`application/x-www-form-urlencoded`).
    Form(Vec<(String, String)>),
    /// A multipart file upload (`multipart/form-data`).
    Multipart(FileUpload),
}

impl RequestBody {
    /// Returns the MIME type announced for this body.
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self {
            Self::Json(_) => "application/json",
            Self::Form(_) => "application/x-www-form-urlencoded",
            Self::Multipart(_) => "multipart/form-data",
        }
    }

    /// Returns a short printable form of the body for logs.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Json(value) => value.to_string(),
            Self::Form(fields) => fields
                .iter()
                .map(|(k, v)| format!("{k}={v}"))
                .collect::<Vec<_>>()
                .join("&"),
            Self::Multipart(upload) => format!(
                "<file {} ({} bytes)>",
                upload.file_name,
                upload.content.len()
            ),
        }
    }
}

/// An HTTP request ready to be sent.
///
/// The URL is complete: query string and credentials are already applied
/// by [`build_url`](crate::clients::build_url).
///
/// # Example
///
/// ```rust
/// use hubspot_legacy::clients::{HttpMethod, HttpRequest, RequestBody};
/// use serde_json::json;
/// use std::time::Duration;
///
/// let request = HttpRequest::builder(HttpMethod::Post, "https://api.hubapi.com/forms/v2/forms")
///     .body(RequestBody::Json(json!({"name": "Demo"})))
///     .read_timeout(Duration::from_secs(5))
///     .build();
///
/// assert_eq!(request.http_method, HttpMethod::Post);
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The absolute URL.
    pub url: String,
    /// The request body, if any.
    pub body: Option<RequestBody>,
    /// Read timeout override for this request.
    pub read_timeout: Option<Duration>,
    /// Open (connect) timeout override for this request.
    pub open_timeout: Option<Duration>,
}

impl HttpRequest {
    /// Creates a new builder for constructing an `HttpRequest`.
    #[must_use]
    pub fn builder(method: HttpMethod, url: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, url)
    }
}

/// Builder for constructing [`HttpRequest`] instances.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    url: String,
    body: Option<RequestBody>,
    read_timeout: Option<Duration>,
    open_timeout: Option<Duration>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            http_method: method,
            url: url.into(),
            body: None,
            read_timeout: None,
            open_timeout: None,
        }
    }

    /// Sets the request body.
    #[must_use]
    pub fn body(mut self, body: RequestBody) -> Self {
        self.body = Some(body);
        self
    }

    /// Sets the request body if one is given.
    #[must_use]
    pub fn maybe_body(mut self, body: Option<RequestBody>) -> Self {
        self.body = body;
        self
    }

    /// Sets the read timeout for this request.
    #[must_use]
    pub const fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    /// Sets the open (connect) timeout for this request.
    #[must_use]
    pub const fn open_timeout(mut self, timeout: Duration) -> Self {
        self.open_timeout = Some(timeout);
        self
    }

    /// Builds the [`HttpRequest`].
    #[must_use]
    pub fn build(self) -> HttpRequest {
        HttpRequest {
            http_method: self.http_method,
            url: self.url,
            body: self.body,
            read_timeout: self.read_timeout,
            open_timeout: self.open_timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Post.to_string(), "post");
        assert_eq!(HttpMethod::Put.to_string(), "put");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
    }

    #[test]
    fn test_body_content_types() {
        assert_eq!(
            RequestBody::Json(json!({})).content_type(),
            "application/json"
        );
        assert_eq!(
            RequestBody::Form(vec![]).content_type(),
            "application/x-www-form-urlencoded"
        );
        assert_eq!(
            RequestBody::Multipart(FileUpload::new("a.txt", vec![])).content_type(),
            "multipart/form-data"
        );
    }

    #[test]
    fn test_body_describe_for_logs() {
        assert_eq!(
            RequestBody::Json(json!({"name": "x"})).describe(),
            r#"{"name":"x"}"#
        );
        assert_eq!(
            RequestBody::Form(vec![
                ("email".to_string(), "a@b.c".to_string()),
                ("firstname".to_string(), "Ann".to_string()),
            ])
            .describe(),
            "email=a@b.c&firstname=Ann"
        );
        assert_eq!(
            RequestBody::Multipart(FileUpload::new("a.txt", vec![1, 2, 3])).describe(),
            "<file a.txt (3 bytes)>"
        );
    }

    #[test]
    fn test_builder_defaults() {
        let request = HttpRequest::builder(HttpMethod::Get, "https://api.hubapi.com/x").build();

        assert_eq!(request.http_method, HttpMethod::Get);
        assert_eq!(request.url, "https://api.hubapi.com/x");
        assert!(request.body.is_none());
        assert!(request.read_timeout.is_none());
        assert!(request.open_timeout.is_none());
    }

    #[test]
    fn test_builder_with_timeouts() {
        let request = HttpRequest::builder(HttpMethod::Delete, "https://api.hubapi.com/x")
            .read_timeout(Duration::from_secs(3))
            .open_timeout(Duration::from_secs(1))
            .build();

        assert_eq!(request.read_timeout, Some(Duration::from_secs(3)));
        assert_eq!(request.open_timeout, Some(Duration::from_secs(1)));
    }

    #[test]
    fn test_file_upload_builds_multipart_form() {
        let upload = FileUpload::new("report.csv", b"a,b".to_vec())
            .mime_type("text/csv")
            .field("overwrite", "true");
        assert!(upload.to_form().is_ok());

        let bad_mime = FileUpload::new("x", vec![]).mime_type("not a mime");
        assert!(bad_mime.to_form().is_err());
    }
}

//! Connection to the file upload host.

use serde_json::Value;

use crate::clients::connection::{Connection, RequestOptions};
use crate::clients::errors::HttpError;
use crate::clients::http_request::{FileUpload, HttpMethod, RequestBody};
use crate::clients::http_response::HttpResponse;
use crate::clients::url::UrlOptions;
use crate::config::HubspotConfig;

/// Reads and uploads files against the configured files base URL.
///
/// Both operations follow the usual contract: `hapikey` in the query,
/// non-2xx statuses become [`HttpError::Request`].
#[derive(Clone, Debug)]
pub struct FilesConnection {
    connection: Connection,
}

impl FilesConnection {
    /// Creates a connection to the configured files host.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the HTTP client cannot be built.
    pub fn new(config: &HubspotConfig) -> Result<Self, HttpError> {
        let url_options = UrlOptions::new().base_url(config.files_base_url().clone());
        Ok(Self {
            connection: Connection::with_url_options(config.clone(), url_options)?,
        })
    }

    /// Returns the configuration this connection was built with.
    #[must_use]
    pub const fn config(&self) -> &HubspotConfig {
        self.connection.config()
    }

    /// Sends a GET request and returns the parsed body.
    ///
    /// # Errors
    ///
    /// Same as [`Connection::get_json`].
    pub async fn get(&self, path: &str, options: RequestOptions) -> Result<Value, HttpError> {
        self.connection.get_json(path, options).await
    }

    /// Uploads a file as `multipart/form-data` and returns the raw response.
    ///
    /// Any JSON body in `options` is ignored; extra form fields travel with
    /// the [`FileUpload`].
    ///
    /// # Errors
    ///
    /// URL errors before any request is sent, [`HttpError::Request`] for
    /// non-2xx responses and [`HttpError::Network`] for transport failures.
    pub async fn post(
        &self,
        path: &str,
        options: RequestOptions,
        upload: FileUpload,
    ) -> Result<HttpResponse, HttpError> {
        self.connection
            .dispatch_checked(
                HttpMethod::Post,
                path,
                &options,
                Some(RequestBody::Multipart(upload)),
            )
            .await
    }
}

//! HTTP response type for the HubSpot client.
//!
//! [`HttpResponse`] keeps the raw body text. Callers that want JSON ask for it
//! with [`HttpResponse::json`]; callers that asked for the raw response keep
//! the text untouched.

use std::collections::HashMap;

use serde_json::Value;

use crate::clients::errors::{HttpError, RequestError};

/// A response received from the HubSpot API.
///
/// # Example
///
/// ```rust
/// use hubspot_legacy::clients::HttpResponse;
/// use std::collections::HashMap;
///
/// let response = HttpResponse::new(200, HashMap::new(), r#"{"guid":"abc"}"#.to_string());
///
/// assert!(response.is_ok());
/// assert_eq!(response.json().unwrap()["guid"], "abc");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lowercased names mapped to all their values.
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` for 2xx status codes.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Parses the body as JSON.
    ///
    /// An empty (or whitespace-only) body yields [`Value::Null`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidJson`] if the body is not valid JSON.
    pub fn json(&self) -> Result<Value, HttpError> {
        if self.body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Converts a non-2xx response into a [`RequestError`].
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] carrying the status code and raw body when the
    /// response is not successful.
    pub fn error_for_status(self) -> Result<Self, RequestError> {
        if self.is_ok() {
            Ok(self)
        } else {
            Err(RequestError {
                code: self.code,
                body: self.body,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(code: u16, body: &str) -> HttpResponse {
        HttpResponse::new(code, HashMap::new(), body.to_string())
    }

    #[test]
    fn test_is_ok_for_2xx_codes() {
        assert!(response(200, "").is_ok());
        assert!(response(204, "").is_ok());
        assert!(response(299, "").is_ok());
        assert!(!response(199, "").is_ok());
        assert!(!response(302, "").is_ok());
        assert!(!response(404, "").is_ok());
        assert!(!response(500, "").is_ok());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert(
            "content-type".to_string(),
            vec!["application/json".to_string()],
        );
        let response = HttpResponse::new(200, headers, String::new());

        assert_eq!(response.header("Content-Type"), Some("application/json"));
        assert_eq!(response.header("x-missing"), None);
    }

    #[test]
    fn test_json_parses_body() {
        let value = response(200, r#"{"name":"Demo","fields":[]}"#).json().unwrap();
        assert_eq!(value["name"], "Demo");
        assert!(value["fields"].is_array());
    }

    #[test]
    fn test_empty_body_parses_to_null() {
        assert_eq!(response(204, "").json().unwrap(), Value::Null);
        assert_eq!(response(200, "  \n").json().unwrap(), Value::Null);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let result = response(200, "<html>oops</html>").json();
        assert!(matches!(result, Err(HttpError::InvalidJson(_))));
    }

    #[test]
    fn test_error_for_status_keeps_code_and_body() {
        assert!(response(201, "{}").error_for_status().is_ok());

        let error = response(404, r#"{"message":"not found"}"#)
            .error_for_status()
            .unwrap_err();
        assert_eq!(error.code, 404);
        assert_eq!(error.body, r#"{"message":"not found"}"#);
    }
}

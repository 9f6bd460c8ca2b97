//! Request URL construction.
//!
//! [`build_url`] turns a path template such as `/forms/v2/forms/:form_guid`
//! plus a [`Params`] bag into the final request URL:
//!
//! 1. `:placeholder` tokens (`[A-Za-z0-9_]+` after the colon) are replaced
//!    by the escaped value of the parameter with the same name, which is
//!    then dropped from the query.
//! 2. `:portal_id` is filled from the configuration.
//! 3. Whatever is left is serialized into the query string according to
//!    [`KeyEncoding`], and the `hapikey` parameter is appended last.
//!
//! All failures happen here, before any network I/O.
//!
//! # Example
//!
//! ```rust
//! use hubspot_legacy::{ApiKey, HubspotConfig, PortalId};
//! use hubspot_legacy::clients::{build_url, Params, UrlOptions};
//!
//! let config = HubspotConfig::builder()
//!     .api_key(ApiKey::new("demo").unwrap())
//!     .portal_id(PortalId::from(62515))
//!     .build()
//!     .unwrap();
//!
//! let url = build_url(&config, "/test/:portal_id/profile", &Params::new(), &UrlOptions::new()).unwrap();
//! assert_eq!(url, "https://api.hubapi.com/test/62515/profile?hapikey=demo");
//! ```

use crate::clients::errors::{HttpError, InvalidParamError, MissingInterpolationError};
use crate::clients::params::{escape, KeyEncoding, ParamValue, Params};
use crate::config::{BaseUrl, HubspotConfig};

const PORTAL_ID: &str = "portal_id";
const API_KEY_PARAM: &str = "hapikey";

/// Per-call adjustments to URL construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UrlOptions {
    base_url: Option<BaseUrl>,
    include_api_key: bool,
}

impl Default for UrlOptions {
    fn default() -> Self {
        Self {
            base_url: None,
            include_api_key: true,
        }
    }
}

impl UrlOptions {
    /// Creates the default options: configured base URL, API key included.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses the given base URL instead of the configured one.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Leaves the `hapikey` parameter out of the query string.
    #[must_use]
    pub const fn without_api_key(mut self) -> Self {
        self.include_api_key = false;
        self
    }

    /// Returns whether the API key will be appended.
    #[must_use]
    pub const fn includes_api_key(&self) -> bool {
        self.include_api_key
    }
}

/// A `:name` token found in a path template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Placeholder<'a> {
    start: usize,
    end: usize,
    name: &'a str,
}

const fn is_placeholder_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'_'
}

/// Finds every `:name` token in a path.
fn placeholders(path: &str) -> Vec<Placeholder<'_>> {
    let bytes = path.as_bytes();
    let mut found = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b':' {
            let start = i;
            let mut end = i + 1;
            while end < bytes.len() && is_placeholder_char(bytes[end]) {
                end += 1;
            }
            if end > start + 1 {
                found.push(Placeholder {
                    start,
                    end,
                    name: &path[start + 1..end],
                });
            }
            i = end;
        } else {
            i += 1;
        }
    }
    found
}

/// Returns the names of the placeholders in a path template, in order.
///
/// # Example
///
/// ```rust
/// use hubspot_legacy::clients::placeholder_names;
///
/// assert_eq!(
///     placeholder_names("/uploads/form/v2/:portal_id/:form_guid"),
///     vec!["portal_id", "form_guid"]
/// );
/// ```
#[must_use]
pub fn placeholder_names(path: &str) -> Vec<&str> {
    placeholders(path).into_iter().map(|p| p.name).collect()
}

/// Substitutes placeholders from `params`, consuming the used keys.
fn interpolate(path: &str, params: &mut Params) -> Result<String, MissingInterpolationError> {
    let tokens = placeholders(path);

    // Resolve each distinct name once; a name may appear more than once.
    let mut values: Vec<(&str, Option<String>)> = Vec::new();
    for token in &tokens {
        if values.iter().all(|(name, _)| *name != token.name) {
            let value = params.remove(token.name).map(|v| escape(&v.to_string()));
            values.push((token.name, value));
        }
    }

    let mut resolved = String::with_capacity(path.len());
    let mut cursor = 0;
    for token in &tokens {
        resolved.push_str(&path[cursor..token.start]);
        let value = values
            .iter()
            .find(|(name, _)| *name == token.name)
            .and_then(|(_, value)| value.as_deref());
        match value {
            Some(value) => resolved.push_str(value),
            None => resolved.push_str(&path[token.start..token.end]),
        }
        cursor = token.end;
    }
    resolved.push_str(&path[cursor..]);

    if let Some(unresolved) = placeholders(&resolved).first() {
        return Err(MissingInterpolationError {
            placeholder: unresolved.name.to_string(),
            path: resolved.clone(),
        });
    }

    Ok(resolved)
}

/// Encodes one parameter into `key=value` query entries.
fn encode_param(key: &str, value: &ParamValue) -> Result<Vec<String>, InvalidParamError> {
    match KeyEncoding::classify(key) {
        KeyEncoding::Range => match value {
            ParamValue::Range(start, end) => Ok(vec![
                format!("{key}={}", start.to_query_value()),
                format!("{key}={}", end.to_query_value()),
            ]),
            _ => Err(InvalidParamError {
                key: key.to_string(),
                reason: "value must be a range",
            }),
        },
        KeyEncoding::Batch(name) => Ok(encode_values(&name, value)),
        KeyEncoding::Plain => Ok(encode_values(key, value)),
    }
}

fn encode_values(key: &str, value: &ParamValue) -> Vec<String> {
    match value {
        ParamValue::Scalar(scalar) => vec![format!("{key}={}", scalar.to_query_value())],
        ParamValue::Sequence(values) => values
            .iter()
            .map(|scalar| format!("{key}={}", scalar.to_query_value()))
            .collect(),
        ParamValue::Range(..) => vec![format!("{key}={}", escape(&value.to_string()))],
    }
}

/// Serializes parameters into a query string (without the leading `?`).
///
/// # Errors
///
/// Returns [`InvalidParamError`] if a range-encoded key holds something
/// other than a range.
pub fn build_query(params: &Params) -> Result<String, InvalidParamError> {
    let mut entries = Vec::with_capacity(params.len());
    for (key, value) in params.iter() {
        entries.extend(encode_param(key, value)?);
    }
    Ok(entries.join("&"))
}

/// Builds the full request URL for a path template.
///
/// A placeholder is a `:` followed by one or more ASCII letters, digits or
/// underscores, and only a whole token matches a parameter name: `:id`
/// never matches inside `:ids`, and `/a/:form-guid` holds the placeholder
/// `form` followed by the literal `-guid`.
///
/// The caller's `params` are never modified; the builder works on a copy.
///
/// # Errors
///
/// - [`HttpError::Config`] if the API key is needed (no access token is
///   configured) but missing, or if the path needs the portal id and none
///   is configured.
/// - [`HttpError::MissingInterpolation`] if a placeholder has no parameter.
/// - [`HttpError::InvalidParam`] if a parameter cannot be encoded.
pub fn build_url(
    config: &HubspotConfig,
    path: &str,
    params: &Params,
    options: &UrlOptions,
) -> Result<String, HttpError> {
    let api_key = if config.access_token().is_some() {
        None
    } else {
        Some(config.require_api_key()?)
    };

    let mut params = params.clone();

    if placeholders(path).iter().any(|p| p.name == PORTAL_ID) {
        let portal_id = config.require_portal_id()?;
        if !params.contains_key(PORTAL_ID) {
            params.insert(PORTAL_ID, portal_id.as_ref());
        }
    }

    let resolved_path = interpolate(path, &mut params)?;

    let mut query = build_query(&params)?;
    if let Some(api_key) = api_key.filter(|_| options.include_api_key) {
        if !query.is_empty() {
            query.push('&');
        }
        query.push_str(API_KEY_PARAM);
        query.push('=');
        query.push_str(&escape(api_key.as_ref()));
    }

    let base_url = options.base_url.as_ref().unwrap_or_else(|| config.base_url());
    let mut url = format!("{base_url}{resolved_path}");
    if !query.is_empty() {
        url.push(if resolved_path.contains('?') { '&' } else { '?' });
        url.push_str(&query);
    }

    Ok(url)
}

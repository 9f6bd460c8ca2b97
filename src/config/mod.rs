//! Configuration types for the HubSpot client.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`HubspotConfig`]: All settings used by the connections
//! - [`HubspotConfigBuilder`]: A builder for constructing [`HubspotConfig`] instances
//! - [`ApiKey`], [`AccessToken`], [`PortalId`], [`BaseUrl`]: validated newtypes
//!
//! Nothing is required at build time. Credentials are checked lazily, when a
//! request actually needs them, through [`HubspotConfig::require_api_key`]
//! and [`HubspotConfig::require_portal_id`].
//!
//! # Example
//!
//! ```rust
//! use hubspot_legacy::{HubspotConfig, ApiKey, PortalId};
//! use std::time::Duration;
//!
//! let config = HubspotConfig::builder()
//!     .api_key(ApiKey::new("demo").unwrap())
//!     .portal_id(PortalId::from(62515))
//!     .read_timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.base_url().as_ref(), "https://api.hubapi.com");
//! ```

mod newtypes;

pub use newtypes::{AccessToken, ApiKey, BaseUrl, PortalId};

use std::time::Duration;

use crate::error::ConfigError;

/// Default base URL of the HubSpot REST API.
pub const DEFAULT_BASE_URL: &str = "https://api.hubapi.com";

/// Default base URL of the form submission endpoint.
pub const DEFAULT_FORMS_BASE_URL: &str = "https://forms.hubspot.com";

/// Default base URL for file uploads.
pub const DEFAULT_FILES_BASE_URL: &str = "https://api.hubapi.com";

/// Configuration for the HubSpot client.
///
/// `HubspotConfig` is an immutable value; each connection keeps its own
/// clone, so there is no process-wide state.
///
/// # Thread Safety
///
/// `HubspotConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct HubspotConfig {
    api_key: Option<ApiKey>,
    access_token: Option<AccessToken>,
    portal_id: Option<PortalId>,
    base_url: BaseUrl,
    forms_base_url: BaseUrl,
    files_base_url: BaseUrl,
    read_timeout: Option<Duration>,
    open_timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl HubspotConfig {
    /// Creates a new builder for constructing a `HubspotConfig`.
    #[must_use]
    pub fn builder() -> HubspotConfigBuilder {
        HubspotConfigBuilder::new()
    }

    /// Returns the API key, if configured.
    #[must_use]
    pub const fn api_key(&self) -> Option<&ApiKey> {
        self.api_key.as_ref()
    }

    /// Returns the access token, if configured.
    #[must_use]
    pub const fn access_token(&self) -> Option<&AccessToken> {
        self.access_token.as_ref()
    }

    /// Returns the portal id, if configured.
    #[must_use]
    pub const fn portal_id(&self) -> Option<&PortalId> {
        self.portal_id.as_ref()
    }

    /// Returns the API key or fails because it is required but missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingSetting`] for `hapikey`.
    pub fn require_api_key(&self) -> Result<&ApiKey, ConfigError> {
        self.api_key
            .as_ref()
            .ok_or(ConfigError::MissingSetting { setting: "hapikey" })
    }

    /// Returns the portal id or fails because it is required but missing.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingSetting`] for `portal_id`.
    pub fn require_portal_id(&self) -> Result<&PortalId, ConfigError> {
        self.portal_id.as_ref().ok_or(ConfigError::MissingSetting {
            setting: "portal_id",
        })
    }

    /// Returns the base URL of the REST API.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the base URL of the form submission endpoint.
    #[must_use]
    pub const fn forms_base_url(&self) -> &BaseUrl {
        &self.forms_base_url
    }

    /// Returns the base URL used for file uploads.
    #[must_use]
    pub const fn files_base_url(&self) -> &BaseUrl {
        &self.files_base_url
    }

    /// Returns the default read timeout, if configured.
    #[must_use]
    pub const fn read_timeout(&self) -> Option<Duration> {
        self.read_timeout
    }

    /// Returns the default open (connect) timeout, if configured.
    #[must_use]
    pub const fn open_timeout(&self) -> Option<Duration> {
        self.open_timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify HubspotConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HubspotConfig>();
};

/// Builder for constructing [`HubspotConfig`] instances.
///
/// # Defaults
///
/// - `base_url`: `https://api.hubapi.com`
/// - `forms_base_url`: `https://forms.hubspot.com`
/// - `files_base_url`: `https://api.hubapi.com`
/// - timeouts: `None` (transport defaults)
/// - credentials: `None`
#[derive(Debug, Default)]
pub struct HubspotConfigBuilder {
    api_key: Option<ApiKey>,
    access_token: Option<AccessToken>,
    portal_id: Option<PortalId>,
    base_url: Option<BaseUrl>,
    forms_base_url: Option<BaseUrl>,
    files_base_url: Option<BaseUrl>,
    read_timeout: Option<Duration>,
    open_timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl HubspotConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key sent as the `hapikey` query parameter.
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets an OAuth access token, used instead of the API key.
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the portal id used to resolve `:portal_id` placeholders.
    #[must_use]
    pub fn portal_id(mut self, portal_id: PortalId) -> Self {
        self.portal_id = Some(portal_id);
        self
    }

    /// Overrides the REST API base URL.
    #[must_use]
    pub fn base_url(mut self, url: BaseUrl) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Overrides the form submission base URL.
    #[must_use]
    pub fn forms_base_url(mut self, url: BaseUrl) -> Self {
        self.forms_base_url = Some(url);
        self
    }

    /// Overrides the file upload base URL.
    #[must_use]
    pub fn files_base_url(mut self, url: BaseUrl) -> Self {
        self.files_base_url = Some(url);
        self
    }

    /// Sets the default read timeout for every request.
    #[must_use]
    pub const fn read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    /// Sets the default open (connect) timeout for every request.
    #[must_use]
    pub const fn open_timeout(mut self, timeout: Duration) -> Self {
        self.open_timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`HubspotConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ConflictingCredentials`] if both an API key and
    /// an access token were set.
    pub fn build(self) -> Result<HubspotConfig, ConfigError> {
        if self.api_key.is_some() && self.access_token.is_some() {
            return Err(ConfigError::ConflictingCredentials);
        }

        let base_url = match self.base_url {
            Some(url) => url,
            None => BaseUrl::new(DEFAULT_BASE_URL)?,
        };
        let forms_base_url = match self.forms_base_url {
            Some(url) => url,
            None => BaseUrl::new(DEFAULT_FORMS_BASE_URL)?,
        };
        let files_base_url = match self.files_base_url {
            Some(url) => url,
            None => BaseUrl::new(DEFAULT_FILES_BASE_URL)?,
        };

        Ok(HubspotConfig {
            api_key: self.api_key,
            access_token: self.access_token,
            portal_id: self.portal_id,
            base_url,
            forms_base_url,
            files_base_url,
            read_timeout: self.read_timeout,
            open_timeout: self.open_timeout,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = HubspotConfig::builder().build().unwrap();

        assert_eq!(config.base_url().as_ref(), DEFAULT_BASE_URL);
        assert_eq!(config.forms_base_url().as_ref(), DEFAULT_FORMS_BASE_URL);
        assert_eq!(config.files_base_url().as_ref(), DEFAULT_FILES_BASE_URL);
        assert!(config.api_key().is_none());
        assert!(config.access_token().is_none());
        assert!(config.portal_id().is_none());
        assert!(config.read_timeout().is_none());
        assert!(config.open_timeout().is_none());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_rejects_api_key_and_access_token_together() {
        let result = HubspotConfig::builder()
            .api_key(ApiKey::new("demo").unwrap())
            .access_token(AccessToken::new("token").unwrap())
            .build();

        assert!(matches!(result, Err(ConfigError::ConflictingCredentials)));
    }

    #[test]
    fn test_required_settings_are_checked_lazily() {
        let config = HubspotConfig::builder().build().unwrap();

        assert!(matches!(
            config.require_api_key(),
            Err(ConfigError::MissingSetting { setting: "hapikey" })
        ));
        assert!(matches!(
            config.require_portal_id(),
            Err(ConfigError::MissingSetting {
                setting: "portal_id"
            })
        ));
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = HubspotConfig::builder()
            .api_key(ApiKey::new("demo").unwrap())
            .portal_id(PortalId::from(62515))
            .base_url(BaseUrl::new("https://cool.com").unwrap())
            .forms_base_url(BaseUrl::new("https://forms.cool.com").unwrap())
            .files_base_url(BaseUrl::new("https://files.cool.com").unwrap())
            .read_timeout(Duration::from_secs(5))
            .open_timeout(Duration::from_secs(2))
            .user_agent_prefix("MyApp/1.0")
            .build()
            .unwrap();

        assert_eq!(config.require_api_key().unwrap().as_ref(), "demo");
        assert_eq!(config.require_portal_id().unwrap().as_ref(), "62515");
        assert_eq!(config.base_url().as_ref(), "https://cool.com");
        assert_eq!(config.forms_base_url().as_ref(), "https://forms.cool.com");
        assert_eq!(config.files_base_url().as_ref(), "https://files.cool.com");
        assert_eq!(config.read_timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.open_timeout(), Some(Duration::from_secs(2)));
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
    }

    #[test]
    fn test_config_debug_does_not_leak_credentials() {
        let config = HubspotConfig::builder()
            .api_key(ApiKey::new("very-secret").unwrap())
            .build()
            .unwrap();

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("HubspotConfig"));
        assert!(!debug_str.contains("very-secret"));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HubspotConfig>();
    }
}

//! Configuration error types for the HubSpot client.
//!
//! Builder-time validation and the lazy "required setting" checks performed
//! on first use both report through [`ConfigError`].
//!
//! # Example
//!
//! ```rust
//! use hubspot_legacy::{ApiKey, ConfigError};
//!
//! let result = ApiKey::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyApiKey)));
//! ```

use thiserror::Error;

/// Errors that can occur while building or consulting the configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// API key cannot be empty.
    #[error("API key cannot be empty. Please provide a valid HubSpot API key.")]
    EmptyApiKey,

    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid HubSpot access token.")]
    EmptyAccessToken,

    /// Portal id cannot be empty.
    #[error("Portal id cannot be empty. Please provide a valid HubSpot portal id.")]
    EmptyPortalId,

    /// A setting required by the current request has not been configured.
    #[error("{setting} not specified. Configure it before making this request.")]
    MissingSetting {
        /// The name of the missing setting.
        setting: &'static str,
    },

    /// Both an API key and an access token were supplied.
    #[error("You must provide either an API key or an access token, not both.")]
    ConflictingCredentials,

    /// A base URL is invalid.
    #[error("Invalid base URL '{url}'. Please provide a URL with scheme (e.g., 'https://api.hubapi.com').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_setting_error_message() {
        let error = ConfigError::MissingSetting { setting: "hapikey" };
        let message = error.to_string();
        assert!(message.starts_with("hapikey not specified"));
    }

    #[test]
    fn test_invalid_base_url_error_message() {
        let error = ConfigError::InvalidBaseUrl {
            url: "api.hubapi.com".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("api.hubapi.com"));
        assert!(message.contains("scheme"));
    }

    #[test]
    fn test_conflicting_credentials_message() {
        let message = ConfigError::ConflictingCredentials.to_string();
        assert!(message.contains("either an API key or an access token"));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = ConfigError::EmptyApiKey;
        let _: &dyn std::error::Error = &error;
    }
}

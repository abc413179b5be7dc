//! Configuration types for the IT Glue API client.
//!
//! This module provides the configuration object every transport is built
//! from. There is no global connection state: a configuration value is created
//! once at startup and handed to [`RestClient::new`](crate::clients::RestClient::new).
//!
//! # Overview
//!
//! - [`ItGlueConfig`]: The configuration struct holding the credential and endpoint
//! - [`ItGlueConfigBuilder`]: A builder for constructing [`ItGlueConfig`] instances
//! - [`ApiKey`]: A validated API key newtype with masked debug output
//! - [`ApiUrl`]: A validated API base URL
//!
//! # Example
//!
//! ```rust
//! use itglue_api::{ItGlueConfig, ApiKey, ApiUrl};
//!
//! let config = ItGlueConfig::builder()
//!     .api_key(ApiKey::new("my-api-key").unwrap())
//!     .api_url(ApiUrl::new("https://api.itglue.com").unwrap())
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::{ApiKey, ApiUrl};

use crate::error::ConfigError;

/// Environment variable holding the API key, read by [`ItGlueConfigBuilder::from_env`].
pub const API_KEY_ENV: &str = "ITGLUE_API_KEY";

/// Environment variable holding the API base URL, read by [`ItGlueConfigBuilder::from_env`].
pub const API_URL_ENV: &str = "ITGLUE_API_URL";

/// Configuration for the IT Glue API client.
///
/// `ItGlueConfig` is `Clone`, `Send`, and `Sync`, so one value can back any
/// number of clients.
#[derive(Clone, Debug)]
pub struct ItGlueConfig {
    api_key: ApiKey,
    api_url: ApiUrl,
    user_agent_prefix: Option<String>,
}

impl ItGlueConfig {
    /// Creates a new builder for constructing an `ItGlueConfig`.
    #[must_use]
    pub fn builder() -> ItGlueConfigBuilder {
        ItGlueConfigBuilder::new()
    }

    /// Returns the API key.
    #[must_use]
    pub const fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    /// Returns the API base URL.
    #[must_use]
    pub const fn api_url(&self) -> &ApiUrl {
        &self.api_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify ItGlueConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ItGlueConfig>();
};

/// Builder for constructing [`ItGlueConfig`] instances.
///
/// Required fields are `api_key` and `api_url`.
///
/// # Example
///
/// ```rust
/// use itglue_api::{ItGlueConfig, ApiKey, ApiUrl};
///
/// let config = ItGlueConfig::builder()
///     .api_key(ApiKey::new("key").unwrap())
///     .api_url(ApiUrl::new("https://api.eu.itglue.com").unwrap())
///     .user_agent_prefix("MyApp/1.0")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
/// ```
#[derive(Debug, Default)]
pub struct ItGlueConfigBuilder {
    api_key: Option<ApiKey>,
    api_url: Option<ApiUrl>,
    user_agent_prefix: Option<String>,
}

impl ItGlueConfigBuilder {
    /// Creates a new, empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder seeded from the process environment.
    ///
    /// Reads [`API_KEY_ENV`] and [`API_URL_ENV`]. Unset variables leave the
    /// corresponding field empty, so [`build`](Self::build) reports them as
    /// missing unless they are set explicitly afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyApiKey`] or [`ConfigError::InvalidApiUrl`]
    /// if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = std::env::var(API_KEY_ENV).ok().map(ApiKey::new).transpose()?;
        let api_url = std::env::var(API_URL_ENV).ok().map(ApiUrl::new).transpose()?;

        Ok(Self {
            api_key,
            api_url,
            user_agent_prefix: None,
        })
    }

    /// Sets the API key (required).
    #[must_use]
    pub fn api_key(mut self, key: ApiKey) -> Self {
        self.api_key = Some(key);
        self
    }

    /// Sets the API base URL (required).
    #[must_use]
    pub fn api_url(mut self, url: ApiUrl) -> Self {
        self.api_url = Some(url);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ItGlueConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `api_key` or
    /// `api_url` are not set.
    pub fn build(self) -> Result<ItGlueConfig, ConfigError> {
        let api_key = self
            .api_key
            .ok_or(ConfigError::MissingRequiredField { field: "api_key" })?;
        let api_url = self
            .api_url
            .ok_or(ConfigError::MissingRequiredField { field: "api_url" })?;

        Ok(ItGlueConfig {
            api_key,
            api_url,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

//! Configuration types for the GraphQL API client.
//!
//! This module provides the core configuration types used to initialize
//! the client and to override transport settings per request.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ClientConfig`]: The main configuration struct holding all client settings
//! - [`ClientConfigBuilder`]: A builder for constructing [`ClientConfig`] instances
//! - [`EndpointUrl`]: A validated, absolute endpoint URL newtype
//! - [`RequestOptions`]: Optional per-request transport overrides
//! - [`CredentialsMode`]: Controls whether credential-bearing headers are sent
//!
//! # Example
//!
//! ```rust
//! use graphql_api::{ClientConfig, CredentialsMode, EndpointUrl};
//!
//! let config = ClientConfig::builder()
//!     .endpoint(EndpointUrl::new("https://api.example.com").unwrap())
//!     .header("X-Csrf-Token", "token-value")
//!     .credentials(CredentialsMode::Include)
//!     .build()
//!     .unwrap();
//! ```

mod newtypes;

pub use newtypes::EndpointUrl;

use std::collections::HashMap;

use crate::error::ConfigError;

/// Controls whether credential-bearing headers accompany a request.
///
/// Mirrors the credentials semantics of browser fetch options: [`Omit`]
/// strips `Authorization` and `Cookie` headers from the configured defaults
/// before the request is sent, while the other two modes send them.
///
/// [`Omit`]: CredentialsMode::Omit
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CredentialsMode {
    /// Never send credential-bearing headers.
    Omit,
    /// Send credentials (the default).
    #[default]
    SameOrigin,
    /// Always send credentials.
    Include,
}

impl CredentialsMode {
    /// Returns `true` if this mode sends credential-bearing headers.
    #[must_use]
    pub const fn sends_credentials(self) -> bool {
        !matches!(self, Self::Omit)
    }
}

/// Configuration for the GraphQL API client.
///
/// Holds the endpoint URL, default headers applied to every request (for
/// example a CSRF token header owned by the embedding application), the
/// default credentials mode, and an optional user-agent prefix.
///
/// # Thread Safety
///
/// `ClientConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    endpoint: EndpointUrl,
    default_headers: HashMap<String, String>,
    credentials: CredentialsMode,
    user_agent_prefix: Option<String>,
}

impl ClientConfig {
    /// Creates a new builder for constructing a `ClientConfig`.
    #[must_use]
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Returns the endpoint URL requests are resolved against.
    #[must_use]
    pub const fn endpoint(&self) -> &EndpointUrl {
        &self.endpoint
    }

    /// Returns the default headers applied to every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the default credentials mode.
    #[must_use]
    pub const fn credentials(&self) -> CredentialsMode {
        self.credentials
    }

    /// Returns the user-agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

/// Builder for constructing [`ClientConfig`] instances.
///
/// # Example
///
/// ```rust
/// use graphql_api::{ClientConfig, ConfigError};
///
/// // The endpoint is required.
/// let result = ClientConfig::builder().build();
/// assert!(matches!(result, Err(ConfigError::MissingRequiredField { field: "endpoint" })));
/// ```
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    endpoint: Option<EndpointUrl>,
    default_headers: HashMap<String, String>,
    credentials: CredentialsMode,
    user_agent_prefix: Option<String>,
}

impl ClientConfigBuilder {
    fn new() -> Self {
        Self::default()
    }

    /// Sets the endpoint URL (required).
    #[must_use]
    pub fn endpoint(mut self, endpoint: EndpointUrl) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    /// Adds a default header applied to every request.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.insert(name.into(), value.into());
        self
    }

    /// Sets all default headers at once, replacing any previously added.
    #[must_use]
    pub fn headers(mut self, headers: HashMap<String, String>) -> Self {
        self.default_headers = headers;
        self
    }

    /// Sets the default credentials mode.
    #[must_use]
    pub const fn credentials(mut self, credentials: CredentialsMode) -> Self {
        self.credentials = credentials;
        self
    }

    /// Sets a prefix for the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`ClientConfig`], validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if no endpoint was set,
    /// or [`ConfigError::EmptyHeaderName`] if a default header was registered
    /// with an empty name.
    pub fn build(self) -> Result<ClientConfig, ConfigError> {
        let endpoint = self
            .endpoint
            .ok_or(ConfigError::MissingRequiredField { field: "endpoint" })?;

        if self.default_headers.keys().any(|name| name.trim().is_empty()) {
            return Err(ConfigError::EmptyHeaderName);
        }

        Ok(ClientConfig {
            endpoint,
            default_headers: self.default_headers,
            credentials: self.credentials,
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

/// Optional per-request transport overrides.
///
/// Carries extra headers, a credentials-mode override, and a base-URL
/// override. The request method and body are owned by the executor and are
/// deliberately not representable here.
///
/// # Example
///
/// ```rust
/// use graphql_api::{CredentialsMode, EndpointUrl, RequestOptions};
///
/// let options = RequestOptions::new()
///     .header("X-Requested-With", "graphql-api")
///     .credentials(CredentialsMode::Omit)
///     .base_url(EndpointUrl::new("https://other.example.com").unwrap());
/// ```
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    headers: HashMap<String, String>,
    credentials: Option<CredentialsMode>,
    base_url: Option<EndpointUrl>,
}

impl RequestOptions {
    /// Creates an empty options bag; every field is merged with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an extra header for this request. Extras override the client's
    /// default headers on name collision.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Overrides the credentials mode for this request.
    #[must_use]
    pub const fn credentials(mut self, credentials: CredentialsMode) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Overrides the base URL for this request.
    #[must_use]
    pub fn base_url(mut self, base_url: EndpointUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Returns the extra headers for this request.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Returns the credentials-mode override, if any.
    #[must_use]
    pub const fn credentials_override(&self) -> Option<CredentialsMode> {
        self.credentials
    }

    /// Returns the base-URL override, if any.
    #[must_use]
    pub const fn base_url_override(&self) -> Option<&EndpointUrl> {
        self.base_url.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_endpoint() {
        let result = ClientConfig::builder().build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "endpoint" })
        ));
    }

    #[test]
    fn test_builder_rejects_empty_header_name() {
        let result = ClientConfig::builder()
            .endpoint(EndpointUrl::new("https://api.example.com").unwrap())
            .header("", "value")
            .build();
        assert!(matches!(result, Err(ConfigError::EmptyHeaderName)));
    }

    #[test]
    fn test_credentials_default_is_same_origin() {
        let config = ClientConfig::builder()
            .endpoint(EndpointUrl::new("https://api.example.com").unwrap())
            .build()
            .unwrap();
        assert_eq!(config.credentials(), CredentialsMode::SameOrigin);
        assert!(config.credentials().sends_credentials());
    }

    #[test]
    fn test_omit_does_not_send_credentials() {
        assert!(!CredentialsMode::Omit.sends_credentials());
        assert!(CredentialsMode::Include.sends_credentials());
    }

    #[test]
    fn test_default_headers_are_kept() {
        let config = ClientConfig::builder()
            .endpoint(EndpointUrl::new("https://api.example.com").unwrap())
            .header("X-Csrf-Token", "token-value")
            .build()
            .unwrap();
        assert_eq!(
            config.default_headers().get("X-Csrf-Token"),
            Some(&"token-value".to_string())
        );
    }

    #[test]
    fn test_request_options_start_empty() {
        let options = RequestOptions::new();
        assert!(options.headers().is_empty());
        assert!(options.credentials_override().is_none());
        assert!(options.base_url_override().is_none());
    }

    #[test]
    fn test_request_options_accumulate() {
        let options = RequestOptions::new()
            .header("X-One", "1")
            .header("X-Two", "2")
            .credentials(CredentialsMode::Omit);
        assert_eq!(options.headers().len(), 2);
        assert_eq!(options.credentials_override(), Some(CredentialsMode::Omit));
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ClientConfig>();
        assert_send_sync::<RequestOptions>();
    }
}

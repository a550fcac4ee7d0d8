//! Validated newtypes for configuration values.

use std::fmt;

use url::Url;

use crate::error::ConfigError;

/// A validated, absolute http(s) endpoint URL.
///
/// The GraphQL API route is always resolved root-relative against this URL,
/// so any path component on the endpoint itself is ignored at request time.
///
/// # Example
///
/// ```rust
/// use graphql_api::EndpointUrl;
///
/// let endpoint = EndpointUrl::new("https://api.example.com").unwrap();
/// assert_eq!(endpoint.as_str(), "https://api.example.com/");
///
/// assert!(EndpointUrl::new("not a url").is_err());
/// assert!(EndpointUrl::new("ftp://example.com").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointUrl(Url);

impl EndpointUrl {
    /// Creates a new endpoint URL, validating it in the process.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpointUrl`] if the value is not an
    /// absolute URL or does not use the `http` or `https` scheme.
    pub fn new(url: impl AsRef<str>) -> Result<Self, ConfigError> {
        let raw = url.as_ref();
        let parsed = Url::parse(raw).map_err(|_| ConfigError::InvalidEndpointUrl {
            url: raw.to_string(),
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidEndpointUrl {
                url: raw.to_string(),
            });
        }

        Ok(Self(parsed))
    }

    /// Returns the underlying parsed URL.
    #[must_use]
    pub const fn as_url(&self) -> &Url {
        &self.0
    }

    /// Returns the URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EndpointUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

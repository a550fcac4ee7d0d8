//! GraphQL request executor.
//!
//! This module provides the [`GraphQLClient`] type for executing GraphQL
//! queries and mutations against a single HTTP endpoint.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use super::document::OperationDocument;
use super::errors::GraphQLClientError;
use super::result::GraphQLResult;
use super::Variables;
use crate::clients::errors::{HttpError, HttpResponseError};
use crate::config::{ClientConfig, RequestOptions};

/// The fixed API route every operation is posted to.
pub const GRAPHQL_API_PATH: &str = "/.api/graphql";

/// Client version from Cargo.toml.
const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header names that carry credentials, stripped under
/// [`CredentialsMode::Omit`](crate::config::CredentialsMode::Omit).
const CREDENTIAL_HEADERS: [&str; 2] = ["authorization", "cookie"];

/// Typed client for a GraphQL endpoint over HTTP.
///
/// The client issues exactly one `POST` per invocation and never retries.
/// Success and error payloads are normalized
/// into [`GraphQLResult`]; transport failures surface as [`HttpError`].
///
/// # Cancellation
///
/// Each request method returns a future that owns the in-flight transport
/// call. Dropping the future (e.g. when a select arm loses or the caller
/// goes away) aborts the underlying request, so an abandoned operation
/// neither consumes resources nor delivers a late value. There is no
/// default timeout; callers wanting a deadline compose
/// `tokio::time::timeout` around the future.
///
/// # Thread Safety
///
/// `GraphQLClient` is `Send + Sync`, making it safe to share across async
/// tasks.
///
/// # Example
///
/// ```rust,ignore
/// use graphql_api::{gql, ClientConfig, EndpointUrl, GraphQLClient};
///
/// let config = ClientConfig::builder()
///     .endpoint(EndpointUrl::new("https://api.example.com")?)
///     .header("X-Csrf-Token", "token-value")
///     .build()?;
/// let client = GraphQLClient::new(config);
///
/// // Raw result, classified by the caller
/// let document = gql("query GetUser($id: ID!) { user(id: $id) { name } }");
/// let result = client.request::<serde_json::Value>(&document, None, None).await?;
///
/// // Or unwrapped directly
/// let data: serde_json::Value = client.query(&document, None, None).await?;
/// ```
#[derive(Debug)]
pub struct GraphQLClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Client configuration (endpoint, credentials mode).
    config: ClientConfig,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify GraphQLClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphQLClient>();
};

/// The JSON envelope posted to the endpoint. Method and body are owned
/// here; callers cannot override either.
#[derive(Serialize)]
struct RequestEnvelope<'a> {
    query: &'a str,
    variables: Variables,
}

impl GraphQLClient {
    /// Creates a new client for the configured endpoint.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}GraphQL API Client v{CLIENT_VERSION} | Rust {rust_version}"
        );

        // Build default headers
        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        for (name, value) in config.default_headers() {
            default_headers.insert(name.clone(), value.clone());
        }

        // Create reqwest client
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            config,
            default_headers,
        }
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Executes an operation and returns the decoded [`GraphQLResult`].
    ///
    /// Builds `POST <base>/.api/graphql[?<OperationName>]` with the JSON
    /// envelope `{"query": <document text>, "variables": <variables>}`. The
    /// name suffix is appended only when the document starts with a named
    /// operation, for server-side log correlation. Omitted `variables`
    /// serialize as an empty mapping.
    ///
    /// At most one value is ever produced: the decoded result, or exactly
    /// one failure. Concurrent invocations have no ordering relationship.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] on connection failure,
    /// [`HttpError::Response`] for any non-2xx status (carrying the status
    /// code and body text), and [`HttpError::Decode`] when the body is not
    /// valid JSON of the expected shape. GraphQL-level errors are NOT
    /// transport errors; they arrive as the `Error` variant of the returned
    /// result.
    pub async fn request<T>(
        &self,
        document: &OperationDocument,
        variables: Option<Variables>,
        options: Option<&RequestOptions>,
    ) -> Result<GraphQLResult<T>, HttpError>
    where
        T: DeserializeOwned,
    {
        let url = self.api_url(document, options);
        let headers = self.merged_headers(options);
        let envelope = RequestEnvelope {
            query: document.as_str(),
            variables: variables.unwrap_or_default(),
        };

        tracing::debug!(
            operation = document.operation_name().unwrap_or("<anonymous>"),
            url = %url,
            "sending GraphQL request"
        );

        let mut builder = self.client.post(url);
        for (name, value) in &headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        let response = builder.json(&envelope).send().await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(HttpError::Response(HttpResponseError {
                code: status.as_u16(),
                body,
            }));
        }

        let result = serde_json::from_str::<GraphQLResult<T>>(&body)?;
        if let Some(errors) = result.errors() {
            tracing::debug!(
                operation = document.operation_name().unwrap_or("<anonymous>"),
                errors = errors.len(),
                "GraphQL response carried errors"
            );
        }
        Ok(result)
    }

    /// Executes a query and unwraps its data payload.
    ///
    /// Convenience over [`request`](Self::request) followed by
    /// [`GraphQLResult::into_data`], collapsing both failure layers into one
    /// error channel.
    ///
    /// # Errors
    ///
    /// Returns [`GraphQLClientError::Http`] for transport failures and
    /// [`GraphQLClientError::GraphQL`] when the response carried errors.
    pub async fn query<T>(
        &self,
        document: &OperationDocument,
        variables: Option<Variables>,
        options: Option<&RequestOptions>,
    ) -> Result<T, GraphQLClientError>
    where
        T: DeserializeOwned,
    {
        Ok(self.request(document, variables, options).await?.into_data()?)
    }

    /// Executes a mutation and unwraps its data payload.
    ///
    /// Identical to [`query`](Self::query); it exists so call sites read as
    /// what they do.
    ///
    /// # Errors
    ///
    /// Returns [`GraphQLClientError::Http`] for transport failures and
    /// [`GraphQLClientError::GraphQL`] when the response carried errors.
    pub async fn mutate<T>(
        &self,
        document: &OperationDocument,
        variables: Option<Variables>,
        options: Option<&RequestOptions>,
    ) -> Result<T, GraphQLClientError>
    where
        T: DeserializeOwned,
    {
        Ok(self.request(document, variables, options).await?.into_data()?)
    }

    /// Resolves the fixed API route (plus optional name suffix) against the
    /// effective base URL. The route is root-relative, so any path on the
    /// base is replaced.
    fn api_url(&self, document: &OperationDocument, options: Option<&RequestOptions>) -> Url {
        let base = options
            .and_then(RequestOptions::base_url_override)
            .unwrap_or_else(|| self.config.endpoint());
        let mut url = base.as_url().clone();
        url.set_path(GRAPHQL_API_PATH);
        url.set_query(document.operation_name());
        url
    }

    /// Merges default and per-request headers, then applies the effective
    /// credentials mode. Per-request extras win on name collision.
    fn merged_headers(&self, options: Option<&RequestOptions>) -> HashMap<String, String> {
        let mut headers = self.default_headers.clone();
        if let Some(options) = options {
            for (name, value) in options.headers() {
                headers.insert(name.clone(), value.clone());
            }
        }

        let credentials = options
            .and_then(RequestOptions::credentials_override)
            .unwrap_or_else(|| self.config.credentials());
        if !credentials.sends_credentials() {
            headers.retain(|name, _| {
                !CREDENTIAL_HEADERS
                    .iter()
                    .any(|credential| name.eq_ignore_ascii_case(credential))
            });
        }

        headers
    }
}

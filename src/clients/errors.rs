//! HTTP-specific error types for the GraphQL API client.
//!
//! This module contains error types for the transport layer: network
//! failures, non-2xx responses, and body-decode failures. These are never
//! recovered internally and never retried; they always propagate to the
//! caller.
//!
//! Transport errors are distinct from GraphQL-level errors, which arrive
//! with a 2xx status and are classified by
//! [`GraphQLResult`](crate::clients::graphql::GraphQLResult).
//!
//! # Example
//!
//! ```rust,ignore
//! use graphql_api::{GraphQLClient, HttpError};
//!
//! match client.request::<serde_json::Value>(&document, None, None).await {
//!     Ok(result) => { /* classify the GraphQL result */ }
//!     Err(HttpError::Response(e)) => {
//!         println!("API returned status {}: {}", e.code, e.body);
//!     }
//!     Err(HttpError::Decode(e)) => {
//!         println!("Response body was not valid JSON: {e}");
//!     }
//!     Err(HttpError::Network(e)) => {
//!         println!("Network error: {e}");
//!     }
//! }
//! ```

use thiserror::Error;

/// Error returned when a request receives a non-2xx response.
///
/// Carries the status code and the textual response body for diagnostics.
#[derive(Debug, Error)]
#[error("HTTP status code {code}: {body}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// The textual response body.
    pub body: String,
}

/// Unified error type for all transport-level failures.
///
/// This enum provides a single error type for HTTP operations, making it
/// easier to handle errors at API boundaries. Use pattern matching to
/// handle specific error types.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// The response body could not be decoded as JSON.
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

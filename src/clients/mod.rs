//! HTTP client types for GraphQL API communication.
//!
//! This module provides the transport layer for issuing GraphQL operations
//! over HTTP and the pure classification layer for the decoded responses.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`graphql::GraphQLClient`]: The async request executor
//! - [`graphql::GraphQLResult`]: The success/error tagged union decoded from a response
//! - [`HttpError`]: Unified transport-level error type
//! - [`HttpResponseError`]: Non-2xx response errors
//!
//! # Example
//!
//! ```rust,ignore
//! use graphql_api::{gql, ClientConfig, EndpointUrl, GraphQLClient};
//!
//! let config = ClientConfig::builder()
//!     .endpoint(EndpointUrl::new("https://api.example.com")?)
//!     .build()?;
//! let client = GraphQLClient::new(config);
//!
//! let document = gql("query GetUser { user { id } }");
//! let result = client.request::<serde_json::Value>(&document, None, None).await?;
//! ```

mod errors;
pub mod graphql;

pub use errors::{HttpError, HttpResponseError};

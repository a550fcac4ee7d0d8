//! # GraphQL API client
//!
//! A Rust client for a GraphQL HTTP endpoint, providing typed request
//! execution, uniform classification of success and error payloads, and an
//! ordered registry of resettable application state stores.
//!
//! ## Overview
//!
//! This crate provides:
//! - A request executor ([`GraphQLClient`]) that posts operation documents
//!   to the fixed `/.api/graphql` route and classifies the outcome
//! - A pure result classifier ([`GraphQLResult`]) separating transport
//!   failures from GraphQL-level errors
//! - Error aggregation preserving every underlying server message
//!   ([`AggregateGraphQLError`])
//! - Type-safe configuration via [`ClientConfig`] and validated newtypes
//! - A fixed, ordered store registry with a uniform reset protocol
//!   ([`StoreRegistry`])
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use graphql_api::{gql, ClientConfig, EndpointUrl, GraphQLClient};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::builder()
//!     .endpoint(EndpointUrl::new("https://api.example.com")?)
//!     .header("X-Csrf-Token", "token-value")
//!     .build()?;
//! let client = GraphQLClient::new(config);
//!
//! let document = gql("query GetUser($id: ID!) { user(id: $id) { name } }");
//! let result = client.request::<serde_json::Value>(&document, None, None).await?;
//! let data = result.into_data()?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Layers
//!
//! Failures are classified into three layers, none of which is ever
//! swallowed:
//!
//! - *Transport*: network failure, non-2xx status, or body-decode failure.
//!   Surfaced as [`HttpError`], returned by [`GraphQLClient::request`].
//! - *Protocol*: successful transport, but the response carries a non-empty
//!   `errors` list. Surfaced as the `Error` variant of [`GraphQLResult`] and
//!   aggregated by [`GraphQLResult::into_data`].
//! - *Shape*: caller-detected validation failure after unwrapping.
//!   Constructed via [`InvalidGraphQLResponseError`].
//!
//! ## Store Synchronization
//!
//! ```rust
//! use graphql_api::{BoxError, Store, StoreRegistry};
//! use serde_json::{json, Value};
//! use std::sync::Mutex;
//!
//! struct RepoStore {
//!     state: Mutex<Option<Value>>,
//! }
//!
//! impl Store for RepoStore {
//!     fn reset(&self, slice: Option<Value>) -> Result<(), BoxError> {
//!         *self.state.lock().unwrap() = slice;
//!         Ok(())
//!     }
//! }
//!
//! let registry = StoreRegistry::builder()
//!     .register("RepoStore", RepoStore { state: Mutex::new(None) })
//!     .build();
//!
//! // A partial payload clears the stores it does not mention.
//! let data = json!({"RepoStore": {"repos": []}});
//! registry.reset(data.as_object()).unwrap();
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration and the store registry are
//!   instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with the Tokio async runtime
//! - **Cancellation-aware**: Dropping a request future aborts the
//!   in-flight transport call
//! - **No silent failures**: Every failure layer propagates to the caller;
//!   recovery is entirely the caller's responsibility

pub mod clients;
pub mod config;
pub mod error;
pub mod stores;

// Re-export public types at crate root for convenience
pub use clients::graphql::{
    gql, AggregateGraphQLError, GraphQLClient, GraphQLClientError, GraphQLLocation,
    GraphQLResponseError, GraphQLResult, InvalidGraphQLResponseError, OperationDocument,
    OperationKind, PathSegment, Variables, GRAPHQL_API_PATH,
};
pub use clients::{HttpError, HttpResponseError};
pub use config::{
    ClientConfig, ClientConfigBuilder, CredentialsMode, EndpointUrl, RequestOptions,
};
pub use error::ConfigError;
pub use stores::{BoxError, ResetData, Store, StoreRegistry, StoreRegistryBuilder, StoreResetError};

//! Typed GraphQL request execution and result classification.
//!
//! The two cooperating pieces in this module:
//!
//! - [`GraphQLClient`]: builds an HTTP request from an operation document
//!   and variables, issues it, and classifies the outcome.
//! - [`GraphQLResult`]: the pure decision layer that, given a decoded
//!   response body, determines whether the operation produced usable data
//!   or must be treated as failed.

mod client;
mod document;
mod errors;
mod result;

pub use client::{GraphQLClient, GRAPHQL_API_PATH};
pub use document::{gql, OperationDocument, OperationKind};
pub use errors::{AggregateGraphQLError, GraphQLClientError, InvalidGraphQLResponseError};
pub use result::{GraphQLLocation, GraphQLResponseError, GraphQLResult, PathSegment};

/// Named arguments accompanying an operation document.
///
/// Omitted variables serialize as an empty mapping.
pub type Variables = serde_json::Map<String, serde_json::Value>;

//! GraphQL-specific error types.
//!
//! Three layers:
//!
//! - [`AggregateGraphQLError`]: one error value built from the full server
//!   error list, raised by the classifier's unwrap path.
//! - [`InvalidGraphQLResponseError`]: a distinguished error for callers that
//!   validate the shape of unwrapped data and find an expected field absent.
//! - [`GraphQLClientError`]: the unified error surface of the convenience
//!   wrappers, covering both transport and GraphQL-level failures.

use std::fmt;

use thiserror::Error;

use super::document::OperationKind;
use super::result::GraphQLResponseError;
use crate::clients::HttpError;

/// A single error value combining one or more server error records.
///
/// Preserves the order and message text of every underlying error; the
/// display output joins the messages with newlines. A single-element list is
/// wrapped the same way, so callers never branch on error count.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateGraphQLError {
    errors: Vec<GraphQLResponseError>,
}

impl AggregateGraphQLError {
    /// Wraps the full error list. The classifier only constructs this from
    /// non-empty lists.
    #[must_use]
    pub fn new(errors: Vec<GraphQLResponseError>) -> Self {
        debug_assert!(!errors.is_empty(), "aggregate of an empty error list");
        Self { errors }
    }

    /// Returns the underlying error records, in response order.
    #[must_use]
    pub fn errors(&self) -> &[GraphQLResponseError] {
        &self.errors
    }

    /// Consumes the aggregate, returning the underlying records.
    #[must_use]
    pub fn into_errors(self) -> Vec<GraphQLResponseError> {
        self.errors
    }
}

impl fmt::Display for AggregateGraphQLError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", error.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for AggregateGraphQLError {}

/// Error for a response whose unwrapped `data` fails caller-side shape
/// validation (an expected field is absent).
///
/// Shape validation itself is caller-specific; this type only fixes the
/// message text and the `query_name` diagnostic field that downstream
/// error-matching relies on.
///
/// # Example
///
/// ```rust
/// use graphql_api::InvalidGraphQLResponseError;
///
/// let error = InvalidGraphQLResponseError::query("GetUser");
/// assert_eq!(error.to_string(), "Invalid GraphQL response: query GetUser");
/// assert_eq!(error.query_name, "GetUser");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid GraphQL response: {kind} {query_name}")]
pub struct InvalidGraphQLResponseError {
    /// Whether the offending operation was a query or a mutation.
    pub kind: OperationKind,
    /// The name of the offending operation.
    pub query_name: String,
}

impl InvalidGraphQLResponseError {
    /// Creates the error for a query whose response shape was invalid.
    pub fn query(query_name: impl Into<String>) -> Self {
        Self {
            kind: OperationKind::Query,
            query_name: query_name.into(),
        }
    }

    /// Creates the error for a mutation whose response shape was invalid.
    pub fn mutation(query_name: impl Into<String>) -> Self {
        Self {
            kind: OperationKind::Mutation,
            query_name: query_name.into(),
        }
    }
}

/// Unified error type for the [`query`](super::GraphQLClient::query) and
/// [`mutate`](super::GraphQLClient::mutate) wrappers.
#[derive(Debug, Error)]
pub enum GraphQLClientError {
    /// A transport-level failure (network, non-2xx status, decode).
    #[error(transparent)]
    Http(#[from] HttpError),

    /// A protocol-level failure: the transport succeeded but the response
    /// carried a non-empty error list.
    #[error(transparent)]
    GraphQL(#[from] AggregateGraphQLError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_error_aggregates_without_wrapping_artifacts() {
        let aggregate = AggregateGraphQLError::new(vec![GraphQLResponseError::new("not found")]);
        assert_eq!(aggregate.to_string(), "not found");
        assert_eq!(aggregate.errors().len(), 1);
    }

    #[test]
    fn test_multiple_errors_preserve_every_message() {
        let aggregate = AggregateGraphQLError::new(vec![
            GraphQLResponseError::new("A"),
            GraphQLResponseError::new("B"),
        ]);
        let message = aggregate.to_string();
        assert!(message.contains("A"));
        assert!(message.contains("B"));
        assert_eq!(message, "A\nB");
    }

    #[test]
    fn test_invalid_query_response_message() {
        let error = InvalidGraphQLResponseError::query("GetUser");
        assert_eq!(error.to_string(), "Invalid GraphQL response: query GetUser");
        assert_eq!(error.query_name, "GetUser");
        assert_eq!(error.kind, OperationKind::Query);
    }

    #[test]
    fn test_invalid_mutation_response_message() {
        let error = InvalidGraphQLResponseError::mutation("UpdateX");
        assert_eq!(
            error.to_string(),
            "Invalid GraphQL response: mutation UpdateX"
        );
        assert_eq!(error.query_name, "UpdateX");
    }

    #[test]
    fn test_client_error_wraps_both_channels() {
        let http: GraphQLClientError = HttpError::Response(crate::clients::HttpResponseError {
            code: 502,
            body: "bad gateway".to_string(),
        })
        .into();
        assert!(matches!(http, GraphQLClientError::Http(_)));
        assert!(http.to_string().contains("502"));

        let graphql: GraphQLClientError =
            AggregateGraphQLError::new(vec![GraphQLResponseError::new("not found")]).into();
        assert!(matches!(graphql, GraphQLClientError::GraphQL(_)));
        assert!(graphql.to_string().contains("not found"));
    }

    #[test]
    fn test_all_error_types_implement_std_error() {
        let aggregate: &dyn std::error::Error =
            &AggregateGraphQLError::new(vec![GraphQLResponseError::new("x")]);
        let _ = aggregate;

        let invalid: &dyn std::error::Error = &InvalidGraphQLResponseError::query("GetUser");
        let _ = invalid;
    }
}

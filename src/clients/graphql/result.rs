//! The GraphQL result union and its classifier.
//!
//! A response body decodes into exactly one of two variants: usable data or
//! a non-empty error list. The variant tag is decided once, at
//! deserialization; everything downstream matches on the union instead of
//! probing fields.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::errors::AggregateGraphQLError;

/// A location in a GraphQL document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphQLLocation {
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number (1-indexed).
    pub column: u32,
}

/// A segment in an error path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    /// A field name.
    Field(String),
    /// An array index.
    Index(usize),
}

/// A structured error record as returned by the server.
///
/// Treated as opaque payload: it is forwarded into an
/// [`AggregateGraphQLError`] without interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphQLResponseError {
    /// The error message.
    pub message: String,

    /// Locations in the document where the error occurred.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<GraphQLLocation>,

    /// Path to the field that caused the error.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<PathSegment>>,

    /// Additional error metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<Value>,
}

impl GraphQLResponseError {
    /// Creates an error record carrying only a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            locations: Vec::new(),
            path: None,
            extensions: None,
        }
    }
}

/// The success/error tagged union decoded from a GraphQL response body.
///
/// Exactly one of `data`/`errors` is present; `errors`, when present, is
/// never empty. The tag is decided by the `errors` list alone: an absent or
/// empty list is success even if `data` looks incomplete, and the
/// classifier never inspects `data`.
///
/// # Example
///
/// ```rust
/// use graphql_api::{GraphQLResponseError, GraphQLResult};
///
/// let result: GraphQLResult<i32> = GraphQLResult::Error {
///     errors: vec![GraphQLResponseError::new("not found")],
/// };
/// assert!(result.is_graphql_error());
/// assert!(result.into_data().is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum GraphQLResult<T> {
    /// The operation produced usable data.
    Success {
        /// The decoded `data` payload.
        data: T,
    },
    /// The operation failed at the GraphQL protocol level.
    Error {
        /// The server's error list, in response order. Never empty.
        errors: Vec<GraphQLResponseError>,
    },
}

impl<T> GraphQLResult<T> {
    /// Returns `true` iff the result carries a non-empty error list.
    ///
    /// This is the sole discriminant between the two variants.
    #[must_use]
    pub const fn is_graphql_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    /// Unwraps the result into its data payload, aggregating errors.
    ///
    /// The default unwrap path: it converts the two-variant union into a
    /// single success value or a single failure channel, so callers get
    /// ordinary call/return error handling instead of pattern-matching the
    /// union. The aggregate preserves the order and message text of every
    /// underlying error; a single-element list aggregates the same way.
    ///
    /// # Errors
    ///
    /// Returns [`AggregateGraphQLError`] built from the full error list.
    pub fn into_data(self) -> Result<T, AggregateGraphQLError> {
        match self {
            Self::Success { data } => Ok(data),
            Self::Error { errors } => Err(AggregateGraphQLError::new(errors)),
        }
    }

    /// Returns the error list, or `None` for a success.
    #[must_use]
    pub fn errors(&self) -> Option<&[GraphQLResponseError]> {
        match self {
            Self::Success { .. } => None,
            Self::Error { errors } => Some(errors),
        }
    }
}

/// Wire shape of a response body: both fields optional, classified below.
#[derive(Deserialize)]
struct WireResponse {
    #[serde(default)]
    data: Value,
    #[serde(default)]
    errors: Vec<GraphQLResponseError>,
}

impl<'de, T> Deserialize<'de> for GraphQLResult<T>
where
    T: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let wire = WireResponse::deserialize(deserializer)?;
        if !wire.errors.is_empty() {
            return Ok(Self::Error {
                errors: wire.errors,
            });
        }
        // An absent or empty error list is a success; `data` (JSON null when
        // absent) must then decode into T.
        let data = serde_json::from_value(wire.data).map_err(serde::de::Error::custom)?;
        Ok(Self::Success { data })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    struct User {
        id: String,
        name: String,
    }

    #[test]
    fn test_data_body_decodes_to_success() {
        let body = json!({"data": {"id": "1", "name": "Alice"}}).to_string();
        let result: GraphQLResult<User> = serde_json::from_str(&body).unwrap();
        assert!(!result.is_graphql_error());
        assert_eq!(
            result.into_data().unwrap(),
            User {
                id: "1".to_string(),
                name: "Alice".to_string()
            }
        );
    }

    #[test]
    fn test_non_empty_errors_decode_to_error() {
        let body = json!({"data": null, "errors": [{"message": "not found"}]}).to_string();
        let result: GraphQLResult<Value> = serde_json::from_str(&body).unwrap();
        assert!(result.is_graphql_error());
        assert_eq!(result.errors().unwrap().len(), 1);
        assert_eq!(result.errors().unwrap()[0].message, "not found");
    }

    #[test]
    fn test_empty_error_list_is_success() {
        let body = json!({"data": {"ok": true}, "errors": []}).to_string();
        let result: GraphQLResult<Value> = serde_json::from_str(&body).unwrap();
        assert!(!result.is_graphql_error());
        assert!(result.errors().is_none());
    }

    #[test]
    fn test_null_data_with_no_errors_is_success_for_nullable_target() {
        let body = json!({"data": null}).to_string();
        let result: GraphQLResult<Option<User>> = serde_json::from_str(&body).unwrap();
        assert!(!result.is_graphql_error());
        assert_eq!(result.into_data().unwrap(), None);
    }

    #[test]
    fn test_null_data_fails_decoding_for_non_nullable_target() {
        let body = json!({"data": null}).to_string();
        let result: Result<GraphQLResult<User>, _> = serde_json::from_str(&body);
        assert!(result.is_err());
    }

    #[test]
    fn test_errors_win_over_data() {
        // A body carrying both still classifies as an error.
        let body = json!({"data": {"partial": true}, "errors": [{"message": "field failed"}]})
            .to_string();
        let result: GraphQLResult<Value> = serde_json::from_str(&body).unwrap();
        assert!(result.is_graphql_error());
    }

    #[test]
    fn test_into_data_returns_data_unchanged() {
        let data = json!({"deeply": {"nested": [1, 2, 3]}});
        let result = GraphQLResult::Success { data: data.clone() };
        assert_eq!(result.into_data().unwrap(), data);
    }

    #[test]
    fn test_into_data_preserves_error_order() {
        let result: GraphQLResult<Value> = GraphQLResult::Error {
            errors: vec![
                GraphQLResponseError::new("A"),
                GraphQLResponseError::new("B"),
            ],
        };
        let aggregate = result.into_data().unwrap_err();
        let messages: Vec<&str> = aggregate.errors().iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["A", "B"]);
    }

    #[test]
    fn test_error_record_decodes_structured_fields() {
        let body = json!({
            "errors": [{
                "message": "permission denied",
                "locations": [{"line": 2, "column": 5}],
                "path": ["user", 0, "email"],
                "extensions": {"code": "FORBIDDEN"}
            }]
        })
        .to_string();
        let result: GraphQLResult<Value> = serde_json::from_str(&body).unwrap();
        let errors = result.errors().unwrap();
        assert_eq!(errors[0].locations[0].line, 2);
        assert_eq!(
            errors[0].path,
            Some(vec![
                PathSegment::Field("user".to_string()),
                PathSegment::Index(0),
                PathSegment::Field("email".to_string()),
            ])
        );
        assert_eq!(errors[0].extensions, Some(json!({"code": "FORBIDDEN"})));
    }
}

//! GraphQL operation documents and name extraction.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

static OPERATION_RE: OnceLock<Regex> = OnceLock::new();

fn operation_re() -> &'static Regex {
    OPERATION_RE.get_or_init(|| {
        Regex::new(r"(?i)^(query|mutation)\s+(\w+)").expect("operation pattern is valid")
    })
}

/// Skips leading whitespace and `#` comment lines so the operation keyword,
/// if any, sits at the start of the returned slice.
fn leading_operation(text: &str) -> &str {
    let mut rest = text;
    loop {
        rest = rest.trim_start();
        match rest.strip_prefix('#') {
            Some(comment) => match comment.find('\n') {
                Some(end) => rest = &comment[end + 1..],
                None => return "",
            },
            None => return rest,
        }
    }
}

/// The kind of a named GraphQL operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperationKind {
    /// A read operation.
    Query,
    /// A write operation.
    Mutation,
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Query => write!(f, "query"),
            Self::Mutation => write!(f, "mutation"),
        }
    }
}

/// An immutable GraphQL operation document (query or mutation text).
///
/// Construct one with [`gql`] so call sites are self-documenting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperationDocument(String);

impl OperationDocument {
    /// Creates a document from raw operation text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Returns the raw operation text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Extracts the operation name from the leading text.
    ///
    /// Matches `(query|mutation) <Name>` case-insensitively after skipping
    /// leading whitespace and `#` comment lines. Returns `None` when the
    /// document does not start with a named operation; the request path then
    /// carries no name suffix.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphql_api::gql;
    ///
    /// assert_eq!(gql("query GetUser { user { id } }").operation_name(), Some("GetUser"));
    /// assert_eq!(gql("{ user { id } }").operation_name(), None);
    /// ```
    #[must_use]
    pub fn operation_name(&self) -> Option<&str> {
        operation_re()
            .captures(leading_operation(&self.0))
            .and_then(|captures| captures.get(2))
            .map(|m| m.as_str())
    }

    /// Returns the kind of the leading named operation, if any.
    #[must_use]
    pub fn kind(&self) -> Option<OperationKind> {
        operation_re()
            .captures(leading_operation(&self.0))
            .and_then(|captures| captures.get(1))
            .map(|keyword| {
                if keyword.as_str().eq_ignore_ascii_case("mutation") {
                    OperationKind::Mutation
                } else {
                    OperationKind::Query
                }
            })
    }
}

impl fmt::Display for OperationDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Constructs an [`OperationDocument`] from operation text.
///
/// An identity function over the text; it exists so GraphQL call sites are
/// recognizable at a glance.
///
/// # Example
///
/// ```rust
/// use graphql_api::gql;
///
/// let document = gql("mutation UpdateX($id: ID!) { updateX(id: $id) { id } }");
/// assert_eq!(document.operation_name(), Some("UpdateX"));
/// ```
pub fn gql(text: impl Into<String>) -> OperationDocument {
    OperationDocument::new(text)
}

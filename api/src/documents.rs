//! GraphQL document loading for outbound requests
//!
//! Query documents sent to remote services live as `.gql` resources under
//! `graphql-documents/` and are embedded at compile time. The enum keeps the
//! set of known documents closed and type-safe.

use serde::Serialize;
use serde_json::Value;

/// Available outbound GraphQL query documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphQlDocument {
    /// Query fetching a student record by id from the student service
    FindStudent,
}

impl GraphQlDocument {
    /// Source text of the document
    pub const fn source(self) -> &'static str {
        match self {
            GraphQlDocument::FindStudent => include_str!("../graphql-documents/findStudent.gql"),
        }
    }
}

/// Outbound request payload: query text plus a variables object
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphQlRequest {
    pub query: String,
    pub variables: Value,
}

/// Builds a request payload from a document and an optional variables object.
///
/// Absent variables are replaced by an empty object so the wire shape is
/// always `{query, variables}`.
pub fn build_request(document: GraphQlDocument, variables: Option<Value>) -> GraphQlRequest {
    GraphQlRequest {
        query: document.source().to_string(),
        variables: variables.unwrap_or_else(|| Value::Object(Default::default())),
    }
}

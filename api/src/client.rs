//! HTTP client for the remote student service
//!
//! Each student resolution is a single round trip: build the
//! `findStudent` request, POST it to the student service GraphQL endpoint
//! and deserialize the data-or-errors payload. No retries, no caching.

use serde::{Deserialize, Deserializer};
use serde_json::json;
use url::Url;

use crate::{
    documents::{build_request, GraphQlDocument},
    errors::ServiceError,
};

/// Student projection as returned by the student service.
///
/// Fields are carried exactly as received: course ids keep their order and
/// duplicates. A missing `courseIds` field deserializes to an empty list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    #[serde(deserialize_with = "id_from_number_or_string")]
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "ids_from_numbers_or_strings")]
    pub course_ids: Vec<i64>,
}

/// Top-level response shape of the remote GraphQL call
#[derive(Debug, Deserialize)]
pub struct StudentQueryResponse {
    #[serde(default)]
    pub data: Option<StudentData>,
    #[serde(default)]
    pub errors: Vec<RemoteGraphQlError>,
}

/// Wrapper matching the remote query's response structure
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentData {
    #[serde(default)]
    pub find_student: Option<StudentRecord>,
}

/// Error descriptor returned by the remote GraphQL API.
///
/// Deserialized for completeness but never consulted: absence of
/// `data.findStudent` is the sole not-found signal.
#[derive(Debug, Deserialize)]
pub struct RemoteGraphQlError {
    pub message: String,
    #[serde(default)]
    pub locations: Vec<RemoteErrorLocation>,
    #[serde(default)]
    pub path: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct RemoteErrorLocation {
    pub line: i32,
    pub column: i32,
}

/// GraphQL `ID` values arrive as strings, `Int` ids as numbers; the student
/// service is free to use either.
fn id_from_number_or_string<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.parse().map_err(serde::de::Error::custom),
    }
}

fn ids_from_numbers_or_strings<'de, D>(deserializer: D) -> Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(i64),
        Text(String),
    }

    Vec::<Raw>::deserialize(deserializer)?
        .into_iter()
        .map(|raw| match raw {
            Raw::Number(n) => Ok(n),
            Raw::Text(s) => s.parse().map_err(serde::de::Error::custom),
        })
        .collect()
}

/// Client issuing `findStudent` queries against the student service
#[derive(Debug, Clone)]
pub struct StudentServiceClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl StudentServiceClient {
    /// Create a client for the given student service GraphQL endpoint
    pub fn new(endpoint: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
        }
    }

    /// Fetch the authoritative student projection for `id`.
    ///
    /// Returns `StudentNotFound` when the response carries no
    /// `data.findStudent`, regardless of the remote `errors` list. Transport
    /// and deserialization failures propagate as generic failures.
    pub async fn fetch_student(&self, id: i64) -> Result<StudentRecord, ServiceError> {
        let request = build_request(GraphQlDocument::FindStudent, Some(json!({ "id": id })));

        let response: StudentQueryResponse = self
            .http
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        response
            .data
            .and_then(|data| data.find_student)
            .ok_or(ServiceError::StudentNotFound(id))
    }
}

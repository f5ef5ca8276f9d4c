//! GraphQL request/response framing.
//!
//! The node speaks plain GraphQL-over-POST: a JSON body with `query` and
//! `variables`, answered by `{data, errors}`. These frames carry untyped
//! `serde_json::Value` payloads; domain modules own the typed variables and
//! response shapes.

use serde::{Deserialize, Serialize};

use crate::error::HttpError;

/// A GraphQL POST body.
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest {
    pub query: String,
    pub variables: serde_json::Value,
}

impl GraphQlRequest {
    /// Frame a document with its serialized variables.
    pub fn new(
        query: impl Into<String>,
        variables: &impl Serialize,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            query: query.into(),
            variables: serde_json::to_value(variables)?,
        })
    }
}

/// Envelope of every GraphQL response.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse {
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQlError>>,
}

impl GraphQlResponse {
    /// Collapse the `{data, errors}` envelope into a single result.
    ///
    /// Non-empty `errors` wins over any partial `data`; the messages are
    /// carried verbatim, unclassified. Absent `data` collapses to JSON
    /// null.
    pub fn into_result(self) -> Result<serde_json::Value, HttpError> {
        if let Some(errors) = self.errors {
            if !errors.is_empty() {
                return Err(HttpError::Graphql {
                    messages: errors.into_iter().map(|e| e.message).collect(),
                });
            }
        }
        Ok(self.data.unwrap_or(serde_json::Value::Null))
    }
}

/// One error entry from a GraphQL response. Only the message is carried;
/// the SDK reports it verbatim without classification.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

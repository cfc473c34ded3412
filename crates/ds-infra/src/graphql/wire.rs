//! GraphQL-over-HTTP request and response bodies.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use ds_core::ports::QueryEnvelope;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GraphqlRequest<'a> {
    pub query: &'a str,
    pub operation_name: &'a str,
    pub variables: Value,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphqlResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphqlError {
    pub message: String,
}

impl GraphqlResponse {
    pub fn into_envelope(self) -> QueryEnvelope {
        QueryEnvelope {
            data: self.data,
            errors: self.errors.into_iter().map(|e| e.message).collect(),
        }
    }
}

use async_trait::async_trait;
use serde_json::Value;

use super::errors::QueryExecutorError;

/// A named GraphQL document.
///
/// Descriptors are static: variables are bound per execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryDescriptor {
    pub operation_name: &'static str,
    pub document: &'static str,
}

/// Raw `{data, errors}` pair returned by the backend.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryEnvelope {
    pub data: Option<Value>,
    /// Messages of the GraphQL `errors` array, in order
    pub errors: Vec<String>,
}

impl QueryEnvelope {
    pub fn with_data(data: Value) -> Self {
        Self {
            data: Some(data),
            errors: Vec::new(),
        }
    }

    pub fn with_errors(errors: Vec<String>) -> Self {
        Self { data: None, errors }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Executes GraphQL queries against the backend.
///
/// Implementations report GraphQL-level errors inside the envelope and only
/// fail for transport, status or decoding problems.
#[async_trait]
pub trait QueryExecutorPort: Send + Sync {
    async fn execute(
        &self,
        query: &QueryDescriptor,
        variables: Value,
    ) -> Result<QueryEnvelope, QueryExecutorError>;
}

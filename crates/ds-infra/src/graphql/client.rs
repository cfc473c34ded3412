use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use ds_core::ports::{QueryDescriptor, QueryEnvelope, QueryExecutorError, QueryExecutorPort};

use super::wire::{GraphqlRequest, GraphqlResponse};

/// [`QueryExecutorPort`] posting GraphQL documents to one HTTP endpoint.
pub struct GraphqlHttpExecutor {
    client: reqwest::Client,
    endpoint: String,
}

impl GraphqlHttpExecutor {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, QueryExecutorError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| QueryExecutorError::Transport(format!("failed to build HTTP client: {}", e)))?;
        Ok(Self::with_client(client, endpoint))
    }

    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl QueryExecutorPort for GraphqlHttpExecutor {
    async fn execute(
        &self,
        query: &QueryDescriptor,
        variables: Value,
    ) -> Result<QueryEnvelope, QueryExecutorError> {
        let body = GraphqlRequest {
            query: query.document,
            operation_name: query.operation_name,
            variables,
        };
        debug!(operation = query.operation_name, endpoint = %self.endpoint, "Sending GraphQL query");

        let response = self
            .client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await
            .map_err(map_reqwest_error)?;
        let status = response.status();
        let text = response.text().await.map_err(map_reqwest_error)?;

        if !status.is_success() {
            // 400 responses may still carry a GraphQL errors body
            if let Ok(decoded) = serde_json::from_str::<GraphqlResponse>(&text) {
                if !decoded.errors.is_empty() {
                    debug!(status = status.as_u16(), "GraphQL errors in non-success response");
                    return Ok(decoded.into_envelope());
                }
            }
            warn!(status = status.as_u16(), operation = query.operation_name, "GraphQL endpoint returned an error status");
            return Err(QueryExecutorError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let decoded: GraphqlResponse =
            serde_json::from_str(&text).map_err(|e| QueryExecutorError::Decode(e.to_string()))?;
        Ok(decoded.into_envelope())
    }
}

fn map_reqwest_error(error: reqwest::Error) -> QueryExecutorError {
    if error.is_timeout() {
        QueryExecutorError::Transport("request timed out".to_string())
    } else if let Some(status) = error.status() {
        QueryExecutorError::Status {
            status: status.as_u16(),
            body: String::new(),
        }
    } else {
        QueryExecutorError::Transport(error.to_string())
    }
}

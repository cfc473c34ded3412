//! Dependency injection
//!
//! The only place that depends on ds-infra and ds-app together. Assembly
//! only: configuration was resolved in `config.rs`.

use std::sync::Arc;

use ds_app::AppDeps;
use ds_infra::{GraphqlHttpExecutor, InMemoryDataCache};

use super::config::BackendSettings;

pub type WiringResult<T> = Result<T, WiringError>;

#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("GraphQL client initialization failed: {0}")]
    GraphqlClient(String),
}

/// Builds every adapter and groups them into [`AppDeps`].
pub fn wire_dependencies(backend: &BackendSettings) -> WiringResult<AppDeps> {
    let executor = GraphqlHttpExecutor::new(backend.graphql_url.clone(), backend.request_timeout)
        .map_err(|e| WiringError::GraphqlClient(e.to_string()))?;

    Ok(AppDeps {
        query_executor: Arc::new(executor),
        data_cache: Arc::new(InMemoryDataCache::new()),
    })
}

//! Use case for fetching the software list of one snapshot.

use std::sync::Arc;

use tracing::{debug, info, info_span, warn, Instrument};

use ds_core::ids::SnapshotId;
use ds_core::ports::{DataCachePort, QueryExecutorPort};
use ds_core::snapshot::SnapshotData;

use crate::queries::{decode_snapshot, snapshot_variables, FetchRejection, SNAPSHOT_INFOS};

/// Cache key of the last loaded snapshot.
pub const SNAPSHOT_CACHE_KEY: &str = "snapshot";

/// Runs the `snapshotInfos` query and maps the result.
///
/// Caching is left to the caller through [`LoadSnapshot::cache_snapshot`],
/// once the loaded snapshot is known to be the current one.
pub struct LoadSnapshot {
    executor: Arc<dyn QueryExecutorPort>,
    cache: Arc<dyn DataCachePort>,
}

impl LoadSnapshot {
    pub fn new(executor: Arc<dyn QueryExecutorPort>, cache: Arc<dyn DataCachePort>) -> Self {
        Self { executor, cache }
    }

    pub async fn execute(&self, snapshot_id: &SnapshotId) -> Result<SnapshotData, FetchRejection> {
        let span = info_span!("usecase.load_snapshot.execute", snapshot_id = %snapshot_id);

        async {
            info!("Fetching snapshot infos");

            let envelope = self
                .executor
                .execute(&SNAPSHOT_INFOS, snapshot_variables(snapshot_id))
                .await
                .map_err(|err| {
                    warn!(error = %err, "Snapshot query failed");
                    FetchRejection::new(err.to_string())
                })?;

            let snapshot = decode_snapshot(envelope)?;

            info!(softwares = snapshot.len(), "Snapshot loaded");
            Ok(snapshot)
        }
        .instrument(span)
        .await
    }

    /// Replaces the cached snapshot under [`SNAPSHOT_CACHE_KEY`].
    ///
    /// Cache failures are logged, never returned.
    pub fn cache_snapshot(&self, snapshot: &SnapshotData) {
        let serialized = match serde_json::to_string(snapshot) {
            Ok(serialized) => serialized,
            Err(err) => {
                warn!(error = %err, "Failed to serialize snapshot for the cache");
                return;
            }
        };

        if self.cache.contains(SNAPSHOT_CACHE_KEY) {
            if let Err(err) = self.cache.remove_element(SNAPSHOT_CACHE_KEY) {
                warn!(error = %err, "Failed to evict previous snapshot");
            }
        }
        match self.cache.add_element(SNAPSHOT_CACHE_KEY, serialized) {
            Ok(()) => debug!("Snapshot cached"),
            Err(err) => warn!(error = %err, "Failed to cache snapshot"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use ds_core::ports::{DataCacheError, QueryDescriptor, QueryEnvelope, QueryExecutorError};
    use mockall::mock;
    use mockall::predicate::eq;
    use serde_json::{json, Value};

    mock! {
        Executor {}

        #[async_trait]
        impl QueryExecutorPort for Executor {
            async fn execute(
                &self,
                query: &QueryDescriptor,
                variables: Value,
            ) -> Result<QueryEnvelope, QueryExecutorError>;
        }
    }

    mock! {
        Cache {}

        impl DataCachePort for Cache {
            fn add_element(&self, key: &str, value: String) -> Result<(), DataCacheError>;
            fn get_element(&self, key: &str) -> Result<String, DataCacheError>;
            fn remove_element(&self, key: &str) -> Result<String, DataCacheError>;
            fn contains(&self, key: &str) -> bool;
        }
    }

    fn vim_payload() -> QueryEnvelope {
        QueryEnvelope::with_data(json!({
            "snapshotInfos": {
                "versions": [{ "chosenVersion": "9.0", "name": "vim", "installType": "apt" }]
            }
        }))
    }

    #[tokio::test]
    async fn execute_leaves_the_cache_alone() {
        let mut executor = MockExecutor::new();
        executor
            .expect_execute()
            .withf(|query, vars| {
                query.operation_name == "getSnapshotInfos" && *vars == json!({ "snapshotID": "7" })
            })
            .times(1)
            .returning(|_, _| Ok(vim_payload()));

        let mut cache = MockCache::new();
        cache.expect_contains().never();
        cache.expect_add_element().never();

        let uc = LoadSnapshot::new(Arc::new(executor), Arc::new(cache));
        let snapshot = uc.execute(&SnapshotId::new("7")).await.unwrap();

        assert_eq!(snapshot.len(), 1);
    }

    #[tokio::test]
    async fn cached_snapshot_replaces_previous_one() {
        let mut executor = MockExecutor::new();
        executor.expect_execute().returning(|_, _| Ok(vim_payload()));

        let mut cache = MockCache::new();
        cache
            .expect_contains()
            .with(eq(SNAPSHOT_CACHE_KEY))
            .return_const(true);
        cache
            .expect_remove_element()
            .with(eq(SNAPSHOT_CACHE_KEY))
            .times(1)
            .returning(|_| Ok("{}".to_string()));
        cache
            .expect_add_element()
            .withf(|key, value| key == SNAPSHOT_CACHE_KEY && value.contains("\"chosenVersion\":\"9.0\""))
            .times(1)
            .returning(|_, _| Ok(()));

        let uc = LoadSnapshot::new(Arc::new(executor), Arc::new(cache));
        let snapshot = uc.execute(&SnapshotId::new("7")).await.unwrap();
        uc.cache_snapshot(&snapshot);
    }

    #[tokio::test]
    async fn rejected_snapshot_is_an_error() {
        let mut executor = MockExecutor::new();
        executor
            .expect_execute()
            .returning(|_, _| Ok(QueryEnvelope::with_errors(vec!["missing".into()])));

        let mut cache = MockCache::new();
        cache.expect_add_element().never();

        let uc = LoadSnapshot::new(Arc::new(executor), Arc::new(cache));
        let err = uc.execute(&SnapshotId::new("7")).await.unwrap_err();

        assert_eq!(err.to_string(), "The snapshot you try to seek doesn't exist!");
    }

    #[test]
    fn cache_failure_is_swallowed() {
        let executor = MockExecutor::new();

        let mut cache = MockCache::new();
        cache.expect_contains().return_const(false);
        cache
            .expect_add_element()
            .times(1)
            .returning(|key, _| Err(DataCacheError::AlreadyAdded(key.to_string())));

        let uc = LoadSnapshot::new(Arc::new(executor), Arc::new(cache));
        uc.cache_snapshot(&SnapshotData::new("Debian 12"));
    }
}

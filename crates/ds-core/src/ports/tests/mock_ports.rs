//! Mock implementations of the ports for testing.

use async_trait::async_trait;
use mockall::mock;
use mockall::predicate::eq;
use serde_json::{json, Value};

use crate::ports::{
    DataCacheError, DataCachePort, QueryDescriptor, QueryEnvelope, QueryExecutorError,
    QueryExecutorPort,
};

mock! {
    pub Executor {}

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
    pub Cache {}

    impl DataCachePort for Cache {
        fn add_element(&self, key: &str, value: String) -> Result<(), DataCacheError>;
        fn get_element(&self, key: &str) -> Result<String, DataCacheError>;
        fn remove_element(&self, key: &str) -> Result<String, DataCacheError>;
        fn contains(&self, key: &str) -> bool;
    }
}

const PING: QueryDescriptor = QueryDescriptor {
    operation_name: "Ping",
    document: "query Ping { ping }",
};

#[tokio::test]
async fn executor_port_is_object_safe() {
    let mut executor = MockExecutor::new();
    executor
        .expect_execute()
        .withf(|query, _| query.operation_name == "Ping")
        .returning(|_, _| Ok(QueryEnvelope::with_data(json!({ "ping": true }))));

    let port: Box<dyn QueryExecutorPort> = Box::new(executor);
    let envelope = port.execute(&PING, json!({})).await.unwrap();
    assert_eq!(envelope.data, Some(json!({ "ping": true })));
    assert!(!envelope.has_errors());
}

#[tokio::test]
async fn executor_errors_pass_through() {
    let mut executor = MockExecutor::new();
    executor
        .expect_execute()
        .returning(|_, _| Err(QueryExecutorError::Transport("connection refused".into())));

    let err = executor.execute(&PING, Value::Null).await.unwrap_err();
    assert_eq!(err.to_string(), "transport error: connection refused");
}

#[test]
fn cache_port_is_object_safe() {
    let mut cache = MockCache::new();
    cache
        .expect_add_element()
        .with(eq("snapshot"), eq("{}".to_string()))
        .times(1)
        .returning(|_, _| Ok(()));
    cache
        .expect_get_element()
        .returning(|key| Err(DataCacheError::NotFound(key.to_string())));

    let port: &dyn DataCachePort = &cache;
    port.add_element("snapshot", "{}".to_string()).unwrap();
    assert_eq!(
        port.get_element("device").unwrap_err(),
        DataCacheError::NotFound("device".into())
    );
}

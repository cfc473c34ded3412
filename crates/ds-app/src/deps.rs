//! Dependency grouping for [`AppStore`](crate::AppStore) construction.
//!
//! Just parameter grouping: no defaults, no build steps.

use std::sync::Arc;

use ds_core::ports::{DataCachePort, QueryExecutorPort};

/// All dependencies are required.
#[derive(Clone)]
pub struct AppDeps {
    pub query_executor: Arc<dyn QueryExecutorPort>,
    pub data_cache: Arc<dyn DataCachePort>,
}

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use ds_core::ports::{DataCacheError, DataCachePort};

/// Session-lifetime [`DataCachePort`] backed by a map.
#[derive(Debug, Default)]
pub struct InMemoryDataCache {
    entries: Mutex<HashMap<String, String>>,
}

impl InMemoryDataCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DataCachePort for InMemoryDataCache {
    fn add_element(&self, key: &str, value: String) -> Result<(), DataCacheError> {
        let mut entries = self.entries();
        if entries.contains_key(key) {
            return Err(DataCacheError::AlreadyAdded(key.to_string()));
        }
        debug!(key, bytes = value.len(), "Caching element");
        entries.insert(key.to_string(), value);
        Ok(())
    }

    fn get_element(&self, key: &str) -> Result<String, DataCacheError> {
        self.entries()
            .get(key)
            .cloned()
            .ok_or_else(|| DataCacheError::NotFound(key.to_string()))
    }

    fn remove_element(&self, key: &str) -> Result<String, DataCacheError> {
        self.entries()
            .remove(key)
            .ok_or_else(|| DataCacheError::NotFound(key.to_string()))
    }

    fn contains(&self, key: &str) -> bool {
        self.entries().contains_key(key)
    }
}

//! Use case for the software-origin series of the cached snapshot.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info_span};

use ds_core::ports::{DataCacheError, DataCachePort};
use ds_core::snapshot::{software_origins, SnapshotData, SoftwareOrigin};

use super::load_snapshot::SNAPSHOT_CACHE_KEY;

pub struct GetSoftwareOrigins {
    cache: Arc<dyn DataCachePort>,
}

impl GetSoftwareOrigins {
    pub fn new(cache: Arc<dyn DataCachePort>) -> Self {
        Self { cache }
    }

    /// Series of the last loaded snapshot; empty when none is cached.
    pub fn execute(&self) -> Result<Vec<SoftwareOrigin>> {
        let _span = info_span!("usecase.get_software_origins.execute").entered();

        let raw = match self.cache.get_element(SNAPSHOT_CACHE_KEY) {
            Ok(raw) => raw,
            Err(DataCacheError::NotFound(_)) => {
                debug!("No snapshot cached yet");
                return Ok(Vec::new());
            }
            Err(err) => return Err(err).context("Failed to read cached snapshot"),
        };
        let snapshot: SnapshotData =
            serde_json::from_str(&raw).context("Cached snapshot is not valid JSON")?;

        Ok(software_origins(snapshot.softwares()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MapCache(Mutex<HashMap<String, String>>);

    impl DataCachePort for MapCache {
        fn add_element(&self, key: &str, value: String) -> Result<(), DataCacheError> {
            self.0.lock().unwrap().insert(key.to_string(), value);
            Ok(())
        }

        fn get_element(&self, key: &str) -> Result<String, DataCacheError> {
            self.0
                .lock()
                .unwrap()
                .get(key)
                .cloned()
                .ok_or_else(|| DataCacheError::NotFound(key.to_string()))
        }

        fn remove_element(&self, key: &str) -> Result<String, DataCacheError> {
            self.0
                .lock()
                .unwrap()
                .remove(key)
                .ok_or_else(|| DataCacheError::NotFound(key.to_string()))
        }

        fn contains(&self, key: &str) -> bool {
            self.0.lock().unwrap().contains_key(key)
        }
    }

    #[test]
    fn empty_cache_gives_empty_series() {
        let uc = GetSoftwareOrigins::new(Arc::new(MapCache::default()));
        assert!(uc.execute().unwrap().is_empty());
    }

    #[test]
    fn series_from_cached_snapshot() {
        let mut snapshot = SnapshotData::new("Fedora");
        snapshot.add_software("1", "a", "rpm").unwrap();
        snapshot.add_software("1", "b", "rpm").unwrap();
        snapshot.add_software("1", "c", "flatpak").unwrap();
        let cache = Arc::new(MapCache::default());
        cache
            .add_element(SNAPSHOT_CACHE_KEY, serde_json::to_string(&snapshot).unwrap())
            .unwrap();

        let series = GetSoftwareOrigins::new(cache).execute().unwrap();

        assert_eq!(series.len(), 2);
        assert_eq!(series[0].label, "flatpak");
        assert_eq!(series[1].label, "rpm");
        assert_eq!(series[1].value, 2);
    }

    #[test]
    fn corrupt_cache_entry_is_an_error() {
        let cache = Arc::new(MapCache::default());
        cache
            .add_element(SNAPSHOT_CACHE_KEY, "not json".to_string())
            .unwrap();

        assert!(GetSoftwareOrigins::new(cache).execute().is_err());
    }
}

use super::errors::DataCacheError;

/// Key-value store for data loaded from the backend.
///
/// Values are kept serialized so one cache can hold any resource type.
pub trait DataCachePort: Send + Sync {
    /// Fails with `AlreadyAdded` if `key` is present; the stored value is kept.
    fn add_element(&self, key: &str, value: String) -> Result<(), DataCacheError>;

    fn get_element(&self, key: &str) -> Result<String, DataCacheError>;

    fn remove_element(&self, key: &str) -> Result<String, DataCacheError>;

    fn contains(&self, key: &str) -> bool;
}

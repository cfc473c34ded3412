use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryExecutorError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("malformed response: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataCacheError {
    #[error("Element {0} is already in the cache, the operation is ignored!")]
    AlreadyAdded(String),

    #[error("Element {0} not found in the cache!")]
    NotFound(String),
}

//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases and the infrastructure
//! implementations, keeping the core independent of the GraphQL transport and
//! of where loaded data is cached.

pub mod data_cache;
pub mod errors;
pub mod query_executor;

pub use data_cache::DataCachePort;
pub use errors::{DataCacheError, QueryExecutorError};
pub use query_executor::{QueryDescriptor, QueryEnvelope, QueryExecutorPort};

#[cfg(test)]
mod tests;

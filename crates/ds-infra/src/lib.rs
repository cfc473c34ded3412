//! Infrastructure adapters for devsnap: the GraphQL-over-HTTP query executor
//! and the in-memory data cache.

pub mod cache;
pub mod graphql;

pub use cache::InMemoryDataCache;
pub use graphql::GraphqlHttpExecutor;

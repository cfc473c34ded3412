//! devsnap application layer
//!
//! This crate contains the use cases and the application state container.

pub mod deps;
pub mod queries;
pub mod store;
pub mod usecases;

pub use deps::AppDeps;
pub use store::{AppState, AppStore, FilterOutcome};

//! Request lifecycle of one asynchronously loaded resource.

pub mod state;

pub use state::{Completion, LoadSignal, LoadState, LoadStatus, LoadTicket};

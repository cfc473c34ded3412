//! Application state container.
//!
//! One [`AppStore`] is built per session from [`AppDeps`](crate::AppDeps); it
//! owns the device and snapshot load lifecycles and the filter slice.

mod app_store;
mod filter_slice;
mod state;

pub use app_store::AppStore;
pub use filter_slice::{FilterOutcome, FilterSlice};
pub use state::AppState;

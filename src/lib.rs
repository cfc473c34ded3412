//! devsnap bootstrap: configuration, tracing and dependency wiring around the
//! `ds-*` crates.

pub mod bootstrap;

pub use bootstrap::{init_tracing_subscriber, load_config, run_app};

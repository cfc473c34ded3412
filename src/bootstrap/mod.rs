pub mod config;
pub mod run;
pub mod tracing;
pub mod wiring;

pub use config::{load_config, resolve_backend, resolve_config_path, BackendSettings};
pub use run::{open_session, run_app};
pub use self::tracing::init_tracing_subscriber;
pub use wiring::wire_dependencies;

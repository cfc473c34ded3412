//! Snapshot domain models and the software filtering engine.

pub mod data;
pub mod engine;
pub mod origins;
pub mod software;

pub use data::{SnapshotData, SnapshotError};
pub use engine::{apply_filter_on, FieldValue};
pub use origins::{software_origins, SoftwareOrigin, OTHER_LABEL};
pub use software::SnapshotSoftware;

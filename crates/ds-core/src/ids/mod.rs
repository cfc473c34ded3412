//! ID type wrappers for type safety.

mod id_macro;

pub mod device_id;
pub mod snapshot_id;

pub use device_id::DeviceId;
pub use snapshot_id::SnapshotId;

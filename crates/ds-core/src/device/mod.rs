//! Device domain models.

pub mod device;
pub mod memory;
pub mod snapshot_header;

pub use device::Device;
pub use memory::format_bytes;
pub use snapshot_header::SnapshotHeader;

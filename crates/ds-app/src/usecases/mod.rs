pub mod filtered_softwares;
pub mod load_device;
pub mod load_snapshot;
pub mod software_origins;

pub use filtered_softwares::GetFilteredSoftwares;
pub use load_device::LoadDevice;
pub use load_snapshot::{LoadSnapshot, SNAPSHOT_CACHE_KEY};
pub use software_origins::GetSoftwareOrigins;

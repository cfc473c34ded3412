use ds_core::device::Device;
use ds_core::load::LoadState;
use ds_core::snapshot::SnapshotData;

use super::filter_slice::FilterSlice;

/// Everything the presentation layer renders for one device page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub device: LoadState<Device>,
    pub snapshot: LoadState<SnapshotData>,
    pub filters: FilterSlice,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

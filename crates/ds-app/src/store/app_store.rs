use std::sync::Arc;

use anyhow::Result;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use ds_core::device::Device;
use ds_core::filter::FilterError;
use ds_core::ids::{DeviceId, SnapshotId};
use ds_core::load::{Completion, LoadSignal, LoadStatus};
use ds_core::ports::DataCachePort;
use ds_core::snapshot::{SnapshotData, SnapshotSoftware, SoftwareOrigin};

use super::filter_slice::FilterOutcome;
use super::state::AppState;
use crate::deps::AppDeps;
use crate::usecases::{
    GetFilteredSoftwares, GetSoftwareOrigins, LoadDevice, LoadSnapshot, SNAPSHOT_CACHE_KEY,
};

/// Session-scoped state container.
///
/// The state lock is never held across a query: a load takes a ticket,
/// releases the lock while the query runs and commits under the lock again.
/// Device and snapshot loads can therefore overlap, and a reload supersedes
/// the request still in flight for the same resource. The cached snapshot
/// is only written by the load that commits.
pub struct AppStore {
    state: Mutex<AppState>,
    cache: Arc<dyn DataCachePort>,
    load_device: LoadDevice,
    load_snapshot: LoadSnapshot,
    filtered_softwares: GetFilteredSoftwares,
    software_origins: GetSoftwareOrigins,
}

impl AppStore {
    pub fn new(deps: AppDeps) -> Self {
        Self {
            state: Mutex::new(AppState::new()),
            load_device: LoadDevice::new(deps.query_executor.clone()),
            load_snapshot: LoadSnapshot::new(deps.query_executor.clone(), deps.data_cache.clone()),
            filtered_softwares: GetFilteredSoftwares::new(),
            software_origins: GetSoftwareOrigins::new(deps.data_cache.clone()),
            cache: deps.data_cache,
        }
    }

    /// Copy of the current state.
    pub async fn state(&self) -> AppState {
        self.state.lock().await.clone()
    }

    pub async fn load_device(&self, device_id: &DeviceId) -> Completion {
        let ticket = self.state.lock().await.device.begin();
        let outcome = self
            .load_device
            .execute(device_id)
            .await
            .map_err(|rejection| rejection.into_message());

        let completion = self.state.lock().await.device.complete(ticket, outcome);
        debug!(device_id = %device_id, ?completion, "Device load settled");
        completion
    }

    pub async fn load_snapshot(&self, snapshot_id: &SnapshotId) -> Completion {
        let ticket = self.state.lock().await.snapshot.begin();
        let outcome = self
            .load_snapshot
            .execute(snapshot_id)
            .await
            .map_err(|rejection| rejection.into_message());

        let mut state = self.state.lock().await;
        let completion = state.snapshot.complete(ticket, outcome);
        if completion == Completion::Committed(LoadStatus::Success) {
            if let Some(snapshot) = state.snapshot.resource() {
                self.load_snapshot.cache_snapshot(snapshot);
            }
        }
        debug!(snapshot_id = %snapshot_id, ?completion, "Snapshot load settled");
        completion
    }

    /// Loads the device and one of its snapshots concurrently.
    pub async fn open(&self, device_id: &DeviceId, snapshot_id: &SnapshotId) -> (Completion, Completion) {
        info!(device_id = %device_id, snapshot_id = %snapshot_id, "Opening device page");
        tokio::join!(self.load_device(device_id), self.load_snapshot(snapshot_id))
    }

    /// Feeds a lifecycle signal from an external query runner.
    pub async fn dispatch_device(&self, signal: LoadSignal<Device>) -> bool {
        self.state.lock().await.device.handle(signal)
    }

    pub async fn dispatch_snapshot(&self, signal: LoadSignal<SnapshotData>) -> bool {
        let mut state = self.state.lock().await;
        let fulfilled = matches!(signal, LoadSignal::Fulfilled(_));
        let changed = state.snapshot.handle(signal);
        if changed && fulfilled {
            if let Some(snapshot) = state.snapshot.resource() {
                self.load_snapshot.cache_snapshot(snapshot);
            }
        }
        changed
    }

    pub async fn add_filter(
        &self,
        element_type: &str,
        field_name: &str,
        op_type: &str,
        value: &str,
    ) -> Result<FilterOutcome, FilterError> {
        self.state
            .lock()
            .await
            .filters
            .add(element_type, field_name, op_type, value)
    }

    pub async fn remove_filters(&self, ids: &[usize]) -> Result<FilterOutcome, FilterError> {
        self.state.lock().await.filters.remove_filters(ids)
    }

    pub async fn update_selected_filters(&self, ids: &[usize]) {
        self.state.lock().await.filters.update_selected_filters(ids);
    }

    pub async fn clear_filter_error(&self) {
        self.state.lock().await.filters.clear_error();
    }

    /// Software of the loaded snapshot kept by the active library filters.
    ///
    /// Empty while no snapshot is loaded.
    pub async fn filtered_softwares(&self) -> Result<Vec<SnapshotSoftware>> {
        let state = self.state.lock().await;
        match state.snapshot.resource() {
            Some(snapshot) => self
                .filtered_softwares
                .execute(snapshot, state.filters.manager()),
            None => Ok(Vec::new()),
        }
    }

    pub fn software_origins(&self) -> Result<Vec<SoftwareOrigin>> {
        self.software_origins.execute()
    }

    /// Ends the session: state back to initial, cached snapshot evicted.
    ///
    /// Loads still in flight will not commit.
    pub async fn reset_session(&self) {
        let mut state = self.state.lock().await;
        state.device.reset();
        state.snapshot.reset();
        state.filters = Default::default();
        if self.cache.contains(SNAPSHOT_CACHE_KEY) {
            if let Err(err) = self.cache.remove_element(SNAPSHOT_CACHE_KEY) {
                warn!(error = %err, "Failed to evict cached snapshot");
            }
        }
        info!("Session reset");
    }
}

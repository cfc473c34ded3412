use anyhow::Context;
use tracing::{info, warn};

use ds_app::{AppState, AppStore};
use ds_core::config::AppConfig;
use ds_core::ids::{DeviceId, SnapshotId};

use super::config::{resolve_backend, GRAPHQL_URL_ENV};
use super::wiring::wire_dependencies;

/// Loads the configured device and snapshot into `store`.
///
/// An empty id skips that resource. Device and snapshot are fetched
/// concurrently when both are set.
pub async fn open_session(store: &AppStore, config: &AppConfig) -> AppState {
    let device_id = Some(DeviceId::new(config.device_id.trim())).filter(|id| !id.as_str().is_empty());
    let snapshot_id = Some(SnapshotId::new(config.snapshot_id.trim())).filter(|id| !id.is_empty());

    match (&device_id, &snapshot_id) {
        (Some(device_id), Some(snapshot_id)) => {
            store.open(device_id, snapshot_id).await;
        }
        (Some(device_id), None) => {
            store.load_device(device_id).await;
        }
        (None, Some(snapshot_id)) => {
            store.load_snapshot(snapshot_id).await;
        }
        (None, None) => warn!("No device or snapshot configured, nothing to load"),
    }

    store.state().await
}

/// Headless entry point: wires the store, opens the configured session and
/// logs what was loaded.
pub async fn run_app(config: AppConfig) -> anyhow::Result<()> {
    let backend = resolve_backend(&config, std::env::var(GRAPHQL_URL_ENV).ok());
    info!(endpoint = %backend.graphql_url, "Starting devsnap");

    let deps = wire_dependencies(&backend).context("Failed to wire dependencies")?;
    let store = AppStore::new(deps);

    let state = open_session(&store, &config).await;
    report(&store, &state).await?;

    store.reset_session().await;
    Ok(())
}

async fn report(store: &AppStore, state: &AppState) -> anyhow::Result<()> {
    match state.device.resource() {
        Some(device) => info!(
            name = %device.name,
            processor = %device.processor,
            cores = device.cores,
            memory = %device.formatted_memory(),
            snapshots = device.snapshots.len(),
            "Device loaded"
        ),
        None if !state.device.error().is_empty() => {
            warn!(reason = %state.device.error().message, "Device not loaded")
        }
        None => {}
    }

    match state.snapshot.resource() {
        Some(snapshot) => {
            let softwares = store.filtered_softwares().await?;
            info!(softwares = softwares.len(), "Snapshot loaded");
            for origin in store.software_origins()? {
                info!(install_type = %origin.label, count = origin.value, "Software origin");
            }
            if snapshot.is_empty() {
                warn!("Snapshot has no software");
            }
        }
        None if !state.snapshot.error().is_empty() => {
            warn!(reason = %state.snapshot.error().message, "Snapshot not loaded")
        }
        None => {}
    }
    Ok(())
}

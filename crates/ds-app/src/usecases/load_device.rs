//! Use case for fetching a device's hardware profile.

use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};

use ds_core::device::Device;
use ds_core::ids::DeviceId;
use ds_core::ports::QueryExecutorPort;

use crate::queries::{decode_device, device_variables, FetchRejection, DEVICE_INFOS};

/// Runs the `deviceInfos` query and maps the result.
///
/// The outcome is either the device or the message the load lifecycle
/// records on rejection.
pub struct LoadDevice {
    executor: Arc<dyn QueryExecutorPort>,
}

impl LoadDevice {
    pub fn new(executor: Arc<dyn QueryExecutorPort>) -> Self {
        Self { executor }
    }

    pub async fn execute(&self, device_id: &DeviceId) -> Result<Device, FetchRejection> {
        let span = info_span!("usecase.load_device.execute", device_id = %device_id);

        async {
            info!("Fetching device infos");

            let envelope = self
                .executor
                .execute(&DEVICE_INFOS, device_variables(device_id))
                .await
                .map_err(|err| {
                    warn!(error = %err, "Device query failed");
                    FetchRejection::new(err.to_string())
                })?;

            let device = decode_device(envelope)?;
            info!(snapshots = device.snapshots.len(), "Device infos loaded");
            Ok(device)
        }
        .instrument(span)
        .await
    }
}

use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use ds_core::device::{Device, SnapshotHeader};
use ds_core::ids::DeviceId;
use ds_core::ports::{QueryDescriptor, QueryEnvelope};

use super::FetchRejection;

pub const DEVICE_NOT_FOUND: &str = "The device wasn't found!";

pub const DEVICE_INFOS: QueryDescriptor = QueryDescriptor {
    operation_name: "getDeviceInfos",
    document: r#"query getDeviceInfos($deviceID: String!) {
  deviceInfos(deviceId: $deviceID) {
    name
    processor
    cores
    memory
    snapshots {
      key: snapshotId
      date: snapshotDate
      operatingSystem
    }
  }
}"#,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeviceInfosData {
    device_infos: Option<DeviceInfosDto>,
}

#[derive(Debug, Deserialize)]
struct DeviceInfosDto {
    name: String,
    processor: String,
    cores: i64,
    memory: i64,
    #[serde(default)]
    snapshots: Vec<SnapshotKeyDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotKeyDto {
    key: String,
    date: String,
    #[serde(default)]
    operating_system: Option<String>,
}

pub fn device_variables(device_id: &DeviceId) -> Value {
    json!({ "deviceID": device_id.as_str() })
}

/// Maps a `deviceInfos` envelope to a [`Device`].
///
/// GraphQL errors, a null device and any malformed field all reject with
/// [`DEVICE_NOT_FOUND`].
pub fn decode_device(envelope: QueryEnvelope) -> Result<Device, FetchRejection> {
    if envelope.has_errors() {
        debug!(errors = ?envelope.errors, "deviceInfos returned errors");
        return Err(FetchRejection::new(DEVICE_NOT_FOUND));
    }
    let data = envelope
        .data
        .ok_or_else(|| FetchRejection::new(DEVICE_NOT_FOUND))?;
    let dto = serde_json::from_value::<DeviceInfosData>(data)
        .map_err(|err| {
            debug!(error = %err, "malformed deviceInfos payload");
            FetchRejection::new(DEVICE_NOT_FOUND)
        })?
        .device_infos
        .ok_or_else(|| FetchRejection::new(DEVICE_NOT_FOUND))?;

    let snapshots = dto
        .snapshots
        .into_iter()
        .map(|raw| {
            SnapshotHeader::parse(raw.key, &raw.date, raw.operating_system.unwrap_or_default())
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| {
            debug!(error = %err, "unparsable snapshot date");
            FetchRejection::new(DEVICE_NOT_FOUND)
        })?;

    Ok(Device::new(dto.name, dto.processor, dto.cores, dto.memory, snapshots))
}

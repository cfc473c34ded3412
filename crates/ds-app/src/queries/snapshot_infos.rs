use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, warn};

use ds_core::ids::SnapshotId;
use ds_core::ports::{QueryDescriptor, QueryEnvelope};
use ds_core::snapshot::SnapshotData;

use super::FetchRejection;

pub const SNAPSHOT_NOT_FOUND: &str = "The snapshot you try to seek doesn't exist!";
pub const SNAPSHOT_MALFORMED: &str = "Selected snapshot doesn't exist!";

pub const SNAPSHOT_INFOS: QueryDescriptor = QueryDescriptor {
    operation_name: "getSnapshotInfos",
    document: r#"query getSnapshotInfos($snapshotID: String!) {
  snapshotInfos(snapshotId: $snapshotID) {
    operatingSystem
    versions {
      chosenVersion: softwareVersion
      name
      installType: softwareInstallType
    }
  }
}"#,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotInfosData {
    snapshot_infos: Option<SnapshotInfosDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotInfosDto {
    #[serde(default)]
    operating_system: Option<String>,
    versions: Vec<VersionDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VersionDto {
    chosen_version: String,
    name: String,
    install_type: String,
}

pub fn snapshot_variables(snapshot_id: &SnapshotId) -> Value {
    json!({ "snapshotID": snapshot_id.as_str() })
}

/// Maps a `snapshotInfos` envelope to [`SnapshotData`].
///
/// Duplicate entries in the payload are skipped.
pub fn decode_snapshot(envelope: QueryEnvelope) -> Result<SnapshotData, FetchRejection> {
    if envelope.has_errors() {
        debug!(errors = ?envelope.errors, "snapshotInfos returned errors");
        return Err(FetchRejection::new(SNAPSHOT_NOT_FOUND));
    }
    let dto = envelope
        .data
        .and_then(|data| match serde_json::from_value::<SnapshotInfosData>(data) {
            Ok(decoded) => decoded.snapshot_infos,
            Err(err) => {
                debug!(error = %err, "malformed snapshotInfos payload");
                None
            }
        })
        .ok_or_else(|| FetchRejection::new(SNAPSHOT_MALFORMED))?;

    let mut snapshot = SnapshotData::new(dto.operating_system.unwrap_or_default());
    for version in dto.versions {
        if let Err(err) = snapshot.add_software(version.chosen_version, version.name, version.install_type)
        {
            warn!(error = %err, "skipping duplicate software entry");
        }
    }
    Ok(snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ds_core::snapshot::SnapshotSoftware;

    #[test]
    fn variables_use_snapshot_id_key() {
        let vars = snapshot_variables(&SnapshotId::new("7"));
        assert_eq!(vars, json!({ "snapshotID": "7" }));
    }

    #[test]
    fn decodes_versions_in_order() {
        let data = json!({
            "snapshotInfos": {
                "versions": [
                    { "chosenVersion": "9.0", "name": "vim", "installType": "apt" },
                    { "chosenVersion": "3.2", "name": "htop", "installType": "snap" }
                ]
            }
        });
        let snapshot = decode_snapshot(QueryEnvelope::with_data(data)).unwrap();
        assert_eq!(
            snapshot.softwares(),
            &[
                SnapshotSoftware::new("vim", "9.0", "apt"),
                SnapshotSoftware::new("htop", "3.2", "snap"),
            ]
        );
        assert_eq!(snapshot.operating_system, "");
    }

    #[test]
    fn document_requests_operating_system() {
        assert!(SNAPSHOT_INFOS.document.contains("operatingSystem"));

        let data = json!({
            "snapshotInfos": {
                "operatingSystem": "Debian 12",
                "versions": [{ "chosenVersion": "9.0", "name": "vim", "installType": "apt" }]
            }
        });
        let snapshot = decode_snapshot(QueryEnvelope::with_data(data)).unwrap();
        assert_eq!(snapshot.operating_system, "Debian 12");
    }

    #[test]
    fn duplicate_versions_are_skipped() {
        let entry = json!({ "chosenVersion": "1.0", "name": "curl", "installType": "apt" });
        let data = json!({ "snapshotInfos": { "versions": [entry.clone(), entry] } });
        let snapshot = decode_snapshot(QueryEnvelope::with_data(data)).unwrap();
        assert_eq!(snapshot.len(), 1);
    }

    #[test]
    fn graphql_errors_reject_as_not_found() {
        let err = decode_snapshot(QueryEnvelope::with_errors(vec!["boom".into()])).unwrap_err();
        assert_eq!(err.to_string(), SNAPSHOT_NOT_FOUND);
    }

    #[test]
    fn malformed_payload_rejects() {
        for data in [
            json!({ "snapshotInfos": null }),
            json!({ "snapshotInfos": { "versions": "nope" } }),
        ] {
            let err = decode_snapshot(QueryEnvelope::with_data(data)).unwrap_err();
            assert_eq!(err.to_string(), SNAPSHOT_MALFORMED);
        }
        let err = decode_snapshot(QueryEnvelope::default()).unwrap_err();
        assert_eq!(err.to_string(), SNAPSHOT_MALFORMED);
    }
}

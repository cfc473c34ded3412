use serde::{Deserialize, Serialize};

/// One installed package of a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotSoftware {
    pub name: String,
    /// Version chosen on the device
    #[serde(rename = "chosenVersion")]
    pub version: String,
    /// Package source (e.g. `apt`, `snap`)
    pub install_type: String,
}

impl SnapshotSoftware {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        install_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            install_type: install_type.into(),
        }
    }
}

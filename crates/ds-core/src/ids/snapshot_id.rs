use serde::{Deserialize, Serialize};

use super::id_macro::impl_id;

/// Backend identifier of a device snapshot (the snapshot header `key`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnapshotId(String);

impl_id!(SnapshotId);

impl SnapshotId {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

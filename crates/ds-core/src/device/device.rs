use serde::{Deserialize, Serialize};

use super::memory::format_bytes;
use super::snapshot_header::SnapshotHeader;

/// Hardware profile of a device and the headers of its snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub name: String,
    pub processor: String,
    pub cores: i64,
    /// Volatile memory in bytes
    pub memory: i64,
    pub snapshots: Vec<SnapshotHeader>,
}

impl Device {
    pub fn new(
        name: impl Into<String>,
        processor: impl Into<String>,
        cores: i64,
        memory: i64,
        snapshots: Vec<SnapshotHeader>,
    ) -> Self {
        Self {
            name: name.into(),
            processor: processor.into(),
            cores,
            memory,
            snapshots,
        }
    }

    pub fn formatted_memory(&self) -> String {
        format_bytes(self.memory)
    }

    /// True for the placeholder device shown before anything is loaded.
    pub fn is_undefined(&self) -> bool {
        self.name.is_empty()
            && self.processor.is_empty()
            && self.cores <= 0
            && self.memory <= 0
            && self.snapshots.len() == 1
            && self.snapshots[0].is_undefined()
    }
}

impl Default for Device {
    fn default() -> Self {
        Self::new("", "", -1, -1, vec![SnapshotHeader::default()])
    }
}

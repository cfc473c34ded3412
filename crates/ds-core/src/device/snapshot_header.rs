use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ids::SnapshotId;

/// Date carried by the placeholder header.
fn placeholder_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default()
}

/// Header of one snapshot uploaded by a device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotHeader {
    pub id: SnapshotId,
    pub upload_date: NaiveDate,
    pub operating_system: String,
}

impl SnapshotHeader {
    pub fn new(id: SnapshotId, upload_date: NaiveDate, operating_system: impl Into<String>) -> Self {
        Self {
            id,
            upload_date,
            operating_system: operating_system.into(),
        }
    }

    /// Builds a header from its wire form; `upload_date` must be `YYYY-MM-DD`.
    pub fn parse(
        id: impl Into<String>,
        upload_date: &str,
        operating_system: impl Into<String>,
    ) -> Result<Self, chrono::ParseError> {
        let upload_date = NaiveDate::parse_from_str(upload_date, "%Y-%m-%d")?;
        Ok(Self::new(SnapshotId::new(id), upload_date, operating_system))
    }

    pub fn is_undefined(&self) -> bool {
        self.id.is_empty() && self.upload_date == placeholder_date() && self.operating_system.is_empty()
    }
}

impl Default for SnapshotHeader {
    fn default() -> Self {
        Self::new(SnapshotId::default(), placeholder_date(), "")
    }
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::engine::apply_filter_on;
use super::software::SnapshotSoftware;
use crate::filter::{Filter, FilterError};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("The software with the name {0} has already been added! Thus the operation is ignored!")]
    AlreadyAdded(String),

    #[error("The software ID exceeds the software array size!")]
    NotFound,
}

/// Installed software of one device snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotData {
    pub operating_system: String,
    versions: Vec<SnapshotSoftware>,
}

impl SnapshotData {
    pub fn new(operating_system: impl Into<String>) -> Self {
        Self {
            operating_system: operating_system.into(),
            versions: Vec::new(),
        }
    }

    pub fn softwares(&self) -> &[SnapshotSoftware] {
        &self.versions
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Appends an entry unless one with the same (name, version, install type)
    /// is already present.
    pub fn add_software(
        &mut self,
        version: impl Into<String>,
        name: impl Into<String>,
        install_type: impl Into<String>,
    ) -> Result<(), SnapshotError> {
        let software = SnapshotSoftware::new(name, version, install_type);
        if self.versions.contains(&software) {
            return Err(SnapshotError::AlreadyAdded(software.name));
        }
        self.versions.push(software);
        Ok(())
    }

    pub fn get_software(&self, index: usize) -> Result<&SnapshotSoftware, SnapshotError> {
        self.versions.get(index).ok_or(SnapshotError::NotFound)
    }

    /// Applies `filters` one after another (logical AND).
    ///
    /// Only `name` and `version` can be filtered today; the other library
    /// fields fail with `NotImplemented`, as does any unknown field.
    pub fn fetch_filtered_softwares(
        &self,
        filters: &[Filter],
    ) -> Result<Vec<SnapshotSoftware>, FilterError> {
        let mut softwares = self.versions.clone();
        for filter in filters {
            #[cfg(feature = "tracing")]
            tracing::debug!(
                field = %filter.field_name,
                op = %filter.op_type,
                value = %filter.value,
                "applying software filter"
            );
            match filter.field_name.as_str() {
                "name" | "version" => {
                    softwares =
                        apply_filter_on(&softwares, &filter.value, filter.op_type, &filter.field_name)?;
                }
                "firstUploadDate" | "lastUploadDate" | "repository" | "size" => {
                    return Err(FilterError::NotImplemented(
                        "Not implemented yet!".to_string(),
                    ));
                }
                _ => {
                    return Err(FilterError::NotImplemented(
                        "Unknown operation type!".to_string(),
                    ));
                }
            }
        }
        Ok(softwares)
    }
}

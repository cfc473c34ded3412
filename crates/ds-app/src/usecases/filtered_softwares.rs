use anyhow::{Context, Result};
use tracing::debug;

use ds_core::filter::FilterManager;
use ds_core::snapshot::{SnapshotData, SnapshotSoftware};

/// Use case computing the software list shown for the active filters.
///
/// Only `Library` filters apply to software entries. Unsupported fields fail
/// with a [`FilterError::NotImplemented`](ds_core::filter::FilterError) that
/// stays reachable through `downcast_ref`.
#[derive(Debug, Default, Clone, Copy)]
pub struct GetFilteredSoftwares;

impl GetFilteredSoftwares {
    pub fn new() -> Self {
        Self
    }

    #[tracing::instrument(
        name = "usecase.get_filtered_softwares.execute",
        skip_all,
        fields(filters = filters.len(), softwares = snapshot.len())
    )]
    pub fn execute(
        &self,
        snapshot: &SnapshotData,
        filters: &FilterManager,
    ) -> Result<Vec<SnapshotSoftware>> {
        let library_filters = filters.library_filters();
        let softwares = snapshot
            .fetch_filtered_softwares(&library_filters)
            .context("Failed to filter snapshot softwares")?;

        debug!(kept = softwares.len(), "Filtered snapshot softwares");
        Ok(softwares)
    }
}

//! Pie-chart series of software origins (install types).

use serde::{Deserialize, Serialize};

use super::software::SnapshotSoftware;

/// Label of the bucket merging the tail of the series.
pub const OTHER_LABEL: &str = "Other";

/// Series longer than this are collapsed.
const MAX_SLICES: usize = 6;
/// Slices kept before the "Other" bucket when collapsing.
const KEPT_SLICES: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftwareOrigin {
    pub id: usize,
    pub label: String,
    pub value: usize,
}

/// Counts entries per install type, smallest first.
///
/// Ties keep first-seen order. With 7 or more install types, everything from
/// the sixth slice on is merged into a single [`OTHER_LABEL`] slice.
pub fn software_origins(softwares: &[SnapshotSoftware]) -> Vec<SoftwareOrigin> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for software in softwares {
        match counts
            .iter_mut()
            .find(|(label, _)| *label == software.install_type)
        {
            Some((_, count)) => *count += 1,
            None => counts.push((software.install_type.clone(), 1)),
        }
    }
    counts.sort_by_key(|(_, count)| *count);

    if counts.len() > MAX_SLICES {
        let other: usize = counts[KEPT_SLICES..].iter().map(|(_, count)| count).sum();
        counts.truncate(KEPT_SLICES);
        counts.push((OTHER_LABEL.to_string(), other));
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(id, (label, value))| SoftwareOrigin { id, label, value })
        .collect()
}

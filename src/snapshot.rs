// src/snapshot.rs
//
// The serialized artifact every dashboard surface reads. Immutable once
// written; display code never re-parses the source document or re-derives
// the aggregates stored here.

use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::file::ensure_directory;
use crate::records::{ManagerStats, SeasonRecord};
use crate::stats::career;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Document order. Consumers recompute head-to-head and era groupings
    /// from this sequence ad hoc, so it is part of the stable interface.
    pub seasons: Vec<SeasonRecord>,
    /// Sorted by manager name.
    pub manager_stats: Vec<ManagerStats>,
    pub metadata: Metadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub total_seasons: usize,
    /// `"<min>-<max>"` over the years present; empty when nothing parsed.
    pub year_range: String,
    /// RFC 3339 UTC stamp.
    pub generated_at: String,
}

/// Assemble the snapshot from parsed seasons. Aggregates are computed here,
/// once, at generation time.
pub fn build(seasons: Vec<SeasonRecord>) -> Snapshot {
    let manager_stats = career::manager_stats(&seasons);
    let metadata = Metadata {
        total_seasons: seasons.len(),
        year_range: year_range(&seasons),
        generated_at: chrono::Utc::now().to_rfc3339(),
    };
    Snapshot { seasons, manager_stats, metadata }
}

fn year_range(seasons: &[SeasonRecord]) -> String {
    let min = seasons.iter().map(|s| s.year).min();
    let max = seasons.iter().map(|s| s.year).max();
    match (min, max) {
        (Some(lo), Some(hi)) => format!("{lo}-{hi}"),
        _ => s!(),
    }
}

/// Write the snapshot JSON, creating parent directories as needed. Pretty
/// by default; compact for size-sensitive embedding.
pub fn write(path: &Path, snapshot: &Snapshot, compact: bool) -> Result<PathBuf, Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }

    let json = if compact {
        serde_json::to_string(snapshot)?
    } else {
        serde_json::to_string_pretty(snapshot)?
    };
    fs::write(path, json)?;
    Ok(path.to_path_buf())
}

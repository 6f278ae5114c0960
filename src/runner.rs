// src/runner.rs
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use crate::params::Params;
use crate::snapshot::{self, Snapshot};
use crate::specs;

/// Optional progress sink for frontends.
/// Implement this in the caller (CLI: print lines; tests: collect or drop).
pub trait Progress {
    fn update_status(&mut self, _msg: &str) {}
    fn log(&mut self, _msg: &str) {}
}

/// A no-op progress sink you can pass when you don't care.
pub struct NullProgress;
impl Progress for NullProgress {}

/// What a generation run produced.
#[derive(Debug)]
pub struct RunOutcome {
    pub snapshot_path: PathBuf,
    pub snapshot: Snapshot,
}

/// Top-level pipeline: read the document once, parse, fold, write.
///
/// The only hard failure is an unreadable source document (or an unwritable
/// snapshot); per-section and per-row anomalies degrade silently inside the
/// parser, and no partial snapshot is ever written on failure.
pub fn run(
    params: &Params,
    mut progress: Option<&mut dyn Progress>,
) -> Result<RunOutcome, Box<dyn Error>> {
    if let Some(p) = progress.as_deref_mut() {
        p.update_status("Reading document");
    }
    let doc = fs::read_to_string(&params.input).map_err(|e| {
        loge!("read {} failed: {e}", params.input.display());
        format!("cannot read {}: {e}", params.input.display())
    })?;

    if let Some(p) = progress.as_deref_mut() {
        p.update_status("Parsing seasons");
    }
    let t = Instant::now();
    let seasons = specs::seasons::parse_document(&doc);
    logd!("Parsed {} season sections in {:?}", seasons.len(), t.elapsed());
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Parsed {} seasons", seasons.len()));
    }

    if let Some(p) = progress.as_deref_mut() {
        p.update_status("Computing aggregates");
    }
    let snapshot = snapshot::build(seasons);

    if let Some(p) = progress.as_deref_mut() {
        p.update_status("Writing snapshot");
    }
    let snapshot_path = snapshot::write(&params.out, &snapshot, params.compact)?;
    logf!("Snapshot written to {}", snapshot_path.display());

    Ok(RunOutcome { snapshot_path, snapshot })
}

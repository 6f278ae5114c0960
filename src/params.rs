// src/params.rs
use std::path::PathBuf;

pub const DEFAULT_INPUT_FILE: &str = "league_history.md";
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_SNAPSHOT_FILE: &str = "hockey-data.json";

#[derive(Clone)]
pub struct Params {
    pub input: PathBuf,   // source history document
    pub out: PathBuf,     // snapshot path (file, or dir hint resolved by cli)
    pub compact: bool,    // compact JSON instead of pretty-printed
    pub quiet: bool,      // suppress progress and summary output
}

impl Params {
    pub fn new() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_FILE),
            out: PathBuf::from(DEFAULT_OUT_DIR).join(DEFAULT_SNAPSHOT_FILE),
            compact: false,
            quiet: false,
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new()
    }
}

// src/specs/playoffs.rs
//! Parsing spec for the playoff results block of a season section.
//!
//! The block opens with `**Playoff Results:**`; each following line carries
//! at most one round label. Matchup strings are kept verbatim; emphasis
//! markers and seed parentheticals are the head-to-head fold's problem.

use crate::core::md::{split_bullets, strip_label};
use crate::records::PlayoffResults;

/// Label that opens the playoff block within a season section.
pub const RESULTS_LABEL: &str = "**Playoff Results:**";

const QUARTERFINALS: &str = "*Quarterfinals:*";
const SEMIFINALS: &str = "*Semifinals:*";
const FINALS: &str = "*Finals:*";
const THIRD_PLACE: &str = "*3rd Place:*";
const FIFTH_PLACE: &str = "*5th Place:*";
const SEVENTH_PLACE: &str = "*7th Place:*";
const NINTH_PLACE: &str = "*9th Place:*";

/// `lines` starts at the results label and runs to the end of the section.
/// Quarterfinal/semifinal lines split on `•` into matchup lists; the other
/// rounds keep the label-stripped remainder as a single string. A repeated
/// label overwrites its earlier value.
pub fn parse_block(lines: &[&str]) -> PlayoffResults {
    let mut out = PlayoffResults::default();

    for line in lines {
        if line.contains(QUARTERFINALS) {
            out.quarterfinals = split_bullets(&strip_label(line, QUARTERFINALS));
        } else if line.contains(SEMIFINALS) {
            out.semifinals = split_bullets(&strip_label(line, SEMIFINALS));
        } else if line.contains(FINALS) {
            out.finals = Some(strip_label(line, FINALS));
        } else if line.contains(THIRD_PLACE) {
            out.third_place = Some(strip_label(line, THIRD_PLACE));
        } else if line.contains(FIFTH_PLACE) {
            out.fifth_place = Some(strip_label(line, FIFTH_PLACE));
        } else if line.contains(SEVENTH_PLACE) {
            out.seventh_place = Some(strip_label(line, SEVENTH_PLACE));
        } else if line.contains(NINTH_PLACE) {
            out.ninth_place = Some(strip_label(line, NINTH_PLACE));
        }
    }

    out
}

// src/specs/seasons.rs
//! Parsing spec for the document as a whole: `## <year> Season` sections.
//!
//! Headings that aren't a 4-digit year (table of contents, prose headers)
//! are discarded without comment. Sections that parse to zero manager rows
//! are dropped entirely: a year with no standings never happened as far as
//! the dashboard is concerned, and must not dilute the aggregates.

use crate::core::md;
use crate::records::SeasonRecord;
use crate::specs::{playoffs, standings};

const SECTION_MARKER: &str = "## ";
const NOTE_LABEL: &str = "**Note:** ";

/// Parse the full history document into season records, document order.
pub fn parse_document(doc: &str) -> Vec<SeasonRecord> {
    let mut seasons = Vec::new();

    for section in doc.split(SECTION_MARKER).skip(1) {
        let Some(year) = heading_year(section) else {
            continue;
        };
        let season = parse_section(year, section);
        if season.managers.is_empty() {
            logd!("{year} section has no parseable standings rows, dropped");
            continue;
        }
        seasons.push(season);
    }

    seasons
}

/// A season heading is exactly 4 digits followed by ` Season`.
fn heading_year(section: &str) -> Option<u32> {
    let first = section.lines().next()?;
    let digits = first.get(..4)?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if !first[4..].starts_with(" Season") {
        return None;
    }
    digits.parse().ok()
}

fn parse_section(year: u32, section: &str) -> SeasonRecord {
    let lines: Vec<&str> = section.lines().collect();

    let managers = standings::parse_table(&lines);
    let playoff_results = md::find_line(&lines, playoffs::RESULTS_LABEL)
        .map(|at| playoffs::parse_block(&lines[at..]));
    let notes = find_note(&lines);

    SeasonRecord { year, managers, playoff_results, notes }
}

/// First `**Note:**` line wins; the label must be followed by actual text.
fn find_note(lines: &[&str]) -> Option<String> {
    for line in lines {
        if let Some(at) = line.find(NOTE_LABEL) {
            let rest = &line[at + NOTE_LABEL.len()..];
            if !rest.is_empty() {
                return Some(s!(rest));
            }
        }
    }
    None
}

// src/specs/standings.rs
//! Parsing spec for the standings table inside one season section.
//!
//! Cells, in order: Manager | Team | Position | Record | Playoffs | Final.
//! Rows that don't yield at least six cells are dropped silently.

use crate::core::md::split_cells;
use crate::core::sanitize::first_uint;
use crate::records::ManagerSeason;

/// Header row that anchors the standings table within a section.
const HEADER_MARKER: &str = "| Manager | Team |";

/// Bolded token that marks the season champion in the final-position cell.
const CHAMPION_TOKEN: &str = "**Champion**";

/// Extract manager rows from a season section. Returns an empty list when
/// the section has no standings table.
pub fn parse_table(lines: &[&str]) -> Vec<ManagerSeason> {
    let Some(header) = lines.iter().position(|l| l.contains(HEADER_MARKER)) else {
        return Vec::new();
    };

    let mut out = Vec::new();
    // Skip the header and separator rows, then read until the table ends.
    for raw in lines.iter().skip(header + 2) {
        let line = raw.trim();
        if !line.starts_with('|') || line == "|" {
            break;
        }
        if let Some(row) = parse_row(line) {
            out.push(row);
        }
    }
    out
}

fn parse_row(line: &str) -> Option<ManagerSeason> {
    let cells = split_cells(line);
    if cells.len() < 6 {
        return None;
    }

    // A lone dash means the manager missed the playoffs.
    let playoff_record = if cells[4] == "-" {
        None
    } else {
        Some(cells[4].clone())
    };

    Some(ManagerSeason {
        manager: cells[0].clone(),
        team: cells[1].clone(),
        regular_season_position: first_uint(&cells[2]).unwrap_or(0),
        regular_season_record: cells[3].clone(),
        playoff_record,
        final_position: final_position(&cells[5]),
        is_champion: cells[5].contains(CHAMPION_TOKEN),
    })
}

/// Keyword finishes take priority over any digits in the cell; a bare rank
/// like "5th" falls through to the first integer. Unreadable cells are 0.
fn final_position(cell: &str) -> u32 {
    if cell.contains("Champion") {
        1
    } else if cell.contains("Runner-up") {
        2
    } else if cell.contains("3rd Place") {
        3
    } else if cell.contains("4th Place") {
        4
    } else {
        first_uint(cell).unwrap_or(0)
    }
}

// src/records.rs
//
// Typed records produced by the document parser, plus the career aggregates
// folded from them. Everything serializes in camelCase: the JSON snapshot is
// the interface the dashboard pages were built against, and its key spelling
// is load-bearing.

use serde::{Deserialize, Serialize};

/// One league season: standings in document order, plus whatever playoff
/// text and notes the section carried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonRecord {
    pub year: u32,
    pub managers: Vec<ManagerSeason>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playoff_results: Option<PlayoffResults>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One manager's outcome within one season. `manager` is the cross-season
/// join key; `team` may change year to year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerSeason {
    pub manager: String,
    pub team: String,
    pub regular_season_position: u32,
    pub regular_season_record: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playoff_record: Option<String>,
    pub final_position: u32,
    pub is_champion: bool,
}

/// Named playoff rounds. Quarterfinals and semifinals are bullet-separated
/// matchup lists; the rest are single matchup strings kept verbatim
/// (emphasis markers and seed parentheticals included).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayoffResults {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub quarterfinals: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub semifinals: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finals: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub third_place: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fifth_place: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seventh_place: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ninth_place: Option<String>,
}

/// Win/loss/tie counts parsed from a dash-separated record string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordTally {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl RecordTally {
    /// Shared record-string parser. The three-number form is tried first,
    /// anywhere in the string; then the two-number form with ties defaulting
    /// to 0. A string matching neither contributes nothing.
    pub fn parse(record: &str) -> Option<Self> {
        if let Some([wins, losses, ties]) = find_dashed::<3>(record) {
            return Some(Self { wins, losses, ties });
        }
        if let Some([wins, losses]) = find_dashed::<2>(record) {
            return Some(Self { wins, losses, ties: 0 });
        }
        None
    }

    pub fn add(&mut self, other: Self) {
        self.wins += other.wins;
        self.losses += other.losses;
        self.ties += other.ties;
    }
}

/// Playoff records carry no ties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinLoss {
    pub wins: u32,
    pub losses: u32,
}

/// Career aggregates for one manager, finalized after the full fold.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerStats {
    pub manager: String,
    pub total_seasons: u32,
    pub championships: u32,
    pub runner_ups: u32,
    pub playoff_appearances: u32,
    pub average_finish: f64,
    pub regular_season_record: RecordTally,
    pub playoff_record: WinLoss,
    pub seasons_played: Vec<u32>,
}

/// First occurrence of `N` dash-separated integer runs, scanning left to
/// right. Digit runs are maximal, so `"1-2 3-4-5"` yields `[3, 4, 5]` for
/// `N = 3` and `[1, 2]` for `N = 2`.
fn find_dashed<const N: usize>(s: &str) -> Option<[u32; N]> {
    let bytes = s.as_bytes();
    for i in 0..bytes.len() {
        let run_start = bytes[i].is_ascii_digit() && (i == 0 || !bytes[i - 1].is_ascii_digit());
        if run_start {
            if let Some(nums) = dashed_at::<N>(s, i) {
                return Some(nums);
            }
        }
    }
    None
}

fn dashed_at<const N: usize>(s: &str, start: usize) -> Option<[u32; N]> {
    let bytes = s.as_bytes();
    let mut out = [0u32; N];
    let mut pos = start;

    for slot in out.iter_mut() {
        if pos != start {
            if pos >= bytes.len() || bytes[pos] != b'-' {
                return None;
            }
            pos += 1;
        }
        let run = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_digit() {
            pos += 1;
        }
        if pos == run {
            return None;
        }
        *slot = s[run..pos].parse().ok()?;
    }
    Some(out)
}

// src/stats/eras.rs
//! Timeline groupings: seasons bucketed into the league's fixed eras.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use serde::Serialize;

use crate::records::SeasonRecord;

/// Fixed era divisions used by the league timeline. 2016 is missing on
/// purpose: that season was cancelled and has no records.
const DIVISIONS: &[(&str, &[u32])] = &[
    ("Early Era", &[2011, 2012, 2013, 2014, 2015, 2017]),
    ("Middle/Covid Era", &[2018, 2019, 2020, 2021, 2022]),
    ("Modern Era", &[2023, 2024]),
];

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EraSummary {
    pub name: String,
    /// Seasons from this era actually present in the parsed output.
    pub seasons: usize,
    /// Manager with the most era titles; ties break toward the earlier name.
    pub dominant_manager: Option<String>,
    /// The dominant manager's title count within the era.
    pub championships: u32,
    pub distinct_champions: usize,
}

/// Summarize every era over the given seasons, in timeline order.
pub fn era_summaries(seasons: &[SeasonRecord]) -> Vec<EraSummary> {
    DIVISIONS
        .iter()
        .map(|&(name, years)| summarize(name, years, seasons))
        .collect()
}

fn summarize(name: &str, years: &[u32], seasons: &[SeasonRecord]) -> EraSummary {
    let era: Vec<&SeasonRecord> = seasons
        .iter()
        .filter(|season| years.contains(&season.year) && !season.managers.is_empty())
        .collect();

    let mut titles: BTreeMap<&str, u32> = BTreeMap::new();
    for season in &era {
        if let Some(champ) = season.managers.iter().find(|m| m.is_champion) {
            *titles.entry(champ.manager.as_str()).or_default() += 1;
        }
    }

    let dominant = titles
        .iter()
        .map(|(champ, count)| (*champ, *count))
        .max_by_key(|&(champ, count)| (count, Reverse(champ)));

    EraSummary {
        name: s!(name),
        seasons: era.len(),
        dominant_manager: dominant.map(|(champ, _)| s!(champ)),
        championships: dominant.map_or(0, |(_, count)| count),
        distinct_champions: titles.len(),
    }
}

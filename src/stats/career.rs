// src/stats/career.rs
//! Career statistics fold: every manager-season folded into one accumulator
//! per distinct manager name.

use std::collections::BTreeMap;

use crate::records::{ManagerStats, RecordTally, SeasonRecord};

/// Accumulator: the stats under construction plus the running finish sum.
/// The average can only be taken once the fold is complete, because the
/// season count isn't final until then.
struct Acc {
    stats: ManagerStats,
    finish_sum: f64,
}

impl Acc {
    fn new(manager: &str) -> Self {
        Self {
            stats: ManagerStats { manager: s!(manager), ..ManagerStats::default() },
            finish_sum: 0.0,
        }
    }

    fn finalize(self) -> ManagerStats {
        let mut stats = self.stats;
        stats.average_finish = self.finish_sum / f64::from(stats.total_seasons);
        stats
    }
}

/// Fold all seasons into per-manager career aggregates, sorted by name.
/// Accumulators are created lazily on first sight of a name; nothing
/// partially-folded ever escapes this function.
pub fn manager_stats(seasons: &[SeasonRecord]) -> Vec<ManagerStats> {
    let mut accs: BTreeMap<String, Acc> = BTreeMap::new();

    for season in seasons {
        for ms in &season.managers {
            let acc = accs
                .entry(ms.manager.clone())
                .or_insert_with(|| Acc::new(&ms.manager));
            let stats = &mut acc.stats;

            stats.total_seasons += 1;
            stats.seasons_played.push(season.year);

            // Mutually exclusive by the one-champion-per-season invariant.
            if ms.is_champion {
                stats.championships += 1;
            } else if ms.final_position == 2 {
                stats.runner_ups += 1;
            }

            if ms.playoff_record.is_some() {
                stats.playoff_appearances += 1;
            }

            if let Some(tally) = RecordTally::parse(&ms.regular_season_record) {
                stats.regular_season_record.add(tally);
            }
            if let Some(tally) = ms.playoff_record.as_deref().and_then(RecordTally::parse) {
                stats.playoff_record.wins += tally.wins;
                stats.playoff_record.losses += tally.losses;
            }

            acc.finish_sum += f64::from(ms.final_position);
        }
    }

    accs.into_values().map(Acc::finalize).collect()
}

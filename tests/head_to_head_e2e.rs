// tests/head_to_head_e2e.rs
//
// Head-to-head is recomputed from parsed seasons by consumers, not read
// from the snapshot; these tests exercise that path end to end.

use fh_stats::specs::seasons;
use fh_stats::stats::head_to_head::{self, TallyOptions};

const DOC: &str = "\
## 2011 Season

| Manager | Team | Position | Record | Playoffs | Final |
|---------|------|----------|--------|----------|-------|
| Alice | Ice Hawks | 1 | 12-7-3 | 3-1 | **Champion** |
| Bob | Polar Bears | 2 | 11-8-3 | 2-2 | Runner-up |
| Carol | Zambonis | 3 | 8-11-3 | 1-1 | 3rd Place |
| Dan | Penalty Box | 4 | 7-12-3 | 0-2 | 4th Place |

**Playoff Results:**
- *Semifinals:* **Alice** def. Dan (4) • Bob def. Carol
- *Finals:* Alice def. Bob
- *3rd Place:* Carol def. Dan

## 2012 Season

| Manager | Team | Position | Record | Playoffs | Final |
|---------|------|----------|--------|----------|-------|
| Bob | Blizzard | 1 | 13-6-3 | 4-1 | **Champion** |
| Alice | Ice Hawks | 2 | 11-8-3 | 1-2 | Runner-up |
| Carol | Zambonis | 3 | 10-9-3 | 2-1 | 3rd Place |
| Dan | Penalty Box | 4 | 6-13-3 | 0-1 | 5th |

**Playoff Results:**
- *Semifinals:* Bob def. Dan • Alice def. Carol
- *Finals:* Bob def. Alice
- *5th Place:* Carol def. Dan
";

#[test]
fn qualifying_rounds_accumulate_across_seasons() {
    let parsed = seasons::parse_document(DOC);
    let records = head_to_head::tally(&parsed, TallyOptions::default());

    let ab = head_to_head::lookup(&records, "Alice", "Bob").unwrap();
    assert_eq!(ab.playoff_meetings, 2);
    assert_eq!(ab.manager1_wins, 1); // Alice took 2011
    assert_eq!(ab.manager2_wins, 1); // Bob took 2012
    assert_eq!(
        ab.matchups,
        vec!["2011 Playoffs: Alice def. Bob", "2012 Playoffs: Bob def. Alice"]
    );
}

#[test]
fn lookup_order_does_not_matter() {
    let parsed = seasons::parse_document(DOC);
    let records = head_to_head::tally(&parsed, TallyOptions::default());

    let ad = head_to_head::lookup(&records, "Alice", "Dan").unwrap();
    let da = head_to_head::lookup(&records, "Dan", "Alice").unwrap();
    assert_eq!(ad.playoff_meetings, da.playoff_meetings);
    assert_eq!(ad.manager1, "Alice");
    // Emphasis and the seed parenthetical were stripped before matching.
    assert_eq!(ad.playoff_meetings, 1);
    assert_eq!(ad.manager1_wins, 1);
}

#[test]
fn consolation_games_are_excluded_but_fifth_place_counts() {
    let parsed = seasons::parse_document(DOC);
    let records = head_to_head::tally(&parsed, TallyOptions::default());

    // Carol/Dan met in the 2011 3rd place game (excluded) and the 2012
    // 5th place game (included by default).
    let cd = head_to_head::lookup(&records, "Carol", "Dan").unwrap();
    assert_eq!(cd.playoff_meetings, 1);
    assert_eq!(cd.manager1_wins, 1);

    let without_fifth = head_to_head::tally(
        &parsed,
        TallyOptions { include_fifth_place: false },
    );
    let cd = head_to_head::lookup(&without_fifth, "Carol", "Dan").unwrap();
    assert_eq!(cd.playoff_meetings, 0);
}

#[test]
fn every_observed_pair_has_a_record() {
    let parsed = seasons::parse_document(DOC);
    let records = head_to_head::tally(&parsed, TallyOptions::default());

    // 4 managers → 6 unordered pairs, meetings or not.
    assert_eq!(records.len(), 6);
    assert!(records.values().all(|r| r.manager1 < r.manager2));
    let bc = head_to_head::lookup(&records, "Carol", "Bob").unwrap();
    assert_eq!(bc.playoff_meetings, 1); // 2011 semifinal only
}

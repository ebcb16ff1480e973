//! Destination popularity ranking.

use std::collections::HashMap;

use crate::models::{Participant, TallyEntry};

/// Tallies destination selections into a popularity-ordered list.
///
/// Names are compared after trimming, case preserved as typed. Ties keep
/// first-seen order: records are scanned in submission order, selections
/// in within-record order, and equal counts rank by whichever name
/// appeared first. An empty result means no participant selected
/// anything; the caller decides whether that is an error.
pub fn rank(records: &[Participant]) -> Vec<TallyEntry> {
    let mut counts: HashMap<&str, u32> = HashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();

    for record in records {
        for selection in &record.destinations {
            let name = selection.trim();
            if name.is_empty() {
                continue;
            }
            let count = counts.entry(name).or_insert(0);
            if *count == 0 {
                first_seen.push(name);
            }
            *count += 1;
        }
    }

    let mut tally: Vec<TallyEntry> = first_seen
        .into_iter()
        .map(|name| TallyEntry {
            destination: name.to_string(),
            count: counts[name],
        })
        .collect();
    // Stable sort preserves first-seen order within equal counts.
    tally.sort_by(|a, b| b.count.cmp(&a.count));
    tally
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;

    fn participant(destinations: &[&str]) -> Participant {
        Participant {
            id: 0,
            name: "Test".to_string(),
            available: "Dec 20".to_string(),
            unavailable: String::new(),
            trip_days: 3,
            people: 1,
            budget_per_person: 10000,
            region: None,
            kid_friendly: false,
            trip_kind: None,
            destinations: destinations.iter().map(|d| (*d).to_string()).collect(),
            created_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn counts_exact_names() {
        let records = [
            participant(&["Munnar"]),
            participant(&["Munnar", "Ooty"]),
        ];
        let tally = rank(&records);
        assert_eq!(
            tally,
            vec![
                TallyEntry { destination: "Munnar".to_string(), count: 2 },
                TallyEntry { destination: "Ooty".to_string(), count: 1 },
            ]
        );
    }

    #[test]
    fn counts_sum_to_selection_pairs() {
        let records = [
            participant(&["A", "B"]),
            participant(&["B", "C"]),
            participant(&["A"]),
        ];
        let total: u32 = rank(&records).iter().map(|e| e.count).sum();
        assert_eq!(total, 5);
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let records = [
            participant(&["A", "B"]),
            participant(&["B", "A"]),
            participant(&["A"]),
        ];
        let tally = rank(&records);
        // A: 3, B: 2 — no tie here, but A leads.
        assert_eq!(tally[0].destination, "A");

        // Genuine tie: A and B both appear twice; A was seen first.
        let records = [participant(&["A", "B"]), participant(&["B", "A"])];
        let tally = rank(&records);
        assert_eq!(tally[0].destination, "A");
        assert_eq!(tally[1].destination, "B");
        assert_eq!(tally[0].count, 2);
        assert_eq!(tally[1].count, 2);
    }

    #[test]
    fn case_is_preserved_not_folded() {
        let records = [participant(&["ooty"]), participant(&["Ooty"])];
        let tally = rank(&records);
        assert_eq!(tally.len(), 2);
        assert!(tally.iter().all(|e| e.count == 1));
    }

    #[test]
    fn blank_selections_are_skipped() {
        let records = [participant(&["", "  ", "Coorg"])];
        let tally = rank(&records);
        assert_eq!(tally.len(), 1);
        assert_eq!(tally[0].destination, "Coorg");
    }

    #[test]
    fn empty_records_rank_empty() {
        assert!(rank(&[]).is_empty());
        assert!(rank(&[participant(&[])]).is_empty());
    }
}

//! Common-window aggregation across all participant responses.

use std::collections::HashSet;

use crate::dates::DateToken;
use crate::models::Participant;

/// Computes the common feasible date window.
///
/// Result: `sorted((∩ availability_i) − (∪ exclusions_i))`, duplicate
/// free. Zero records yield an empty window (base case, not an error).
/// A participant whose availability expands to nothing forces the whole
/// intersection empty — no parseable dates means no shared date can be
/// claimed for them. Pure: depends only on the snapshot passed in.
pub fn common_window(records: &[Participant]) -> Vec<DateToken> {
    let mut common: Option<HashSet<DateToken>> = None;
    let mut excluded: HashSet<DateToken> = HashSet::new();

    for record in records {
        let available: HashSet<DateToken> = record.available_dates().into_iter().collect();
        common = Some(match common {
            Some(acc) => acc.intersection(&available).cloned().collect(),
            None => available,
        });
        excluded.extend(record.unavailable_dates());
    }

    let Some(common) = common else {
        return Vec::new();
    };

    let mut window: Vec<DateToken> = common.difference(&excluded).cloned().collect();
    window.sort();
    window
}

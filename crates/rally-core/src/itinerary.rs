//! Day-count allocation across ranked destinations.

use std::collections::HashMap;

use crate::error::{CoordinatorError, Result};
use crate::models::DayAssignment;

/// Lookup from destination name to its recommended stay in days.
///
/// Supplied as configuration to the allocator. The builtin table covers
/// the destinations the suggestion prompt knows about; unknown
/// destinations consume all remaining days, since no duration data
/// exists for them.
#[derive(Debug, Clone, Default)]
pub struct IdealStays(HashMap<String, u32>);

impl IdealStays {
    /// The builtin stay-length table.
    pub fn builtin() -> Self {
        [
            ("Varkala", 2),
            ("Kodaikanal", 3),
            ("Munnar", 3),
            ("Ooty", 3),
            ("Mahabalipuram", 1),
            ("Coorg", 3),
            ("Yelagiri", 1),
        ]
        .into_iter()
        .map(|(name, days)| (name.to_string(), days))
        .collect()
    }

    /// Recommended stay for a destination, if known.
    pub fn get(&self, destination: &str) -> Option<u32> {
        self.0.get(destination).copied()
    }
}

impl FromIterator<(String, u32)> for IdealStays {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Allocates `total_days` day slots across the ranked destinations.
///
/// Walks the ranked list in order, giving each destination
/// `min(ideal_stay, remaining)` consecutive days, never fewer than one
/// (all remaining days when the stay table has no entry). When the list is exhausted before
/// the budget, the cursor wraps back to the start so every day gets an
/// assignment. The result always has exactly `total_days` entries,
/// numbered 1..=total_days in order.
///
/// # Errors
///
/// Returns [`CoordinatorError::InsufficientData`] when `ranked` is empty
/// or `total_days` is zero — both are caller precondition violations,
/// not data-sparsity conditions.
pub fn allocate(
    ranked: &[String],
    stays: &IdealStays,
    total_days: u32,
) -> Result<Vec<DayAssignment>> {
    if ranked.is_empty() {
        return Err(CoordinatorError::insufficient_data(
            "no ranked destinations to allocate",
        ));
    }
    if total_days < 1 {
        return Err(CoordinatorError::insufficient_data(
            "trip length must be at least one day",
        ));
    }

    let mut days = Vec::with_capacity(total_days as usize);
    let mut remaining = total_days;
    let mut cursor = 0usize;

    while remaining > 0 {
        let destination = &ranked[cursor % ranked.len()];
        // Clamp to 1..=remaining: a zero-valued table entry must still
        // consume a day or the cursor would wrap forever.
        let stay = stays
            .get(destination)
            .unwrap_or(remaining)
            .clamp(1, remaining);
        for _ in 0..stay {
            let day = total_days - remaining + 1;
            days.push(DayAssignment {
                day,
                destination: destination.clone(),
            });
            remaining -= 1;
        }
        cursor += 1;
    }

    Ok(days)
}

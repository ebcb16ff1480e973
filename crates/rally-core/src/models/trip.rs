//! Derived trip models: tally entries, day assignments, and the final plan.

use serde::{Deserialize, Serialize};

use crate::dates::DateToken;

/// One destination with the number of participants who selected it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TallyEntry {
    /// Destination name, exactly as selected (trimmed, case preserved)
    pub destination: String,

    /// How many participants selected it
    pub count: u32,
}

/// One day of the final itinerary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayAssignment {
    /// Day index, 1-based
    pub day: u32,

    /// Destination occupying this day
    pub destination: String,
}

/// The finalized group trip: the consensus outputs handed to rendering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripPlan {
    /// Most popular destination (tally head)
    pub destination: String,

    /// Common feasible dates, sorted and duplicate-free
    pub window: Vec<DateToken>,

    /// Sum of all participants' head counts
    pub total_people: u32,

    /// Integer average of per-person budgets
    pub average_budget: u32,

    /// Integer average of requested trip lengths; the agreed length
    pub average_days: u32,

    /// Full popularity ranking
    pub tally: Vec<TallyEntry>,

    /// Day-by-day allocation; always exactly `average_days` entries
    pub days: Vec<DayAssignment>,
}

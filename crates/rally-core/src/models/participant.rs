//! Participant model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::dates::{self, DateToken};

/// One participant's complete submission.
///
/// Records are immutable once stored: the store is append-only, and every
/// consensus computation reads a fresh snapshot of all rows.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Participant {
    /// Unique identifier; also the submission order
    pub id: u64,

    /// Participant's name
    pub name: String,

    /// Availability dates as typed (e.g. "Dec 20-22, Dec 25")
    pub available: String,

    /// Dates that do not work, as typed; empty when none
    pub unavailable: String,

    /// How many days this participant can travel
    pub trip_days: u32,

    /// Head count travelling with this participant
    pub people: u32,

    /// Budget per person
    pub budget_per_person: u32,

    /// Preferred region, if any
    pub region: Option<String>,

    /// Whether the trip needs to be kid-friendly
    pub kid_friendly: bool,

    /// Trip-type preference (hills, beach, ...), if any
    pub trip_kind: Option<String>,

    /// Ordered destination selections; may be empty
    pub destinations: Vec<String>,

    /// Timestamp when the response was recorded (UTC)
    pub created_at: Timestamp,
}

impl Participant {
    /// Expands the availability field into date tokens.
    pub fn available_dates(&self) -> Vec<DateToken> {
        dates::expand(&self.available)
    }

    /// Expands the exclusion field into date tokens.
    pub fn unavailable_dates(&self) -> Vec<DateToken> {
        dates::expand(&self.unavailable)
    }
}

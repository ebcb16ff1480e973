//! Display implementations for domain models.
//!
//! Markdown-formatted output so the same text renders in the terminal
//! and in the shareable document.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{DayAssignment, Participant, TallyEntry, TripPlan};

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;
        writeln!(f, "- Available: {}", self.available)?;
        if !self.unavailable.is_empty() {
            writeln!(f, "- Not feasible: {}", self.unavailable)?;
        }
        writeln!(f, "- Days: {} | People: {}", self.trip_days, self.people)?;
        writeln!(f, "- Budget per person: ₹{}", self.budget_per_person)?;
        if let Some(region) = &self.region {
            writeln!(f, "- Region: {region}")?;
        }
        if let Some(kind) = &self.trip_kind {
            writeln!(f, "- Type: {kind}")?;
        }
        if self.kid_friendly {
            writeln!(f, "- Kid-friendly requested")?;
        }
        if !self.destinations.is_empty() {
            writeln!(f, "- Destinations: {}", self.destinations.join(", "))?;
        }
        writeln!(f, "- Submitted: {}", LocalDateTime(&self.created_at))?;
        Ok(())
    }
}

impl fmt::Display for TallyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.destination, self.count)
    }
}

impl fmt::Display for DayAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Day {}: {}", self.day, self.destination)
    }
}

impl fmt::Display for TripPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Final Trip Itinerary — {}", self.destination)?;
        writeln!(f)?;
        let window = self
            .window
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(f, "- Dates: {window}")?;
        writeln!(f, "- Total people: {}", self.total_people)?;
        writeln!(f, "- Avg budget/person: ₹{}", self.average_budget)?;
        writeln!(f, "- Trip length: {} days", self.average_days)?;
        writeln!(f)?;
        writeln!(f, "## Day plan")?;
        writeln!(f)?;
        writeln!(f, "| Day | Destination |")?;
        writeln!(f, "|-----|-------------|")?;
        for day in &self.days {
            writeln!(f, "| {} | {} |", day.day, day.destination)?;
        }
        Ok(())
    }
}

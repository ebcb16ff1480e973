//! Shareable itinerary document composition.
//!
//! The rendering collaborator contract: given the finalized plan (and
//! the generator's narrative when available), produce a single markdown
//! file the group can pass around.

use std::path::Path;

use anyhow::{Context, Result};
use rally_core::TripPlan;

/// Composes the shareable markdown document.
pub fn compose(plan: &TripPlan, narrative: Option<&str>) -> String {
    let mut doc = plan.to_string();

    if let Some(narrative) = narrative {
        doc.push('\n');
        doc.push_str("## Day-wise details\n\n");
        doc.push_str(narrative.trim());
        doc.push('\n');
    }

    let window = plan
        .window
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    doc.push('\n');
    doc.push_str(&format!(
        "---\n*Dates: {window} | Destination: {} | Total People: {} | Avg Budget/Person: ₹{}*\n",
        plan.destination, plan.total_people, plan.average_budget
    ));
    doc
}

/// Writes the document to disk.
pub fn write(path: &Path, markdown: &str) -> Result<()> {
    std::fs::write(path, markdown)
        .with_context(|| format!("Failed to write itinerary to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use rally_core::{DateToken, DayAssignment, TallyEntry};

    use super::*;

    fn plan() -> TripPlan {
        TripPlan {
            destination: "Munnar".to_string(),
            window: vec![DateToken::new("Dec 21")],
            total_people: 4,
            average_budget: 12000,
            average_days: 2,
            tally: vec![TallyEntry { destination: "Munnar".to_string(), count: 2 }],
            days: vec![
                DayAssignment { day: 1, destination: "Munnar".to_string() },
                DayAssignment { day: 2, destination: "Munnar".to_string() },
            ],
        }
    }

    #[test]
    fn document_without_narrative_still_has_plan_and_footer() {
        let doc = compose(&plan(), None);
        assert!(doc.contains("Final Trip Itinerary — Munnar"));
        assert!(doc.contains("| 1 | Munnar |"));
        assert!(doc.contains("Total People: 4"));
        assert!(!doc.contains("Day-wise details"));
    }

    #[test]
    fn narrative_is_embedded_when_present() {
        let doc = compose(&plan(), Some("| Day | Meals |\n| 1 | Dosa |"));
        assert!(doc.contains("## Day-wise details"));
        assert!(doc.contains("| 1 | Dosa |"));
    }
}

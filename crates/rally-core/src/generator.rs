//! Suggestion-generator boundary.
//!
//! The engine consumes an opaque text-completion service for two things:
//! per-participant destination suggestions and a narrative expansion of
//! the finalized plan. This module defines the trait that interface
//! crates implement, the prompt builders, and the parser that turns a
//! numbered suggestion list back into bare place names so numbered picks
//! can be resolved. The engine never validates the generator's prose
//! beyond that.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::Result;
use crate::models::{TallyEntry, TripPlan};

/// A text-completion service the coordinator can be handed.
///
/// Injected at the call site rather than held as module state so pure
/// computations stay testable against in-memory fakes.
pub trait SuggestionGenerator: Send + Sync {
    /// Completes a prompt into free-form text.
    fn complete(&self, prompt: &str) -> Result<String>;
}

/// Inputs for the per-participant suggestion prompt.
#[derive(Debug, Clone)]
pub struct SuggestionRequest {
    pub trip_days: u32,
    pub people: u32,
    pub budget_per_person: u32,
    pub available: String,
    pub region: Option<String>,
    pub kid_friendly: bool,
    pub trip_kind: Option<String>,
}

impl SuggestionRequest {
    /// Renders the suggestion prompt.
    ///
    /// The output contract matters: a numbered list of up to five lines,
    /// `"<n>. Place — Distance: XXX km — Reason/Cost summary"`, which
    /// [`suggestion_names`] can parse back into bare names.
    pub fn prompt(&self) -> String {
        format!(
            "You are a realistic travel planner AI.\n\
             \n\
             User preferences:\n\
             - Trip Length: {days} days\n\
             - Number of People: {people}\n\
             - Budget Per Person: ₹{budget}\n\
             - Available Dates: {available}\n\
             - Preferred Region: {region}\n\
             - Kid Friendly: {kids}\n\
             - Type Preference: {kind}\n\
             \n\
             Rules:\n\
             - Suggest 5 realistic destinations within 800 km from Chennai.\n\
             - For each suggestion include the exact distance (in km) from Chennai \
             (do not hallucinate — if unsure, skip).\n\
             - Include estimated total costs per person (transport for self-drive, \
             stay, meals, local travel).\n\
             - Only include destinations whose total cost per person does not exceed \
             the budget.\n\
             - Output a numbered list (1-5). Each line should be: \
             \"1. Place — Distance: XXX km — Reason/Cost summary\".\n\
             - Output nothing else.",
            days = self.trip_days,
            people = self.people,
            budget = self.budget_per_person,
            available = self.available,
            region = self.region.as_deref().unwrap_or("Any"),
            kids = if self.kid_friendly { "Yes" } else { "No" },
            kind = self.trip_kind.as_deref().unwrap_or("Any"),
        )
    }
}

/// Renders the narrative prompt for a finalized group plan.
///
/// Lists the group facts, the popularity-ordered destinations, and the
/// engine's own day allocation; the generator only narrates (meals,
/// transport, cost), never decides which destination occupies which day.
pub fn itinerary_prompt(plan: &TripPlan) -> String {
    let window = plan
        .window
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let ranked = plan
        .tally
        .iter()
        .map(|e| e.destination.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let allocation = plan
        .days
        .iter()
        .map(|d| format!("Day {}: {}", d.day, d.destination))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are a realistic travel planner AI.\n\
         \n\
         Group trip info:\n\
         - Total trip length: {days} days\n\
         - Total people: {people}\n\
         - Budget per person: ₹{budget}\n\
         - Available dates: {window}\n\
         - User-selected destinations (popularity considered): {ranked}\n\
         \n\
         The day-wise destination allocation is already decided:\n\
         {allocation}\n\
         \n\
         Instructions:\n\
         1. Keep the allocation above exactly as given.\n\
         2. For each day add meals, transport (by car from Chennai and back), \
         accommodation, and a realistic estimated cost.\n\
         3. Provide the result as a markdown table:\n\
         | Day | Place/Activity | Meals | Transport | Accommodation | Estimated Cost (₹) |\n\
         4. Be concise, do not exceed the total trip length.\n\
         5. Output nothing else.",
        days = plan.average_days,
        people = plan.total_people,
        budget = plan.average_budget,
    )
}

// Strips leading numbering like '1. ', '2) ', '3 - '.
fn numbering_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\s*\d+\s*[.)-]*\s*").expect("numbering pattern is valid"))
}

// Cuts a suggestion line at the first dash, parenthesis, or semicolon.
fn detail_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"—|–|-|\(|;").expect("detail pattern is valid"))
}

/// Extracts bare place names from a numbered suggestion list.
///
/// Each non-empty line loses its numbering prefix and everything from
/// the first dash/parenthesis/semicolon onward. Lines that reduce to
/// nothing are dropped.
pub fn suggestion_names(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            let stripped = numbering_pattern().replace(line, "");
            let name = detail_pattern()
                .splitn(&stripped, 2)
                .next()
                .unwrap_or("")
                .trim()
                .to_string();
            (!name.is_empty()).then_some(name)
        })
        .collect()
}

/// Resolves a selection reply against a suggestion list.
///
/// Comma-separated parts that are digits index into `names` (1-based);
/// out-of-range indices are dropped. Anything else passes through as a
/// custom destination.
pub fn resolve_picks(reply: &str, names: &[String]) -> Vec<String> {
    reply
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .filter_map(|part| {
            if part.chars().all(|c| c.is_ascii_digit()) {
                let idx = part.parse::<usize>().ok()?.checked_sub(1)?;
                names.get(idx).cloned()
            } else {
                Some(part.to_string())
            }
        })
        .collect()
}

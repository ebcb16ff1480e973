//! Parameter structures for Rally operations.
//!
//! Shared parameter structures usable across interfaces (CLI today,
//! other front-ends later) without framework-specific derives. Interface
//! layers wrap these with their own derives (clap args, serde requests)
//! and convert via `From`, keeping the core free of UI dependencies.

/// Exclusion replies that mean "no excluded dates".
const NONE_SENTINELS: [&str; 4] = ["none", "no", "n/a", "na"];

/// Parameters for submitting one participant response.
#[derive(Debug, Clone, Default)]
pub struct SubmitParticipant {
    /// Participant's name
    pub name: String,
    /// Availability dates as free text
    pub available: String,
    /// Excluded dates as free text; sentinels like "none" clear it
    pub unavailable: String,
    /// How many days this participant can travel
    pub trip_days: u32,
    /// Head count travelling with this participant
    pub people: u32,
    /// Budget per person
    pub budget_per_person: u32,
    /// Preferred region
    pub region: Option<String>,
    /// Whether the trip needs to be kid-friendly
    pub kid_friendly: bool,
    /// Trip-type preference (hills, beach, ...)
    pub trip_kind: Option<String>,
    /// Ordered destination selections
    pub destinations: Vec<String>,
}

impl SubmitParticipant {
    /// Normalizes the exclusion field: sentinel replies become empty.
    pub fn normalized_unavailable(&self) -> String {
        let trimmed = self.unavailable.trim();
        if NONE_SENTINELS.iter().any(|s| trimmed.eq_ignore_ascii_case(s)) {
            String::new()
        } else {
            trimmed.to_string()
        }
    }
}

/// Parses a budget amount, accepting a `k` suffix for thousands.
///
/// `"15k"` and `"15000"` both parse to 15000. Returns `None` for
/// anything that is not a non-negative amount.
pub fn parse_budget(input: &str) -> Option<u32> {
    let trimmed = input.trim().to_ascii_lowercase();
    if let Some(prefix) = trimmed.strip_suffix('k') {
        let value: f64 = prefix.trim().parse().ok()?;
        if value < 0.0 {
            return None;
        }
        Some((value * 1000.0) as u32)
    } else {
        trimmed.parse().ok()
    }
}

/// Splits a comma-separated destination reply into trimmed names.
pub fn split_destinations(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_accepts_k_suffix() {
        assert_eq!(parse_budget("15k"), Some(15000));
        assert_eq!(parse_budget("1.5k"), Some(1500));
        assert_eq!(parse_budget("15000"), Some(15000));
        assert_eq!(parse_budget(" 20K "), Some(20000));
    }

    #[test]
    fn budget_rejects_garbage() {
        assert_eq!(parse_budget("lots"), None);
        assert_eq!(parse_budget("-5"), None);
        assert_eq!(parse_budget("-2k"), None);
        assert_eq!(parse_budget(""), None);
    }

    #[test]
    fn exclusion_sentinels_normalize_to_empty() {
        for sentinel in ["none", "NONE", "No", "n/a", "NA", " none "] {
            let params = SubmitParticipant {
                unavailable: sentinel.to_string(),
                ..Default::default()
            };
            assert_eq!(params.normalized_unavailable(), "");
        }
    }

    #[test]
    fn real_exclusions_pass_through_trimmed() {
        let params = SubmitParticipant {
            unavailable: " Dec 24-25 ".to_string(),
            ..Default::default()
        };
        assert_eq!(params.normalized_unavailable(), "Dec 24-25");
    }

    #[test]
    fn destinations_split_and_trim() {
        assert_eq!(
            split_destinations("Munnar, Ooty , ,Coorg"),
            vec!["Munnar", "Ooty", "Coorg"]
        );
        assert!(split_destinations("").is_empty());
    }
}

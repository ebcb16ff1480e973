//! Collection wrapper types for displaying groups of domain objects.
//!
//! Newtype wrappers give collections a Display implementation with
//! consistent empty-collection handling.

use std::fmt;

use crate::dates::DateToken;
use crate::models::{Participant, TallyEntry};

/// Newtype wrapper for displaying all recorded responses.
pub struct Responses(pub Vec<Participant>);

impl Responses {
    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of responses.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Responses {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No responses yet.");
        }
        writeln!(f, "# Trip responses")?;
        writeln!(f)?;
        for participant in &self.0 {
            let selections = if participant.destinations.is_empty() {
                "—".to_string()
            } else {
                participant.destinations.join(", ")
            };
            writeln!(f, "- **{}**: {}", participant.name, selections)?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying the destination tally.
pub struct Tally(pub Vec<TallyEntry>);

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No destination selections recorded yet.");
        }
        writeln!(f, "# Destination tally")?;
        writeln!(f)?;
        for (position, entry) in self.0.iter().enumerate() {
            writeln!(f, "{}. {}", position + 1, entry)?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying the common date window.
pub struct Window(pub Vec<DateToken>);

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No common feasible dates yet.");
        }
        let dates = self
            .0
            .iter()
            .map(DateToken::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        writeln!(f, "Common dates: {dates}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collections_say_so() {
        assert!(format!("{}", Responses(Vec::new())).contains("No responses yet"));
        assert!(format!("{}", Tally(Vec::new())).contains("No destination selections"));
        assert!(format!("{}", Window(Vec::new())).contains("No common feasible dates"));
    }

    #[test]
    fn window_joins_tokens() {
        let window = Window(vec![DateToken::new("Dec 21"), DateToken::new("Dec 22")]);
        assert!(format!("{window}").contains("Dec 21, Dec 22"));
    }

    #[test]
    fn tally_is_numbered() {
        let tally = Tally(vec![
            TallyEntry { destination: "Munnar".to_string(), count: 2 },
            TallyEntry { destination: "Ooty".to_string(), count: 1 },
        ]);
        let output = format!("{tally}");
        assert!(output.contains("1. Munnar (2)"));
        assert!(output.contains("2. Ooty (1)"));
    }
}

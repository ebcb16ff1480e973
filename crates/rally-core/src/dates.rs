//! Date-token parsing and range expansion.
//!
//! Participants type availability as free text like `"Dec 20-22, Dec 25"`.
//! This module expands that text into atomic [`DateToken`]s: shorthand
//! ranges become one token per day, everything else passes through as an
//! opaque literal. Parsing is best-effort and never fails — an unparsed
//! label simply will not intersect with anyone else's dates unless they
//! typed the identical wording.

use std::cmp::Ordering;
use std::fmt;
use std::sync::OnceLock;

use log::warn;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A year-less calendar-day label, compared by exact string match.
///
/// Ordering: every token derives one sort key. A token of the shape
/// `<label> <day>` keys as `(label, day)` with the day compared
/// numerically (so `Dec 9` sorts before `Dec 10`); any other token keys
/// as its full string with no day. Keys compare lexicographically as
/// tuples, with the full string as the final tie-break, so the order is
/// total, stable, and deterministic — which is all the common-window
/// output requires.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateToken(String);

impl DateToken {
    /// Wraps a trimmed label as a token.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The token's string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Splits the token into a `(label, day)` pair when it has the
    /// `<word> <digits>` shape.
    fn label_day(&self) -> Option<(&str, u32)> {
        let (label, day) = self.0.rsplit_once(' ')?;
        let day = day.parse().ok()?;
        Some((label, day))
    }

    /// One key shape for every token, so comparisons never mix a
    /// day-aware rule with a plain string rule. The full string is the
    /// final component, so distinct spellings ("Dec 09" vs "Dec 9")
    /// never compare Equal.
    fn sort_key(&self) -> (&str, Option<u32>, &str) {
        match self.label_day() {
            Some((label, day)) => (label, Some(day), &self.0),
            None => (&self.0, None, &self.0),
        }
    }
}

impl fmt::Display for DateToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DateToken {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

impl Ord for DateToken {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for DateToken {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Tagged outcome of expanding one comma-separated part.
///
/// Callers that care whether input matched the range grammar can assert
/// on the variant instead of inferring it from string shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartExpansion {
    /// The part matched `<month> <start>-<end>` and expanded to one token
    /// per day, start through end inclusive.
    Range(Vec<DateToken>),
    /// The part did not match the range grammar and passes through as a
    /// single opaque token.
    Literal(DateToken),
    /// The part matched the range grammar but start > end. Rejected:
    /// expands to nothing.
    Descending,
}

impl PartExpansion {
    /// Tokens produced by this part.
    pub fn into_tokens(self) -> Vec<DateToken> {
        match self {
            Self::Range(tokens) => tokens,
            Self::Literal(token) => vec![token],
            Self::Descending => Vec::new(),
        }
    }
}

// Matches 'Dec 20-22', 'Dec 20 – 22', 'Dec 20 — 22'. The separator may
// be an ASCII hyphen or an en/em dash, with optional surrounding spaces.
fn range_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^([A-Za-z]+)\s*(\d+)\s*[–—-]\s*(\d+)").expect("range pattern is valid")
    })
}

/// Expands a single trimmed part against the range grammar.
pub fn expand_part(part: &str) -> PartExpansion {
    let Some(caps) = range_pattern().captures(part) else {
        return PartExpansion::Literal(DateToken::new(part));
    };

    let month = &caps[1];
    let start: u32 = caps[2].parse().unwrap_or(0);
    let end: u32 = caps[3].parse().unwrap_or(0);

    if start > end {
        warn!("rejecting descending date range '{part}'");
        return PartExpansion::Descending;
    }

    let tokens = (start..=end)
        .map(|day| DateToken::new(format!("{month} {day}")))
        .collect();
    PartExpansion::Range(tokens)
}

/// Expands a free-text date expression into atomic tokens.
///
/// The input is split on commas and newlines; each part is trimmed and
/// empty parts are dropped. Never fails: unrecognized syntax degrades to
/// an opaque literal. Empty input yields an empty vector.
pub fn expand(text: &str) -> Vec<DateToken> {
    text.split(|c| c == ',' || c == '\n')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .flat_map(|part| expand_part(part).into_tokens())
        .collect()
}

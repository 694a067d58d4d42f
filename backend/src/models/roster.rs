//! Roster of participants
//!
//! A roster is the ordered list of names for one assignment run. Order is
//! input order only; it carries no ranking.
//!
//! # Critical Invariants
//!
//! 1. Every entry is trimmed and non-empty
//! 2. Duplicate names stay as distinct entries (identity is string equality)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Normalized, ordered participant list
///
/// # Example
///
/// ```rust
/// use group_assigner_core_rs::Roster;
///
/// let roster = Roster::from_text("  Ana \n\nBudi\n   \nCitra\n");
/// assert_eq!(roster.names(), &["Ana", "Budi", "Citra"]);
/// assert_eq!(roster.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Roster {
    names: Vec<String>,
}

impl Roster {
    /// Build a roster from raw entries, trimming each and dropping blanks.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = entries
            .into_iter()
            .filter_map(|entry| {
                let trimmed = entry.as_ref().trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .collect();
        Self { names }
    }

    /// Build a roster from newline-delimited text (one name per line).
    pub fn from_text(text: &str) -> Self {
        Self::from_entries(text.lines())
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Total number of entries (`total_people`)
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// How many times each distinct name occurs.
    pub fn occurrences(&self) -> HashMap<&str, usize> {
        let mut counts = HashMap::new();
        for name in &self.names {
            *counts.entry(name.as_str()).or_insert(0) += 1;
        }
        counts
    }
}

impl From<Vec<String>> for Roster {
    fn from(entries: Vec<String>) -> Self {
        Self::from_entries(entries)
    }
}

impl From<Roster> for Vec<String> {
    fn from(roster: Roster) -> Self {
        roster.names
    }
}

//! Membership filter on one categorical column

use std::collections::{BTreeSet, HashSet};

use crate::filter::core::EncounterFilter;
use crate::models::{AgeBracket, CategoricalColumn, Encounter};

/// Sidebar choices that stand for "no restriction"
pub const ALL_MARKERS: [&str; 2] = ["Todos", "Todas"];

/// Keeps encounters whose value in `column` is one of the selected values
///
/// An empty selection restricts nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    column: CategoricalColumn,
    values: BTreeSet<String>,
}

impl CategoryFilter {
    /// Build from raw sidebar choices
    ///
    /// Choices are trimmed and blanks dropped. Any "all" marker clears the
    /// selection. Age bracket choices are accepted by label or variant name.
    #[must_use]
    pub fn new<I, S>(column: CategoricalColumn, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut values = BTreeSet::new();
        for choice in choices {
            let choice = choice.as_ref().trim();
            if choice.is_empty() {
                continue;
            }
            if is_all_marker(choice) {
                values.clear();
                return Self { column, values };
            }
            let value = match column {
                CategoricalColumn::AgeBracket => AgeBracket::parse(choice)
                    .map_or_else(|| choice.to_string(), |bracket| bracket.label().to_string()),
                _ => choice.to_string(),
            };
            values.insert(value);
        }
        Self { column, values }
    }

    /// Column this filter reads
    #[must_use]
    pub const fn column(&self) -> CategoricalColumn {
        self.column
    }

    /// Selected values
    #[must_use]
    pub const fn values(&self) -> &BTreeSet<String> {
        &self.values
    }

    /// Whether this filter lets every encounter through
    #[must_use]
    pub fn is_pass_through(&self) -> bool {
        self.values.is_empty()
    }
}

impl EncounterFilter for CategoryFilter {
    fn matches(&self, encounter: &Encounter) -> bool {
        self.is_pass_through() || self.values.contains(self.column.value(encounter))
    }

    fn required_columns(&self) -> HashSet<CategoricalColumn> {
        HashSet::from([self.column])
    }
}

/// Whether a sidebar choice means "every value"
#[must_use]
pub fn is_all_marker(choice: &str) -> bool {
    ALL_MARKERS
        .iter()
        .any(|marker| marker.eq_ignore_ascii_case(choice.trim()))
}

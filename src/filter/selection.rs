//! Sidebar filter selection
//!
//! A [`FilterSelection`] holds the values picked per filterable column. It
//! is hashable so render passes can be memoized by selection.

use std::collections::BTreeSet;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::collections::EncounterTable;
use crate::filter::category::CategoryFilter;
use crate::filter::core::{AllFilter, EncounterFilter};
use crate::models::CategoricalColumn;
use crate::utils::text::fold_accents;

/// Columns offered as sidebar filters
pub const FILTER_COLUMNS: [CategoricalColumn; 5] = [
    CategoricalColumn::City,
    CategoricalColumn::Sex,
    CategoricalColumn::AgeBracket,
    CategoricalColumn::Service,
    CategoricalColumn::VisitType,
];

/// Selected values per filterable column; an empty set restricts nothing
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSelection {
    /// Selected cities
    pub cities: BTreeSet<String>,
    /// Selected sexes
    pub sexes: BTreeSet<String>,
    /// Selected age brackets, by label
    pub age_brackets: BTreeSet<String>,
    /// Selected services
    pub services: BTreeSet<String>,
    /// Selected visit types
    pub visit_types: BTreeSet<String>,
}

impl FilterSelection {
    /// Selection that restricts nothing
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to the given cities
    #[must_use]
    pub fn with_cities<I, S>(mut self, cities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cities = cities.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict to the given sexes
    #[must_use]
    pub fn with_sexes<I, S>(mut self, sexes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.sexes = sexes.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict to the given age brackets
    #[must_use]
    pub fn with_age_brackets<I, S>(mut self, brackets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.age_brackets = brackets.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict to the given services
    #[must_use]
    pub fn with_services<I, S>(mut self, services: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.services = services.into_iter().map(Into::into).collect();
        self
    }

    /// Restrict to the given visit types
    #[must_use]
    pub fn with_visit_types<I, S>(mut self, visit_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.visit_types = visit_types.into_iter().map(Into::into).collect();
        self
    }

    /// Selected values for a filterable column
    #[must_use]
    pub fn values_for(&self, column: CategoricalColumn) -> Option<&BTreeSet<String>> {
        match column {
            CategoricalColumn::City => Some(&self.cities),
            CategoricalColumn::Sex => Some(&self.sexes),
            CategoricalColumn::AgeBracket => Some(&self.age_brackets),
            CategoricalColumn::Service => Some(&self.services),
            CategoricalColumn::VisitType => Some(&self.visit_types),
            _ => None,
        }
    }

    /// The same selection with diacritics stripped from every value
    ///
    /// Matches tables prepared with accent stripping. `placeholder` is kept
    /// as is, since preparation never folds it.
    #[must_use]
    pub fn with_folded_accents(&self, placeholder: &str) -> Self {
        let fold = |values: &BTreeSet<String>| -> BTreeSet<String> {
            values
                .iter()
                .map(|value| {
                    if value.trim() == placeholder {
                        value.clone()
                    } else {
                        fold_accents(value)
                    }
                })
                .collect()
        };
        Self {
            cities: fold(&self.cities),
            sexes: fold(&self.sexes),
            age_brackets: fold(&self.age_brackets),
            services: fold(&self.services),
            visit_types: fold(&self.visit_types),
        }
    }

    /// Per-column filters of this selection
    #[must_use]
    pub fn category_filters(&self) -> Vec<CategoryFilter> {
        FILTER_COLUMNS
            .iter()
            .filter_map(|column| {
                self.values_for(*column)
                    .map(|values| CategoryFilter::new(*column, values))
            })
            .collect()
    }

    /// Conjunction of the restricting per-column filters
    #[must_use]
    pub fn to_filter(&self) -> AllFilter {
        self.category_filters()
            .into_iter()
            .filter(|filter| !filter.is_pass_through())
            .fold(AllFilter::default(), |all, filter| all.and(filter))
    }

    /// Whether no column is restricted
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.to_filter().is_empty()
    }

    /// Apply the selection, producing a derived table
    #[must_use]
    pub fn apply(&self, table: &EncounterTable) -> EncounterTable {
        let filter = self.to_filter();
        if filter.is_empty() {
            return table.clone();
        }

        let filtered = filter.apply(table);
        debug!(
            "Filter on {:?} kept {} of {} encounters",
            filter.required_columns(),
            filtered.len(),
            table.len()
        );
        filtered
    }
}

/// Sidebar options for a filterable column: its distinct values
#[must_use]
pub fn filter_options(table: &EncounterTable, column: CategoricalColumn) -> Vec<String> {
    table.distinct_values(column)
}

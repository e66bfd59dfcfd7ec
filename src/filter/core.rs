//! Core filtering functionality for encounter tables
//!
//! This module defines the filter trait and the logical combinators used to
//! build a filter out of per-column criteria.

use std::collections::HashSet;
use std::fmt::Debug;
use std::sync::Arc;

use crate::collections::EncounterTable;
use crate::models::{CategoricalColumn, Encounter};

/// Trait for criteria that decide whether an encounter is kept
pub trait EncounterFilter: Debug {
    /// Whether the encounter passes the filter
    fn matches(&self, encounter: &Encounter) -> bool;

    /// Returns the set of columns read by this filter
    fn required_columns(&self) -> HashSet<CategoricalColumn>;

    /// Derived table with the encounters that pass the filter
    fn apply(&self, table: &EncounterTable) -> EncounterTable {
        table.filter(|encounter| self.matches(encounter))
    }
}

/// Shared, type-erased filter
pub type SharedFilter = Arc<dyn EncounterFilter + Send + Sync>;

/// A filter that combines multiple filters with a logical AND
///
/// An empty conjunction keeps every row.
#[derive(Debug, Clone, Default)]
pub struct AllFilter {
    filters: Vec<SharedFilter>,
}

impl AllFilter {
    /// Create a new AND filter
    #[must_use]
    pub fn new(filters: Vec<SharedFilter>) -> Self {
        Self { filters }
    }

    /// Add a filter to the conjunction
    #[must_use]
    pub fn and(mut self, filter: impl EncounterFilter + Send + Sync + 'static) -> Self {
        self.filters.push(Arc::new(filter));
        self
    }

    /// Number of combined filters
    #[must_use]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Whether no filters are combined
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

impl EncounterFilter for AllFilter {
    fn matches(&self, encounter: &Encounter) -> bool {
        self.filters.iter().all(|filter| filter.matches(encounter))
    }

    fn required_columns(&self) -> HashSet<CategoricalColumn> {
        self.filters
            .iter()
            .flat_map(|filter| filter.required_columns())
            .collect()
    }
}

/// A filter that combines multiple filters with a logical OR
///
/// An empty disjunction rejects every row.
#[derive(Debug, Clone, Default)]
pub struct AnyFilter {
    filters: Vec<SharedFilter>,
}

impl AnyFilter {
    /// Create a new OR filter
    #[must_use]
    pub fn new(filters: Vec<SharedFilter>) -> Self {
        Self { filters }
    }
}

impl EncounterFilter for AnyFilter {
    fn matches(&self, encounter: &Encounter) -> bool {
        self.filters.iter().any(|filter| filter.matches(encounter))
    }

    fn required_columns(&self) -> HashSet<CategoricalColumn> {
        self.filters
            .iter()
            .flat_map(|filter| filter.required_columns())
            .collect()
    }
}

/// A filter that negates another filter
#[derive(Debug, Clone)]
pub struct NotFilter {
    inner: SharedFilter,
}

impl NotFilter {
    /// Create a new NOT filter
    #[must_use]
    pub fn new(inner: impl EncounterFilter + Send + Sync + 'static) -> Self {
        Self {
            inner: Arc::new(inner),
        }
    }
}

impl EncounterFilter for NotFilter {
    fn matches(&self, encounter: &Encounter) -> bool {
        !self.inner.matches(encounter)
    }

    fn required_columns(&self) -> HashSet<CategoricalColumn> {
        self.inner.required_columns()
    }
}

//! Aggregations behind the dashboard charts and KPI cards
//!
//! Frequency counts are sorted by descending count with ties broken by
//! ascending value, so every series is deterministic.

use itertools::Itertools;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::collections::EncounterTable;
use crate::models::{AgeBracket, CategoricalColumn};

/// Returned by [`mode`] when there is nothing to count
pub const MODE_SENTINEL: &str = "N/A";

/// Occurrences of one value in a column
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ValueCount {
    /// The counted value
    pub value: String,
    /// Number of occurrences
    pub count: usize,
}

impl ValueCount {
    /// Create a value count
    #[must_use]
    pub fn new(value: impl Into<String>, count: usize) -> Self {
        Self {
            value: value.into(),
            count,
        }
    }
}

/// Count occurrences, most frequent first
pub fn value_counts<'a, I>(values: I) -> Vec<ValueCount>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .sorted_by(|(a_value, a_count), (b_value, b_count)| {
            b_count.cmp(a_count).then_with(|| a_value.cmp(b_value))
        })
        .map(|(value, count)| ValueCount::new(value, count))
        .collect()
}

/// Value counts of a column over the whole table
#[must_use]
pub fn column_counts(table: &EncounterTable, column: CategoricalColumn) -> Vec<ValueCount> {
    value_counts(table.column_values(column))
}

/// The `n` most frequent values of a column, most frequent first
#[must_use]
pub fn top_n(table: &EncounterTable, column: CategoricalColumn, n: usize) -> Vec<ValueCount> {
    let mut counts = column_counts(table, column);
    counts.truncate(n);
    counts
}

/// Encounters per age bracket in bin order, empty brackets included
#[must_use]
pub fn age_bracket_distribution(table: &EncounterTable) -> Vec<ValueCount> {
    let counts = table.iter().counts_by(|encounter| encounter.age_bracket);
    AgeBracket::ALL
        .iter()
        .map(|bracket| ValueCount::new(bracket.label(), counts.get(bracket).copied().unwrap_or(0)))
        .collect()
}

/// Arithmetic mean, `None` for empty input
pub fn mean<I>(values: I) -> Option<f64>
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0_usize), |(sum, count), value| (sum + value, count + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Most frequent value, or [`MODE_SENTINEL`] for empty input
///
/// Ties go to the smallest value.
pub fn mode<'a, I>(values: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    value_counts(values)
        .into_iter()
        .next()
        .map_or_else(|| MODE_SENTINEL.to_string(), |top| top.value)
}

/// Most frequent value of a column
#[must_use]
pub fn column_mode(table: &EncounterTable, column: CategoricalColumn) -> String {
    mode(table.column_values(column))
}

/// Headline figures shown as KPI cards
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kpis {
    /// Number of encounters
    pub total_encounters: usize,
    /// Mean age in years
    pub mean_age: Option<f64>,
    /// Most frequent diagnosis
    pub top_diagnosis: String,
    /// Most frequent complaint
    pub top_complaint: String,
    /// Mean length of stay in hours
    pub mean_stay_hours: Option<f64>,
}

impl Kpis {
    /// Compute the KPI cards of a table
    #[must_use]
    pub fn compute(table: &EncounterTable) -> Self {
        Self {
            total_encounters: table.len(),
            mean_age: mean(table.ages()),
            top_diagnosis: column_mode(table, CategoricalColumn::Diagnosis),
            top_complaint: column_mode(table, CategoricalColumn::Complaint),
            mean_stay_hours: mean(table.stay_hours()),
        }
    }
}

//! Encounter table
//!
//! An ordered, immutable collection of prepared encounters. Records are
//! shared through `Arc`, so filtering produces a derived table without
//! copying or mutating the records themselves.

use std::collections::BTreeSet;
use std::sync::Arc;

use arrow::record_batch::RecordBatch;

use crate::error::Result;
use crate::models::{AgeBracket, CategoricalColumn, Encounter, EncounterRow};

/// Ordered collection of prepared encounters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncounterTable {
    rows: Vec<Arc<Encounter>>,
}

impl EncounterTable {
    /// Create an empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table from prepared encounters
    #[must_use]
    pub fn from_encounters(encounters: Vec<Encounter>) -> Self {
        Self {
            rows: encounters.into_iter().map(Arc::new).collect(),
        }
    }

    /// Number of encounters
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no encounters
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate over the encounters in table order
    pub fn iter(&self) -> impl Iterator<Item = &Encounter> {
        self.rows.iter().map(|encounter| &**encounter)
    }

    /// Encounter at `index`
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Encounter> {
        self.rows.get(index).map(|encounter| &**encounter)
    }

    /// Derived table of the encounters matching `predicate`
    #[must_use]
    pub fn filter<F>(&self, predicate: F) -> Self
    where
        F: Fn(&Encounter) -> bool,
    {
        Self {
            rows: self
                .rows
                .iter()
                .filter(|encounter| predicate(encounter))
                .cloned()
                .collect(),
        }
    }

    /// Split into the encounters matching `predicate` and the rest
    #[must_use]
    pub fn partition<F>(&self, predicate: F) -> (Self, Self)
    where
        F: Fn(&Encounter) -> bool,
    {
        let (matching, rest): (Vec<_>, Vec<_>) = self
            .rows
            .iter()
            .cloned()
            .partition(|encounter| predicate(encounter));
        (Self { rows: matching }, Self { rows: rest })
    }

    /// Values of a categorical column, in table order
    pub fn column_values(&self, column: CategoricalColumn) -> impl Iterator<Item = &str> {
        self.iter().map(move |encounter| column.value(encounter))
    }

    /// Distinct values of a categorical column
    ///
    /// Age brackets come back in bin order, everything else sorted.
    #[must_use]
    pub fn distinct_values(&self, column: CategoricalColumn) -> Vec<String> {
        if column == CategoricalColumn::AgeBracket {
            let present: BTreeSet<AgeBracket> = self.iter().map(|e| e.age_bracket).collect();
            return present.into_iter().map(|b| b.label().to_string()).collect();
        }

        self.column_values(column)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_string)
            .collect()
    }

    /// Ages of all encounters
    pub fn ages(&self) -> impl Iterator<Item = f64> + '_ {
        self.iter().map(|encounter| f64::from(encounter.age))
    }

    /// Lengths of stay of all encounters, in hours
    pub fn stay_hours(&self) -> impl Iterator<Item = f64> + '_ {
        self.iter().map(Encounter::length_of_stay_hours)
    }

    /// Export layout rows
    #[must_use]
    pub fn to_rows(&self) -> Vec<EncounterRow> {
        self.iter().map(Encounter::to_row).collect()
    }

    /// Convert to a record batch with the export schema
    pub fn to_record_batch(&self) -> Result<RecordBatch> {
        EncounterRow::to_record_batch(&self.to_rows())
    }
}

impl FromIterator<Encounter> for EncounterTable {
    fn from_iter<I: IntoIterator<Item = Encounter>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().map(Arc::new).collect(),
        }
    }
}

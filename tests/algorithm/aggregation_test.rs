//! Tests for the frequency counts, summary statistics and KPI cards

use encounter_dashboard::algorithm::aggregation::{
    Kpis, MODE_SENTINEL, ValueCount, age_bracket_distribution, column_counts, mode, top_n,
};
use encounter_dashboard::{CategoricalColumn, EncounterTable};
use pretty_assertions::assert_eq;

use crate::utils::{generated_table, small_table};

#[test]
fn test_top_n_is_bounded_and_sorted() {
    let table = generated_table(1500, 42);
    for n in [1, 5, 10, 15, 40] {
        let series = top_n(&table, CategoricalColumn::Diagnosis, n);
        assert!(series.len() <= n);
        assert!(series.windows(2).all(|pair| pair[0].count >= pair[1].count));
    }
}

#[test]
fn test_diagnosis_counts_sum_to_row_count() {
    let table = generated_table(1500, 7);
    let counts = column_counts(&table, CategoricalColumn::Diagnosis);
    let total: usize = counts.iter().map(|c| c.count).sum();
    assert_eq!(total, table.len());
    assert_eq!(total, 1500);
}

#[test]
fn test_mode_of_empty_table_is_sentinel() {
    let empty = EncounterTable::new();
    assert_eq!(mode(empty.column_values(CategoricalColumn::Diagnosis)), MODE_SENTINEL);
}

#[test]
fn test_small_table_series() {
    let table = small_table();
    assert_eq!(
        top_n(&table, CategoricalColumn::City, 2),
        vec![ValueCount::new("Curitiba", 3), ValueCount::new("Salvador", 1)]
    );
    assert_eq!(
        age_bracket_distribution(&table),
        vec![
            ValueCount::new("Criança", 1),
            ValueCount::new("Adolescente", 1),
            ValueCount::new("Adulto", 1),
            ValueCount::new("Idoso", 2),
        ]
    );
}

#[test]
fn test_kpis_of_small_table() {
    let kpis = Kpis::compute(&small_table());
    assert_eq!(kpis.total_encounters, 5);
    assert_eq!(kpis.mean_age, Some(38.0));
    assert_eq!(kpis.top_diagnosis, "Gripe");
    assert_eq!(kpis.top_complaint, "Dor de cabeça");
    assert_eq!(kpis.mean_stay_hours, Some(4.0));
}

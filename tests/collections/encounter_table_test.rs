//! Tests for the encounter table

use encounter_dashboard::CategoricalColumn;
use pretty_assertions::assert_eq;

use crate::utils::small_table;

#[test]
fn test_distinct_values_sorted() {
    let table = small_table();
    assert_eq!(
        table.distinct_values(CategoricalColumn::City),
        vec!["Curitiba", "Salvador", "São Paulo"]
    );
}

#[test]
fn test_age_brackets_in_bin_order() {
    let table = small_table().filter(|e| e.age > 10);
    assert_eq!(
        table.distinct_values(CategoricalColumn::AgeBracket),
        vec!["Adolescente", "Adulto", "Idoso"]
    );
}

#[test]
fn test_filter_leaves_source_untouched() {
    let table = small_table();
    let filtered = table.filter(|e| e.sex == "Feminino");
    assert_eq!(filtered.len(), 2);
    assert_eq!(table.len(), 5);
}

#[test]
fn test_record_batch_has_export_columns() {
    let batch = small_table().to_record_batch().unwrap();
    assert_eq!(batch.num_rows(), 5);
    let schema = batch.schema();
    let names: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
    assert_eq!(names.first(), Some(&"_id"));
    assert!(names.contains(&"idade"));
    assert!(names.contains(&"faixa_etaria"));
    assert_eq!(names.len(), 15);
}

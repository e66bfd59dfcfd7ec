//! Tests for turning raw rows into prepared encounters

use encounter_dashboard::algorithm::preparation::{PreparationOptions, Preparer};
use encounter_dashboard::models::AgeBracket;
use encounter_dashboard::models::types::AGE_BIN_EDGES;

use crate::utils::{generated_rows, generated_table};

#[test]
fn test_age_bracket_matches_bin() {
    let table = generated_table(1500, 3);
    for encounter in table.iter() {
        let expected = match encounter.age {
            age if age < AGE_BIN_EDGES[1] => AgeBracket::Child,
            age if age < AGE_BIN_EDGES[2] => AgeBracket::Adolescent,
            age if age < AGE_BIN_EDGES[3] => AgeBracket::Adult,
            _ => AgeBracket::Elderly,
        };
        assert_eq!(encounter.age_bracket, expected, "age {}", encounter.age);
        assert!(encounter.age <= 90);
    }
}

#[test]
fn test_discharge_never_precedes_admission() {
    let mut rows = generated_rows(200, 8);
    // Blank out or invert a share of the timestamps
    for (i, row) in rows.iter_mut().enumerate() {
        match i % 4 {
            0 => row.admitted_at = None,
            1 => row.discharged_at = Some("not a date".to_string()),
            2 => row.discharged_at = Some("2022-01-01 00:00:00".to_string()),
            _ => {}
        }
    }

    let mut preparer = Preparer::new(PreparationOptions {
        seed: Some(8),
        ..PreparationOptions::default()
    });
    let (table, report) = preparer.prepare_with_report(&rows);
    assert!(table.iter().all(|e| e.discharged_at >= e.admitted_at));
    assert_eq!(report.synthesized_admissions, 50);
    assert!(report.synthesized_discharges >= 100);
}

#[test]
fn test_generated_rows_need_no_corrections() {
    let rows = generated_rows(300, 12);
    let (_, report) = Preparer::default().prepare_with_report(&rows);
    assert_eq!(report.rows, 300);
    assert_eq!(report.placeholders, 0);
    assert_eq!(report.invalid_birth_dates, 0);
    assert_eq!(report.synthesized_admissions, 0);
    assert_eq!(report.synthesized_discharges, 0);
}

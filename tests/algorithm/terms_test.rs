//! Tests for word-cloud term frequencies

use encounter_dashboard::algorithm::terms::{TermCounter, term_frequencies};

use crate::utils::{encounter, generated_table};
use encounter_dashboard::EncounterTable;

#[test]
fn test_term_frequencies_respect_limit() {
    let table = generated_table(500, 4);
    let terms = term_frequencies(&table, 20);
    assert!(terms.len() <= 20);
    assert!(terms.windows(2).all(|pair| pair[0].count >= pair[1].count));
    assert!(terms.iter().all(|t| t.value.chars().count() > 1));
}

#[test]
fn test_generic_clinical_words_are_dropped() {
    let table = generated_table(500, 4);
    let terms = term_frequencies(&table, 200);
    for dropped in ["crônica", "tipo", "generalizada", "de", "para"] {
        assert!(terms.iter().all(|t| t.value != dropped), "{dropped} kept");
    }
}

#[test]
fn test_plural_complaints_merge() {
    let mut first = encounter("rec_1", "Feminino", "Curitiba", 30, "Gripe");
    first.complaint = "Dores musculares".to_string();
    let second = encounter("rec_2", "Feminino", "Curitiba", 30, "Gripe");
    let table = EncounterTable::from_encounters(vec![first, second]);

    let terms = TermCounter::new().frequencies(&table, 10);
    let dor = terms.iter().find(|t| t.value == "dor").unwrap();
    assert_eq!(dor.count, 2);
    assert!(terms.iter().all(|t| t.value != "dores"));
}

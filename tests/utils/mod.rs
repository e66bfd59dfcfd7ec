use chrono::{NaiveDate, NaiveDateTime};

use encounter_dashboard::algorithm::generator::EncounterGenerator;
use encounter_dashboard::algorithm::preparation::{PreparationOptions, Preparer};
use encounter_dashboard::config::DashboardConfig;
use encounter_dashboard::{AgeBracket, Encounter, EncounterTable, RawEncounter};

/// Default configuration with a fixed seed
#[must_use]
pub fn seeded_config(seed: u64) -> DashboardConfig {
    DashboardConfig {
        seed: Some(seed),
        ..DashboardConfig::default()
    }
}

/// Raw synthetic rows from a seeded generator
#[must_use]
pub fn generated_rows(count: usize, seed: u64) -> Vec<RawEncounter> {
    EncounterGenerator::new(&seeded_config(seed)).generate(count)
}

/// Prepared synthetic table from a seeded generator
#[must_use]
pub fn generated_table(count: usize, seed: u64) -> EncounterTable {
    let config = seeded_config(seed);
    let raw = EncounterGenerator::new(&config).generate(count);
    Preparer::new(PreparationOptions::from(&config)).prepare(&raw)
}

/// Timestamp on a fixed day of 2023
#[must_use]
pub fn timestamp(month: u32, day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, month, day)
        .and_then(|date| date.and_hms_opt(hour, 0, 0))
        .unwrap()
}

/// Hand-built encounter; the remaining text fields are fixed
#[must_use]
pub fn encounter(id: &str, sex: &str, city: &str, age: u32, diagnosis: &str) -> Encounter {
    Encounter {
        id: id.to_string(),
        sex: sex.to_string(),
        city: city.to_string(),
        neighborhood: "Centro".to_string(),
        birth_date: None,
        visit_type: "Consulta".to_string(),
        service: "Clínica Geral".to_string(),
        admitted_at: timestamp(3, 1, 8),
        discharged_at: timestamp(3, 1, 12),
        complaint: "Dor de cabeça".to_string(),
        diagnosis: diagnosis.to_string(),
        procedure: "Consulta Médica".to_string(),
        medication: "Dipirona".to_string(),
        age,
        age_bracket: AgeBracket::from_age(age),
    }
}

/// Small table covering every age bracket and three cities
#[must_use]
pub fn small_table() -> EncounterTable {
    EncounterTable::from_encounters(vec![
        encounter("rec_000000", "Feminino", "Curitiba", 8, "Gripe"),
        encounter("rec_000001", "Masculino", "Salvador", 15, "Gripe"),
        encounter("rec_000002", "Feminino", "Curitiba", 34, "Enxaqueca"),
        encounter("rec_000003", "Outro", "São Paulo", 61, "Cistite"),
        encounter("rec_000004", "Masculino", "Curitiba", 72, "Gripe"),
    ])
}

//! Synthetic encounter generation
//!
//! Used when no source extract is available. Values are drawn uniformly
//! from fixed vocabularies; birth dates give ages between 1 and 90 years at
//! the reference date, and stays last between 1 and 48 hours.

use chrono::{Days, NaiveDate, NaiveDateTime, TimeDelta};
use log::info;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::config::DashboardConfig;
use crate::models::RawEncounter;
use crate::models::encounter::{DATE_FORMAT, TIMESTAMP_FORMAT};

pub const SEXES: [&str; 3] = ["Masculino", "Feminino", "Outro"];

pub const CITIES: [&str; 6] = [
    "São Paulo",
    "Rio de Janeiro",
    "Belo Horizonte",
    "Porto Alegre",
    "Curitiba",
    "Salvador",
];

pub const NEIGHBORHOODS: [&str; 8] = [
    "Centro",
    "Jardins",
    "Barra",
    "Copacabana",
    "Savassi",
    "Cidade Baixa",
    "Pinheiros",
    "Lagoa",
];

pub const VISIT_TYPES: [&str; 5] = ["Consulta", "Emergência", "Exame", "Internação", "Retorno"];

pub const SERVICES: [&str; 6] = [
    "Clínica Geral",
    "Pediatria",
    "Cardiologia",
    "Dermatologia",
    "Ortopedia",
    "Ginecologia",
];

pub const COMPLAINTS: [&str; 15] = [
    "Dor de cabeça",
    "Dor nas costas",
    "Fadiga",
    "Tosse",
    "Dor de garganta",
    "Náusea",
    "Febre",
    "Azia",
    "Dores musculares",
    "Problemas de sono",
    "Alergia",
    "Dificuldade para respirar",
    "Dor no peito",
    "Tontura",
    "Ansiedade",
];

pub const DIAGNOSES: [&str; 16] = [
    "Resfriado Comum",
    "Gripe",
    "Infecção Urinária",
    "Hipertensão Essencial",
    "Diabetes Mellitus Tipo 2",
    "Gastrite Crônica",
    "Enxaqueca",
    "Asma Brônquica",
    "Dermatite Atópica",
    "Ansiedade Generalizada",
    "Depressão Leve",
    "Dor Lombar Inespecífica",
    "Amigdalite Bacteriana",
    "Rinite Alérgica",
    "Osteoartrite",
    "Cistite",
];

pub const PROCEDURES: [&str; 8] = [
    "Consulta Médica",
    "Exame de Sangue",
    "Raio-X",
    "Sutura",
    "Aplicação de Medicamento",
    "Encaminhamento para Especialista",
    "Aferição de Sinais Vitais",
    "Curativo",
];

pub const MEDICATIONS: [&str; 10] = [
    "Paracetamol",
    "Dipirona",
    "Ibuprofeno",
    "Amoxicilina",
    "Omeprazol",
    "Loratadina",
    "Captopril",
    "Metformina",
    "Sinvastatina",
    "Prednisona",
];

/// Seeded RNG, or one seeded from the OS when no seed is given
#[must_use]
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

/// Admission within the year starting at `base_date`
///
/// Falls back to midnight of `base_date` when the offset leaves the
/// representable range.
pub fn synthesize_admission<R: Rng + ?Sized>(rng: &mut R, base_date: NaiveDate) -> NaiveDateTime {
    let midnight = base_date.and_time(chrono::NaiveTime::MIN);
    let offset = TimeDelta::days(rng.random_range(0..=364))
        + TimeDelta::hours(rng.random_range(0..=23))
        + TimeDelta::minutes(rng.random_range(0..=59));
    midnight.checked_add_signed(offset).unwrap_or(midnight)
}

/// Discharge between 1 and 48 hours after `admitted_at`
///
/// An admission too close to the end of the representable range is
/// discharged at the same instant.
pub fn synthesize_discharge<R: Rng + ?Sized>(rng: &mut R, admitted_at: NaiveDateTime) -> NaiveDateTime {
    admitted_at
        .checked_add_signed(TimeDelta::hours(rng.random_range(1..=48)))
        .unwrap_or(admitted_at)
}

/// Generator of synthetic raw encounters
#[derive(Debug, Clone)]
pub struct EncounterGenerator {
    rng: StdRng,
    reference_date: NaiveDate,
    admission_base_date: NaiveDate,
}

impl EncounterGenerator {
    /// Create a generator following the configured dates and seed
    #[must_use]
    pub fn new(config: &DashboardConfig) -> Self {
        Self {
            rng: rng_from_seed(config.seed),
            reference_date: config.reference_date,
            admission_base_date: config.admission_base_date,
        }
    }

    /// Generate `count` raw encounters with identifiers `rec_000000` onwards
    pub fn generate(&mut self, count: usize) -> Vec<RawEncounter> {
        let encounters: Vec<RawEncounter> = (0..count).map(|i| self.encounter(i)).collect();
        info!("Generated {} synthetic encounters", encounters.len());
        encounters
    }

    fn encounter(&mut self, index: usize) -> RawEncounter {
        let rng = &mut self.rng;
        let age_days = rng.random_range(365..=365 * 90);
        let birth_date = self
            .reference_date
            .checked_sub_days(Days::new(age_days))
            .map(|date| date.format(DATE_FORMAT).to_string());
        let admitted_at = synthesize_admission(rng, self.admission_base_date);
        let discharged_at = synthesize_discharge(rng, admitted_at);

        RawEncounter {
            id: Some(format!("rec_{index:06}")),
            sex: pick(rng, &SEXES),
            city: pick(rng, &CITIES),
            neighborhood: pick(rng, &NEIGHBORHOODS),
            birth_date,
            visit_type: pick(rng, &VISIT_TYPES),
            service: pick(rng, &SERVICES),
            admitted_at: Some(admitted_at.format(TIMESTAMP_FORMAT).to_string()),
            discharged_at: Some(discharged_at.format(TIMESTAMP_FORMAT).to_string()),
            complaint: pick(rng, &COMPLAINTS),
            diagnosis: pick(rng, &DIAGNOSES),
            procedure: pick(rng, &PROCEDURES),
            medication: pick(rng, &MEDICATIONS),
        }
    }
}

fn pick<R: Rng + ?Sized>(rng: &mut R, options: &[&str]) -> Option<String> {
    options.choose(rng).map(|value| (*value).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> EncounterGenerator {
        EncounterGenerator::new(&DashboardConfig {
            seed: Some(seed),
            ..DashboardConfig::default()
        })
    }

    #[test]
    fn same_seed_same_table() {
        assert_eq!(seeded(42).generate(50), seeded(42).generate(50));
    }

    #[test]
    fn identifiers_are_sequential() {
        let rows = seeded(1).generate(3);
        let ids: Vec<_> = rows.iter().map(|r| r.id.clone().unwrap()).collect();
        assert_eq!(ids, vec!["rec_000000", "rec_000001", "rec_000002"]);
    }

    #[test]
    fn every_field_is_filled_from_its_vocabulary() {
        for row in seeded(9).generate(200) {
            assert!(SEXES.contains(&row.sex.as_deref().unwrap()));
            assert!(CITIES.contains(&row.city.as_deref().unwrap()));
            assert!(DIAGNOSES.contains(&row.diagnosis.as_deref().unwrap()));
            assert!(COMPLAINTS.contains(&row.complaint.as_deref().unwrap()));
            assert!(row.birth_date.is_some());
        }
    }

    #[test]
    fn discharge_follows_admission() {
        let mut rng = rng_from_seed(Some(3));
        let base = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
        for _ in 0..500 {
            let admitted = synthesize_admission(&mut rng, base);
            let discharged = synthesize_discharge(&mut rng, admitted);
            assert!(admitted.date() >= base);
            assert!(admitted.date() < NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
            let stay = discharged - admitted;
            assert!(stay >= TimeDelta::hours(1) && stay <= TimeDelta::hours(48));
        }
    }

    #[test]
    fn synthesis_at_the_end_of_time_does_not_overflow() {
        let mut rng = rng_from_seed(Some(4));
        let admitted = NaiveDateTime::MAX - TimeDelta::minutes(30);
        assert_eq!(synthesize_discharge(&mut rng, admitted), admitted);

        let base = NaiveDate::MAX;
        let admitted = synthesize_admission(&mut rng, base);
        assert_eq!(admitted.date(), base);
    }
}

//! Data preparation: raw rows to prepared encounters
//!
//! Categorical nulls become the placeholder label, dates are parsed with
//! invalid values coerced to `None`, and age plus age bracket are derived
//! against a fixed reference date. Missing or inconsistent timestamps are
//! backfilled so that discharge never precedes admission.

use chrono::{NaiveDate, NaiveDateTime};
use log::{debug, info};
use rand::rngs::StdRng;

use crate::algorithm::generator::{rng_from_seed, synthesize_admission, synthesize_discharge};
use crate::collections::EncounterTable;
use crate::config::DashboardConfig;
use crate::models::{AgeBracket, Encounter, RawEncounter};
use crate::utils::dates::{DateFormatConfig, parse_date_string, parse_timestamp_string};
use crate::utils::text::{fold_accents, non_blank};

/// Days per year used for age computation
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Whole years between `birth_date` and `reference_date`
///
/// A missing birth date, or one after the reference date, gives 0.
#[must_use]
pub fn compute_age(birth_date: Option<NaiveDate>, reference_date: NaiveDate) -> u32 {
    let Some(birth_date) = birth_date else {
        return 0;
    };
    let days = (reference_date - birth_date).num_days();
    if days <= 0 {
        return 0;
    }
    (days as f64 / DAYS_PER_YEAR).floor() as u32
}

/// Settings of a preparation pass
#[derive(Debug, Clone)]
pub struct PreparationOptions {
    /// Date ages are computed against
    pub reference_date: NaiveDate,
    /// Base date for backfilled admissions
    pub admission_base_date: NaiveDate,
    /// Label substituted for missing categorical values
    pub placeholder: String,
    /// Strip diacritics from categorical values
    pub strip_accents: bool,
    /// Accepted date layouts
    pub date_formats: DateFormatConfig,
    /// Seed for timestamp backfill
    pub seed: Option<u64>,
}

impl From<&DashboardConfig> for PreparationOptions {
    fn from(config: &DashboardConfig) -> Self {
        Self {
            reference_date: config.reference_date,
            admission_base_date: config.admission_base_date,
            placeholder: config.placeholder.clone(),
            strip_accents: config.strip_accents,
            date_formats: DateFormatConfig::default(),
            seed: config.seed,
        }
    }
}

impl Default for PreparationOptions {
    fn default() -> Self {
        Self::from(&DashboardConfig::default())
    }
}

/// Counts of the corrections applied during a preparation pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreparationReport {
    /// Rows prepared
    pub rows: usize,
    /// Categorical values replaced by the placeholder
    pub placeholders: usize,
    /// Birth dates present but unparseable
    pub invalid_birth_dates: usize,
    /// Admissions synthesized because missing or unparseable
    pub synthesized_admissions: usize,
    /// Discharges synthesized because missing, unparseable or before admission
    pub synthesized_discharges: usize,
    /// Identifiers synthesized because missing
    pub synthesized_ids: usize,
}

/// Turns raw rows into prepared encounters
#[derive(Debug, Clone)]
pub struct Preparer {
    options: PreparationOptions,
    rng: StdRng,
    report: PreparationReport,
}

impl Preparer {
    /// Create a preparer with the given options
    #[must_use]
    pub fn new(options: PreparationOptions) -> Self {
        let rng = rng_from_seed(options.seed);
        Self {
            options,
            rng,
            report: PreparationReport::default(),
        }
    }

    /// Prepare a whole raw table
    pub fn prepare(&mut self, rows: &[RawEncounter]) -> EncounterTable {
        self.prepare_with_report(rows).0
    }

    /// Prepare a whole raw table and report the corrections applied
    pub fn prepare_with_report(
        &mut self,
        rows: &[RawEncounter],
    ) -> (EncounterTable, PreparationReport) {
        self.report = PreparationReport::default();

        let table: EncounterTable = rows
            .iter()
            .enumerate()
            .map(|(index, raw)| self.prepare_row(index, raw))
            .collect();

        let report = self.report;
        info!(
            "Prepared {} encounters ({} placeholders, {} invalid birth dates, {} admissions and {} discharges synthesized)",
            report.rows,
            report.placeholders,
            report.invalid_birth_dates,
            report.synthesized_admissions,
            report.synthesized_discharges
        );
        (table, report)
    }

    /// Prepare one raw row; `index` names rows without an identifier
    pub fn prepare_row(&mut self, index: usize, raw: &RawEncounter) -> Encounter {
        self.report.rows += 1;

        let id = match non_blank(raw.id.as_deref()) {
            Some(id) => id.to_string(),
            None => {
                self.report.synthesized_ids += 1;
                format!("rec_{index:06}")
            }
        };

        let birth_date = self.birth_date(raw.birth_date.as_deref());
        let age = compute_age(birth_date, self.options.reference_date);
        let (admitted_at, discharged_at) =
            self.stay(raw.admitted_at.as_deref(), raw.discharged_at.as_deref());

        Encounter {
            id,
            sex: self.categorical(raw.sex.as_deref()),
            city: self.categorical(raw.city.as_deref()),
            neighborhood: self.categorical(raw.neighborhood.as_deref()),
            birth_date,
            visit_type: self.categorical(raw.visit_type.as_deref()),
            service: self.categorical(raw.service.as_deref()),
            admitted_at,
            discharged_at,
            complaint: self.categorical(raw.complaint.as_deref()),
            diagnosis: self.categorical(raw.diagnosis.as_deref()),
            procedure: self.categorical(raw.procedure.as_deref()),
            medication: self.categorical(raw.medication.as_deref()),
            age,
            age_bracket: AgeBracket::from_age(age),
        }
    }

    fn categorical(&mut self, value: Option<&str>) -> String {
        match non_blank(value) {
            Some(value) if self.options.strip_accents => fold_accents(value),
            Some(value) => value.to_string(),
            None => {
                self.report.placeholders += 1;
                self.options.placeholder.clone()
            }
        }
    }

    fn birth_date(&mut self, value: Option<&str>) -> Option<NaiveDate> {
        let value = non_blank(value)?;
        let parsed = parse_date_string(value, &self.options.date_formats);
        if parsed.is_none() {
            debug!("Unparseable birth date '{value}' coerced to null");
            self.report.invalid_birth_dates += 1;
        }
        parsed
    }

    fn stay(
        &mut self,
        admitted: Option<&str>,
        discharged: Option<&str>,
    ) -> (NaiveDateTime, NaiveDateTime) {
        let formats = &self.options.date_formats;
        let admitted_at = non_blank(admitted).and_then(|s| parse_timestamp_string(s, formats));
        let discharged_at = non_blank(discharged).and_then(|s| parse_timestamp_string(s, formats));

        let admitted_at = admitted_at.unwrap_or_else(|| {
            self.report.synthesized_admissions += 1;
            synthesize_admission(&mut self.rng, self.options.admission_base_date)
        });

        let discharged_at = match discharged_at {
            Some(discharged_at) if discharged_at >= admitted_at => discharged_at,
            _ => {
                self.report.synthesized_discharges += 1;
                synthesize_discharge(&mut self.rng, admitted_at)
            }
        };

        (admitted_at, discharged_at)
    }
}

impl Default for Preparer {
    fn default() -> Self {
        Self::new(PreparationOptions::default())
    }
}

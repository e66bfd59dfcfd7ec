//! Render model of one dashboard pass
//!
//! A [`DashboardView`] holds everything the page draws for a filtered table:
//! KPI cards, bar-chart series, distributions, word frequencies and the raw
//! table behind the download button.

use std::sync::Arc;

use serde::Serialize;

use crate::algorithm::aggregation::{
    Kpis, ValueCount, age_bracket_distribution, column_counts, top_n,
};
use crate::algorithm::terms::TermCounter;
use crate::collections::EncounterTable;
use crate::config::DashboardConfig;
use crate::models::CategoricalColumn;

/// Series lengths and value conventions used by a render pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSettings {
    /// Length of the diagnosis and complaint series
    pub top_n: usize,
    /// Length of the city series
    pub city_top_n: usize,
    /// Number of word-cloud terms
    pub term_limit: usize,
    /// Placeholder label, left out of the word cloud
    pub placeholder: String,
    /// Whether the table was prepared with accent stripping
    pub strip_accents: bool,
}

impl From<&DashboardConfig> for RenderSettings {
    fn from(config: &DashboardConfig) -> Self {
        Self {
            top_n: config.top_n,
            city_top_n: config.city_top_n,
            term_limit: config.term_limit,
            placeholder: config.placeholder.clone(),
            strip_accents: config.strip_accents,
        }
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self::from(&DashboardConfig::default())
    }
}

/// Everything drawn for one non-empty filtered table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    /// Headline KPI cards
    pub kpis: Kpis,
    /// Most frequent diagnoses, longest bar first
    pub top_diagnoses: Vec<ValueCount>,
    /// Most frequent complaints, longest bar first
    pub top_complaints: Vec<ValueCount>,
    /// Encounters per sex
    pub sex_distribution: Vec<ValueCount>,
    /// In bin order, empty brackets included
    pub age_brackets: Vec<ValueCount>,
    /// Most frequent cities
    pub top_cities: Vec<ValueCount>,
    /// Encounters per service
    pub services: Vec<ValueCount>,
    /// Encounters per visit type
    pub visit_types: Vec<ValueCount>,
    /// Word-cloud frequencies over diagnoses and complaints
    pub terms: Vec<ValueCount>,
    /// The filtered rows
    #[serde(skip)]
    pub table: Arc<EncounterTable>,
}

impl DashboardView {
    /// Run every aggregation over `table`
    #[must_use]
    pub fn compute(table: Arc<EncounterTable>, settings: &RenderSettings) -> Self {
        let counter = TermCounter::new().skip_value(settings.placeholder.as_str());
        Self {
            kpis: Kpis::compute(&table),
            top_diagnoses: top_n(&table, CategoricalColumn::Diagnosis, settings.top_n),
            top_complaints: top_n(&table, CategoricalColumn::Complaint, settings.top_n),
            sex_distribution: column_counts(&table, CategoricalColumn::Sex),
            age_brackets: age_bracket_distribution(&table),
            top_cities: top_n(&table, CategoricalColumn::City, settings.city_top_n),
            services: column_counts(&table, CategoricalColumn::Service),
            visit_types: column_counts(&table, CategoricalColumn::VisitType),
            terms: counter.frequencies(&table, settings.term_limit),
            table,
        }
    }

    /// Plain-text summary of the view
    #[must_use]
    pub fn generate_summary(&self) -> String {
        let kpis = &self.kpis;
        let mut summary = String::new();
        summary.push_str("Encounter Dashboard Summary:\n");
        summary.push_str(&format!("  Total Encounters: {}\n", kpis.total_encounters));
        summary.push_str(&format!("  Mean Age: {}\n", format_optional(kpis.mean_age, "years")));
        summary.push_str(&format!("  Top Diagnosis: {}\n", kpis.top_diagnosis));
        summary.push_str(&format!("  Top Complaint: {}\n", kpis.top_complaint));
        summary.push_str(&format!(
            "  Mean Length of Stay: {}\n",
            format_optional(kpis.mean_stay_hours, "hours")
        ));

        push_series(&mut summary, "Top Diagnoses", &self.top_diagnoses);
        push_series(&mut summary, "Top Complaints", &self.top_complaints);
        push_series(&mut summary, "Sex", &self.sex_distribution);
        push_series(&mut summary, "Age Brackets", &self.age_brackets);
        push_series(&mut summary, "Top Cities", &self.top_cities);
        push_series(&mut summary, "Services", &self.services);
        push_series(&mut summary, "Visit Types", &self.visit_types);
        push_series(&mut summary, "Frequent Terms", &self.terms);
        summary
    }
}

fn format_optional(value: Option<f64>, unit: &str) -> String {
    value.map_or_else(|| "-".to_string(), |value| format!("{value:.1} {unit}"))
}

fn push_series(summary: &mut String, title: &str, series: &[ValueCount]) {
    let total: usize = series.iter().map(|entry| entry.count).sum();
    summary.push_str(&format!("\n{title}:\n"));
    for entry in series {
        let percentage = if total > 0 {
            (entry.count as f64 / total as f64) * 100.0
        } else {
            0.0
        };
        summary.push_str(&format!(
            "  {}: {} ({percentage:.1}%)\n",
            entry.value, entry.count
        ));
    }
}

/// Outcome of a render pass
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "view", rename_all = "snake_case")]
pub enum Render {
    /// The filters left no encounters; nothing was aggregated
    NoData,
    /// Aggregations over the filtered encounters
    View(DashboardView),
}

impl Render {
    /// Whether the filters left no encounters
    #[must_use]
    pub const fn is_no_data(&self) -> bool {
        matches!(self, Self::NoData)
    }

    /// The computed view, if any
    #[must_use]
    pub const fn view(&self) -> Option<&DashboardView> {
        match self {
            Self::View(view) => Some(view),
            Self::NoData => None,
        }
    }

    /// Render as JSON for the presentation layer
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

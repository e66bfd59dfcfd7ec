//! Configuration for the encounter dashboard.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::filter::FilterSelection;

/// Default source extract looked up when no path is configured
pub const DEFAULT_SOURCE_PATH: &str = "saude_processada.csv";

/// Default label substituted for missing categorical values
pub const DEFAULT_PLACEHOLDER: &str = "Não informado";

/// Configuration for loading, preparing and aggregating encounters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Source extract (CSV, or Parquet by extension); synthetic data is used when missing
    pub source_path: PathBuf,
    /// Date ages are computed against
    pub reference_date: NaiveDate,
    /// Base date for synthesized admission timestamps
    pub admission_base_date: NaiveDate,
    /// Number of synthetic encounters generated when the source is missing
    pub synthetic_records: usize,
    /// Seed for synthetic data and timestamp backfill; random when `None`
    pub seed: Option<u64>,
    /// Length of the top-N diagnosis and complaint series
    pub top_n: usize,
    /// Length of the top-N city series
    pub city_top_n: usize,
    /// Number of terms kept for the word cloud
    pub term_limit: usize,
    /// Label substituted for missing categorical values
    pub placeholder: String,
    /// Strip diacritics from categorical values during preparation
    pub strip_accents: bool,
    /// Rows per batch when reading source files
    pub batch_size: usize,
    /// Active sidebar selection
    pub filters: FilterSelection,
    /// Where the filtered table is exported (CSV, or Parquet by extension)
    pub export_path: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_SOURCE_PATH),
            reference_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap_or_default(),
            admission_base_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default(),
            synthetic_records: 1500,
            seed: None,
            top_n: 15,
            city_top_n: 10,
            term_limit: 50,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            strip_accents: false,
            batch_size: crate::utils::io::DEFAULT_BATCH_SIZE,
            filters: FilterSelection::default(),
            export_path: None,
        }
    }
}

impl DashboardConfig {
    /// Load a configuration from a JSON file; absent keys keep their defaults
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings no render pass can honor
    pub fn validate(&self) -> Result<()> {
        if self.top_n == 0 || self.city_top_n == 0 {
            return Err(Error::Config("top-N lengths must be at least 1".to_string()).into());
        }
        if self.batch_size == 0 {
            return Err(Error::Config("batch_size must be at least 1".to_string()).into());
        }
        if self.placeholder.trim().is_empty() {
            return Err(Error::Config("placeholder must not be blank".to_string()).into());
        }
        Ok(())
    }
}

impl fmt::Display for DashboardConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Dashboard Configuration:")?;
        writeln!(f, "  Source: {}", self.source_path.display())?;
        writeln!(f, "  Reference Date: {}", self.reference_date)?;
        writeln!(f, "  Synthetic Records: {}", self.synthetic_records)?;
        if let Some(seed) = self.seed {
            writeln!(f, "  Seed: {seed}")?;
        }
        writeln!(f, "  Top N: {} (cities: {})", self.top_n, self.city_top_n)?;
        writeln!(f, "  Placeholder: {}", self.placeholder)?;
        writeln!(f, "  Strip Accents: {}", self.strip_accents)?;
        if let Some(export) = &self.export_path {
            writeln!(f, "  Export: {}", export.display())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_json_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"top_n": 10, "seed": 7, "filters": {{"cities": ["Curitiba"]}}}}"#
        )
        .unwrap();

        let config = DashboardConfig::from_json_file(file.path()).unwrap();
        assert_eq!(config.top_n, 10);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.city_top_n, 10);
        assert_eq!(config.placeholder, DEFAULT_PLACEHOLDER);
        assert_eq!(config.reference_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert!(config.filters.cities.contains("Curitiba"));
    }

    #[test]
    fn zero_top_n_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"top_n": 0}}"#).unwrap();
        let err = DashboardConfig::from_json_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("top-N"));
    }

    #[test]
    fn invalid_json_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = DashboardConfig::from_json_file(file.path()).unwrap_err();
        assert!(err.downcast_ref::<Error>().is_some());
    }
}

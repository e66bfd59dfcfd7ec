//! Column names and categorical column accessors
//!
//! Source column names follow the CSV header of the encounter extract.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::Encounter;

/// Record identifier
pub const ID: &str = "_id";
/// Sex
pub const SEX: &str = "sexo";
/// City
pub const CITY: &str = "cidade";
/// Neighborhood
pub const NEIGHBORHOOD: &str = "bairro";
/// Birth date
pub const BIRTH_DATE: &str = "dataNascimento";
/// Visit type
pub const VISIT_TYPE: &str = "tipo";
/// Service
pub const SERVICE: &str = "servico";
/// Admission timestamp
pub const ADMITTED_AT: &str = "dataEntrada";
/// Discharge timestamp
pub const DISCHARGED_AT: &str = "dataSaida";
/// Complaint text
pub const COMPLAINT: &str = "queixa";
/// Diagnosis text
pub const DIAGNOSIS: &str = "diagnostico";
/// Procedure text
pub const PROCEDURE: &str = "procedimento";
/// Medication text
pub const MEDICATION: &str = "descricaoMedicamento";
/// Derived age in years
pub const AGE: &str = "idade";
/// Derived age bracket
pub const AGE_BRACKET: &str = "faixa_etaria";

/// The source columns, in header order
pub const SOURCE_COLUMNS: [&str; 13] = [
    ID,
    SEX,
    CITY,
    NEIGHBORHOOD,
    BIRTH_DATE,
    VISIT_TYPE,
    SERVICE,
    ADMITTED_AT,
    DISCHARGED_AT,
    COMPLAINT,
    DIAGNOSIS,
    PROCEDURE,
    MEDICATION,
];

/// A categorical field of an encounter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoricalColumn {
    /// Patient sex
    Sex,
    /// City of residence
    City,
    /// Neighborhood of residence
    Neighborhood,
    /// Kind of visit
    VisitType,
    /// Attending service
    Service,
    /// Chief complaint
    Complaint,
    /// Recorded diagnosis
    Diagnosis,
    /// Procedure performed
    Procedure,
    /// Medication given
    Medication,
    /// Age bracket label derived from age
    AgeBracket,
}

impl CategoricalColumn {
    /// Every categorical column
    pub const ALL: [Self; 10] = [
        Self::Sex,
        Self::City,
        Self::Neighborhood,
        Self::VisitType,
        Self::Service,
        Self::Complaint,
        Self::Diagnosis,
        Self::Procedure,
        Self::Medication,
        Self::AgeBracket,
    ];

    /// Column name in the source and export tables
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sex => SEX,
            Self::City => CITY,
            Self::Neighborhood => NEIGHBORHOOD,
            Self::VisitType => VISIT_TYPE,
            Self::Service => SERVICE,
            Self::Complaint => COMPLAINT,
            Self::Diagnosis => DIAGNOSIS,
            Self::Procedure => PROCEDURE,
            Self::Medication => MEDICATION,
            Self::AgeBracket => AGE_BRACKET,
        }
    }

    /// Look up a column by its table name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|column| column.name() == name)
    }

    /// The encounter's value for this column
    #[must_use]
    pub fn value(self, encounter: &Encounter) -> &str {
        match self {
            Self::Sex => &encounter.sex,
            Self::City => &encounter.city,
            Self::Neighborhood => &encounter.neighborhood,
            Self::VisitType => &encounter.visit_type,
            Self::Service => &encounter.service,
            Self::Complaint => &encounter.complaint,
            Self::Diagnosis => &encounter.diagnosis,
            Self::Procedure => &encounter.procedure,
            Self::Medication => &encounter.medication,
            Self::AgeBracket => encounter.age_bracket.label(),
        }
    }
}

impl fmt::Display for CategoricalColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

//! Encounter entity model
//!
//! [`RawEncounter`] mirrors one row of the source extract as optional
//! strings. [`Encounter`] is the prepared record the dashboard works on:
//! placeholders instead of nulls, parsed dates and the derived age fields.

use std::sync::Arc;

use arrow::datatypes::{DataType, Field, FieldRef, Schema};
use arrow::record_batch::RecordBatch;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::column;
use crate::models::types::AgeBracket;

/// Format used when writing birth dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Format used when writing admission and discharge timestamps
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One unprepared row of the source extract
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEncounter {
    #[serde(rename = "_id")]
    pub id: Option<String>,
    #[serde(rename = "sexo")]
    pub sex: Option<String>,
    #[serde(rename = "cidade")]
    pub city: Option<String>,
    #[serde(rename = "bairro")]
    pub neighborhood: Option<String>,
    #[serde(rename = "dataNascimento")]
    pub birth_date: Option<String>,
    #[serde(rename = "tipo")]
    pub visit_type: Option<String>,
    #[serde(rename = "servico")]
    pub service: Option<String>,
    #[serde(rename = "dataEntrada")]
    pub admitted_at: Option<String>,
    #[serde(rename = "dataSaida")]
    pub discharged_at: Option<String>,
    #[serde(rename = "queixa")]
    pub complaint: Option<String>,
    #[serde(rename = "diagnostico")]
    pub diagnosis: Option<String>,
    #[serde(rename = "procedimento")]
    pub procedure: Option<String>,
    #[serde(rename = "descricaoMedicamento")]
    pub medication: Option<String>,
}

impl RawEncounter {
    /// Arrow schema of the source extract: every column a nullable string
    #[must_use]
    pub fn schema() -> Schema {
        Schema::new(
            column::SOURCE_COLUMNS
                .iter()
                .map(|name| Field::new(*name, DataType::Utf8, true))
                .collect::<Vec<_>>(),
        )
    }

    /// Deserialize raw rows from a batch already normalized to [`Self::schema`]
    pub fn from_record_batch(batch: &RecordBatch) -> Result<Vec<Self>> {
        serde_arrow::from_record_batch(batch)
            .map_err(|e| Error::Conversion(format!("Failed to deserialize encounters: {e}")).into())
    }

    /// Serialize raw rows into a batch with [`Self::schema`]
    pub fn to_record_batch(rows: &[Self]) -> Result<RecordBatch> {
        let fields: Vec<FieldRef> = Self::schema().fields().iter().map(Arc::clone).collect();
        serde_arrow::to_record_batch(&fields, &rows)
            .map_err(|e| Error::Conversion(format!("Failed to serialize encounters: {e}")).into())
    }
}

/// A prepared clinical encounter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encounter {
    /// Record identifier
    pub id: String,
    /// Patient sex
    pub sex: String,
    /// City of residence
    pub city: String,
    /// Neighborhood of residence
    pub neighborhood: String,
    /// Birth date, `None` when missing or unparseable
    pub birth_date: Option<NaiveDate>,
    /// Kind of visit (consultation, emergency, ...)
    pub visit_type: String,
    /// Service that handled the visit
    pub service: String,
    /// Admission timestamp
    pub admitted_at: NaiveDateTime,
    /// Discharge timestamp, never earlier than admission
    pub discharged_at: NaiveDateTime,
    /// Chief complaint
    pub complaint: String,
    /// Diagnosis
    pub diagnosis: String,
    /// Procedure performed
    pub procedure: String,
    /// Medication description
    pub medication: String,
    /// Age in whole years at the reference date
    pub age: u32,
    /// Bracket containing `age`
    pub age_bracket: AgeBracket,
}

impl Encounter {
    /// Time between admission and discharge
    #[must_use]
    pub fn length_of_stay(&self) -> chrono::TimeDelta {
        self.discharged_at - self.admitted_at
    }

    /// Length of stay in fractional hours
    #[must_use]
    pub fn length_of_stay_hours(&self) -> f64 {
        self.length_of_stay().num_minutes() as f64 / 60.0
    }

    /// Flatten into the export row layout
    #[must_use]
    pub fn to_row(&self) -> EncounterRow {
        EncounterRow {
            id: self.id.clone(),
            sex: self.sex.clone(),
            city: self.city.clone(),
            neighborhood: self.neighborhood.clone(),
            birth_date: self.birth_date.map(|d| d.format(DATE_FORMAT).to_string()),
            visit_type: self.visit_type.clone(),
            service: self.service.clone(),
            admitted_at: self.admitted_at.format(TIMESTAMP_FORMAT).to_string(),
            discharged_at: self.discharged_at.format(TIMESTAMP_FORMAT).to_string(),
            complaint: self.complaint.clone(),
            diagnosis: self.diagnosis.clone(),
            procedure: self.procedure.clone(),
            medication: self.medication.clone(),
            age: self.age,
            age_bracket: self.age_bracket.label().to_string(),
        }
    }
}

/// Export layout of a prepared encounter: the source columns plus the
/// derived `idade` and `faixa_etaria`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncounterRow {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "sexo")]
    pub sex: String,
    #[serde(rename = "cidade")]
    pub city: String,
    #[serde(rename = "bairro")]
    pub neighborhood: String,
    #[serde(rename = "dataNascimento")]
    pub birth_date: Option<String>,
    #[serde(rename = "tipo")]
    pub visit_type: String,
    #[serde(rename = "servico")]
    pub service: String,
    #[serde(rename = "dataEntrada")]
    pub admitted_at: String,
    #[serde(rename = "dataSaida")]
    pub discharged_at: String,
    #[serde(rename = "queixa")]
    pub complaint: String,
    #[serde(rename = "diagnostico")]
    pub diagnosis: String,
    #[serde(rename = "procedimento")]
    pub procedure: String,
    #[serde(rename = "descricaoMedicamento")]
    pub medication: String,
    #[serde(rename = "idade")]
    pub age: u32,
    #[serde(rename = "faixa_etaria")]
    pub age_bracket: String,
}

impl EncounterRow {
    /// Arrow schema of the export table
    #[must_use]
    pub fn schema() -> Schema {
        let mut fields: Vec<Field> = column::SOURCE_COLUMNS
            .iter()
            .map(|name| Field::new(*name, DataType::Utf8, *name == column::BIRTH_DATE))
            .collect();
        fields.push(Field::new(column::AGE, DataType::UInt32, false));
        fields.push(Field::new(column::AGE_BRACKET, DataType::Utf8, false));
        Schema::new(fields)
    }

    /// Serialize export rows into a batch with [`Self::schema`]
    pub fn to_record_batch(rows: &[Self]) -> Result<RecordBatch> {
        let fields: Vec<FieldRef> = Self::schema().fields().iter().map(Arc::clone).collect();
        serde_arrow::to_record_batch(&fields, &rows)
            .map_err(|e| Error::Conversion(format!("Failed to serialize export rows: {e}")).into())
    }
}

//! Street-vending permits (comercio ambulatorio).
//!
//! A permit is produced in three steps that share data: the evaluation report,
//! the resolution and the certificate. Each step's data is kept in the
//! session so the next one only asks for what is new.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    Femenino,
    Masculino,
}

impl Gender {
    pub fn label(self) -> &'static str {
        match self {
            Gender::Femenino => "Femenino",
            Gender::Masculino => "Masculino",
        }
    }
}

/// Unit in which the permit term is granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TermUnit {
    #[default]
    #[serde(rename = "meses")]
    Months,
    #[serde(rename = "años")]
    Years,
}

/// Selects the resolution template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResolutionKind {
    #[default]
    Nuevo,
    DentroDeTiempo,
    FueraDeTiempo,
}

impl ResolutionKind {
    pub fn template(self) -> &'static str {
        match self {
            ResolutionKind::Nuevo => "resolucion_nuevo.docx",
            ResolutionKind::DentroDeTiempo => "resolucion_dentro_tiempo.docx",
            ResolutionKind::FueraDeTiempo => "resolucion_fuera_tiempo.docx",
        }
    }
}

/// Validated evaluation data, reused by the resolution and the certificate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PermitEvaluation {
    pub gender: Gender,
    pub evaluation_code: String,
    pub applicant_name: String,
    pub document_id: String,
    pub ds_number: String,
    pub fiscal_address: String,
    pub intake_date: NaiveDate,
    pub evaluation_date: NaiveDate,
    pub trade: String,
    pub location: String,
    pub coordinates: String,
    pub reference: String,
    pub schedule: String,
    pub term: u32,
    pub term_label: String,
    pub category: String,
    pub category_code: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PermitResolution {
    pub kind: ResolutionKind,
    pub resolution_code: String,
    pub resolution_date: NaiveDate,
    pub validity_start: NaiveDate,
    pub validity_end: NaiveDate,
    pub certificate_code: String,
    pub previous_certificate: String,
    pub previous_issued: Option<NaiveDate>,
    pub previous_expiry: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PermitCertificate {
    pub certificate_date: NaiveDate,
}

/// One entry of the trade catalog of the street-vending ordinance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Trade {
    pub label: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    pub code: &'static str,
}

/// Evaluation fields recovered from a registered documento simple.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EvaluationPrefill {
    pub ds_number: String,
    pub applicant_name: String,
    pub document_id: String,
    pub fiscal_address: String,
    pub location: String,
    pub phone: String,
    pub trade_label: Option<String>,
    pub trade_text: Option<String>,
    pub reference: String,
    pub intake_date: Option<NaiveDate>,
}

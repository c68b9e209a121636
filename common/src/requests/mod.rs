//! JSON payloads accepted by the back-office endpoints.
//!
//! Every field is optional on the wire (`#[serde(default)]`) so that a form
//! submitted half-filled reaches validation and gets one message listing all
//! missing fields instead of a deserialization error.

use crate::model::advert::{AdvertKind, ApplicantDocument, TaxpayerKind, ValidityKind};
use crate::model::compatibility::{Conformity, LicenseKind};
use crate::model::document::Admissibility;
use crate::model::permit::{Gender, ResolutionKind, TermUnit};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Registration of an incoming documento simple.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterDocumentRequest {
    pub intake_date: Option<NaiveDate>,
    pub ds_number: String,
    /// `RENOVACION`, `SOLICITUD DE COMERCIO AMBULATORIO` or free text.
    pub subject: String,
    pub applicant_name: String,
    pub document_id: String,
    pub fiscal_address: String,
    /// Catalog label; used for the two standard subjects.
    pub main_trade: String,
    pub second_trade: Option<String>,
    /// Free-text reason; used for any other subject.
    pub reason: String,
    pub location: String,
    pub mobile: String,
    pub admissibility: Admissibility,
    pub letter_number: String,
    pub letter_date: Option<NaiveDate>,
    pub notification_date: Option<NaiveDate>,
    pub pages: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UpdateStatusRequest {
    pub status: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PermitEvaluationRequest {
    pub document_id: String,
    pub applicant_name: String,
    pub gender: Gender,
    pub evaluation_code: String,
    pub ds_number: String,
    pub fiscal_address: String,
    pub intake_date: Option<NaiveDate>,
    pub evaluation_date: Option<NaiveDate>,
    pub trade_label: String,
    /// Joined descriptions recovered by the prefill; wins over the catalog
    /// description when it was built from the same label.
    pub trade_text: Option<String>,
    pub trade_text_source: Option<String>,
    pub location: String,
    pub coordinates: String,
    pub reference: String,
    pub schedule: String,
    pub phone: String,
    pub term: Option<u32>,
    pub term_unit: TermUnit,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PermitResolutionRequest {
    pub kind: ResolutionKind,
    pub resolution_code: String,
    pub resolution_date: Option<NaiveDate>,
    pub validity_start: Option<NaiveDate>,
    pub validity_end: Option<NaiveDate>,
    pub certificate_code: String,
    pub previous_certificate: String,
    pub previous_issued: Option<NaiveDate>,
    pub previous_expiry: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PermitCertificateRequest {
    pub certificate_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvertEvaluationRequest {
    pub kind: AdvertKind,
    pub taxpayer: TaxpayerKind,
    pub applicant_name: String,
    pub ruc: String,
    pub representative: String,
    pub address: String,
    pub coordinates: String,
    pub length: f64,
    pub height: f64,
    pub thickness: f64,
    pub support_height: f64,
    pub faces: u32,
    pub legend: String,
    pub colors: String,
    pub material: String,
    pub location: String,
    pub advert_number: String,
    pub ds_number: String,
    pub intake_date: Option<NaiveDate>,
    pub report_date: Option<NaiveDate>,
    pub year: Option<i32>,
}

impl Default for AdvertEvaluationRequest {
    fn default() -> Self {
        Self {
            kind: AdvertKind::IlluminatedPanel,
            taxpayer: TaxpayerKind::default(),
            applicant_name: String::new(),
            ruc: String::new(),
            representative: String::new(),
            address: String::new(),
            coordinates: String::new(),
            length: 0.0,
            height: 0.0,
            thickness: 0.0,
            support_height: 0.0,
            faces: 1,
            legend: String::new(),
            colors: String::new(),
            material: String::new(),
            location: String::new(),
            advert_number: String::new(),
            ds_number: String::new(),
            intake_date: None,
            report_date: None,
            year: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvertCertificateRequest {
    pub certificate_number: String,
    pub certificate_date: Option<NaiveDate>,
    pub validity: ValidityKind,
    pub months: Option<u32>,
    pub ordinance: String,
    pub physical: String,
    pub technical: String,
    pub document_type: ApplicantDocument,
    pub document_number: String,
    pub receipt_number: String,
}

/// Zoning compatibility form. `dni` and `ruc` are both optional; the
/// certificate prints dashes for the one not given.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompatibilityRequest {
    pub compatibility_number: String,
    pub applicant_name: String,
    pub dni: String,
    pub ruc: String,
    pub trade_name: String,
    pub address: String,
    /// General commercial use, as free text.
    pub use_description: String,
    pub ordinances: Vec<String>,
    pub area: String,
    pub risk_level: String,
    pub certifier: String,
    pub license: LicenseKind,
    pub ds_number: String,
    pub ds_date: Option<NaiveDate>,
    pub document_date: Option<NaiveDate>,
    pub activities: Vec<CompatibilityActivity>,
}

/// A general activity with its zoning and the trades evaluated under it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompatibilityActivity {
    pub description: String,
    pub code: String,
    /// Zone code from the catalog, e.g. `CZ`.
    pub zone: String,
    pub trades: Vec<CompatibilityTrade>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CompatibilityTrade {
    pub code: String,
    pub description: String,
    pub conformity: Conformity,
}

/// Full replacement of a registry tab, one map per row keyed by column name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplaceRowsRequest {
    pub rows: Vec<HashMap<String, String>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionCreated {
    pub session_id: String,
}

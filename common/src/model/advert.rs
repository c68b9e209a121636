//! Advertising permits (anuncios publicitarios).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AdvertKind {
    #[serde(rename = "PANEL SIMPLE - AZOTEAS")]
    RooftopPanel,
    #[serde(rename = "LETRAS RECORTADAS")]
    CutOutLetters,
    #[serde(rename = "PANEL SIMPLE - ESTACIONES DE SERVICIO")]
    ServiceStationPanel,
    #[serde(rename = "TOLDO SENCILLO")]
    SimpleAwning,
    #[serde(rename = "PANEL SENCILLO Y LUMINOSO")]
    IlluminatedPanel,
}

impl AdvertKind {
    pub const ALL: [AdvertKind; 5] = [
        AdvertKind::RooftopPanel,
        AdvertKind::CutOutLetters,
        AdvertKind::ServiceStationPanel,
        AdvertKind::SimpleAwning,
        AdvertKind::IlluminatedPanel,
    ];

    pub fn label(self) -> &'static str {
        match self {
            AdvertKind::RooftopPanel => "PANEL SIMPLE - AZOTEAS",
            AdvertKind::CutOutLetters => "LETRAS RECORTADAS",
            AdvertKind::ServiceStationPanel => "PANEL SIMPLE - ESTACIONES DE SERVICIO",
            AdvertKind::SimpleAwning => "TOLDO SENCILLO",
            AdvertKind::IlluminatedPanel => "PANEL SENCILLO Y LUMINOSO",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            AdvertKind::RooftopPanel => "panel_simple_azotea",
            AdvertKind::CutOutLetters => "letras_recortadas",
            AdvertKind::ServiceStationPanel => "panel_simple_estacion",
            AdvertKind::SimpleAwning => "toldo_sencillo",
            AdvertKind::IlluminatedPanel => "panel_sencillo_luminoso",
        }
    }

    pub fn evaluation_template(self) -> String {
        format!("plantillas_publicidad/evaluacion_{}.docx", self.slug())
    }

    pub fn certificate_template(self) -> String {
        format!("plantillas_publicidad/certificado_{}.docx", self.slug())
    }

    pub fn uses_thickness(self) -> bool {
        matches!(
            self,
            AdvertKind::IlluminatedPanel | AdvertKind::CutOutLetters | AdvertKind::SimpleAwning
        )
    }

    /// Rooftop panels record the height of their supports.
    pub fn uses_support_height(self) -> bool {
        self == AdvertKind::RooftopPanel
    }
}

/// RUC 10 is a natural person, RUC 20 a legal entity with a representative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TaxpayerKind {
    #[default]
    #[serde(rename = "10")]
    NaturalPerson,
    #[serde(rename = "20")]
    LegalEntity,
}

impl TaxpayerKind {
    pub fn label(self) -> &'static str {
        match self {
            TaxpayerKind::NaturalPerson => "RUC 10 – Persona natural",
            TaxpayerKind::LegalEntity => "RUC 20 – Persona jurídica",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ValidityKind {
    #[default]
    Indeterminada,
    Temporal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ApplicantDocument {
    #[default]
    #[serde(rename = "DNI")]
    Dni,
    #[serde(rename = "CARNET DE EXTRANJERIA")]
    ForeignerCard,
}

impl ApplicantDocument {
    pub fn label(self) -> &'static str {
        match self {
            ApplicantDocument::Dni => "DNI",
            ApplicantDocument::ForeignerCard => "CARNET DE EXTRANJERIA",
        }
    }
}

/// Evaluation data of an advert. Measures are already formatted with two
/// decimals; unused measures are empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvertEvaluation {
    pub kind: AdvertKind,
    pub taxpayer: TaxpayerKind,
    pub applicant_name: String,
    pub ruc: String,
    pub representative: String,
    pub address: String,
    pub coordinates: String,
    pub length: String,
    pub height: String,
    pub thickness: String,
    pub support_height: String,
    pub faces: u32,
    pub legend: String,
    pub colors: String,
    pub material: String,
    pub location: String,
    pub advert_number: String,
    pub ds_number: String,
    pub intake_date: NaiveDate,
    pub report_date: NaiveDate,
    pub year: i32,
}

/// Last certificate issued in a session, kept until it is saved to the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdvertCertificate {
    pub evaluation: AdvertEvaluation,
    pub certificate_number: String,
    pub certificate_date: NaiveDate,
    pub validity: String,
    pub ordinance: String,
    pub physical: String,
    pub technical: String,
    pub document_type: ApplicantDocument,
    pub document_number: String,
    pub receipt_number: String,
}

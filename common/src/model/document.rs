use serde::{Deserialize, Serialize};

pub const STATUS_PENDING: &str = "PENDIENTE";
pub const STATUS_UNDER_EVALUATION: &str = "EN EVALUACION";
pub const STATUS_AUTHORIZED: &str = "AUTORIZADO";

/// Subject of a registered documento simple.
///
/// Renewals and new street-vending requests carry a trade from the catalog;
/// anything else is stored as the free text the clerk typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subject {
    Renewal,
    StreetVending,
    Other(String),
}

impl Subject {
    pub const RENEWAL: &'static str = "RENOVACION";
    pub const STREET_VENDING: &'static str = "SOLICITUD DE COMERCIO AMBULATORIO";

    pub fn from_text(raw: &str) -> Subject {
        let upper = raw.trim().to_uppercase();
        match upper.as_str() {
            Self::RENEWAL => Subject::Renewal,
            Self::STREET_VENDING => Subject::StreetVending,
            _ => Subject::Other(upper),
        }
    }

    pub fn as_text(&self) -> &str {
        match self {
            Subject::Renewal => Self::RENEWAL,
            Subject::StreetVending => Self::STREET_VENDING,
            Subject::Other(text) => text,
        }
    }

    /// Standard subjects take their trade from the catalog and can be evaluated.
    pub fn is_standard(&self) -> bool {
        !matches!(self, Subject::Other(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Admissibility {
    #[default]
    #[serde(rename = "PROCEDENTE")]
    Admissible,
    #[serde(rename = "IMPROCEDENTE")]
    Inadmissible,
}

impl Admissibility {
    pub fn label(self) -> &'static str {
        match self {
            Admissibility::Admissible => "PROCEDENTE",
            Admissibility::Inadmissible => "IMPROCEDENTE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_subjects_are_recognised_case_insensitively() {
        assert_eq!(Subject::from_text(" renovacion "), Subject::Renewal);
        assert_eq!(
            Subject::from_text("Solicitud de comercio ambulatorio"),
            Subject::StreetVending
        );
        assert!(Subject::from_text("RENOVACION").is_standard());
    }

    #[test]
    fn other_subjects_keep_their_text_upper_cased() {
        let subject = Subject::from_text("queja vecinal");
        assert_eq!(subject, Subject::Other("QUEJA VECINAL".to_string()));
        assert_eq!(subject.as_text(), "QUEJA VECINAL");
        assert!(!subject.is_standard());
    }
}

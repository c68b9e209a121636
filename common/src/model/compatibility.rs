//! Zoning compatibility certificates (compatibilidad de uso) issued ahead of
//! an operating licence.

use serde::{Deserialize, Serialize};

/// Licence the compatibility is issued for; selects the template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LicenseKind {
    #[default]
    Indeterminada,
    Temporal,
}

impl LicenseKind {
    pub const ALL: [LicenseKind; 2] = [LicenseKind::Indeterminada, LicenseKind::Temporal];

    /// Wording printed on the certificate.
    pub fn label(self) -> &'static str {
        match self {
            LicenseKind::Indeterminada => "LICENCIA DE FUNCIONAMIENTO INDETERMINADA",
            LicenseKind::Temporal => "LICENCIA DE FUNCIONAMIENTO TEMPORAL (01 AÑO)",
        }
    }

    pub fn template(self) -> &'static str {
        match self {
            LicenseKind::Indeterminada => "plantilla_compa/compatibilidad_indeterminada.docx",
            LicenseKind::Temporal => "plantilla_compa/compatibilidad_temporal.docx",
        }
    }
}

/// Whether a trade conforms to the zoning of its activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Conformity {
    #[default]
    Si,
    No,
}

/// One entry of the zoning catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Zone {
    pub code: &'static str,
    pub description: &'static str,
}

/// Choices offered by the compatibility form.
#[derive(Debug, Clone, Serialize)]
pub struct CompatibilityCatalog {
    pub zones: &'static [Zone],
    pub ordinances: &'static [&'static str],
    pub risk_levels: &'static [&'static str],
    pub certifiers: &'static [&'static str],
    pub license_kinds: [LicenseKind; 2],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn license_kinds_pick_their_template() {
        assert_eq!(
            LicenseKind::Temporal.template(),
            "plantilla_compa/compatibilidad_temporal.docx"
        );
        assert_ne!(LicenseKind::Indeterminada.template(), LicenseKind::Temporal.template());
        assert!(LicenseKind::Temporal.label().ends_with("(01 AÑO)"));
    }

    #[test]
    fn wire_names_are_upper_case() {
        let kind: LicenseKind = serde_json::from_str("\"TEMPORAL\"").unwrap();
        assert_eq!(kind, LicenseKind::Temporal);
        let conformity: Conformity = serde_json::from_str("\"NO\"").unwrap();
        assert_eq!(conformity, Conformity::No);
        assert_eq!(serde_json::to_string(&Conformity::Si).unwrap(), "\"SI\"");
    }
}

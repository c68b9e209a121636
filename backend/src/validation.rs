//! Input rules shared by the form endpoints.

use crate::error::AppError;
use common::model::identity::IdKind;
use common::model::permit::{Gender, TermUnit};

/// Accepts the documents a person can present: DNI or CE.
pub fn validate_person_id(raw: &str) -> Result<IdKind, AppError> {
    match IdKind::classify(raw) {
        Some(kind) if kind.is_person() => Ok(kind),
        _ => Err(AppError::InvalidInput(
            "Documento inválido: debe tener 8 (DNI) o 9 (CE) dígitos numéricos".to_owned(),
        )),
    }
}

/// Parses `"lat, lon"`; both parts must be numbers inside the valid ranges.
pub fn parse_coordinates(raw: &str) -> Option<(f64, f64)> {
    let (lat, lon) = raw.trim().split_once(',')?;
    let lat: f64 = lat.trim().parse().ok()?;
    let lon: f64 = lon.trim().parse().ok()?;
    ((-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)).then_some((lat, lon))
}

pub fn validate_coordinates(raw: &str) -> Result<(), AppError> {
    parse_coordinates(raw).map(|_| ()).ok_or_else(|| {
        AppError::InvalidInput(
            "Coordenadas inválidas. Usa el formato: lat, lon (ej.: -12.158784, -76.887945).".to_owned(),
        )
    })
}

/// Collects the names of every empty required field so the user sees them all at once.
#[derive(Debug, Default)]
pub struct Required {
    missing: Vec<String>,
}

impl Required {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: &str) -> Self {
        if value.trim().is_empty() {
            self.missing.push(name.into());
        }
        self
    }

    pub fn present<T>(mut self, name: impl Into<String>, value: &Option<T>) -> Self {
        if value.is_none() {
            self.missing.push(name.into());
        }
        self
    }

    pub fn listed<T>(mut self, name: impl Into<String>, values: &[T]) -> Self {
        if values.is_empty() {
            self.missing.push(name.into());
        }
        self
    }

    pub fn check(self) -> Result<(), AppError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::InvalidInput(format!("Faltan campos: {}", self.missing.join(", "))))
        }
    }
}

pub fn to_upper(value: &str) -> String {
    value.trim().to_uppercase()
}

pub fn term_label(term: u32, unit: TermUnit) -> &'static str {
    match (unit, term == 1) {
        (TermUnit::Months, true) => "MES",
        (TermUnit::Months, false) => "MESES",
        (TermUnit::Years, true) => "AÑO",
        (TermUnit::Years, false) => "AÑOS",
    }
}

/// Wording used by resolutions and certificates for the applicant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenderLabels {
    pub title: &'static str,
    pub applicant: &'static str,
    pub identified: &'static str,
    pub abbreviation: &'static str,
}

pub fn gender_labels(gender: Gender) -> GenderLabels {
    match gender {
        Gender::Femenino => GenderLabels {
            title: "la señora",
            applicant: "la administrada",
            identified: "identificada",
            abbreviation: "Sra",
        },
        Gender::Masculino => GenderLabels {
            title: "el señor",
            applicant: "el administrado",
            identified: "identificado",
            abbreviation: "Sr",
        },
    }
}

/// Splits a full name as written on forms (surnames first) into paternal
/// surname, maternal surname and given names.
pub fn split_surnames(full_name: &str) -> (String, String, String) {
    let upper = full_name.trim().to_uppercase();
    let parts: Vec<&str> = upper.split_whitespace().collect();
    match parts.as_slice() {
        [] => (String::new(), String::new(), String::new()),
        [single] => (single.to_string(), String::new(), String::new()),
        [paternal, given] => (paternal.to_string(), String::new(), given.to_string()),
        [paternal, maternal, given @ ..] => {
            (paternal.to_string(), maternal.to_string(), given.join(" "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn person_ids_are_dni_or_ce_only() {
        assert_eq!(validate_person_id("12345678").unwrap(), IdKind::Dni);
        assert_eq!(validate_person_id("123456789").unwrap(), IdKind::Ce);
        assert!(validate_person_id("20123456789").is_err());
        assert!(validate_person_id("1234567x").is_err());
    }

    #[test]
    fn coordinates_in_range_are_accepted() {
        assert_eq!(
            parse_coordinates("-12.158784, -76.887945"),
            Some((-12.158784, -76.887945))
        );
        assert!(parse_coordinates("-12.1,-76.8").is_some());
        assert!(parse_coordinates(" 90, 180 ").is_some());
    }

    #[test]
    fn malformed_or_out_of_range_coordinates_are_rejected() {
        for raw in ["", "-12.15", "abc, def", "91, 0", "0, -180.5", "-12.1; -76.8"] {
            assert!(parse_coordinates(raw).is_none(), "{raw} should be rejected");
        }
        assert!(validate_coordinates("200,0").is_err());
    }

    #[test]
    fn required_lists_every_missing_field() {
        let error = Required::new()
            .text("nombre", " ")
            .text("dni", "12345678")
            .present::<u8>("fecha_ingreso", &None)
            .check()
            .unwrap_err();
        assert_eq!(error.to_string(), "Faltan campos: nombre, fecha_ingreso");
    }

    #[test]
    fn required_accepts_numbered_names_and_lists() {
        let error = Required::new()
            .listed::<u8>("ordenanzas", &[])
            .text(format!("actividad_{}", 2), "")
            .listed("giros", &[1])
            .check()
            .unwrap_err();
        assert_eq!(error.to_string(), "Faltan campos: ordenanzas, actividad_2");
    }

    #[test]
    fn term_label_agrees_in_number() {
        assert_eq!(term_label(1, TermUnit::Months), "MES");
        assert_eq!(term_label(6, TermUnit::Months), "MESES");
        assert_eq!(term_label(1, TermUnit::Years), "AÑO");
        assert_eq!(term_label(2, TermUnit::Years), "AÑOS");
    }

    #[test]
    fn gender_labels_follow_gender() {
        assert_eq!(gender_labels(Gender::Femenino).abbreviation, "Sra");
        assert_eq!(gender_labels(Gender::Masculino).title, "el señor");
    }

    #[test]
    fn split_surnames_handles_short_names() {
        assert_eq!(
            split_surnames("perez lopez ana maria"),
            ("PEREZ".into(), "LOPEZ".into(), "ANA MARIA".into())
        );
        assert_eq!(split_surnames("PEREZ ANA"), ("PEREZ".into(), "".into(), "ANA".into()));
        assert_eq!(split_surnames("PEREZ"), ("PEREZ".into(), "".into(), "".into()));
        assert_eq!(split_surnames("  "), ("".into(), "".into(), "".into()));
    }
}

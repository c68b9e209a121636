//! Zoning, ordinance, risk and certifier choices of the compatibility form.

use actix_web::HttpResponse;
use common::model::compatibility::{CompatibilityCatalog, LicenseKind, Zone};

pub const ZONES: &[Zone] = &[
    zone("RDM", "Residencial de Densidad Media"),
    zone("RDM-1", "Residencial de Densidad Media - 1"),
    zone("RDM-e", "Residencial de Densidad Media Especial"),
    zone("RDB", "Residencial de Densidad Baja"),
    zone("CZ", "Comercio Zonal"),
    zone("CV", "Comercio Vecinal"),
    zone("E1", "Educación Básica"),
    zone("E2", "Educación Superior Tecnológica"),
    zone("E3", "Educación Superior Universitaria"),
    zone("PTP", "Protección y Tratamiento Paisajista"),
    zone("ZRP", "Zona de Recreación Pública"),
    zone("ZRE", "Zona de Reglamentación Especial"),
    zone("ZTE", "Zona de Tratamiento Especial"),
    zone("ZTE 1", "Zona de Tratamiento Especial 1"),
    zone("ZTE 2", "Zona de Tratamiento Especial 2"),
    zone("CH", "Casa Huerta"),
    zone("CH-1", "Casa Huerta 1"),
    zone("CH-2", "Casa Huerta 2"),
    zone("CH-3", "Casa Huerta 3"),
    zone("OU", "Otros Usos"),
    zone("OU-C", "Otros Usos - Cementerio"),
    zone("OU-ZA", "Otros Usos - Zona Arqueológica"),
    zone("H2", "Centro de Salud"),
    zone("H3", "Hospital General"),
    zone("A", "Agrícola"),
    zone("I2", "Industria Liviana"),
    zone("I4", "Industria Pesada Básica"),
];

pub const ORDINANCES: &[&str] = &[
    "ORD. 1117-MML",
    "ORD. 1146-MML",
    "ORD. 2236-MML",
    "ORD. 933-MML",
    "ORD. 270-2021-PACHACAMAC",
];

pub const RISK_LEVELS: &[&str] = &["ITSE RIESGO MUY ALTO", "ITSE RIESGO ALTO", "ITSE RIESGO MEDIO"];

pub const CERTIFIERS: &[&str] = &["AMBROSIO BARRIOS P.", "SILVANO BELITO T."];

const fn zone(code: &'static str, description: &'static str) -> Zone {
    Zone { code, description }
}

/// Zone whose code matches exactly, after trimming. Codes are case-sensitive
/// (`RDM-e` is not `RDM-E`).
pub fn find_zone(code: &str) -> Option<&'static Zone> {
    let wanted = code.trim();
    ZONES.iter().find(|zone| zone.code == wanted)
}

/// Catalog entry equal to `value` ignoring case and surrounding spaces.
pub fn find_choice(choices: &'static [&'static str], value: &str) -> Option<&'static str> {
    let wanted = value.trim().to_uppercase();
    choices.iter().copied().find(|choice| choice.to_uppercase() == wanted)
}

/// Handler for `GET /api/compatibility/catalog`.
pub async fn process() -> HttpResponse {
    HttpResponse::Ok().json(CompatibilityCatalog {
        zones: ZONES,
        ordinances: ORDINANCES,
        risk_levels: RISK_LEVELS,
        certifiers: CERTIFIERS,
        license_kinds: LicenseKind::ALL,
    })
}

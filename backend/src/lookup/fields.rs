//! Field resolution over the registry's `result` object.
//!
//! The registry has renamed fields across versions, so every value is looked
//! up through an ordered list of candidate keys and the first non-empty one
//! wins.

use common::model::identity::IdKind;
use common::model::lookup::LookupRecord;
use serde_json::{Map, Value};

pub const GIVEN_NAMES: &[&str] = &["first_name", "nombres", "given_name"];
pub const FIRST_SURNAME: &[&str] = &["first_last_name", "apellido_paterno", "apellidoPaterno"];
pub const SECOND_SURNAME: &[&str] = &["second_last_name", "apellido_materno", "apellidoMaterno"];
pub const FULL_NAME: &[&str] = &["full_name", "nombre_completo", "nombreCompleto"];
pub const BUSINESS_NAME: &[&str] = &[
    "razon_social",
    "razonSocial",
    "nombre_razon_social",
    "nombreRazonSocial",
    "nombre",
    "full_name",
];
pub const ADDRESS: &[&str] = &["direccion", "domicilio_fiscal", "address"];
pub const STATUS: &[&str] = &["estado", "status"];
pub const CONDITION: &[&str] = &["condicion", "condition"];

pub fn first_text(map: &Map<String, Value>, candidates: &[&str]) -> String {
    candidates
        .iter()
        .filter_map(|key| map.get(*key))
        .filter_map(text_of)
        .find(|value| !value.is_empty())
        .unwrap_or_default()
}

fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.trim().to_owned()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Given names, first surname and second surname, upper-cased and joined with
/// single spaces. Falls back to the full-name field, trimmed but otherwise as
/// the registry wrote it, when all three are empty.
pub fn person_name(map: &Map<String, Value>) -> String {
    let parts: Vec<String> = [GIVEN_NAMES, FIRST_SURNAME, SECOND_SURNAME]
        .iter()
        .map(|candidates| first_text(map, candidates))
        .filter(|part| !part.is_empty())
        .collect();
    if parts.is_empty() {
        return first_text(map, FULL_NAME);
    }
    parts.join(" ").to_uppercase()
}

pub fn business_name(map: &Map<String, Value>) -> String {
    first_text(map, BUSINESS_NAME)
}

pub fn build_record(kind: IdKind, id: String, result: Map<String, Value>) -> LookupRecord {
    let display_name = match kind {
        IdKind::Ruc => business_name(&result),
        IdKind::Dni | IdKind::Ce => person_name(&result),
    };
    LookupRecord {
        kind,
        id,
        display_name,
        address: first_text(&result, ADDRESS),
        status: first_text(&result, STATUS),
        condition: first_text(&result, CONDITION),
        result,
    }
}

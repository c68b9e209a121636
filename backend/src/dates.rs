//! Spanish date wording used in generated documents and stored rows.

use chrono::{Datelike, NaiveDate};

const MONTHS: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "setiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// `16/09/2025`
pub fn short(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// `16 de setiembre del 2025`
pub fn long(date: NaiveDate) -> String {
    format!("{} de {} del {}", date.day(), MONTHS[date.month0() as usize], date.year())
}

/// `16 de setiembre de 2025`
pub fn long_de(date: NaiveDate) -> String {
    format!("{} de {} de {}", date.day(), MONTHS[date.month0() as usize], date.year())
}

/// `16 DIC 2025`
pub fn month_abbrev(date: NaiveDate) -> String {
    const ABBREVIATIONS: [&str; 12] =
        ["ENE", "FEB", "MAR", "ABR", "MAY", "JUN", "JUL", "AGO", "SET", "OCT", "NOV", "DIC"];
    format!("{:02} {} {}", date.day(), ABBREVIATIONS[date.month0() as usize], date.year())
}

pub fn short_opt(date: Option<NaiveDate>) -> String {
    date.map(short).unwrap_or_default()
}

/// `24 de setiembre de 2025 hasta el 24 de octubre de 2025`, empty when a bound is missing.
pub fn validity(start: Option<NaiveDate>, end: Option<NaiveDate>) -> String {
    match (start, end) {
        (Some(start), Some(end)) => format!("{} hasta el {}", long_de(start), long_de(end)),
        _ => String::new(),
    }
}

/// `24/09/2025 - 24/10/2025`, empty when a bound is missing.
pub fn validity_compact(start: Option<NaiveDate>, end: Option<NaiveDate>) -> String {
    match (start, end) {
        (Some(start), Some(end)) => format!("{} - {}", short(start), short(end)),
        _ => String::new(),
    }
}

/// Reads a `dd/mm/yyyy` cell back from the store.
pub fn parse_short(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%d/%m/%Y").ok()
}

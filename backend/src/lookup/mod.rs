//! # Registry lookups
//!
//! Client for the third-party DNI/RUC consultation API. It resolves an
//! identifier to a `LookupRecord`, falling back to the API's secondary route
//! and retrying gateway rejections, and caches answers per identifier.
//!
//! - `transport`: the HTTP seam (`LookupTransport`) and its `reqwest` implementation.
//! - `cache`: time-keyed answer cache.
//! - `fields`: candidate-key resolution of names and business names.
//! - `client`: route selection, retries and the autocomplete helper.

pub mod cache;
pub mod client;
pub mod fields;
pub mod transport;

pub use client::LookupClient;

use common::model::identity::IdKind;
use std::fmt;

/// One request sent to the registry while resolving an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attempt {
    pub method: &'static str,
    pub url: String,
    pub status: u16,
    pub body: String,
}

impl fmt::Display for Attempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {} ({})", self.method, self.url, self.status, self.body)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Falta configurar CODART_TOKEN para consultar el registro")]
    MissingToken,

    #[error("Consulta no disponible para documentos de tipo {}", .0.label())]
    Unsupported(IdKind),

    #[error("No se pudo conectar con el registro: {0}")]
    Transport(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Bloqueado por servidor/WAF. {}", describe_attempts(.attempts))]
    Blocked { attempts: Vec<Attempt> },

    #[error("{0}")]
    Upstream(String),

    #[error("Respuesta inesperada del registro (HTTP {status}): {body}")]
    Malformed { status: u16, body: String },
}

fn describe_attempts(attempts: &[Attempt]) -> String {
    attempts
        .iter()
        .map(Attempt::to_string)
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Cuts `text` to at most `max` characters without splitting a character.
pub(crate) fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((end, _)) => text[..end].to_owned(),
        None => text.to_owned(),
    }
}

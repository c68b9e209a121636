//! # Document generation
//!
//! Fills `.docx` templates with `{{ key }}` placeholders and delivers the
//! result both as a file in the output directory and as a download.
//!
//! - `docx`: placeholder substitution inside the Word XML parts.
//! - `renderer`: template lookup, output naming and the attachment response.

pub mod docx;
pub mod renderer;

pub use docx::{context, TemplateContext};
pub use renderer::TemplateRenderer;

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("No se encontró la plantilla: {}", path.display())]
    Missing { path: PathBuf },

    #[error("No se pudo procesar la plantilla {}: {message}", path.display())]
    Archive { path: PathBuf, message: String },

    #[error(
        "La plantilla {} usa el marcador '{key}' sin valor ({part}, línea {line}, párrafo {paragraph})",
        path.display()
    )]
    UnknownPlaceholder {
        path: PathBuf,
        part: String,
        line: usize,
        paragraph: usize,
        key: String,
    },

    #[error(
        "La plantilla {} tiene un marcador sin cerrar o con sintaxis no soportada ({part}, línea {line}, párrafo {paragraph}): {snippet}",
        path.display()
    )]
    Unclosed {
        path: PathBuf,
        part: String,
        line: usize,
        paragraph: usize,
        snippet: String,
    },

    #[error("No se pudo guardar el documento {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Patrón de plantilla inválido: {0}")]
    Pattern(String),
}

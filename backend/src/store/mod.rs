//! # Tabular store
//!
//! A spreadsheet-like persistence layer: a *workbook* is a directory under the
//! data root and each of its *tabs* is one CSV file with a fixed header.
//!
//! - `tabs`: the declared tabs and their column lists.
//! - `table`: an in-memory tab aligned to its declared columns.
//! - `workbook`: file access, atomic rewrites and the in-process write lock.

pub mod table;
pub mod tabs;
pub mod workbook;

pub use table::Table;
pub use tabs::TabSpec;
pub use workbook::Workbook;

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("No se pudo acceder a {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV inválido en {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("La hoja {0} quedó bloqueada por un error anterior")]
    Poisoned(String),

    #[error("La hoja {tab} no tiene la columna '{column}'")]
    UnknownColumn { tab: &'static str, column: String },
}

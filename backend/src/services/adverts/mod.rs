//! # Advertising Permit Service Module
//!
//! Evaluation and certificate documents for advertising signs under
//! `/api/adverts`, and the `Certificados` registry they end up in.
//!
//! ## Sub-modules:
//! - `evaluation`: validates the sign data and renders the evaluation of its kind.
//! - `certificate`: renders the certificate from the session's evaluation.
//! - `save`: appends the last certificate to the registry.
//! - `registry`: reads or rewrites the whole registry tab.

mod certificate;
mod evaluation;
mod registry;
mod save;

use actix_web::web::{get, post, put, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/adverts";

/// # Registered Routes:
///
/// *   **`POST /evaluation`**: `evaluation::process`, answers the `.docx`.
/// *   **`POST /certificate`**: `certificate::process`; `409` without an
///     evaluation in the session.
/// *   **`POST /save`**: `save::process`; `409` without a certificate.
/// *   **`GET /registry`** / **`PUT /registry`**: `registry::read` and
///     `registry::replace`.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/evaluation", post().to(evaluation::process))
        .route("/certificate", post().to(certificate::process))
        .route("/save", post().to(save::process))
        .route("/registry", get().to(registry::read))
        .route("/registry", put().to(registry::replace))
}

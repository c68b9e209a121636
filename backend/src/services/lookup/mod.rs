//! # Lookup Service Module
//!
//! DNI and RUC consultation endpoints under `/api/lookup`, backed by the
//! shared `LookupClient` so answers are cached across requests.
//!
//! ## Sub-modules:
//! - `get`: full registry record for an identifier.
//! - `autocomplete`: name suggestion and user message for a form field.

mod autocomplete;
mod get;

use actix_web::web::{get, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/lookup";

/// # Registered Routes:
///
/// *   **`GET /autocomplete/{id}`**: `autocomplete::process`. Never fails on
///     registry errors; they come back as a warning message. With an
///     `X-Session-Id` header the message is also remembered in the session.
/// *   **`GET /{id}`**: `get::process`, the `LookupRecord` of a DNI or RUC.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/autocomplete/{id}", get().to(autocomplete::process))
        .route("/{id}", get().to(get::process))
}

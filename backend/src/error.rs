//! Error taxonomy of the back-office API.
//!
//! Every handler returns `Result<_, AppError>`; actix turns the error into a
//! JSON body `{"error": kind, "message": text}` with the status code of its
//! kind. Messages are meant for the clerk using the form, so they are in
//! Spanish.

use crate::documents::TemplateError;
use crate::lookup::LookupError;
use crate::store::StoreError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or incomplete user input. Nothing was persisted.
    #[error("{0}")]
    InvalidInput(String),

    /// The external registry could not answer.
    #[error("{0}")]
    Service(LookupError),

    #[error(transparent)]
    Template(#[from] TemplateError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// A record the request refers to does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Missing `X-Session-Id` or an id the server does not know.
    #[error("{0}")]
    Session(String),

    /// A workflow step was requested before the steps it depends on.
    #[error("{0}")]
    Workflow(String),

    #[error("configuración inválida: {0}")]
    Config(String),
}

impl AppError {
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::InvalidInput(_) => "invalid_input",
            AppError::Service(_) => "service",
            AppError::Template(_) => "template",
            AppError::Store(_) => "store",
            AppError::NotFound(_) => "not_found",
            AppError::Session(_) => "session",
            AppError::Workflow(_) => "workflow",
            AppError::Config(_) => "config",
        }
    }
}

impl From<LookupError> for AppError {
    fn from(error: LookupError) -> Self {
        match error {
            LookupError::InvalidInput(message) => AppError::InvalidInput(message),
            other => AppError::Service(other),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Service(_) => StatusCode::BAD_GATEWAY,
            AppError::Template(_) | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Store(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Session(_) => StatusCode::BAD_REQUEST,
            AppError::Workflow(_) => StatusCode::CONFLICT,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "error": self.kind(),
            "message": self.to_string(),
        }))
    }
}

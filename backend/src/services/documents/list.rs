use crate::error::AppError;
use crate::state::AppState;
use crate::store::tabs::DOCUMENTS;
use crate::store::Table;
use actix_web::{web, HttpResponse};
use common::model::document::{Admissibility, Subject, STATUS_PENDING, STATUS_UNDER_EVALUATION};

/// Handler for `GET /api/documents`.
pub async fn all(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let table = state.commerce.read(DOCUMENTS)?;
    Ok(HttpResponse::Ok().json(table.snapshot()))
}

/// Handler for `GET /api/documents/pending`.
pub async fn pending(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let table = state.commerce.read(DOCUMENTS)?;
    Ok(HttpResponse::Ok().json(open_for_evaluation(&table).snapshot()))
}

/// Standard subjects, admissible, and not yet authorized.
pub(crate) fn open_for_evaluation(table: &Table) -> Table {
    table.filtered(|table, row| {
        let upper = |column: &str| table.cell(row, column).trim().to_uppercase();
        let status = upper("ESTADO");
        Subject::from_text(table.cell(row, "ASUNTO")).is_standard()
            && upper("PROCEDENTE / IMPROCEDENTE") == Admissibility::Admissible.label()
            && (status == STATUS_PENDING || status == STATUS_UNDER_EVALUATION)
    })
}

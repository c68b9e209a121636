use crate::error::AppError;
use crate::state::AppState;
use crate::store::tabs::{AUTHORIZATIONS, EVALUATIONS};
use crate::store::{TabSpec, Table};
use actix_web::{web, HttpResponse};

/// Handler for `GET /api/permits/evaluations`.
pub async fn evaluations(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(state.commerce.read(EVALUATIONS)?.snapshot()))
}

/// Handler for `GET /api/permits/authorizations`.
pub async fn authorizations(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(state.commerce.read(AUTHORIZATIONS)?.snapshot()))
}

/// Handler for `GET /api/permits/evaluations/unresolved`.
pub async fn unresolved_evaluations(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    unresolved(&state, EVALUATIONS)
}

/// Handler for `GET /api/permits/authorizations/unresolved`.
pub async fn unresolved_authorizations(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    unresolved(&state, AUTHORIZATIONS)
}

fn unresolved(state: &AppState, spec: TabSpec) -> Result<HttpResponse, AppError> {
    let table = state.commerce.read(spec)?;
    Ok(HttpResponse::Ok().json(without_resolution(&table).snapshot()))
}

/// Rows whose resolution number is still blank.
pub(crate) fn without_resolution(table: &Table) -> Table {
    table.filtered(|table, row| table.cell(row, "N° DE RESOLUCIÓN").trim().is_empty())
}

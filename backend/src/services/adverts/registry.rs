use crate::error::AppError;
use crate::state::AppState;
use crate::store::tabs::CERTIFICATES;
use crate::store::{StoreError, Table};
use actix_web::{web, HttpResponse};
use common::requests::ReplaceRowsRequest;
use log::{info, warn};

/// Handler for `GET /api/adverts/registry`.
pub async fn read(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(state.adverts.read(CERTIFICATES)?.snapshot()))
}

/// Handler for `PUT /api/adverts/registry`. The rows replace the whole tab;
/// columns they omit are left blank and unknown columns are a `400`.
pub async fn replace(
    state: web::Data<AppState>,
    body: web::Json<ReplaceRowsRequest>,
) -> Result<HttpResponse, AppError> {
    let table = Table::from_records(CERTIFICATES, &body.rows).map_err(|error| match error {
        StoreError::UnknownColumn { .. } => AppError::InvalidInput(error.to_string()),
        other => AppError::Store(other),
    })?;
    state.adverts.write(&table)?;
    if table.is_empty() {
        warn!("Registro de certificados vaciado");
    } else {
        info!("Registro de certificados reescrito con {} filas", table.len());
    }
    Ok(HttpResponse::Ok().json(table.snapshot()))
}

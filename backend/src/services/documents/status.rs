use crate::error::AppError;
use crate::state::AppState;
use crate::store::tabs::DOCUMENTS;
use crate::validation::to_upper;
use actix_web::{web, HttpResponse};
use common::requests::UpdateStatusRequest;
use serde_json::json;

/// Handler for `PUT /api/documents/{ds_number}/status`. Matching no document
/// is not an error; the answer reports how many rows changed.
pub async fn process(
    state: web::Data<AppState>,
    ds_number: web::Path<String>,
    body: web::Json<UpdateStatusRequest>,
) -> Result<HttpResponse, AppError> {
    let status = to_upper(&body.status);
    if status.is_empty() {
        return Err(AppError::InvalidInput("Falta el nuevo estado".to_owned()));
    }
    let updated = state
        .commerce
        .update_where(DOCUMENTS, "N° DE DOCUMENTO SIMPLE", &ds_number, &[("ESTADO", status)])?;
    Ok(HttpResponse::Ok().json(json!({ "updated": updated })))
}

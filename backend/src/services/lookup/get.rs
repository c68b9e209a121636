use crate::error::AppError;
use crate::state::AppState;
use actix_web::{web, HttpResponse};

/// Handler for `GET /api/lookup/{id}`.
pub async fn process(state: web::Data<AppState>, id: web::Path<String>) -> Result<HttpResponse, AppError> {
    let record = state.lookup.lookup_by_id(&id).await?;
    Ok(HttpResponse::Ok().json(record))
}

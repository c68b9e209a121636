use crate::error::AppError;
use crate::session::{session_id, SessionsState};
use actix_web::{web, HttpRequest, HttpResponse};

/// Handler for `GET /api/sessions/current`.
pub async fn process(req: HttpRequest, sessions: web::Data<SessionsState>) -> Result<HttpResponse, AppError> {
    let context = sessions.get(&session_id(&req)?).await?;
    Ok(HttpResponse::Ok().json(context))
}

use crate::session::SessionsState;
use actix_web::{web, HttpResponse};
use common::requests::SessionCreated;
use log::info;

/// Handler for `POST /api/sessions`.
pub async fn process(sessions: web::Data<SessionsState>) -> HttpResponse {
    let session_id = sessions.create().await;
    info!("Sesión {} creada", session_id);
    HttpResponse::Created().json(SessionCreated { session_id })
}

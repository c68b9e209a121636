use crate::error::AppError;
use crate::session::{SessionsState, SESSION_HEADER};
use crate::state::AppState;
use actix_web::{web, HttpRequest, HttpResponse};

/// Handler for `GET /api/lookup/autocomplete/{id}`.
pub async fn process(
    req: HttpRequest,
    state: web::Data<AppState>,
    sessions: web::Data<SessionsState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let answer = state.lookup.autocomplete(&id).await;

    let session = req
        .headers()
        .get(SESSION_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty());
    if let (Some(session), Some(message)) = (session, &answer.message) {
        let message = message.clone();
        sessions
            .update(session, |context| context.lookup_message = Some(message))
            .await?;
    }

    Ok(HttpResponse::Ok().json(answer))
}

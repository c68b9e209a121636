//! # Session Service Module
//!
//! Routes under `/api/sessions`. A session carries the intermediate results
//! of the permit and advert workflows between requests.
//!
//! ## Sub-modules:
//! - `create`: opens a new session.
//! - `current`: returns what the caller's session holds so far.

mod create;
mod current;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/sessions";

/// # Registered Routes:
///
/// *   **`POST /`**: `create::process`, answers `{"session_id": ...}`.
/// *   **`GET /current`**: `current::process`, the `SessionContext` named by
///     the `X-Session-Id` header.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", post().to(create::process))
        .route("/current", get().to(current::process))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{SessionsState, SESSION_HEADER};
    use actix_web::{test, web, App};
    use common::model::session::SessionContext;
    use common::requests::SessionCreated;

    #[actix_web::test]
    async fn created_session_can_be_read_back() {
        let sessions = SessionsState::default();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(sessions.clone()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post().uri("/api/sessions").to_request();
        let created: SessionCreated = test::call_and_read_body_json(&app, req).await;

        let req = test::TestRequest::get()
            .uri("/api/sessions/current")
            .insert_header((SESSION_HEADER, created.session_id.as_str()))
            .to_request();
        let context: SessionContext = test::call_and_read_body_json(&app, req).await;
        assert_eq!(context, SessionContext::default());
    }

    #[actix_web::test]
    async fn unknown_session_is_rejected() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(SessionsState::default()))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/sessions/current")
            .insert_header((SESSION_HEADER, "desconocida"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let req = test::TestRequest::get().uri("/api/sessions/current").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }
}

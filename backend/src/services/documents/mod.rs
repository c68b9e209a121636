//! # Documentos Simples Service Module
//!
//! Registry of incoming requests (tab `Documentos_CA` of the commerce
//! workbook). A registered document is the starting point of a street-vending
//! permit evaluation.
//!
//! ## Sub-modules:
//! - `register`: validates and appends a new document with state `PENDIENTE`.
//! - `list`: full registry and the documents still open for evaluation.
//! - `status`: changes the state of a document by its DS number.

pub(crate) mod list;
mod register;
mod status;

use actix_web::web::{get, post, put, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/documents";

/// # Registered Routes:
///
/// *   **`POST /`**: `register::process`. Answers `201` with the row number.
/// *   **`GET /`**: `list::all`, snapshot of the whole tab.
/// *   **`GET /pending`**: `list::pending`, admissible renewals and new
///     requests that are `PENDIENTE` or `EN EVALUACION`.
/// *   **`PUT /{ds_number}/status`**: `status::process`.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", post().to(register::process))
        .route("", get().to(list::all))
        .route("/pending", get().to(list::pending))
        .route("/{ds_number}/status", put().to(status::process))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tests::test_state;
    use crate::store::tabs::DOCUMENTS;
    use actix_web::{test, web, App};
    use common::model::table::TableSnapshot;
    use serde_json::{json, Value};
    use tempfile::TempDir;

    const SANDWICHES: &str = "Rubro 3.d - Sándwiches (CÓDIGO G 007)";
    const FRUITS: &str = "Rubro 2.a - Venta de frutas o verduras (CÓDIGO G 002)";

    fn request(ds: &str, subject: &str) -> Value {
        json!({
            "intake_date": "2025-09-16",
            "ds_number": ds,
            "subject": subject,
            "applicant_name": "ana perez lopez",
            "document_id": "12345678",
            "fiscal_address": "av. lima 123",
            "main_trade": SANDWICHES,
            "second_trade": FRUITS,
            "reason": "licencia de funcionamiento",
            "location": "parque central",
            "mobile": "987654321"
        })
    }

    #[actix_web::test]
    async fn registers_documents_in_declared_column_order() {
        let dir = TempDir::new().unwrap();
        let (_, state) = test_state(dir.path());
        let data = web::Data::new(state);
        let app = test::init_service(App::new().app_data(data.clone()).service(configure_routes())).await;

        let req = test::TestRequest::post()
            .uri("/api/documents")
            .set_json(request("1001", "renovacion"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);

        let table = data.commerce.read(DOCUMENTS).unwrap();
        assert_eq!(table.len(), 1);
        let row = &table.rows()[0];
        assert_eq!(row.len(), DOCUMENTS.columns.len());
        assert_eq!(table.cell(row, "ESTADO"), "PENDIENTE");
        assert_eq!(table.cell(row, "N°"), "1");
        assert_eq!(table.cell(row, "FECHA DE INGRESO"), "16/09/2025");
        assert_eq!(table.cell(row, "ASUNTO"), "RENOVACION");
        assert_eq!(table.cell(row, "NOMBRE Y APELLIDO"), "ANA PEREZ LOPEZ");
        assert_eq!(
            table.cell(row, "GIRO O MOTIVO DE LA SOLICITUD"),
            "RUBRO 3.D - SÁNDWICHES (CÓDIGO G 007) Y RUBRO 2.A - VENTA DE FRUTAS O VERDURAS (CÓDIGO G 002)"
        );
        assert_eq!(table.cell(row, "PROCEDENTE / IMPROCEDENTE"), "PROCEDENTE");
        assert_eq!(table.cell(row, "N° DE CARTA"), "");
        assert_eq!(table.cell(row, "FECHA DE LA CARTA"), "");
    }

    #[actix_web::test]
    async fn other_subjects_store_the_free_text_reason() {
        let dir = TempDir::new().unwrap();
        let (_, state) = test_state(dir.path());
        let data = web::Data::new(state);
        let app = test::init_service(App::new().app_data(data.clone()).service(configure_routes())).await;

        let req = test::TestRequest::post()
            .uri("/api/documents")
            .set_json(request("1002", "Cambio de ubicación"))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 201);

        let table = data.commerce.read(DOCUMENTS).unwrap();
        let row = &table.rows()[0];
        assert_eq!(table.cell(row, "ASUNTO"), "CAMBIO DE UBICACIÓN");
        assert_eq!(table.cell(row, "GIRO O MOTIVO DE LA SOLICITUD"), "LICENCIA DE FUNCIONAMIENTO");
    }

    #[actix_web::test]
    async fn rejects_incomplete_or_invalid_documents_without_writing() {
        let dir = TempDir::new().unwrap();
        let (_, state) = test_state(dir.path());
        let data = web::Data::new(state);
        let app = test::init_service(App::new().app_data(data.clone()).service(configure_routes())).await;

        let req = test::TestRequest::post()
            .uri("/api/documents")
            .set_json(json!({"ds_number": "1", "subject": "RENOVACION"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["message"],
            "Faltan campos: fecha_ingreso, nombre, dni, domicilio, giro_motivo, ubicacion"
        );

        let mut invalid = request("1003", "RENOVACION");
        invalid["document_id"] = json!("1234");
        let req = test::TestRequest::post().uri("/api/documents").set_json(invalid).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 400);

        let mut repeated = request("1004", "RENOVACION");
        repeated["second_trade"] = json!(SANDWICHES);
        let req = test::TestRequest::post().uri("/api/documents").set_json(repeated).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 400);

        let mut unknown = request("1005", "RENOVACION");
        unknown["main_trade"] = json!("Rubro 9.z - Inventado");
        let req = test::TestRequest::post().uri("/api/documents").set_json(unknown).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 400);

        assert!(data.commerce.read(DOCUMENTS).unwrap().is_empty());
    }

    #[actix_web::test]
    async fn pending_lists_only_open_admissible_requests() {
        let dir = TempDir::new().unwrap();
        let (_, state) = test_state(dir.path());
        let data = web::Data::new(state);
        let app = test::init_service(App::new().app_data(data.clone()).service(configure_routes())).await;

        let mut inadmissible = request("2", "RENOVACION");
        inadmissible["admissibility"] = json!("IMPROCEDENTE");
        for body in [
            request("1", "SOLICITUD DE COMERCIO AMBULATORIO"),
            inadmissible,
            request("3", "OTRO TRAMITE"),
            request("4", "RENOVACION"),
            request("5", "RENOVACION"),
        ] {
            let req = test::TestRequest::post().uri("/api/documents").set_json(body).to_request();
            assert_eq!(test::call_service(&app, req).await.status(), 201);
        }

        let req = test::TestRequest::put()
            .uri("/api/documents/4/status")
            .set_json(json!({"status": "en evaluacion"}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 200);
        let req = test::TestRequest::put()
            .uri("/api/documents/5/status")
            .set_json(json!({"status": "AUTORIZADO"}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 200);

        let req = test::TestRequest::get().uri("/api/documents/pending").to_request();
        let pending: TableSnapshot = test::call_and_read_body_json(&app, req).await;
        let ds_column = pending.columns.iter().position(|c| c == "N° DE DOCUMENTO SIMPLE").unwrap();
        let numbers: Vec<&str> = pending.rows.iter().map(|row| row[ds_column].as_str()).collect();
        assert_eq!(numbers, ["1", "4"]);

        let req = test::TestRequest::get().uri("/api/documents").to_request();
        let all: TableSnapshot = test::call_and_read_body_json(&app, req).await;
        assert_eq!(all.rows.len(), 5);
        assert_eq!(all.tab, "Documentos_CA");
    }

    #[actix_web::test]
    async fn status_update_of_unknown_document_touches_nothing() {
        let dir = TempDir::new().unwrap();
        let (_, state) = test_state(dir.path());
        let app = test::init_service(App::new().app_data(web::Data::new(state)).service(configure_routes())).await;

        let req = test::TestRequest::put()
            .uri("/api/documents/999/status")
            .set_json(json!({"status": "AUTORIZADO"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["updated"], 0);

        let req = test::TestRequest::put()
            .uri("/api/documents/999/status")
            .set_json(json!({"status": " "}))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 400);
    }
}

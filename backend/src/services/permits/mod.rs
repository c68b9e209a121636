//! # Street-Vending Permit Service Module
//!
//! The permit workflow under `/api/permits`: evaluation, resolution and
//! certificate documents generated in that order within one session, then
//! saved together to the commerce workbook.
//!
//! ## Sub-modules:
//! - `catalog`: trade catalog of the ordinance and its endpoint.
//! - `prefill`: evaluation fields recovered from a registered document.
//! - `evaluation`, `resolution`, `certificate`: the three documents.
//! - `save`: appends the evaluation and authorization rows.
//! - `list`: read-only views of the two tabs.

pub(crate) mod catalog;
mod certificate;
mod evaluation;
mod list;
mod prefill;
mod resolution;
mod save;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/permits";

/// # Registered Routes:
///
/// *   **`GET /catalog`**: `catalog::process`.
/// *   **`GET /prefill/{ds_number}`**: `prefill::process`; `404` when no open
///     document has that number.
/// *   **`POST /evaluation`**, **`POST /resolution`**, **`POST /certificate`**:
///     render their template and answer it as a `.docx` download. Each needs
///     `X-Session-Id`; a step requested before the ones it depends on is a
///     `409`.
/// *   **`POST /save`**: `save::process`.
/// *   **`GET /evaluations`**, **`GET /authorizations`** and their
///     **`/unresolved`** variants: table snapshots.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/catalog", get().to(catalog::process))
        .route("/prefill/{ds_number}", get().to(prefill::process))
        .route("/evaluation", post().to(evaluation::process))
        .route("/resolution", post().to(resolution::process))
        .route("/certificate", post().to(certificate::process))
        .route("/save", post().to(save::process))
        .route("/evaluations", get().to(list::evaluations))
        .route("/evaluations/unresolved", get().to(list::unresolved_evaluations))
        .route("/authorizations", get().to(list::authorizations))
        .route("/authorizations/unresolved", get().to(list::unresolved_authorizations))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{SessionsState, SESSION_HEADER};
    use crate::state::tests::{install_template, test_state};
    use crate::state::AppState;
    use crate::store::tabs::{AUTHORIZATIONS, DOCUMENTS, EVALUATIONS};
    use actix_web::{test, web, App};
    use common::model::permit::EvaluationPrefill;
    use common::model::table::TableSnapshot;
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::path::Path;
    use tempfile::TempDir;

    const FRUITS: &str = "Rubro 2.a - Venta de frutas o verduras (CÓDIGO G 002)";

    const EVALUATION_KEYS: &[&str] = &[
        "sexo", "cod_evaluacion", "nombre", "dni", "ds", "domicilio", "fecha_ingreso", "fecha_evaluacion",
        "giro", "ubicacion", "coordenadas", "referencia", "horario", "tiempo", "plazo", "rubro",
        "codigo_rubro", "telefono",
    ];
    const RESOLUTION_KEYS: &[&str] = &[
        "cod_resolucion", "fecha_resolucion", "ds", "fecha_ingreso", "genero", "genero2", "genero3",
        "nombre", "dni", "domicilio", "giro", "rubro", "codigo_rubro", "ubicacion", "horario",
        "cod_evaluacion", "fecha_evaluacion", "cod_certificacion", "vigencia", "antiguo_certificado",
        "tiempo", "plazo",
    ];
    const CERTIFICATE_KEYS: &[&str] = &[
        "codigo_certificado", "ds", "sr", "nombre", "dni", "ubicacion", "referencia", "giro", "horario",
        "tiempo", "plazo", "vigencia2", "fecha_certificado",
    ];

    fn install_templates(root: &Path) {
        install_template(root, "evaluacion_ambulante.docx", EVALUATION_KEYS);
        install_template(root, "resolucion_nuevo.docx", RESOLUTION_KEYS);
        install_template(root, "resolucion_dentro_tiempo.docx", RESOLUTION_KEYS);
        install_template(root, "certificado.docx", CERTIFICATE_KEYS);
    }

    fn evaluation_form() -> Value {
        json!({
            "document_id": "12345678",
            "applicant_name": "ana perez",
            "gender": "Femenino",
            "evaluation_code": "121",
            "ds_number": "1001",
            "fiscal_address": "av. lima 123",
            "intake_date": "2025-09-01",
            "evaluation_date": "2025-09-16",
            "trade_label": FRUITS,
            "location": "parque central",
            "coordinates": "-12.158784, -76.887945",
            "schedule": "16:00 a 21:00 horas",
            "phone": "987654321",
            "term": 6,
            "term_unit": "meses"
        })
    }

    fn resolution_form() -> Value {
        json!({
            "kind": "NUEVO",
            "resolution_code": "456",
            "resolution_date": "2025-09-20",
            "validity_start": "2025-09-24",
            "validity_end": "2026-03-24",
            "certificate_code": "789",
            "previous_certificate": "121"
        })
    }

    fn session_post(uri: &str, session: &str, body: Value) -> test::TestRequest {
        test::TestRequest::post()
            .uri(uri)
            .insert_header((SESSION_HEADER, session))
            .set_json(body)
    }

    fn register_document(state: &AppState, ds: &str) {
        state
            .commerce
            .append(
                DOCUMENTS,
                [
                    ("ESTADO", "PENDIENTE".to_string()),
                    ("N° DE DOCUMENTO SIMPLE", ds.to_string()),
                    ("ASUNTO", "RENOVACION".to_string()),
                    ("NOMBRE Y APELLIDO", "ANA PEREZ".to_string()),
                    ("DNI", "12345678".to_string()),
                    ("FECHA DE INGRESO", "01/09/2025".to_string()),
                    ("GIRO O MOTIVO DE LA SOLICITUD", FRUITS.to_uppercase()),
                    ("PROCEDENTE / IMPROCEDENTE", "PROCEDENTE".to_string()),
                ],
            )
            .unwrap();
    }

    #[actix_web::test]
    async fn full_workflow_generates_documents_and_saves_rows() {
        let dir = TempDir::new().unwrap();
        install_templates(dir.path());
        let (_, state) = test_state(dir.path());
        register_document(&state, "1001");
        let data = web::Data::new(state);
        let sessions = SessionsState::default();
        let session = sessions.create().await;
        let app = test::init_service(
            App::new()
                .app_data(data.clone())
                .app_data(web::Data::new(sessions.clone()))
                .service(configure_routes()),
        )
        .await;

        let req = session_post("/api/permits/evaluation", &session, evaluation_form()).to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let disposition = resp.headers().get("content-disposition").unwrap().to_str().unwrap();
        assert!(disposition.starts_with("attachment"));
        assert!(dir.path().join("salidas").join("EV. N° 121-2025_ANA PEREZ.docx").exists());

        let req = session_post("/api/permits/resolution", &session, resolution_form()).to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        assert!(dir.path().join("salidas").join("RS. N° 456-2025_ANA PEREZ.docx").exists());

        let req = session_post("/api/permits/certificate", &session, json!({"certificate_date": "2026-01-16"})).to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        assert!(dir.path().join("salidas").join("AU. 789-2026_ANA PEREZ.docx").exists());

        let req = session_post("/api/permits/save", &session, json!({})).to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["evaluation_row"], 1);
        assert_eq!(body["documents_updated"], 1);

        let evaluations = data.commerce.read(EVALUATIONS).unwrap();
        let row = &evaluations.rows()[0];
        assert_eq!(evaluations.cell(row, "N°"), "1");
        assert_eq!(evaluations.cell(row, "FECHA"), "16/09/2025");
        assert_eq!(evaluations.cell(row, "N° DE AUTORIZACIÓN"), "789");
        assert_eq!(evaluations.cell(row, "FECHA DE AUTORIZACION"), "16/01/2026");

        let authorizations = data.commerce.read(AUTHORIZATIONS).unwrap();
        let row = &authorizations.rows()[0];
        assert_eq!(row.len(), AUTHORIZATIONS.columns.len());
        assert_eq!(authorizations.cell(row, "GENERO"), "Femenino");
        assert_eq!(
            authorizations.cell(row, "VIGENCIA DE AUTORIZACIÓN"),
            "24 de setiembre de 2025 hasta el 24 de marzo de 2026"
        );
        assert_eq!(authorizations.cell(row, "GIRO"), "VENTA DE FRUTAS O VERDURAS");
        assert_eq!(authorizations.cell(row, "PLAZO"), "MESES");
        assert_eq!(authorizations.cell(row, "FECHA EMITIDA CERTIFICADO ANTERIOR"), "");

        let documents = data.commerce.read(DOCUMENTS).unwrap();
        assert_eq!(documents.cell(&documents.rows()[0], "ESTADO"), "AUTORIZADO");

        let req = test::TestRequest::get().uri("/api/permits/evaluations/unresolved").to_request();
        let unresolved: TableSnapshot = test::call_and_read_body_json(&app, req).await;
        assert!(unresolved.rows.is_empty());
    }

    #[actix_web::test]
    async fn resolution_fills_the_district_and_gender_wording() {
        let dir = TempDir::new().unwrap();
        install_templates(dir.path());
        let (_, state) = test_state(dir.path());
        let sessions = SessionsState::default();
        let session = sessions.create().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(web::Data::new(sessions.clone()))
                .service(configure_routes()),
        )
        .await;

        let mut form = evaluation_form();
        form["gender"] = json!("Masculino");
        form["applicant_name"] = json!("luis rojas");
        let req = session_post("/api/permits/evaluation", &session, form).to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 200);
        let mut resolution = resolution_form();
        resolution["kind"] = json!("DENTRO_DE_TIEMPO");
        let req = session_post("/api/permits/resolution", &session, resolution).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let bytes = test::read_body(resp).await;
        let xml = crate::documents::docx::tests::read_part(&bytes, "word/document.xml");
        assert!(xml.contains("domicilio=AV. LIMA 123-PACHACAMAC"));
        assert!(xml.contains("genero=el señor"));
        assert!(xml.contains("fecha_ingreso=1 de setiembre de 2025"));
        assert!(xml.contains("fecha_resolucion=20 de setiembre del 2025"));
    }

    #[actix_web::test]
    async fn steps_out_of_order_are_conflicts() {
        let dir = TempDir::new().unwrap();
        install_templates(dir.path());
        let (_, state) = test_state(dir.path());
        let sessions = SessionsState::default();
        let session = sessions.create().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(web::Data::new(sessions.clone()))
                .service(configure_routes()),
        )
        .await;

        let req = session_post("/api/permits/resolution", &session, resolution_form()).to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 409);
        let req = session_post("/api/permits/certificate", &session, json!({"certificate_date": "2026-01-16"})).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 409);
        let req = session_post("/api/permits/save", &session, json!({})).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 409);

        let req = session_post("/api/permits/evaluation", "otra", evaluation_form()).to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }

    #[actix_web::test]
    async fn invalid_forms_and_missing_templates_produce_no_document() {
        let dir = TempDir::new().unwrap();
        let (_, state) = test_state(dir.path());
        let sessions = SessionsState::default();
        let session = sessions.create().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(web::Data::new(sessions.clone()))
                .service(configure_routes()),
        )
        .await;

        let mut form = evaluation_form();
        form["coordinates"] = json!("doce, setenta");
        let req = session_post("/api/permits/evaluation", &session, form).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let req = session_post("/api/permits/evaluation", &session, evaluation_form()).to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 500);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "template");
        assert!(body["message"].as_str().unwrap().contains("evaluacion_ambulante.docx"));

        assert!(sessions.get(&session).await.unwrap().permit_evaluation.is_none());
        assert_eq!(std::fs::read_dir(dir.path().join("salidas")).unwrap().count(), 0);
    }

    #[actix_web::test]
    async fn prefill_reads_open_documents_only() {
        let dir = TempDir::new().unwrap();
        let (_, state) = test_state(dir.path());
        register_document(&state, "1001");
        state
            .commerce
            .update_where(DOCUMENTS, "N° DE DOCUMENTO SIMPLE", "1001", &[("ESTADO", "AUTORIZADO".to_string())])
            .unwrap();
        register_document(&state, "1002");
        let app = test::init_service(App::new().app_data(web::Data::new(state)).service(configure_routes())).await;

        let req = test::TestRequest::get().uri("/api/permits/prefill/1002").to_request();
        let prefill: EvaluationPrefill = test::call_and_read_body_json(&app, req).await;
        assert_eq!(prefill.trade_label.as_deref(), Some(FRUITS));
        assert_eq!(prefill.document_id, "12345678");

        let req = test::TestRequest::get().uri("/api/permits/prefill/1001").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 404);
    }

    #[actix_web::test]
    async fn catalog_lists_every_trade() {
        let app = test::init_service(App::new().service(configure_routes())).await;
        let req = test::TestRequest::get().uri("/api/permits/catalog").to_request();
        let trades: Vec<HashMap<String, String>> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(trades.len(), 20);
        assert_eq!(trades[6]["code"], "007");
    }
}

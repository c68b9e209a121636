//! # Zoning Compatibility Service Module
//!
//! Compatibility certificates under `/api/compatibility`. Nothing is stored;
//! each request renders one document.
//!
//! ## Sub-modules:
//! - `catalog`: zones, ordinances, ITSE risk levels and certifiers.
//! - `generate`: validates the form and renders the certificate of its licence kind.

mod catalog;
mod generate;

use actix_web::web::{get, post, scope};
use actix_web::Scope;

const API_PATH: &str = "/api/compatibility";

/// # Registered Routes:
///
/// *   **`POST /`**: `generate::process`, answers the `.docx`.
/// *   **`GET /catalog`**: `catalog::process`.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", post().to(generate::process))
        .route("/catalog", get().to(catalog::process))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::docx::tests::read_part;
    use crate::state::tests::{install_template, test_state};
    use actix_web::{test, web, App};
    use serde_json::{json, Value};
    use tempfile::TempDir;

    const KEYS: &[&str] = &[
        "n_compa", "persona", "dni", "ruc", "nom_comercio", "direccion", "giro", "ordenanza", "area",
        "itse", "certificador", "tipo_licencia", "zona_desc", "fecha_ds", "fecha_actual", "giro_1_2",
        "conf_no_1_2", "actividad_2",
    ];

    fn form(license: &str) -> Value {
        json!({
            "compatibility_number": "1010",
            "applicant_name": "Ana Perez",
            "ruc": "10123456789",
            "address": "Av. Lima 123",
            "use_description": "Consultorio odontológico",
            "ordinances": ["ORD. 2236-MML"],
            "area": "45.5",
            "risk_level": "ITSE RIESGO MEDIO",
            "certifier": "AMBROSIO BARRIOS P.",
            "license": license,
            "ds_number": "2231",
            "ds_date": "2025-12-16",
            "document_date": "2025-12-20",
            "activities": [{
                "description": "Servicios de salud",
                "code": "8620",
                "zone": "RDM-e",
                "trades": [
                    {"code": "8620-01", "description": "Consultorio dental"},
                    {"code": "4772-02", "description": "Venta de insumos", "conformity": "NO"}
                ]
            }]
        })
    }

    #[actix_web::test]
    async fn renders_the_template_of_the_licence_kind() {
        let dir = TempDir::new().unwrap();
        install_template(dir.path(), "plantilla_compa/compatibilidad_indeterminada.docx", KEYS);
        install_template(dir.path(), "plantilla_compa/compatibilidad_temporal.docx", &["tipo_licencia"]);
        let (transport, state) = test_state(dir.path());
        let app = test::init_service(App::new().app_data(web::Data::new(state)).service(configure_routes())).await;

        let req = test::TestRequest::post()
            .uri("/api/compatibility")
            .set_json(form("INDETERMINADA"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let bytes = test::read_body(resp).await;
        let xml = read_part(&bytes, "word/document.xml");
        assert!(xml.contains("persona=ANA PEREZ"));
        assert!(xml.contains("dni=--------------------"));
        assert!(xml.contains("ruc=10123456789"));
        assert!(xml.contains("nom_comercio=--------------------"));
        assert!(xml.contains("zona_desc=RESIDENCIAL DE DENSIDAD MEDIA ESPECIAL"));
        assert!(xml.contains("fecha_ds=16 DIC 2025"));
        assert!(xml.contains("fecha_actual=20 de diciembre del 2025"));
        assert!(xml.contains("giro_1_2=VENTA DE INSUMOS"));
        assert!(xml.contains("conf_no_1_2=X"));
        assert!(!xml.contains("{{"));
        assert!(dir.path().join("salidas").join("1010 - 2025 - ANA PEREZ.docx").exists());

        let req = test::TestRequest::post()
            .uri("/api/compatibility")
            .set_json(form("TEMPORAL"))
            .to_request();
        let bytes = test::call_and_read_body(&app, req).await;
        let xml = read_part(&bytes, "word/document.xml");
        assert!(xml.contains("tipo_licencia=LICENCIA DE FUNCIONAMIENTO TEMPORAL (01 AÑO)"));
        assert_eq!(transport.request_count().await, 0);
    }

    #[actix_web::test]
    async fn incomplete_forms_render_nothing() {
        let dir = TempDir::new().unwrap();
        install_template(dir.path(), "plantilla_compa/compatibilidad_indeterminada.docx", KEYS);
        let (_, state) = test_state(dir.path());
        let app = test::init_service(App::new().app_data(web::Data::new(state)).service(configure_routes())).await;

        let mut incomplete = form("INDETERMINADA");
        incomplete["activities"][0]["zone"] = json!("");
        let req = test::TestRequest::post()
            .uri("/api/compatibility")
            .set_json(incomplete)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["message"].as_str().unwrap().contains("zona_1"));
        assert_eq!(std::fs::read_dir(dir.path().join("salidas")).unwrap().count(), 0);
    }

    #[actix_web::test]
    async fn missing_template_is_a_server_error() {
        let dir = TempDir::new().unwrap();
        let (_, state) = test_state(dir.path());
        let app = test::init_service(App::new().app_data(web::Data::new(state)).service(configure_routes())).await;

        let req = test::TestRequest::post()
            .uri("/api/compatibility")
            .set_json(form("TEMPORAL"))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), 500);
    }

    #[actix_web::test]
    async fn catalog_lists_the_form_choices() {
        let app = test::init_service(App::new().service(configure_routes())).await;
        let req = test::TestRequest::get().uri("/api/compatibility/catalog").to_request();
        let catalog: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(catalog["zones"].as_array().unwrap().len(), 27);
        assert_eq!(catalog["zones"][4], json!({"code": "CZ", "description": "Comercio Zonal"}));
        assert_eq!(catalog["license_kinds"], json!(["INDETERMINADA", "TEMPORAL"]));
        assert_eq!(catalog["certifiers"][1], "SILVANO BELITO T.");
    }
}

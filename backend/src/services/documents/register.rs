//! Registration of a documento simple.
//!
//! For renewals and new street-vending requests the giro is built from one or
//! two catalog labels joined with `" Y "`; for any other subject it is the
//! free-text reason. Text fields are stored upper-cased and dates as
//! `dd/mm/yyyy`.

use crate::dates;
use crate::error::AppError;
use crate::services::permits::catalog;
use crate::state::AppState;
use crate::store::tabs::DOCUMENTS;
use crate::validation::{to_upper, validate_person_id, Required};
use actix_web::{web, HttpResponse};
use common::model::document::{Subject, STATUS_PENDING};
use common::requests::RegisterDocumentRequest;
use serde_json::json;

/// Handler for `POST /api/documents`.
pub async fn process(
    state: web::Data<AppState>,
    body: web::Json<RegisterDocumentRequest>,
) -> Result<HttpResponse, AppError> {
    let request = body.into_inner();
    let cells = document_row(&request)?;
    let number = state.commerce.append(DOCUMENTS, cells)?;
    Ok(HttpResponse::Created().json(json!({ "number": number, "ds_number": request.ds_number.trim() })))
}

fn document_row(request: &RegisterDocumentRequest) -> Result<Vec<(&'static str, String)>, AppError> {
    let subject = Subject::from_text(&request.subject);
    let trade_source = if subject.is_standard() { &request.main_trade } else { &request.reason };

    if !request.document_id.trim().is_empty() {
        validate_person_id(&request.document_id)?;
    }
    Required::new()
        .present("fecha_ingreso", &request.intake_date)
        .text("num_ds", &request.ds_number)
        .text("asunto", subject.as_text())
        .text("nombre", &request.applicant_name)
        .text("dni", &request.document_id)
        .text("domicilio", &request.fiscal_address)
        .text("giro_motivo", trade_source)
        .text("ubicacion", &request.location)
        .check()?;

    let trade = if subject.is_standard() {
        trade_labels(&request.main_trade, request.second_trade.as_deref())?
    } else {
        request.reason.clone()
    };

    Ok(vec![
        ("ESTADO", STATUS_PENDING.to_owned()),
        ("FECHA DE INGRESO", dates::short_opt(request.intake_date)),
        ("N° DE DOCUMENTO SIMPLE", request.ds_number.trim().to_owned()),
        ("ASUNTO", subject.as_text().to_owned()),
        ("NOMBRE Y APELLIDO", to_upper(&request.applicant_name)),
        ("DNI", request.document_id.trim().to_owned()),
        ("DOMICILIO FISCAL", to_upper(&request.fiscal_address)),
        ("GIRO O MOTIVO DE LA SOLICITUD", to_upper(&trade)),
        ("UBICACIÓN A SOLICITAR", to_upper(&request.location)),
        ("N° DE CELULAR", request.mobile.trim().to_owned()),
        ("PROCEDENTE / IMPROCEDENTE", request.admissibility.label().to_owned()),
        ("N° DE CARTA", to_upper(&request.letter_number)),
        ("FECHA DE LA CARTA", dates::short_opt(request.letter_date)),
        ("FECHA DE NOTIFICACION", dates::short_opt(request.notification_date)),
        ("FOLIOS", to_upper(&request.pages)),
    ])
}

/// `"A"` or `"A Y B"` from catalog labels; the second one must differ.
fn trade_labels(main: &str, second: Option<&str>) -> Result<String, AppError> {
    let main = catalog::find(main)
        .ok_or_else(|| AppError::InvalidInput(format!("Giro desconocido: {}", main.trim())))?;
    match second.map(str::trim).filter(|label| !label.is_empty()) {
        None => Ok(main.label.to_owned()),
        Some(label) => {
            let second = catalog::find(label)
                .ok_or_else(|| AppError::InvalidInput(format!("Giro desconocido: {label}")))?;
            if second.code == main.code {
                return Err(AppError::InvalidInput("El segundo giro debe ser distinto del primero".to_owned()));
            }
            Ok(format!("{} Y {}", main.label, second.label))
        }
    }
}

//! Evaluation prefill from a registered documento simple.
//!
//! Catalog labels found in the stored giro become the selected label plus the
//! joined descriptions (`"A y B"`); a giro that matches no label is free text
//! and goes to the reference instead. Clients send the returned `trade_text`
//! back with `trade_text_source` set to `trade_label`.

use crate::dates;
use crate::error::AppError;
use crate::services::documents::list::open_for_evaluation;
use crate::services::permits::catalog;
use crate::state::AppState;
use crate::store::tabs::DOCUMENTS;
use crate::store::Table;
use crate::validation::to_upper;
use actix_web::{web, HttpResponse};
use common::model::permit::EvaluationPrefill;

/// Handler for `GET /api/permits/prefill/{ds_number}`. Only documents still
/// open for evaluation are considered.
pub async fn process(state: web::Data<AppState>, ds_number: web::Path<String>) -> Result<HttpResponse, AppError> {
    let wanted = ds_number.trim();
    let open = open_for_evaluation(&state.commerce.read(DOCUMENTS)?);
    let row = open
        .rows()
        .iter()
        .find(|row| open.cell(row, "N° DE DOCUMENTO SIMPLE").trim() == wanted)
        .ok_or_else(|| AppError::NotFound(format!("No hay un Documento Simple pendiente con N° {wanted}")))?;
    Ok(HttpResponse::Ok().json(prefill_from(&open, row)))
}

pub(crate) fn prefill_from(table: &Table, row: &[String]) -> EvaluationPrefill {
    let raw_trade = table.cell(row, "GIRO O MOTIVO DE LA SOLICITUD").trim();
    let trades = catalog::found_in(raw_trade);

    let mut prefill = EvaluationPrefill {
        ds_number: table.cell(row, "N° DE DOCUMENTO SIMPLE").trim().to_owned(),
        applicant_name: to_upper(table.cell(row, "NOMBRE Y APELLIDO")),
        document_id: table.cell(row, "DNI").trim().to_owned(),
        fiscal_address: to_upper(table.cell(row, "DOMICILIO FISCAL")),
        location: to_upper(table.cell(row, "UBICACIÓN A SOLICITAR")),
        phone: table.cell(row, "N° DE CELULAR").trim().to_owned(),
        intake_date: dates::parse_short(table.cell(row, "FECHA DE INGRESO")),
        ..Default::default()
    };

    match trades.first() {
        Some(first) => {
            prefill.trade_label = Some(first.label.to_owned());
            prefill.trade_text = Some(
                trades
                    .iter()
                    .map(|trade| trade.description)
                    .collect::<Vec<_>>()
                    .join(" y "),
            );
        }
        None => prefill.reference = to_upper(raw_trade),
    }
    prefill
}

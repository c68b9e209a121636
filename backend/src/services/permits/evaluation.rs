//! Step 1 of a street-vending permit: the evaluation report.
//!
//! The validated evaluation is kept in the session; the resolution and the
//! certificate read everything they share with it from there. Generating a new
//! evaluation discards the later steps of the previous one.

use crate::dates;
use crate::documents::{context, TemplateContext};
use crate::error::AppError;
use crate::services::permits::catalog;
use crate::session::{session_id, SessionsState};
use crate::state::AppState;
use crate::validation::{term_label, to_upper, validate_coordinates, validate_person_id, Required};
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::Datelike;
use common::model::permit::PermitEvaluation;
use common::requests::PermitEvaluationRequest;

pub const TEMPLATE: &str = "evaluacion_ambulante.docx";

/// Handler for `POST /api/permits/evaluation`. Answers the filled `.docx`.
pub async fn process(
    req: HttpRequest,
    state: web::Data<AppState>,
    sessions: web::Data<SessionsState>,
    body: web::Json<PermitEvaluationRequest>,
) -> Result<HttpResponse, AppError> {
    let session = session_id(&req)?;
    sessions.get(&session).await?;

    let evaluation = build_evaluation(body.into_inner())?;
    let stem = format!(
        "EV. N° {}-{}_{}",
        evaluation.evaluation_code,
        evaluation.evaluation_date.year(),
        evaluation.applicant_name
    );
    let document = state.renderer.render(TEMPLATE, &evaluation_context(&evaluation), &stem)?;

    sessions
        .update(&session, |context| {
            context.permit_evaluation = Some(evaluation);
            context.permit_resolution = None;
            context.permit_certificate = None;
        })
        .await?;
    Ok(document.into_response())
}

/// Validates the form and normalizes it. The giro text comes from the catalog
/// unless the form carries a text recovered from the same label.
pub(crate) fn build_evaluation(request: PermitEvaluationRequest) -> Result<PermitEvaluation, AppError> {
    if !request.document_id.trim().is_empty() {
        validate_person_id(&request.document_id)?;
    }
    Required::new()
        .text("cod_evaluacion", &request.evaluation_code)
        .text("nombre", &request.applicant_name)
        .text("dni", &request.document_id)
        .text("domicilio", &request.fiscal_address)
        .text("giro", &request.trade_label)
        .text("ubicacion", &request.location)
        .text("coordenadas", &request.coordinates)
        .present("fecha_ingreso", &request.intake_date)
        .present("fecha_evaluacion", &request.evaluation_date)
        .check()?;
    validate_coordinates(&request.coordinates)?;

    let (Some(intake_date), Some(evaluation_date)) = (request.intake_date, request.evaluation_date) else {
        return Err(AppError::InvalidInput("Faltan campos: fecha_ingreso, fecha_evaluacion".to_owned()));
    };
    let trade = catalog::find(&request.trade_label).ok_or_else(|| {
        AppError::InvalidInput(format!("Giro desconocido: {}", request.trade_label.trim()))
    })?;
    let trade_text = match (&request.trade_text, &request.trade_text_source) {
        (Some(text), Some(source)) if !text.trim().is_empty() && catalog::find(source) == Some(trade) => {
            text.trim().to_owned()
        }
        _ => trade.description.to_owned(),
    };

    let term = request.term.unwrap_or(1);
    if term == 0 {
        return Err(AppError::InvalidInput("El tiempo debe ser al menos 1".to_owned()));
    }

    Ok(PermitEvaluation {
        gender: request.gender,
        evaluation_code: to_upper(&request.evaluation_code),
        applicant_name: to_upper(&request.applicant_name),
        document_id: request.document_id.trim().to_owned(),
        ds_number: to_upper(&request.ds_number),
        fiscal_address: to_upper(&request.fiscal_address),
        intake_date,
        evaluation_date,
        trade: trade_text,
        location: to_upper(&request.location),
        coordinates: request.coordinates.trim().to_owned(),
        reference: to_upper(&request.reference),
        schedule: to_upper(&request.schedule),
        term,
        term_label: term_label(term, request.term_unit).to_owned(),
        category: trade.category.to_owned(),
        category_code: trade.code.to_owned(),
        phone: request.phone.trim().to_owned(),
    })
}

fn evaluation_context(evaluation: &PermitEvaluation) -> TemplateContext {
    context([
        ("sexo", evaluation.gender.label().to_owned()),
        ("cod_evaluacion", evaluation.evaluation_code.clone()),
        ("nombre", evaluation.applicant_name.clone()),
        ("dni", evaluation.document_id.clone()),
        ("ds", evaluation.ds_number.clone()),
        ("domicilio", evaluation.fiscal_address.clone()),
        ("fecha_ingreso", dates::short(evaluation.intake_date)),
        ("fecha_evaluacion", dates::long(evaluation.evaluation_date)),
        ("giro", evaluation.trade.clone()),
        ("ubicacion", evaluation.location.clone()),
        ("coordenadas", evaluation.coordinates.clone()),
        ("referencia", evaluation.reference.clone()),
        ("horario", evaluation.schedule.clone()),
        ("tiempo", evaluation.term.to_string()),
        ("plazo", evaluation.term_label.clone()),
        ("rubro", evaluation.category.clone()),
        ("codigo_rubro", evaluation.category_code.clone()),
        ("telefono", evaluation.phone.clone()),
    ])
}

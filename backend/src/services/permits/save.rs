//! Step 4 of a street-vending permit: persisting the whole workflow.
//!
//! One row goes to `Evaluaciones_CA`, one to `Autorizaciones_CA`, and the
//! documento simple the evaluation came from is marked `AUTORIZADO`.

use crate::dates;
use crate::error::AppError;
use crate::session::{session_id, SessionsState};
use crate::state::AppState;
use crate::store::tabs::{AUTHORIZATIONS, DOCUMENTS, EVALUATIONS};
use actix_web::{web, HttpRequest, HttpResponse};
use common::model::document::STATUS_AUTHORIZED;
use common::model::permit::{PermitCertificate, PermitEvaluation, PermitResolution};
use log::info;
use serde_json::json;

/// Handler for `POST /api/permits/save`.
pub async fn process(
    req: HttpRequest,
    state: web::Data<AppState>,
    sessions: web::Data<SessionsState>,
) -> Result<HttpResponse, AppError> {
    let session = session_id(&req)?;
    let current = sessions.get(&session).await?;
    let (Some(evaluation), Some(resolution), Some(certificate)) = (
        current.permit_evaluation,
        current.permit_resolution,
        current.permit_certificate,
    ) else {
        return Err(AppError::Workflow(
            "Primero genera la Evaluación, la Resolución y el Certificado.".to_owned(),
        ));
    };

    let evaluation_row = state
        .commerce
        .append(EVALUATIONS, evaluation_cells(&evaluation, &resolution, &certificate))?;
    state
        .commerce
        .append(AUTHORIZATIONS, authorization_cells(&evaluation, &resolution, &certificate))?;

    let documents_updated = if evaluation.ds_number.is_empty() {
        0
    } else {
        state.commerce.update_where(
            DOCUMENTS,
            "N° DE DOCUMENTO SIMPLE",
            &evaluation.ds_number,
            &[("ESTADO", STATUS_AUTHORIZED.to_owned())],
        )?
    };
    info!(
        "Permiso de {} guardado (evaluación {}, certificado {})",
        evaluation.applicant_name, evaluation.evaluation_code, resolution.certificate_code
    );

    Ok(HttpResponse::Ok().json(json!({
        "evaluation_row": evaluation_row,
        "documents_updated": documents_updated,
    })))
}

fn evaluation_cells(
    evaluation: &PermitEvaluation,
    resolution: &PermitResolution,
    certificate: &PermitCertificate,
) -> Vec<(&'static str, String)> {
    vec![
        ("NUMERO DE DOCUMENTO SIMPLE", evaluation.ds_number.clone()),
        ("NOMBRES Y APELLIDOS", evaluation.applicant_name.clone()),
        ("N° DE EVALUACIÓN", evaluation.evaluation_code.clone()),
        ("FECHA", dates::short(evaluation.evaluation_date)),
        ("N° DE RESOLUCIÓN", resolution.resolution_code.clone()),
        ("FECHA DE RESOLUCIÓN", dates::short(resolution.resolution_date)),
        ("N° DE AUTORIZACIÓN", resolution.certificate_code.clone()),
        ("FECHA DE AUTORIZACION", dates::short(certificate.certificate_date)),
    ]
}

fn authorization_cells(
    evaluation: &PermitEvaluation,
    resolution: &PermitResolution,
    certificate: &PermitCertificate,
) -> Vec<(&'static str, String)> {
    vec![
        ("FECHA DE INGRESO", dates::short(evaluation.intake_date)),
        ("D.S", evaluation.ds_number.clone()),
        ("NOMBRE Y APELLIDO", evaluation.applicant_name.clone()),
        ("DNI", evaluation.document_id.clone()),
        ("GENERO", evaluation.gender.label().to_owned()),
        ("DOMICILIO FISCAL", evaluation.fiscal_address.clone()),
        ("CERTIFICADO ANTERIOR", resolution.previous_certificate.clone()),
        ("FECHA EMITIDA CERTIFICADO ANTERIOR", dates::short_opt(resolution.previous_issued)),
        ("FECHA DE CADUCIDAD CERTIFICADO ANTERIOR", dates::short_opt(resolution.previous_expiry)),
        ("N° DE EVALUACION", evaluation.evaluation_code.clone()),
        ("FECHA DE EVALUACION", dates::short(evaluation.evaluation_date)),
        ("N° DE RESOLUCIÓN", resolution.resolution_code.clone()),
        ("FECHA RESOLUCIÓN", dates::short(resolution.resolution_date)),
        ("N° DE CERTIFICADO", resolution.certificate_code.clone()),
        ("FECHA EMITIDA CERTIFICADO", dates::short(certificate.certificate_date)),
        (
            "VIGENCIA DE AUTORIZACIÓN",
            dates::validity(Some(resolution.validity_start), Some(resolution.validity_end)),
        ),
        ("LUGAR DE VENTA", evaluation.location.clone()),
        ("COORDENADAS", evaluation.coordinates.clone()),
        ("REFERENCIA", evaluation.reference.clone()),
        ("GIRO", evaluation.trade.clone()),
        ("HORARIO", evaluation.schedule.clone()),
        ("N° TELEFONO", evaluation.phone.clone()),
        ("TIEMPO", evaluation.term.to_string()),
        ("PLAZO", evaluation.term_label.clone()),
    ]
}

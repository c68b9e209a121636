//! Step 3 of a street-vending permit: the authorization certificate.

use crate::dates;
use crate::documents::{context, TemplateContext};
use crate::error::AppError;
use crate::session::{session_id, SessionsState};
use crate::state::AppState;
use crate::validation::gender_labels;
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::Datelike;
use common::model::permit::{PermitCertificate, PermitEvaluation, PermitResolution};
use common::requests::PermitCertificateRequest;

pub const TEMPLATE: &str = "certificado.docx";

/// Handler for `POST /api/permits/certificate`. Needs the session's
/// evaluation and resolution.
pub async fn process(
    req: HttpRequest,
    state: web::Data<AppState>,
    sessions: web::Data<SessionsState>,
    body: web::Json<PermitCertificateRequest>,
) -> Result<HttpResponse, AppError> {
    let session = session_id(&req)?;
    let current = sessions.get(&session).await?;
    let (Some(evaluation), Some(resolution)) = (current.permit_evaluation, current.permit_resolution) else {
        return Err(AppError::Workflow(
            "Primero genera la Evaluación y la Resolución.".to_owned(),
        ));
    };
    let certificate_date = body
        .certificate_date
        .ok_or_else(|| AppError::InvalidInput("Faltan campos: fecha_certificado".to_owned()))?;

    let certificate = PermitCertificate { certificate_date };
    let stem = format!(
        "AU. {}-{}_{}",
        resolution.certificate_code,
        certificate_date.year(),
        evaluation.applicant_name
    );
    let values = certificate_context(&evaluation, &resolution, &certificate);
    let document = state.renderer.render(TEMPLATE, &values, &stem)?;

    sessions
        .update(&session, |context| context.permit_certificate = Some(certificate))
        .await?;
    Ok(document.into_response())
}

fn certificate_context(
    evaluation: &PermitEvaluation,
    resolution: &PermitResolution,
    certificate: &PermitCertificate,
) -> TemplateContext {
    context([
        ("codigo_certificado", resolution.certificate_code.clone()),
        ("ds", evaluation.ds_number.clone()),
        ("sr", gender_labels(evaluation.gender).abbreviation.to_owned()),
        ("nombre", evaluation.applicant_name.clone()),
        ("dni", evaluation.document_id.clone()),
        ("ubicacion", evaluation.location.clone()),
        ("referencia", evaluation.reference.clone()),
        ("giro", evaluation.trade.clone()),
        ("horario", evaluation.schedule.clone()),
        ("tiempo", evaluation.term.to_string()),
        ("plazo", evaluation.term_label.clone()),
        (
            "vigencia2",
            dates::validity_compact(Some(resolution.validity_start), Some(resolution.validity_end)),
        ),
        ("fecha_certificado", dates::long(certificate.certificate_date)),
    ])
}

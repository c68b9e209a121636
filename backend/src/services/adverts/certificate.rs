//! Authorization certificate of an advertising sign, built on the session's
//! evaluation.

use crate::dates;
use crate::documents::{context, TemplateContext};
use crate::error::AppError;
use crate::session::{session_id, SessionsState};
use crate::state::AppState;
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::Local;
use common::model::advert::{AdvertCertificate, AdvertEvaluation, ApplicantDocument, ValidityKind};
use common::requests::AdvertCertificateRequest;
use log::info;

const MAX_MONTHS: u32 = 60;

/// Handler for `POST /api/adverts/certificate`.
pub async fn process(
    req: HttpRequest,
    state: web::Data<AppState>,
    sessions: web::Data<SessionsState>,
    body: web::Json<AdvertCertificateRequest>,
) -> Result<HttpResponse, AppError> {
    let session = session_id(&req)?;
    let Some(evaluation) = sessions.get(&session).await?.advert_evaluation else {
        return Err(AppError::Workflow(
            "Primero genera la Evaluación para poder armar el certificado.".to_owned(),
        ));
    };
    let request = body.into_inner();
    let certificate = build_certificate(evaluation, request, Local::now().date_naive())?;
    if certificate.document_type == ApplicantDocument::Dni && !certificate.document_number.is_empty() {
        let record = state.lookup.lookup_by_id(&certificate.document_number).await?;
        info!("DNI {} confirmado: {}", record.id, record.display_name);
    }

    let stem = format!(
        "CERT {}_EXP {}_{}",
        certificate.certificate_number,
        certificate.evaluation.ds_number,
        certificate.evaluation.applicant_name.to_uppercase()
    );
    let template = certificate.evaluation.kind.certificate_template();
    let document = state.renderer.render(&template, &certificate_context(&certificate), &stem)?;

    sessions
        .update(&session, |context| context.advert_certificate = Some(certificate))
        .await?;
    Ok(document.into_response())
}

/// Validates the certificate form against `evaluation`. The registry check of
/// a DNI happens in the handler.
pub(crate) fn build_certificate(
    evaluation: AdvertEvaluation,
    request: AdvertCertificateRequest,
    today: chrono::NaiveDate,
) -> Result<AdvertCertificate, AppError> {
    let certificate_number = request.certificate_number.trim().to_owned();
    if certificate_number.is_empty() {
        return Err(AppError::InvalidInput("Completa el N° de certificado.".to_owned()));
    }
    let document_number = request.document_number.trim().to_owned();
    if !document_number.is_empty() {
        check_document(request.document_type, &document_number)?;
    }

    Ok(AdvertCertificate {
        evaluation,
        certificate_number,
        certificate_date: request.certificate_date.unwrap_or(today),
        validity: validity_text(request.validity, request.months)?,
        ordinance: request.ordinance.trim().to_owned(),
        physical: request.physical.trim().to_owned(),
        technical: request.technical.trim().to_owned(),
        document_type: request.document_type,
        document_number,
        receipt_number: request.receipt_number.trim().to_owned(),
    })
}

fn check_document(kind: ApplicantDocument, number: &str) -> Result<(), AppError> {
    let digits = number.chars().all(|c| c.is_ascii_digit());
    match kind {
        ApplicantDocument::Dni if !(digits && number.len() == 8) => Err(AppError::InvalidInput(
            "DNI inválido: debe tener 8 dígitos.".to_owned(),
        )),
        ApplicantDocument::ForeignerCard if !(digits && number.len() == 9) => Err(
            AppError::InvalidInput("C.E inválido: debe tener 9 dígitos.".to_owned()),
        ),
        _ => Ok(()),
    }
}

fn validity_text(kind: ValidityKind, months: Option<u32>) -> Result<String, AppError> {
    match kind {
        ValidityKind::Indeterminada => Ok("INDETERMINADA".to_owned()),
        ValidityKind::Temporal => {
            let months = months.unwrap_or(1);
            if !(1..=MAX_MONTHS).contains(&months) {
                return Err(AppError::InvalidInput(format!(
                    "La vigencia temporal debe ser de 1 a {MAX_MONTHS} meses."
                )));
            }
            Ok(format!("TEMPORAL ({months}) MESES"))
        }
    }
}

fn certificate_context(certificate: &AdvertCertificate) -> TemplateContext {
    let evaluation = &certificate.evaluation;
    context([
        ("n_certificado", certificate.certificate_number.clone()),
        ("num_ds", evaluation.ds_number.clone()),
        ("vigencia", certificate.validity.clone()),
        ("ordenanza", certificate.ordinance.clone()),
        ("nombre", evaluation.applicant_name.clone()),
        ("direccion", evaluation.address.clone()),
        ("ubicacion", evaluation.location.clone()),
        ("leyenda", evaluation.legend.clone()),
        ("largo", evaluation.length.clone()),
        ("alto", evaluation.height.clone()),
        ("grosor", evaluation.thickness.clone()),
        ("altura", evaluation.support_height.clone()),
        ("color", evaluation.colors.clone()),
        ("material", evaluation.material.clone()),
        ("num_cara", evaluation.faces.to_string()),
        ("fisico", certificate.physical.clone()),
        ("tecnico", certificate.technical.clone()),
        ("fecha", dates::long(certificate.certificate_date)),
    ])
}

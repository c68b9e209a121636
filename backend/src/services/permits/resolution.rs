//! Step 2 of a street-vending permit: the resolution.

use crate::dates;
use crate::documents::{context, TemplateContext};
use crate::error::AppError;
use crate::session::{session_id, SessionsState};
use crate::state::AppState;
use crate::validation::{gender_labels, to_upper, Required};
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::Datelike;
use common::model::permit::{PermitEvaluation, PermitResolution};
use common::requests::PermitResolutionRequest;

/// Handler for `POST /api/permits/resolution`. Needs the session's evaluation.
pub async fn process(
    req: HttpRequest,
    state: web::Data<AppState>,
    sessions: web::Data<SessionsState>,
    body: web::Json<PermitResolutionRequest>,
) -> Result<HttpResponse, AppError> {
    let session = session_id(&req)?;
    let evaluation = sessions
        .get(&session)
        .await?
        .permit_evaluation
        .ok_or_else(|| AppError::Workflow("Primero genera la Evaluación.".to_owned()))?;

    let resolution = build_resolution(&evaluation, body.into_inner())?;
    let stem = format!(
        "RS. N° {}-{}_{}",
        resolution.resolution_code,
        resolution.resolution_date.year(),
        evaluation.applicant_name
    );
    let values = resolution_context(&evaluation, &resolution, &state.config.district);
    let document = state.renderer.render(resolution.kind.template(), &values, &stem)?;

    sessions
        .update(&session, |context| {
            context.permit_resolution = Some(resolution);
            context.permit_certificate = None;
        })
        .await?;
    Ok(document.into_response())
}

pub(crate) fn build_resolution(
    evaluation: &PermitEvaluation,
    request: PermitResolutionRequest,
) -> Result<PermitResolution, AppError> {
    if evaluation.schedule.trim().is_empty() {
        return Err(AppError::InvalidInput("Falta Horario en Evaluación.".to_owned()));
    }
    Required::new()
        .text("cod_resolucion", &request.resolution_code)
        .present("fecha_resolucion", &request.resolution_date)
        .present("vig_ini", &request.validity_start)
        .present("vig_fin", &request.validity_end)
        .text("cod_certificacion", &request.certificate_code)
        .check()?;

    let previous = request.previous_certificate.trim();
    if !previous.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::InvalidInput(
            "El certificado anterior debe ser solo números (ej.: 121)".to_owned(),
        ));
    }

    let (Some(resolution_date), Some(validity_start), Some(validity_end)) =
        (request.resolution_date, request.validity_start, request.validity_end)
    else {
        return Err(AppError::InvalidInput("Faltan campos: fecha_resolucion, vig_ini, vig_fin".to_owned()));
    };
    if validity_end < validity_start {
        return Err(AppError::InvalidInput(
            "La vigencia debe terminar después de su inicio".to_owned(),
        ));
    }

    Ok(PermitResolution {
        kind: request.kind,
        resolution_code: to_upper(&request.resolution_code),
        resolution_date,
        validity_start,
        validity_end,
        certificate_code: to_upper(&request.certificate_code),
        previous_certificate: previous.to_owned(),
        previous_issued: request.previous_issued,
        previous_expiry: request.previous_expiry,
    })
}

fn resolution_context(evaluation: &PermitEvaluation, resolution: &PermitResolution, district: &str) -> TemplateContext {
    let labels = gender_labels(evaluation.gender);
    context([
        ("cod_resolucion", resolution.resolution_code.clone()),
        ("fecha_resolucion", dates::long(resolution.resolution_date)),
        ("ds", evaluation.ds_number.clone()),
        ("fecha_ingreso", dates::long_de(evaluation.intake_date)),
        ("genero", labels.title.to_owned()),
        ("genero2", labels.applicant.to_owned()),
        ("genero3", labels.identified.to_owned()),
        ("nombre", evaluation.applicant_name.clone()),
        ("dni", evaluation.document_id.clone()),
        ("domicilio", format!("{}-{}", evaluation.fiscal_address, district)),
        ("giro", evaluation.trade.clone()),
        ("rubro", evaluation.category.clone()),
        ("codigo_rubro", evaluation.category_code.clone()),
        ("ubicacion", evaluation.location.clone()),
        ("horario", evaluation.schedule.clone()),
        ("cod_evaluacion", evaluation.evaluation_code.clone()),
        ("fecha_evaluacion", dates::long(evaluation.evaluation_date)),
        ("cod_certificacion", resolution.certificate_code.clone()),
        (
            "vigencia",
            dates::validity(Some(resolution.validity_start), Some(resolution.validity_end)),
        ),
        ("antiguo_certificado", resolution.previous_certificate.clone()),
        ("tiempo", evaluation.term.to_string()),
        ("plazo", evaluation.term_label.clone()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::permits::evaluation::build_evaluation;
    use chrono::NaiveDate;
    use common::requests::PermitEvaluationRequest;

    fn evaluation(schedule: &str) -> PermitEvaluation {
        build_evaluation(PermitEvaluationRequest {
            document_id: "12345678".into(),
            applicant_name: "ana perez".into(),
            evaluation_code: "121".into(),
            fiscal_address: "av. lima 123".into(),
            intake_date: NaiveDate::from_ymd_opt(2025, 9, 1),
            evaluation_date: NaiveDate::from_ymd_opt(2025, 9, 16),
            trade_label: "Rubro 4.d - Artesanías (CÓDIGO G 013)".into(),
            location: "parque central".into(),
            coordinates: "-12.15,-76.88".into(),
            schedule: schedule.into(),
            ..Default::default()
        })
        .unwrap()
    }

    fn request() -> PermitResolutionRequest {
        PermitResolutionRequest {
            resolution_code: "456".into(),
            resolution_date: NaiveDate::from_ymd_opt(2025, 9, 20),
            validity_start: NaiveDate::from_ymd_opt(2025, 9, 24),
            validity_end: NaiveDate::from_ymd_opt(2025, 10, 24),
            certificate_code: "789".into(),
            ..Default::default()
        }
    }

    #[test]
    fn needs_a_schedule_in_the_evaluation() {
        let error = build_resolution(&evaluation(""), request()).unwrap_err();
        assert!(matches!(error, AppError::InvalidInput(m) if m.contains("Horario")));
    }

    #[test]
    fn previous_certificate_must_be_numeric() {
        let mut form = request();
        form.previous_certificate = "12A".into();
        assert!(build_resolution(&evaluation("MAÑANAS"), form).is_err());

        let mut form = request();
        form.previous_certificate = " 121 ".into();
        let resolution = build_resolution(&evaluation("MAÑANAS"), form).unwrap();
        assert_eq!(resolution.previous_certificate, "121");
    }

    #[test]
    fn validity_must_not_end_before_it_starts() {
        let mut form = request();
        form.validity_end = NaiveDate::from_ymd_opt(2025, 9, 1);
        assert!(matches!(build_resolution(&evaluation("MAÑANAS"), form), Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn lists_every_missing_field() {
        let form = PermitResolutionRequest::default();
        let error = build_resolution(&evaluation("MAÑANAS"), form).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Faltan campos: cod_resolucion, fecha_resolucion, vig_ini, vig_fin, cod_certificacion"
        );
    }
}

//! Evaluation report of an advertising sign.

use crate::dates;
use crate::documents::{context, TemplateContext};
use crate::error::AppError;
use crate::session::{session_id, SessionsState};
use crate::state::AppState;
use actix_web::{web, HttpRequest, HttpResponse};
use chrono::{Datelike, Local};
use common::model::advert::{AdvertEvaluation, TaxpayerKind};
use common::requests::AdvertEvaluationRequest;

/// Handler for `POST /api/adverts/evaluation`. Answers the filled `.docx` and
/// keeps the evaluation for the certificate step.
pub async fn process(
    req: HttpRequest,
    state: web::Data<AppState>,
    sessions: web::Data<SessionsState>,
    body: web::Json<AdvertEvaluationRequest>,
) -> Result<HttpResponse, AppError> {
    let session = session_id(&req)?;
    sessions.get(&session).await?;

    let evaluation = build_evaluation(body.into_inner(), Local::now().date_naive())?;
    let stem = format!(
        "EA {}_exp{}_{}",
        evaluation.advert_number,
        evaluation.ds_number,
        evaluation.applicant_name.to_lowercase()
    );
    let template = evaluation.kind.evaluation_template();
    let document = state.renderer.render(&template, &evaluation_context(&evaluation), &stem)?;

    sessions
        .update(&session, |context| {
            context.advert_evaluation = Some(evaluation);
            context.advert_certificate = None;
        })
        .await?;
    Ok(document.into_response())
}

/// Checks the three identifying fields and fills the defaults: missing dates
/// are `today` and the year is the report's.
pub(crate) fn build_evaluation(
    request: AdvertEvaluationRequest,
    today: chrono::NaiveDate,
) -> Result<AdvertEvaluation, AppError> {
    let applicant_name = request.applicant_name.trim().to_owned();
    let advert_number = request.advert_number.trim().to_owned();
    let ds_number = request.ds_number.trim().to_owned();
    if applicant_name.is_empty() || advert_number.is_empty() || ds_number.is_empty() {
        return Err(AppError::InvalidInput(
            "Completa al menos: Solicitante, N° de anuncio y N° de expediente.".to_owned(),
        ));
    }
    if request.faces == 0 {
        return Err(AppError::InvalidInput("El anuncio debe tener al menos una cara.".to_owned()));
    }
    let measures = [request.length, request.height, request.thickness, request.support_height];
    if measures.iter().any(|measure| !measure.is_finite() || *measure < 0.0) {
        return Err(AppError::InvalidInput("Las medidas no pueden ser negativas.".to_owned()));
    }

    let kind = request.kind;
    let report_date = request.report_date.unwrap_or(today);
    let representative = match request.taxpayer {
        TaxpayerKind::LegalEntity => request.representative.trim().to_owned(),
        TaxpayerKind::NaturalPerson => String::new(),
    };

    Ok(AdvertEvaluation {
        kind,
        taxpayer: request.taxpayer,
        applicant_name,
        ruc: request.ruc.trim().to_owned(),
        representative,
        address: request.address.trim().to_owned(),
        coordinates: request.coordinates.trim().to_owned(),
        length: meters(request.length),
        height: meters(request.height),
        thickness: if kind.uses_thickness() { meters(request.thickness) } else { String::new() },
        support_height: if kind.uses_support_height() {
            meters(request.support_height)
        } else {
            String::new()
        },
        faces: request.faces,
        legend: request.legend.trim().to_owned(),
        colors: request.colors.trim().to_owned(),
        material: request.material.trim().to_owned(),
        location: request.location.trim().to_owned(),
        advert_number,
        ds_number,
        intake_date: request.intake_date.unwrap_or(today),
        report_date,
        year: request.year.unwrap_or_else(|| report_date.year()),
    })
}

fn meters(value: f64) -> String {
    format!("{value:.2}")
}

fn evaluation_context(evaluation: &AdvertEvaluation) -> TemplateContext {
    context([
        ("n_anuncio", evaluation.advert_number.clone()),
        ("nombre", evaluation.applicant_name.clone()),
        ("ruc", evaluation.ruc.clone()),
        ("direccion", evaluation.address.clone()),
        ("coordenadas", evaluation.coordinates.clone()),
        ("largo", evaluation.length.clone()),
        ("alto", evaluation.height.clone()),
        ("grosor", evaluation.thickness.clone()),
        ("altura", evaluation.support_height.clone()),
        ("leyenda", evaluation.legend.clone()),
        ("colores", evaluation.colors.clone()),
        ("material", evaluation.material.clone()),
        ("ubicacion", evaluation.location.clone()),
        ("num_cara", evaluation.faces.to_string()),
        ("num_ds", evaluation.ds_number.clone()),
        ("fecha_ingreso", dates::short(evaluation.intake_date)),
        ("fecha", dates::long(evaluation.report_date)),
        ("anio", evaluation.year.to_string()),
        ("tipo_anuncio", evaluation.kind.label().to_owned()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use common::model::advert::AdvertKind;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 11, 3).unwrap()
    }

    fn request(kind: AdvertKind) -> AdvertEvaluationRequest {
        AdvertEvaluationRequest {
            kind,
            applicant_name: " Bodega El Sol SAC ".into(),
            advert_number: "015".into(),
            ds_number: "2231".into(),
            length: 3.0,
            height: 1.2,
            thickness: 0.1,
            support_height: 4.5,
            ..Default::default()
        }
    }

    #[test]
    fn identifying_fields_are_required() {
        let mut incomplete = request(AdvertKind::SimpleAwning);
        incomplete.ds_number = "  ".into();
        let error = build_evaluation(incomplete, today()).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Completa al menos: Solicitante, N° de anuncio y N° de expediente."
        );
    }

    #[test]
    fn measures_follow_the_kind() {
        let awning = build_evaluation(request(AdvertKind::SimpleAwning), today()).unwrap();
        assert_eq!(awning.length, "3.00");
        assert_eq!(awning.height, "1.20");
        assert_eq!(awning.thickness, "0.10");
        assert_eq!(awning.support_height, "");

        let rooftop = build_evaluation(request(AdvertKind::RooftopPanel), today()).unwrap();
        assert_eq!(rooftop.thickness, "");
        assert_eq!(rooftop.support_height, "4.50");
    }

    #[test]
    fn dates_and_year_default_to_the_report() {
        let mut form = request(AdvertKind::CutOutLetters);
        form.report_date = NaiveDate::from_ymd_opt(2024, 12, 30);
        let evaluation = build_evaluation(form, today()).unwrap();
        assert_eq!(evaluation.year, 2024);
        assert_eq!(evaluation.intake_date, today());
        assert_eq!(evaluation.applicant_name, "Bodega El Sol SAC");
    }

    #[test]
    fn representative_only_for_legal_entities() {
        let mut form = request(AdvertKind::IlluminatedPanel);
        form.representative = "Luis Rojas".into();
        assert_eq!(build_evaluation(form.clone(), today()).unwrap().representative, "");

        form.taxpayer = TaxpayerKind::LegalEntity;
        assert_eq!(build_evaluation(form, today()).unwrap().representative, "Luis Rojas");
    }

    #[test]
    fn negative_measures_are_rejected() {
        let mut form = request(AdvertKind::ServiceStationPanel);
        form.length = -1.0;
        assert!(matches!(build_evaluation(form, today()), Err(AppError::InvalidInput(_))));
    }
}

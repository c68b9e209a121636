//! Appends the session's last advert certificate to the `Certificados` tab.

use crate::dates;
use crate::error::AppError;
use crate::session::{session_id, SessionsState};
use crate::state::AppState;
use crate::store::tabs::CERTIFICATES;
use crate::validation::{split_surnames, to_upper};
use actix_web::{web, HttpRequest, HttpResponse};
use common::model::advert::{AdvertCertificate, TaxpayerKind};
use log::info;
use serde_json::json;

/// Handler for `POST /api/adverts/save`.
pub async fn process(
    req: HttpRequest,
    state: web::Data<AppState>,
    sessions: web::Data<SessionsState>,
) -> Result<HttpResponse, AppError> {
    let session = session_id(&req)?;
    let Some(certificate) = sessions.get(&session).await?.advert_certificate else {
        return Err(AppError::Workflow(
            "Todavía no hay un certificado reciente para registrar.".to_owned(),
        ));
    };

    let row = state.adverts.append(CERTIFICATES, certificate_cells(&certificate))?;
    info!(
        "Certificado de anuncio {} registrado (expediente {})",
        certificate.certificate_number, certificate.evaluation.ds_number
    );
    Ok(HttpResponse::Ok().json(json!({ "row": row })))
}

/// The registry row. The surname columns come from the legal representative
/// of a RUC 20 applicant when one was given.
pub(crate) fn certificate_cells(certificate: &AdvertCertificate) -> Vec<(&'static str, String)> {
    let evaluation = &certificate.evaluation;
    let person = match evaluation.taxpayer {
        TaxpayerKind::LegalEntity if !evaluation.representative.is_empty() => &evaluation.representative,
        _ => &evaluation.applicant_name,
    };
    let (paternal, maternal, given) = split_surnames(person);

    vec![
        ("EXP", evaluation.ds_number.clone()),
        ("N° RECIBO", certificate.receipt_number.clone()),
        ("FECHA DE INGRESO", dates::short(evaluation.intake_date)),
        ("RUC DE LA EMPRESA", evaluation.ruc.clone()),
        ("NÚMERO DE AUTORIZACION ", certificate.certificate_number.clone()),
        ("FECHA DE EMISIÓN DE LA AUTORIZACION", dates::short(certificate.certificate_date)),
        ("FECHA DE EXPIRACIÓN DE LA AUTORIZACION", certificate.validity.clone()),
        (
            "TIPO DE DOCUMENTO DE IDENTIDAD DEL SOLICITANTE",
            certificate.document_type.label().to_owned(),
        ),
        ("NÚMERO DE DOCUMENTO DE IDENTIDAD DEL SOLICITANTE", certificate.document_number.clone()),
        ("APELLIDO PATERNO DEL SOLICITANTE", paternal),
        ("APELLIDO MATERNO DEL SOLICITANTE", maternal),
        ("NOMBRE DEL SOLICITANTE", given),
        ("RAZÓN SOCIAL DEL SOLICITANTE", to_upper(&evaluation.applicant_name)),
        ("CARACTERISTICA FISICA DEL PANEL", certificate.physical.clone()),
        ("CARACTERISTICA TECNICA DEL PANEL", certificate.technical.clone()),
        (
            "TIPO DE ANUNCIPO PUBLICITARIO (Móvil, paneles, banderolas, etc.)",
            evaluation.kind.label().to_owned(),
        ),
        ("DIRECCION", to_upper(&evaluation.address)),
        ("UBICACIÓN", to_upper(&evaluation.location)),
        ("LEYENDA", to_upper(&evaluation.legend)),
        ("LARGO", evaluation.length.clone()),
        ("ALTO", evaluation.height.clone()),
        ("ANCHO", String::new()),
        ("GROSOR", evaluation.thickness.clone()),
        ("LONGUITUD DE SOPORTES", evaluation.support_height.clone()),
        ("COLOR", evaluation.colors.clone()),
        ("MATERIAL", evaluation.material.clone()),
        ("N° CARAS", evaluation.faces.to_string()),
        ("COORDENADAS", evaluation.coordinates.clone()),
    ]
}
